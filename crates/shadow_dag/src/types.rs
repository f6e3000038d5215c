//! Core result and sentinel types shared across the crate.

/// Binary visibility result of a point query.
///
/// No blending or soft-shadow interpolation happens at this layer; filtering
/// belongs to whatever shading pass consumes the result.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Visibility {
  /// The point is occluded from the light.
  Shadow,
  /// The point is lit.
  Visible,
}

impl Visibility {
  /// Construct from a raw mask bit (bit set = visible).
  #[inline]
  pub fn from_bit(bit: bool) -> Self {
    if bit {
      Visibility::Visible
    } else {
      Visibility::Shadow
    }
  }

  /// True when the point is lit.
  #[inline]
  pub fn is_visible(self) -> bool {
    matches!(self, Visibility::Visible)
  }
}

/// Grid sentinel: the whole coarse cell is in shadow.
pub const GRID_CELL_SHADOW: u32 = 0xFFFF_FFFF;

/// Grid sentinel: the whole coarse cell is visible.
///
/// Any other grid word is the pool offset of the cell's DAG root.
pub const GRID_CELL_VISIBLE: u32 = 0xFFFF_FFFE;

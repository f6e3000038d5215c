//! Childmask decode and popcount child-offset arithmetic.
//!
//! A node is one childmask word followed by its compacted child table. The
//! 16-bit childmask packs 8 octants × 2 bits:
//!
//! ```text
//! code 0b00  fully shadowed    terminal, answer immediately
//! code 0b01  fully visible     terminal, answer immediately
//! code 0b1x  descend           child-table entry present
//! ```
//!
//! Only the high bit of a descend pair is load-bearing; codes 2 and 3 are
//! accepted identically. The table holds one entry per descend octant in
//! ascending octant order, so an octant's entry index is the popcount of
//! descend high bits at strictly lower positions.

use glam::UVec3;

use crate::error::TraverseError;

/// Mask of the per-pair "descend" high bits of a childmask.
pub const DESCEND_BITS: u32 = 0xAAAA;

/// Childmask bit offset of the octant selected by `path` at `level`.
///
/// +2 when the level's x bit is set, +4 for y, +8 for z. Always even by
/// construction, so it doubles as the shift into the 2-bit-packed
/// childmask; the octant number itself is half this value.
#[inline]
pub fn octant_bit(path: UVec3, level: u32) -> u32 {
  let lvl_bit = 1u32 << level;
  let x = ((path.x & lvl_bit) != 0) as u32;
  let y = ((path.y & lvl_bit) != 0) as u32;
  let z = ((path.z & lvl_bit) != 0) as u32;
  2 * x + 4 * y + 8 * z
}

/// Extract the 2-bit visibility code at an (even) octant bit offset.
#[inline]
pub fn child_code(childmask: u32, octant_bit: u32) -> u32 {
  (childmask >> octant_bit) & 0x3
}

/// True when the code means "descend, subtree present".
#[inline]
pub fn is_descend(code: u32) -> bool {
  code & 0x2 != 0
}

/// Index into the compacted child table for the octant at `octant_bit`.
///
/// Masks the childmask down to descend high bits at strictly lower octant
/// positions and counts them. `0xAAAA >> (16 - bit)` keeps exactly the
/// pairs below the current one (and is the all-clear mask for octant 0).
#[inline]
pub fn pointer_index(childmask: u32, octant_bit: u32) -> u32 {
  (childmask & (DESCEND_BITS >> (16 - octant_bit))).count_ones()
}

/// Bounds-checked view over the flat node pool.
///
/// Offsets come from untrusted-at-this-layer structure data, so every read
/// is checked; an out-of-pool offset is reported as a distinguished error
/// rather than read.
#[derive(Clone, Copy, Debug)]
pub struct NodePool<'a> {
  words: &'a [u32],
}

impl<'a> NodePool<'a> {
  /// Wrap a pool buffer.
  pub fn new(words: &'a [u32]) -> Self {
    Self { words }
  }

  /// Number of words in the pool.
  #[inline]
  pub fn len(&self) -> usize {
    self.words.len()
  }

  /// True when the pool holds no words.
  #[inline]
  pub fn is_empty(&self) -> bool {
    self.words.is_empty()
  }

  /// Read one word, refusing out-of-pool offsets.
  #[inline]
  pub fn read(&self, offset: usize) -> Result<u32, TraverseError> {
    self
      .words
      .get(offset)
      .copied()
      .ok_or(TraverseError::NodeOutOfBounds {
        offset,
        len: self.words.len(),
      })
  }
}

#[cfg(test)]
#[path = "node_test.rs"]
mod node_test;

//! Visibility sources the offline builder samples from.

/// Per-voxel binary visibility, sampled by the builder.
///
/// Coordinates run in `[0, 2^depth)` per axis for the depth the builder is
/// configured with. `true` means the voxel is lit.
pub trait VisibilitySource {
  /// Visibility of one voxel.
  fn visible(&self, x: u32, y: u32, z: u32) -> bool;
}

/// Dense bit-packed visibility volume, mostly for tests and small bakes.
#[derive(Clone, Debug)]
pub struct BitVolume {
  resolution: u32,
  words: Vec<u64>,
}

impl BitVolume {
  /// All-shadowed volume of `resolution³` voxels.
  pub fn new(resolution: u32) -> Self {
    Self::filled(resolution, false)
  }

  /// Uniformly filled volume.
  pub fn filled(resolution: u32, visible: bool) -> Self {
    let bits = (resolution as usize).pow(3);
    let fill = if visible { u64::MAX } else { 0 };
    Self {
      resolution,
      words: vec![fill; bits.div_ceil(64)],
    }
  }

  /// Voxels per axis.
  #[inline]
  pub fn resolution(&self) -> u32 {
    self.resolution
  }

  #[inline]
  fn bit_index(&self, x: u32, y: u32, z: u32) -> usize {
    debug_assert!(
      x < self.resolution && y < self.resolution && z < self.resolution,
      "voxel coordinate outside volume"
    );
    let res = self.resolution as usize;
    (z as usize * res + y as usize) * res + x as usize
  }

  /// Set one voxel.
  pub fn set(&mut self, x: u32, y: u32, z: u32, visible: bool) {
    let index = self.bit_index(x, y, z);
    let bit = 1u64 << (index % 64);
    if visible {
      self.words[index / 64] |= bit;
    } else {
      self.words[index / 64] &= !bit;
    }
  }

  /// Read one voxel.
  #[inline]
  pub fn get(&self, x: u32, y: u32, z: u32) -> bool {
    let index = self.bit_index(x, y, z);
    self.words[index / 64] & (1u64 << (index % 64)) != 0
  }
}

impl VisibilitySource for BitVolume {
  #[inline]
  fn visible(&self, x: u32, y: u32, z: u32) -> bool {
    self.get(x, y, z)
  }
}

#[cfg(test)]
#[path = "volume_test.rs"]
mod volume_test;

//! 64-bit leafmask blocks terminating descent at the leaf frontier.
//!
//! A frontier node stores one 64-bit block (two u32 words, low word first)
//! per descend octant, in place of that octant's child pointer. Exactly one
//! bit is tested per query, selected by the low bits of the path under the
//! configured block geometry. Bit set means visible.

use glam::UVec3;

use crate::types::Visibility;

/// Local bit index within a 4×4×4 block: `(x&3) + 4·(y&3) + 16·(z&3)`.
#[inline]
pub fn cube4_index(path: UVec3) -> u32 {
  (path.x & 0x3) + 4 * (path.y & 0x3) + 16 * (path.z & 0x3)
}

/// Local bit index within an 8×8 plane: `(x&7) + 8·(y&7)`.
#[inline]
pub fn plane8_index(path: UVec3) -> u32 {
  (path.x & 0x7) + 8 * (path.y & 0x7)
}

/// Test one bit of a leafmask split across two pool words.
#[inline]
pub fn test_bit(lower: u32, upper: u32, index: u32) -> Visibility {
  debug_assert!(index < 64, "leafmask index must be in 0..64");
  let bit = if index < 32 {
    lower & (1 << index)
  } else {
    upper & (1 << (index - 32))
  };
  Visibility::from_bit(bit != 0)
}

#[cfg(test)]
#[path = "leafmask_test.rs"]
mod leafmask_test;

use super::*;

// =========================================================================
// Local index formulas
// =========================================================================

/// 4x4x4 index formula over all 64 block-local coordinates.
#[test]
fn test_cube4_index_covers_block() {
  let mut seen = [false; 64];
  for z in 0..4u32 {
    for y in 0..4u32 {
      for x in 0..4u32 {
        let index = cube4_index(UVec3::new(x, y, z));
        assert_eq!(index, x + 4 * y + 16 * z);
        seen[index as usize] = true;
      }
    }
  }
  assert!(seen.iter().all(|s| *s), "every bit addressable");
}

/// Only the low 2 bits of each axis select the cube bit.
#[test]
fn test_cube4_index_ignores_high_bits() {
  assert_eq!(
    cube4_index(UVec3::new(0b10101, 0b1110, 0b0111)),
    cube4_index(UVec3::new(0b01, 0b10, 0b11))
  );
}

/// 8x8 index formula over all 64 plane-local coordinates.
#[test]
fn test_plane8_index_covers_plane() {
  let mut seen = [false; 64];
  for y in 0..8u32 {
    for x in 0..8u32 {
      let index = plane8_index(UVec3::new(x, y, 0));
      assert_eq!(index, x + 8 * y);
      seen[index as usize] = true;
    }
  }
  assert!(seen.iter().all(|s| *s), "every bit addressable");
}

/// The plane formula never looks at z.
#[test]
fn test_plane8_index_ignores_z() {
  for z in 0..8u32 {
    assert_eq!(plane8_index(UVec3::new(5, 3, z)), 5 + 8 * 3);
  }
}

// =========================================================================
// Two-word bit test
// =========================================================================

/// An arbitrary 64-bit pattern decodes bit-exactly under both formulas.
#[test]
fn test_all_64_indices_decode_pattern() {
  let pattern: u64 = 0x0123_4567_89AB_CDEF;
  let lower = pattern as u32;
  let upper = (pattern >> 32) as u32;

  // Cube4 walk.
  for z in 0..4u32 {
    for y in 0..4u32 {
      for x in 0..4u32 {
        let index = cube4_index(UVec3::new(x, y, z));
        let expected = Visibility::from_bit(pattern >> index & 1 != 0);
        assert_eq!(test_bit(lower, upper, index), expected, "cube bit {index}");
      }
    }
  }

  // Plane8 walk of the same pattern, independent of the cube layout.
  for y in 0..8u32 {
    for x in 0..8u32 {
      let index = plane8_index(UVec3::new(x, y, 0));
      let expected = Visibility::from_bit(pattern >> index & 1 != 0);
      assert_eq!(test_bit(lower, upper, index), expected, "plane bit {index}");
    }
  }
}

/// The split across the two 32-bit words lands at index 32.
#[test]
fn test_word_split_boundary() {
  assert_eq!(test_bit(1 << 31, 0, 31), Visibility::Visible);
  assert_eq!(test_bit(0, 1, 32), Visibility::Visible);
  assert_eq!(test_bit(1 << 31, 0, 32), Visibility::Shadow);
  assert_eq!(test_bit(0, 1, 31), Visibility::Shadow);
}

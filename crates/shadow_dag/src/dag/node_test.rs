use glam::UVec3;

use super::*;

// =========================================================================
// Octant selection
// =========================================================================

/// Octant bit offset adds 2 for x, 4 for y, 8 for z at the level's bit.
#[test]
fn test_octant_bit_from_path_bits() {
  let path = UVec3::new(0b100, 0b010, 0b110);

  assert_eq!(octant_bit(path, 0), 0, "no low bits set");
  assert_eq!(octant_bit(path, 1), 4 + 8, "y and z bits at level 1");
  assert_eq!(octant_bit(path, 2), 2 + 8, "x and z bits at level 2");
}

/// The offset is always even: it is a shift into 2-bit pairs.
#[test]
fn test_octant_bit_always_even() {
  for x in 0..2u32 {
    for y in 0..2u32 {
      for z in 0..2u32 {
        let bit = octant_bit(UVec3::new(x, y, z), 0);
        assert_eq!(bit % 2, 0);
        assert_eq!(bit, 2 * (x + 2 * y + 4 * z), "octant number doubled");
      }
    }
  }
}

// =========================================================================
// Childmask codes
// =========================================================================

#[test]
fn test_child_code_extracts_pairs() {
  // Octants 0..8 carry codes 0,1,2,3,0,1,2,3.
  let childmask = 0b11_10_01_00_11_10_01_00;

  assert_eq!(child_code(childmask, 0), 0);
  assert_eq!(child_code(childmask, 2), 1);
  assert_eq!(child_code(childmask, 4), 2);
  assert_eq!(child_code(childmask, 6), 3);
}

/// Only the high bit of a pair is load-bearing; 2 and 3 both descend.
#[test]
fn test_descend_ignores_low_bit() {
  assert!(!is_descend(0));
  assert!(!is_descend(1));
  assert!(is_descend(2));
  assert!(is_descend(3));
}

// =========================================================================
// Compacted pointer-table index
// =========================================================================

/// Count of descend codes at strictly lower octants, the slow way.
fn naive_pointer_index(childmask: u32, octant: u32) -> u32 {
  (0..octant)
    .filter(|below| childmask >> (below * 2 + 1) & 1 != 0)
    .count() as u32
}

/// Exhaustive: all 65536 childmasks x all 8 octant positions.
#[test]
fn test_pointer_index_exhaustive() {
  for childmask in 0..=0xFFFFu32 {
    for octant in 0..8u32 {
      assert_eq!(
        pointer_index(childmask, octant * 2),
        naive_pointer_index(childmask, octant),
        "childmask {childmask:#06x}, octant {octant}"
      );
    }
  }
}

// =========================================================================
// NodePool bounds checking
// =========================================================================

#[test]
fn test_pool_read_in_bounds() {
  let words = [0xAAAA, 7, 9];
  let pool = NodePool::new(&words);

  assert_eq!(pool.len(), 3);
  assert_eq!(pool.read(0), Ok(0xAAAA));
  assert_eq!(pool.read(2), Ok(9));
}

#[test]
fn test_pool_read_out_of_bounds_is_error() {
  let words = [0u32; 4];
  let pool = NodePool::new(&words);

  assert_eq!(
    pool.read(4),
    Err(TraverseError::NodeOutOfBounds { offset: 4, len: 4 }),
    "reads past the pool end must be refused, not performed"
  );
}

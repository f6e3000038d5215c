use super::*;

// =========================================================================
// DagFormat - level math
// =========================================================================

/// Without a grid, descent starts at the topmost path bit.
#[test]
fn test_top_level_without_grid() {
  let format = DagFormat::new(10);
  assert_eq!(format.top_level(), 9, "top level is depth - 1");
  assert_eq!(format.resolution(), 1024);
}

/// Grid bits come off the top of the descent range.
#[test]
fn test_top_level_with_grid() {
  let mut format = DagFormat::new(10);
  format.grid_depth = Some(3);
  assert_eq!(format.top_level(), 6, "grid resolves the high 3 bits");
  assert_eq!(format.grid_resolution(), Some(8));
  assert_eq!(format.grid_cells(), Some(512), "8^3 coarse cells");
}

/// Leaf geometry sets the minimum level of the descent.
#[test]
fn test_min_level_per_leaf_geometry() {
  let mut format = DagFormat::new(10);
  assert_eq!(format.min_level(), 0, "full-depth descent without leafmasks");

  format.leaf = LeafGeometry::Cube4;
  assert_eq!(format.min_level(), 2, "4x4x4 blocks cover the low 2 bits");

  format.leaf = LeafGeometry::Plane8;
  assert_eq!(format.min_level(), 3, "8x8 planes cover the low 3 bits");
}

// =========================================================================
// DagFormat - validation
// =========================================================================

#[test]
fn test_validate_accepts_reasonable_formats() {
  assert_eq!(DagFormat::new(1).validate(), Ok(()));
  assert_eq!(DagFormat::new(30).validate(), Ok(()));

  let format = DagFormat {
    depth: 16,
    grid_depth: Some(4),
    leaf: LeafGeometry::Cube4,
    addressing: PointerAddressing::CellRelative,
  };
  assert_eq!(format.validate(), Ok(()));
}

#[test]
fn test_validate_rejects_depth_out_of_range() {
  assert!(DagFormat::new(0).validate().is_err());
  assert!(DagFormat::new(31).validate().is_err());
}

#[test]
fn test_validate_rejects_grid_swallowing_all_levels() {
  let mut format = DagFormat::new(4);
  format.grid_depth = Some(4);
  assert!(
    format.validate().is_err(),
    "grid must leave node levels below it"
  );

  format.grid_depth = Some(0);
  assert!(format.validate().is_err(), "a zero-bit grid is not a grid");

  format.grid_depth = Some(3);
  assert_eq!(format.validate(), Ok(()));
}

#[test]
fn test_validate_rejects_frontier_above_top_level() {
  // depth 2 leaves only levels 1..0; the Cube4 frontier at 2 cannot fit.
  let mut format = DagFormat::new(2);
  format.leaf = LeafGeometry::Cube4;
  assert!(format.validate().is_err());

  // depth 3 puts the top level exactly at the frontier, which is fine:
  // the root node itself carries the leafmasks.
  format.depth = 3;
  assert_eq!(format.validate(), Ok(()));

  // A grid can push the frontier out again.
  format.depth = 4;
  format.grid_depth = Some(2);
  assert!(format.validate().is_err());
}

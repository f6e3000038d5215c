use super::*;
use crate::dag::format::LeafGeometry;
use crate::types::GRID_CELL_SHADOW;

fn pool(words: &[u32]) -> std::sync::Arc<[u32]> {
  words.to_vec().into()
}

// =========================================================================
// Construction validation
// =========================================================================

#[test]
fn test_new_accepts_minimal_snapshot() {
  let dag = ShadowDag::new(DagFormat::new(4), pool(&[0]), None);
  assert!(dag.is_ok());
}

#[test]
fn test_new_rejects_empty_pool() {
  let result = ShadowDag::new(DagFormat::new(4), pool(&[]), None);
  assert_eq!(result.err(), Some(FormatError::EmptyPool));
}

#[test]
fn test_new_rejects_invalid_format() {
  let mut format = DagFormat::new(2);
  format.leaf = LeafGeometry::Cube4;
  let result = ShadowDag::new(format, pool(&[0]), None);
  assert!(matches!(result, Err(FormatError::FrontierTooDeep { .. })));
}

#[test]
fn test_new_checks_grid_presence_both_ways() {
  let mut format = DagFormat::new(4);
  format.grid_depth = Some(1);
  let missing = ShadowDag::new(format, pool(&[0]), None);
  assert_eq!(missing.err(), Some(FormatError::MissingGridBuffer(1)));

  let unexpected = ShadowDag::new(
    DagFormat::new(4),
    pool(&[0]),
    Some(pool(&[GRID_CELL_SHADOW; 8])),
  );
  assert_eq!(unexpected.err(), Some(FormatError::UnexpectedGridBuffer));
}

#[test]
fn test_new_checks_grid_buffer_length() {
  let mut format = DagFormat::new(4);
  format.grid_depth = Some(1); // 2^3 = 8 cells expected

  let short = ShadowDag::new(format, pool(&[0]), Some(pool(&[GRID_CELL_SHADOW; 4])));
  assert_eq!(
    short.err(),
    Some(FormatError::GridSizeMismatch {
      expected: 8,
      actual: 4
    })
  );

  let exact = ShadowDag::new(format, pool(&[0]), Some(pool(&[GRID_CELL_SHADOW; 8])));
  assert!(exact.is_ok());
}

// =========================================================================
// Sharing
// =========================================================================

/// Snapshots are shared read-only across a worker pool; they must be
/// Send + Sync and cheap to clone.
#[test]
fn test_snapshot_is_send_sync() {
  fn assert_send_sync<T: Send + Sync + Clone>() {}
  assert_send_sync::<ShadowDag>();
}

#[test]
fn test_clone_shares_buffers() {
  let dag = ShadowDag::new(DagFormat::new(4), pool(&[0xAAAA, 1, 2]), None).unwrap();
  let clone = dag.clone();
  assert_eq!(dag.dag_words().as_ptr(), clone.dag_words().as_ptr());
}

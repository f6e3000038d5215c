//! ShadowDag - the immutable structure snapshot all queries read from.
//!
//! Built once by an offline phase (see [`crate::builder`]) or handed over
//! as raw buffers plus their format parameters. Validated at construction,
//! then shared read-only for its whole lifetime: queries never allocate,
//! mutate, or lock, so arbitrarily many may run in parallel against one
//! snapshot.

use std::sync::Arc;

use super::format::DagFormat;
use super::grid::TopLevelGrid;
use super::node::NodePool;
use crate::error::FormatError;

/// Immutable compressed-shadow snapshot: node pool, optional grid, format.
#[derive(Clone, Debug)]
pub struct ShadowDag {
  format: DagFormat,
  dag: Arc<[u32]>,
  grid: Option<Arc<[u32]>>,
}

impl ShadowDag {
  /// Wrap pre-built buffers, validating them against the format.
  ///
  /// The format parameters (addressing convention, leaf geometry, depths)
  /// are fixed at build time and must be communicated alongside the
  /// buffers; nothing is inferred from buffer contents.
  pub fn new(
    format: DagFormat,
    dag: Arc<[u32]>,
    grid: Option<Arc<[u32]>>,
  ) -> Result<Self, FormatError> {
    format.validate()?;
    if dag.is_empty() {
      return Err(FormatError::EmptyPool);
    }
    match (format.grid_depth, &grid) {
      (Some(depth), None) => return Err(FormatError::MissingGridBuffer(depth)),
      (None, Some(_)) => return Err(FormatError::UnexpectedGridBuffer),
      (Some(_), Some(cells)) => {
        let expected = format.grid_cells().unwrap_or(0);
        if cells.len() != expected {
          return Err(FormatError::GridSizeMismatch {
            expected,
            actual: cells.len(),
          });
        }
      }
      (None, None) => {}
    }
    Ok(Self { format, dag, grid })
  }

  /// The snapshot's format parameters.
  #[inline]
  pub fn format(&self) -> &DagFormat {
    &self.format
  }

  /// Bounds-checked view over the node pool.
  #[inline]
  pub fn pool(&self) -> NodePool<'_> {
    NodePool::new(&self.dag)
  }

  /// Raw node-pool words (for serialization or upload).
  #[inline]
  pub fn dag_words(&self) -> &[u32] {
    &self.dag
  }

  /// View over the acceleration grid, if one is configured.
  #[inline]
  pub fn grid(&self) -> Option<TopLevelGrid<'_>> {
    let grid_depth = self.format.grid_depth?;
    let cells = self.grid.as_deref()?;
    Some(TopLevelGrid::new(cells, self.format.depth, grid_depth))
  }

  /// Raw grid words, if a grid is configured.
  #[inline]
  pub fn grid_words(&self) -> Option<&[u32]> {
    self.grid.as_deref()
  }
}

#[cfg(test)]
#[path = "snapshot_test.rs"]
mod snapshot_test;

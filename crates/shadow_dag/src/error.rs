//! Error types for format validation, traversal, and the offline builder.
//!
//! Traversal errors only ever surface for corrupt or mismatched structure
//! data; they are build-time defects, not recoverable runtime conditions.
//! Batch entry points map them to the documented "visible" fallback so one
//! bad sample cannot fail a whole rendering pass.

use thiserror::Error;

use crate::dag::LeafGeometry;

/// A snapshot's buffers or format parameters are inconsistent.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
pub enum FormatError {
  /// Path bits per axis outside the supported range.
  #[error("depth {0} outside supported range 1..=30")]
  DepthOutOfRange(u32),

  /// Grid depth must leave at least one node level below it.
  #[error("grid depth {grid_depth} must be in 1..{depth}")]
  GridDepthOutOfRange { grid_depth: u32, depth: u32 },

  /// The leaf frontier sits at or above the topmost node level.
  #[error("leaf frontier level {frontier} needs node levels above it ({node_levels} below the grid)")]
  FrontierTooDeep { frontier: u32, node_levels: u32 },

  /// The node pool holds no words at all.
  #[error("node pool is empty")]
  EmptyPool,

  /// A grid depth was configured but no grid buffer supplied.
  #[error("grid buffer missing for grid depth {0}")]
  MissingGridBuffer(u32),

  /// A grid buffer was supplied without a configured grid depth.
  #[error("grid buffer present but no grid depth configured")]
  UnexpectedGridBuffer,

  /// Grid buffer length does not match the configured grid resolution.
  #[error("grid buffer holds {actual} words, expected {expected}")]
  GridSizeMismatch { expected: usize, actual: usize },
}

/// A traversal step would have read outside the immutable snapshot.
///
/// Indicates a corrupt encoding (or a format parameter mismatch between the
/// buffers and the [`DagFormat`](crate::DagFormat) they were handed over
/// with). The read is refused instead of going out of bounds.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
pub enum TraverseError {
  /// A node offset or child pointer points past the end of the pool.
  #[error("node word {offset} outside pool of {len} words")]
  NodeOutOfBounds { offset: usize, len: usize },

  /// A coarse cell index points past the end of the grid buffer.
  #[error("grid cell {index} outside grid of {len} words")]
  GridOutOfBounds { index: usize, len: usize },
}

/// The offline builder rejected its configuration.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
pub enum BuildError {
  /// The builder only emits `Cube4` leafmasks (or none).
  #[error("builder does not emit {0:?} leafmasks")]
  UnsupportedLeafGeometry(LeafGeometry),

  /// The assembled snapshot failed validation.
  #[error(transparent)]
  Format(#[from] FormatError),
}

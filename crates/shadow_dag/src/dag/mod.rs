//! Compressed shadow DAG: encoding, format parameters, and traversal.
//!
//! The DAG is a fixed, purpose-built encoding for binary occupancy data.
//! Subtrees may be shared (repeated patterns compress to one copy) but the
//! pool is never cyclic. Everything here reads against an immutable
//! snapshot built offline; no query ever allocates or mutates.
//!
//! # Module Structure
//!
//! - [`format`]: `DagFormat` - per-snapshot layout parameters (depth, grid,
//!   leaf geometry, pointer addressing)
//! - [`node`]: childmask decode and popcount child-offset arithmetic
//! - [`leafmask`]: 64-bit bottom-level bitmask blocks
//! - [`grid`]: dense top-level acceleration grid
//! - [`snapshot`]: `ShadowDag` - immutable buffers + format, shared by all
//!   queries
//! - [`traverse`]: the level-by-level descent answering one query

pub mod format;
pub mod grid;
pub mod leafmask;
pub mod node;
pub mod snapshot;
pub mod traverse;

// Re-exports
pub use format::{DagFormat, LeafGeometry, PointerAddressing};
pub use grid::{GridCell, TopLevelGrid};
pub use node::NodePool;
pub use snapshot::ShadowDag;

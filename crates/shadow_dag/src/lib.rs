//! shadow_dag - compressed precomputed visibility queries
//!
//! This crate stores a static binary visibility volume (a shadow map sampled
//! at very high resolution) as a bit-packed directed acyclic graph and
//! answers point-visibility queries against it - conceptually one query per
//! rendered pixel per frame.
//!
//! # Data layout
//!
//! The whole structure lives in two flat `u32` buffers, produced once by an
//! offline build phase and immutable afterwards:
//!
//! ```text
//! node pool                          top-level grid (optional)
//! ┌───────────┬─────────────────┐    ┌──────────────────────────────┐
//! │ childmask │ child table ... │    │ one u32 per coarse cell      │
//! └───────────┴─────────────────┘    │  0xFFFF_FFFF  cell shadowed  │
//!   16 bits,    one entry per        │  0xFFFF_FFFE  cell visible   │
//!   2 per       "descend" octant,    │  else         cell DAG root  │
//!   octant      ascending order      └──────────────────────────────┘
//! ```
//!
//! Per-octant codes: `0` fully shadowed, `1` fully visible, high bit set
//! means "descend, subtree present". Child table entries are pool offsets,
//! except at the configured leaf frontier where each entry is a 64-bit
//! leafmask (two words) resolving the remaining voxels in one read.
//!
//! # Querying
//!
//! ```ignore
//! use glam::{Mat4, Vec3};
//! use shadow_dag::{build, BitVolume, BuildConfig};
//!
//! let mut volume = BitVolume::filled(16, true);
//! volume.set(5, 9, 3, false);
//!
//! let dag = build(&volume, &BuildConfig::new(4))?;
//!
//! // One query per sample point, arbitrarily many in parallel.
//! let vis = dag.query(Vec3::new(0.2, -0.4, 0.7), &Mat4::IDENTITY)?;
//! ```
//!
//! Queries are independent read-only operations; `ShadowDag` is cheap to
//! share across threads and [`query_batch`] evaluates whole point slices in
//! parallel via rayon.

pub mod batch;
pub mod builder;
pub mod dag;
pub mod error;
pub mod path;
pub mod types;

// Re-export commonly used items
pub use batch::{query_batch, query_batch_timed};
pub use builder::{build, BitVolume, BuildConfig, VisibilitySource};
pub use dag::{DagFormat, LeafGeometry, PointerAddressing, ShadowDag};
pub use error::{BuildError, FormatError, TraverseError};
pub use types::Visibility;

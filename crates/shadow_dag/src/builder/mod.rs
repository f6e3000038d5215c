//! Offline construction of shadow DAG snapshots from a dense volume.
//!
//! This is the build phase the query core treats as an external
//! collaborator: it runs once, produces the immutable buffers, and plays
//! no part in query execution. Construction is level-wise - classify
//! regions bottom-up, merge identical subtrees per level, then compact
//! into the pointer layout the traversal expects.
//!
//! The builder emits absolute pointer addressing, and leafmasks only in
//! the `Cube4` geometry; `Plane8` pools decode fine but must come from an
//! external producer. A configured grid gets one word per coarse cell,
//! with uniform cells folded into sentinels so their queries never touch
//! the pool.

pub mod volume;

pub(crate) mod emit;
pub(crate) mod svo;

pub use volume::{BitVolume, VisibilitySource};

use std::sync::Arc;

use glam::UVec3;

use crate::dag::{DagFormat, LeafGeometry, PointerAddressing, ShadowDag};
use crate::error::BuildError;
use crate::types::{GRID_CELL_SHADOW, GRID_CELL_VISIBLE};

use self::emit::emit;
use self::svo::{Region, SvoBuilder};

/// Build-phase parameters. Addressing is always absolute in built pools.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BuildConfig {
  /// Path bits per axis; the source must cover `2^depth` voxels per axis.
  pub depth: u32,

  /// Coarse bits handled by a top-level grid, or `None` for a single
  /// global root.
  pub grid_depth: Option<u32>,

  /// Leaf geometry to emit (`None` or `Cube4`).
  pub leaf: LeafGeometry,
}

impl BuildConfig {
  /// Full-depth descent, no grid, no leafmasks.
  pub fn new(depth: u32) -> Self {
    Self {
      depth,
      grid_depth: None,
      leaf: LeafGeometry::None,
    }
  }

  /// Add a top-level acceleration grid over the high `grid_depth` bits.
  pub fn with_grid(mut self, grid_depth: u32) -> Self {
    self.grid_depth = Some(grid_depth);
    self
  }

  /// Terminate descent with 4×4×4 leafmask blocks.
  pub fn with_cube4_leafmasks(mut self) -> Self {
    self.leaf = LeafGeometry::Cube4;
    self
  }

  fn format(&self) -> DagFormat {
    DagFormat {
      depth: self.depth,
      grid_depth: self.grid_depth,
      leaf: self.leaf,
      addressing: PointerAddressing::Absolute,
    }
  }
}

/// Build an immutable snapshot from a visibility source.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "builder::build"))]
pub fn build<S: VisibilitySource>(
  source: &S,
  config: &BuildConfig,
) -> Result<ShadowDag, BuildError> {
  if config.leaf == LeafGeometry::Plane8 {
    return Err(BuildError::UnsupportedLeafGeometry(config.leaf));
  }
  let format = config.format();
  format.validate().map_err(BuildError::Format)?;

  let top_level = format.top_level();
  let mut svo = SvoBuilder::new(source, top_level, format.min_level(), format.leaf);

  match format.grid_depth {
    None => {
      // Uniform volumes still get a root node so descent has a childmask
      // to start from at offset 0.
      match svo.build_region(UVec3::ZERO, top_level) {
        Region::Shadow => svo.intern_uniform(top_level, false),
        Region::Visible => svo.intern_uniform(top_level, true),
        Region::Mixed(index) => index,
      };

      let pool = emit(&svo.into_levels(), format.min_level(), format.leaf);
      let dag: Arc<[u32]> = pool.words.into();
      ShadowDag::new(format, dag, None).map_err(BuildError::Format)
    }
    Some(grid_depth) => {
      let grid_res = 1u32 << grid_depth;
      let cell_size = 1u32 << (format.depth - grid_depth);

      // Classify every cell; only mixed cells materialize nodes.
      let mut cells = Vec::with_capacity((grid_res as usize).pow(3));
      for z in 0..grid_res {
        for y in 0..grid_res {
          for x in 0..grid_res {
            let origin = UVec3::new(x, y, z) * cell_size;
            cells.push(svo.build_region(origin, top_level));
          }
        }
      }

      let pool = emit(&svo.into_levels(), format.min_level(), format.leaf);
      let grid: Vec<u32> = cells
        .iter()
        .map(|cell| match cell {
          Region::Shadow => GRID_CELL_SHADOW,
          Region::Visible => GRID_CELL_VISIBLE,
          Region::Mixed(index) => pool.offsets[top_level as usize][*index as usize],
        })
        .collect();

      // A fully uniform volume emits no nodes at all; keep the snapshot's
      // pool non-empty so validation holds (the word is never reachable).
      let mut words = pool.words;
      if words.is_empty() {
        words.push(0);
      }

      let dag: Arc<[u32]> = words.into();
      ShadowDag::new(format, dag, Some(grid.into())).map_err(BuildError::Format)
    }
  }
}

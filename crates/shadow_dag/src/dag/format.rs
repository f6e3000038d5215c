//! DagFormat - layout parameters fixed when a snapshot is built.
//!
//! Addressing convention and leaf geometry are format parameters that must
//! be communicated alongside the buffers, never inferred from them: the two
//! pointer conventions are not interchangeable, and a pool built for one
//! decodes to garbage under the other.

use glam::UVec3;

use super::leafmask;
use crate::error::FormatError;

/// Geometry of the 64-bit leafmask blocks terminating descent, if any.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum LeafGeometry {
  /// No leafmasks; descent runs to level 0 and per-voxel codes.
  #[default]
  None,

  /// 4×4×4 cube addressed by the low 2 bits of each axis.
  /// Frontier sits at level 2.
  Cube4,

  /// 8×8 plane addressed by the low 3 bits of x and y.
  /// Frontier sits at level 3.
  Plane8,
}

impl LeafGeometry {
  /// Level at which descent stops and the leafmask is evaluated instead.
  ///
  /// `None` returns 0: descent runs all the way down.
  #[inline]
  pub fn frontier_level(self) -> u32 {
    match self {
      LeafGeometry::None => 0,
      LeafGeometry::Cube4 => 2,
      LeafGeometry::Plane8 => 3,
    }
  }

  /// Bit index of a path's voxel within a leafmask block.
  #[inline]
  pub fn local_index(self, path: UVec3) -> u32 {
    match self {
      // Level 0 never evaluates a leafmask; index is unused but defined.
      LeafGeometry::None => 0,
      LeafGeometry::Cube4 => leafmask::cube4_index(path),
      LeafGeometry::Plane8 => leafmask::plane8_index(path),
    }
  }
}

/// How child-table entries address the pool.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum PointerAddressing {
  /// Entries are offsets from the start of the pool.
  #[default]
  Absolute,

  /// Entries are offsets from the cell's DAG root (the grid word, or 0
  /// without a grid).
  CellRelative,
}

/// Layout parameters of one deployed snapshot.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DagFormat {
  /// Path bits per axis; volume resolution is `2^depth`.
  pub depth: u32,

  /// Coarse bits resolved by the top-level grid, or `None` when descent
  /// starts at the single global root at offset 0.
  pub grid_depth: Option<u32>,

  /// Leaf geometry variant (mutually exclusive with full-depth descent).
  pub leaf: LeafGeometry,

  /// Child-pointer addressing convention.
  pub addressing: PointerAddressing,
}

impl DagFormat {
  /// Format without grid or leafmasks, absolute addressing.
  pub fn new(depth: u32) -> Self {
    Self {
      depth,
      grid_depth: None,
      leaf: LeafGeometry::None,
      addressing: PointerAddressing::Absolute,
    }
  }

  /// Volume resolution per axis.
  #[inline]
  pub fn resolution(&self) -> u32 {
    1 << self.depth
  }

  /// Grid resolution per axis (`2^G`), or `None` without a grid.
  #[inline]
  pub fn grid_resolution(&self) -> Option<u32> {
    self.grid_depth.map(|g| 1 << g)
  }

  /// Number of grid cells (`R³`), or `None` without a grid.
  #[inline]
  pub fn grid_cells(&self) -> Option<usize> {
    self.grid_resolution().map(|r| (r as usize).pow(3))
  }

  /// Topmost node level: the highest path bit not resolved by the grid.
  #[inline]
  pub fn top_level(&self) -> u32 {
    self.depth - self.grid_depth.unwrap_or(0) - 1
  }

  /// Lowest level the descent visits before giving up (leaf frontier, or
  /// 0 for full-depth descent).
  #[inline]
  pub fn min_level(&self) -> u32 {
    self.leaf.frontier_level()
  }

  /// Check internal consistency of the parameters.
  pub fn validate(&self) -> Result<(), FormatError> {
    if self.depth < 1 || self.depth > 30 {
      return Err(FormatError::DepthOutOfRange(self.depth));
    }
    if let Some(grid_depth) = self.grid_depth {
      if grid_depth < 1 || grid_depth >= self.depth {
        return Err(FormatError::GridDepthOutOfRange {
          grid_depth,
          depth: self.depth,
        });
      }
    }
    // The leaf frontier must not sit above the topmost node level.
    let node_levels = self.depth - self.grid_depth.unwrap_or(0);
    let frontier = self.leaf.frontier_level();
    if frontier > self.top_level() {
      return Err(FormatError::FrontierTooDeep {
        frontier,
        node_levels,
      });
    }
    Ok(())
  }
}

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

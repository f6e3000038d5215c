//! TopLevelGrid - dense acceleration table over the coarse top levels.
//!
//! One u32 per coarse cell, linear-indexed `z·R² + y·R + x`. Uniformly lit
//! or shadowed cells answer the query with a single fetch; mixed cells hand
//! back the pool offset of their own DAG root. Sentinel words must be
//! checked before the value is treated as an offset.

use glam::UVec3;

use crate::error::TraverseError;
use crate::types::{GRID_CELL_SHADOW, GRID_CELL_VISIBLE};

/// Decoded content of one coarse grid cell.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GridCell {
  /// Whole cell in shadow; no node-pool access needed.
  Shadow,
  /// Whole cell visible; no node-pool access needed.
  Visible,
  /// Mixed cell: descend from this DAG root offset. Also the base for
  /// cell-relative child addressing.
  Root(u32),
}

/// Classify a raw grid word.
#[inline]
pub fn classify(word: u32) -> GridCell {
  match word {
    GRID_CELL_SHADOW => GridCell::Shadow,
    GRID_CELL_VISIBLE => GridCell::Visible,
    offset => GridCell::Root(offset),
  }
}

/// Read-only view over the grid buffer of one snapshot.
#[derive(Clone, Copy, Debug)]
pub struct TopLevelGrid<'a> {
  cells: &'a [u32],
  /// Total path bits per axis.
  depth: u32,
  /// Coarse bits resolved by the grid.
  grid_depth: u32,
}

impl<'a> TopLevelGrid<'a> {
  /// Wrap a grid buffer. The buffer length is validated against
  /// `2^(3·grid_depth)` at snapshot construction.
  pub fn new(cells: &'a [u32], depth: u32, grid_depth: u32) -> Self {
    Self {
      cells,
      depth,
      grid_depth,
    }
  }

  /// Linear index of the cell containing `path`.
  ///
  /// Coarse coordinates are the high `grid_depth` bits of each axis.
  #[inline]
  pub fn cell_index(&self, path: UVec3) -> usize {
    let res = 1usize << self.grid_depth;
    let coarse = path >> (self.depth - self.grid_depth);
    (coarse.z as usize * res + coarse.y as usize) * res + coarse.x as usize
  }

  /// Look up and classify the cell containing `path`.
  #[inline]
  pub fn lookup(&self, path: UVec3) -> Result<GridCell, TraverseError> {
    let index = self.cell_index(path);
    let word = self
      .cells
      .get(index)
      .copied()
      .ok_or(TraverseError::GridOutOfBounds {
        index,
        len: self.cells.len(),
      })?;
    Ok(classify(word))
  }
}

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;

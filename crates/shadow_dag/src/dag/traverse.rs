//! Traversal engine: level-by-level descent answering one point query.
//!
//! Per level, the path's bits select one of 8 octants; the node's 2-bit
//! code either answers immediately (homogeneous subtree) or descends into
//! the compacted child table. Large uniform regions therefore resolve in
//! O(1) node reads regardless of size; only boundary regions pay the full
//! O(depth) cost. At the configured leaf frontier a 64-bit leafmask
//! replaces further descent; if the level counter runs out without any
//! terminal, the query resolves to visible (absence of further subdivision
//! data implies no recorded occlusion).

use glam::{Mat4, UVec3, Vec3};

use super::format::{DagFormat, LeafGeometry, PointerAddressing};
use super::grid::GridCell;
use super::leafmask;
use super::node::{self, NodePool};
use super::snapshot::ShadowDag;
use crate::error::TraverseError;
use crate::path;
use crate::types::Visibility;

impl ShadowDag {
  /// Query visibility of a world-space point.
  ///
  /// `transform` projects the point into the light's post-perspective-
  /// divide coordinate space; out-of-frustum points clamp to the volume
  /// border per axis before any lookup.
  #[inline]
  pub fn query(&self, point: Vec3, transform: &Mat4) -> Result<Visibility, TraverseError> {
    self.query_projected(path::project(point, transform))
  }

  /// Query visibility of a pre-projected point in NDC ([−1,1]³).
  #[inline]
  pub fn query_projected(&self, ndc: Vec3) -> Result<Visibility, TraverseError> {
    self.query_path(path::path_from_ndc(ndc, self.format().depth))
  }

  /// Query visibility of an integer voxel path.
  ///
  /// Path components above the volume resolution are clamped; the other
  /// entry points produce in-range paths already.
  pub fn query_path(&self, path: UVec3) -> Result<Visibility, TraverseError> {
    let max = self.format().resolution() - 1;
    let path = path.min(UVec3::splat(max));

    // Grid shortcut: uniform cells answer without touching the pool.
    let root = match self.grid() {
      Some(grid) => match grid.lookup(path)? {
        GridCell::Shadow => return Ok(Visibility::Shadow),
        GridCell::Visible => return Ok(Visibility::Visible),
        GridCell::Root(offset) => offset,
      },
      None => 0,
    };

    descend(self.pool(), root, path, self.format())
  }

  /// Query with the documented malformed-query fallback.
  ///
  /// A corrupt encoding resolves to visible instead of failing the caller;
  /// thousands of independent queries run per rendering pass and one bad
  /// sample must not abort the rest.
  pub fn query_or_visible(&self, point: Vec3, transform: &Mat4) -> Visibility {
    match self.query(point, transform) {
      Ok(vis) => vis,
      Err(err) => {
        #[cfg(feature = "tracing")]
        tracing::warn!(error = %err, "malformed shadow query, falling back to visible");
        #[cfg(not(feature = "tracing"))]
        let _ = err;
        Visibility::Visible
      }
    }
  }
}

/// Iterative descent from a cell root down to a terminal code, a leafmask,
/// or depth exhaustion.
fn descend(
  pool: NodePool<'_>,
  root: u32,
  path: UVec3,
  format: &DagFormat,
) -> Result<Visibility, TraverseError> {
  let min_level = format.min_level() as i64;
  let leaf = format.leaf;
  let base = root as usize;

  let mut offset = base;
  let mut level = format.top_level() as i64;

  while level >= min_level {
    let childmask = pool.read(offset)?;
    let octant_bit = node::octant_bit(path, level as u32);

    let code = node::child_code(childmask, octant_bit);
    if !node::is_descend(code) {
      return Ok(Visibility::from_bit(code == 1));
    }

    let index = node::pointer_index(childmask, octant_bit) as usize;

    if leaf != LeafGeometry::None && level == min_level {
      // Frontier node: table entries are two-word leafmasks, not pointers.
      let entry = offset + 1 + 2 * index;
      let lower = pool.read(entry)?;
      let upper = pool.read(entry + 1)?;
      return Ok(leafmask::test_bit(lower, upper, leaf.local_index(path)));
    }

    let pointer = pool.read(offset + 1 + index)? as usize;
    offset = match format.addressing {
      PointerAddressing::Absolute => pointer,
      PointerAddressing::CellRelative => base + pointer,
    };

    level -= 1;
  }

  // Depth exhausted without terminal data: no recorded occlusion.
  Ok(Visibility::Visible)
}

#[cfg(test)]
#[path = "traverse_test.rs"]
mod traverse_test;

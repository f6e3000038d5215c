//! Level-wise sparse-voxel-octree construction with subtree merging.
//!
//! Nodes are built bottom-up and interned per level: two subtrees with
//! identical (already-interned) children hash to the same key and collapse
//! to one node, which is what turns the octree into a DAG. Uniform regions
//! never materialize a node at all; they fold into the parent's childmask
//! as terminal codes.

use std::collections::HashMap;

use glam::UVec3;

use super::volume::VisibilitySource;
use crate::dag::LeafGeometry;

/// One octant slot of a node under construction.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub(crate) enum BuildChild {
  /// Terminal code 0.
  Shadow,
  /// Terminal code 1.
  Visible,
  /// Descend into the interned node at this index one level below.
  Node(u32),
  /// Descend into a 64-bit leafmask block (frontier nodes only).
  Leafmask(u64),
}

impl BuildChild {
  #[inline]
  pub fn is_descend(self) -> bool {
    matches!(self, BuildChild::Node(_) | BuildChild::Leafmask(_))
  }
}

/// A node under construction: one slot per octant, octant = x + 2y + 4z.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub(crate) struct BuildNode {
  pub children: [BuildChild; 8],
}

impl BuildNode {
  /// Uniform node: all 8 octants carry the same terminal code.
  pub fn uniform(visible: bool) -> Self {
    let code = if visible {
      BuildChild::Visible
    } else {
      BuildChild::Shadow
    };
    Self {
      children: [code; 8],
    }
  }

  /// 16-bit childmask for this node. The builder always encodes descend
  /// as code 2; the low bit of a descend pair carries no meaning.
  pub fn childmask(&self) -> u32 {
    let mut mask = 0u32;
    for (octant, child) in self.children.iter().enumerate() {
      let code = match child {
        BuildChild::Shadow => 0,
        BuildChild::Visible => 1,
        BuildChild::Node(_) | BuildChild::Leafmask(_) => 2,
      };
      mask |= code << (octant * 2);
    }
    mask
  }

  /// Number of compacted child-table entries.
  pub fn descend_count(&self) -> usize {
    self.children.iter().filter(|c| c.is_descend()).count()
  }
}

/// Interned nodes of one level.
#[derive(Default)]
pub(crate) struct LevelNodes {
  pub nodes: Vec<BuildNode>,
  dedup: HashMap<BuildNode, u32>,
}

impl LevelNodes {
  /// Intern a node, returning the index of its unique representative.
  fn intern(&mut self, node: BuildNode) -> u32 {
    if let Some(&index) = self.dedup.get(&node) {
      return index;
    }
    let index = self.nodes.len() as u32;
    self.nodes.push(node);
    self.dedup.insert(node, index);
    index
  }
}

/// Classification of a cube-shaped region of the source volume.
pub(crate) enum Region {
  Shadow,
  Visible,
  /// Mixed region, represented by the interned node at its level.
  Mixed(u32),
}

/// Builds the per-level node sets for one snapshot.
///
/// Levels are shared across grid cells, so identical subtrees in different
/// cells also merge.
pub(crate) struct SvoBuilder<'a, S: VisibilitySource> {
  source: &'a S,
  levels: Vec<LevelNodes>,
  min_level: u32,
  leaf: LeafGeometry,
}

impl<'a, S: VisibilitySource> SvoBuilder<'a, S> {
  pub fn new(source: &'a S, top_level: u32, min_level: u32, leaf: LeafGeometry) -> Self {
    let levels = (0..=top_level).map(|_| LevelNodes::default()).collect();
    Self {
      source,
      levels,
      min_level,
      leaf,
    }
  }

  /// Per-level node sets, bottom level first.
  pub fn into_levels(self) -> Vec<LevelNodes> {
    self.levels
  }

  /// Intern a uniform node at `level` (used for uniform roots, which still
  /// need a childmask word for descent to start from).
  pub fn intern_uniform(&mut self, level: u32, visible: bool) -> u32 {
    self.levels[level as usize].intern(BuildNode::uniform(visible))
  }

  /// Classify and, if mixed, intern the region of `2^(level+1)` voxels per
  /// axis at `origin`.
  pub fn build_region(&mut self, origin: UVec3, level: u32) -> Region {
    let child_size = 1u32 << level;
    let mut children = [BuildChild::Shadow; 8];

    for (octant, child) in children.iter_mut().enumerate() {
      let octant = octant as u32;
      let child_origin = origin
        + child_size * UVec3::new(octant & 1, (octant >> 1) & 1, (octant >> 2) & 1);

      *child = if level == self.min_level {
        self.terminal_child(child_origin)
      } else {
        match self.build_region(child_origin, level - 1) {
          Region::Shadow => BuildChild::Shadow,
          Region::Visible => BuildChild::Visible,
          Region::Mixed(index) => BuildChild::Node(index),
        }
      };
    }

    if children.iter().all(|c| *c == BuildChild::Shadow) {
      return Region::Shadow;
    }
    if children.iter().all(|c| *c == BuildChild::Visible) {
      return Region::Visible;
    }
    Region::Mixed(self.levels[level as usize].intern(BuildNode { children }))
  }

  /// Terminal octant at the bottom of the descent: a single voxel for
  /// full-depth descent, a 4×4×4 leafmask block at the Cube4 frontier.
  fn terminal_child(&self, origin: UVec3) -> BuildChild {
    match self.leaf {
      LeafGeometry::None => {
        if self.source.visible(origin.x, origin.y, origin.z) {
          BuildChild::Visible
        } else {
          BuildChild::Shadow
        }
      }
      LeafGeometry::Cube4 => match self.leafmask_block(origin) {
        0 => BuildChild::Shadow,
        u64::MAX => BuildChild::Visible,
        mask => BuildChild::Leafmask(mask),
      },
      // Rejected up front in build().
      LeafGeometry::Plane8 => unreachable!("builder does not emit Plane8"),
    }
  }

  /// Sample one 4×4×4 block into leafmask bit order.
  fn leafmask_block(&self, origin: UVec3) -> u64 {
    let mut mask = 0u64;
    for z in 0..4 {
      for y in 0..4 {
        for x in 0..4 {
          let index = x + 4 * y + 16 * z;
          if self.source.visible(origin.x + x, origin.y + y, origin.z + z) {
            mask |= 1u64 << index;
          }
        }
      }
    }
    mask
  }
}

#[cfg(test)]
#[path = "svo_test.rs"]
mod svo_test;

//! Compaction of interned build nodes into the flat pool layout.
//!
//! Levels are laid out top-down, so a lone (no-grid) root lands at offset
//! 0 and every child pointer points forward. All emitted pointers are
//! absolute pool offsets.

use smallvec::SmallVec;

use super::svo::{BuildChild, LevelNodes};
use crate::dag::LeafGeometry;

/// Result of pool emission: the words plus each node's final offset.
pub(crate) struct EmittedPool {
  pub words: Vec<u32>,
  /// Final pool offset per node, indexed `[level][node]`.
  pub offsets: Vec<Vec<u32>>,
}

/// Words one child-table entry occupies at a given level.
#[inline]
fn entry_width(level: usize, min_level: u32, leaf: LeafGeometry) -> usize {
  if leaf != LeafGeometry::None && level == min_level as usize {
    2 // two-word leafmask in place of a pointer
  } else {
    1
  }
}

pub(crate) fn emit(levels: &[LevelNodes], min_level: u32, leaf: LeafGeometry) -> EmittedPool {
  // Pass 1: assign offsets, topmost level first.
  let mut offsets: Vec<Vec<u32>> = levels.iter().map(|l| vec![0; l.nodes.len()]).collect();
  let mut next = 0u32;
  for level in (0..levels.len()).rev() {
    let width = entry_width(level, min_level, leaf);
    for (i, node) in levels[level].nodes.iter().enumerate() {
      offsets[level][i] = next;
      next += (1 + node.descend_count() * width) as u32;
    }
  }

  // Pass 2: write childmask + compacted table per node, in offset order.
  let mut words = Vec::with_capacity(next as usize);
  for level in (0..levels.len()).rev() {
    for node in &levels[level].nodes {
      let mut entries: SmallVec<[u32; 9]> = SmallVec::new();
      entries.push(node.childmask());
      for child in &node.children {
        match *child {
          BuildChild::Shadow | BuildChild::Visible => {}
          BuildChild::Node(index) => entries.push(offsets[level - 1][index as usize]),
          BuildChild::Leafmask(mask) => {
            entries.push(mask as u32);
            entries.push((mask >> 32) as u32);
          }
        }
      }
      words.extend_from_slice(&entries);
    }
  }

  debug_assert_eq!(words.len(), next as usize, "emitted size must match layout");
  EmittedPool { words, offsets }
}

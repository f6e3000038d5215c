//! Parallel batch evaluation of independent point queries.
//!
//! Queries share one immutable snapshot and nothing else, so the natural
//! execution model is "one query per unit of work, arbitrarily many in
//! parallel". Batches are bounded by the explicit input slice; results
//! keep input order for deterministic output.

use glam::{Mat4, Vec3};
use rayon::prelude::*;
use web_time::Instant;

use crate::dag::ShadowDag;
use crate::types::Visibility;

/// Query every point of a slice in parallel via rayon.
///
/// Individual malformed queries resolve to the visible fallback; one bad
/// sample never fails the batch.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "batch::query_batch"))]
pub fn query_batch(dag: &ShadowDag, points: &[Vec3], transform: &Mat4) -> Vec<Visibility> {
  if points.is_empty() {
    return Vec::new();
  }

  points
    .par_iter()
    .map(|point| dag.query_or_visible(*point, transform))
    .collect()
}

/// [`query_batch`] with wall-clock timing in microseconds.
pub fn query_batch_timed(
  dag: &ShadowDag,
  points: &[Vec3],
  transform: &Mat4,
) -> (Vec<Visibility>, u64) {
  let start = Instant::now();
  let results = query_batch(dag, points, transform);
  (results, start.elapsed().as_micros() as u64)
}

#[cfg(test)]
#[path = "batch_test.rs"]
mod batch_test;

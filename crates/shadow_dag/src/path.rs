//! Mapping normalized query points to integer voxel paths.
//!
//! A path is an integer triple in `[0, 2^L−1]³` whose bits steer the
//! octant selection at every level of the descent. Paths are derived from
//! NDC on every query, never stored.

use glam::{Mat4, UVec3, Vec3};

/// Project a point through `transform` and apply the perspective divide.
///
/// Points outside the light frustum (including degenerate `w`) produce
/// out-of-range or non-finite NDC; [`path_from_ndc`] maps those to a
/// defined border path.
#[inline]
pub fn project(point: Vec3, transform: &Mat4) -> Vec3 {
  let clip = *transform * point.extend(1.0);
  clip.truncate() / clip.w
}

/// Map NDC in `[−1,1]³` to an integer path at the volume's resolution.
///
/// `path = floor(((ndc+1) · 0.5) · (2^depth − 1))` componentwise.
/// Out-of-range input clamps to `[0, 2^depth − 1]` per axis; historical
/// implementations silently wrapped here, which turned out-of-frustum
/// points into reads of unrelated cells.
#[inline]
pub fn path_from_ndc(ndc: Vec3, depth: u32) -> UVec3 {
  let max = ((1u64 << depth) - 1) as f32;
  let scaled = (ndc + Vec3::ONE) * 0.5 * max;
  // min-after-max also normalizes NaN components to 0.
  UVec3::new(
    scaled.x.max(0.0).min(max) as u32,
    scaled.y.max(0.0).min(max) as u32,
    scaled.z.max(0.0).min(max) as u32,
  )
}

#[cfg(test)]
#[path = "path_test.rs"]
mod path_test;

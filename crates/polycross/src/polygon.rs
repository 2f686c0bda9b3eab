//! Polygon overlap predicate.
//!
//! Polygons are ordered point slices, implicitly closed: edge `i` runs
//! from `p[i]` to `p[(i + 1) % p.len()]`. Shapes may be non-convex; they
//! are not required to be simple, and no validation is performed.

use nalgebra::Vector2;

use crate::segment::segment_intersection;

/// True iff any closed-loop edge of `p1` crosses any closed-loop edge of `p2`.
///
/// Returns on the first crossing found; cost is O(|p1|·|p2|) segment tests
/// in the worst (disjoint) case. Polygons with fewer than two points have
/// no nondegenerate edge and never intersect anything. Note this is a
/// boundary test: one polygon strictly inside the other reports `false`.
pub fn polys_intersect(p1: &[Vector2<f64>], p2: &[Vector2<f64>]) -> bool {
    for i in 0..p1.len() {
        for j in 0..p2.len() {
            let touch = segment_intersection(
                p1[i],
                p1[(i + 1) % p1.len()],
                p2[j],
                p2[(j + 1) % p2.len()],
            );
            if touch.is_some() {
                return true;
            }
        }
    }
    false
}

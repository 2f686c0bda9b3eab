//! Finite line-segment intersection.
//!
//! Purpose
//! - The crossing primitive behind [`crate::polygon::polys_intersect`]:
//!   parametric intersection of two finite segments via perp-dot products.
//!
//! Degeneracy policy
//! - A zero denominator (parallel, collinear, or zero-length segments)
//!   yields `None`. Collinear-overlapping segments therefore report no
//!   crossing; callers that need contact information for those must test
//!   endpoints themselves.

use nalgebra::Vector2;

use crate::interp::lerp2;
use crate::parallelogram_area;

/// A proper crossing of two segments.
///
/// `offset` is the normalized position of the crossing along the first
/// segment: 0 at its start point, 1 at its end point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Crossing {
    pub point: Vector2<f64>,
    pub offset: f64,
}

/// Intersection of segments `a→b` and `c→d`, if they cross.
///
/// Solves `a + t (b - a) = c + u (d - c)`; a crossing exists iff the
/// denominator is nonzero and both `t` and `u` land in [0, 1], endpoints
/// inclusive (segments that merely touch at an endpoint do cross).
pub fn segment_intersection(
    a: Vector2<f64>,
    b: Vector2<f64>,
    c: Vector2<f64>,
    d: Vector2<f64>,
) -> Option<Crossing> {
    let r = b - a;
    let s = d - c;
    let w = c - a;

    let denom = parallelogram_area(r, s);
    if denom != 0.0 {
        let t = parallelogram_area(w, s) / denom;
        let u = parallelogram_area(w, r) / denom;
        if t >= 0.0 && t <= 1.0 && u >= 0.0 && u <= 1.0 {
            return Some(Crossing {
                point: lerp2(a, b, t),
                offset: t,
            });
        }
    }
    None
}

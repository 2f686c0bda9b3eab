//! 2D crossing tests and signal color mapping.
//!
//! Purpose
//! - Pure, stateless predicates for finite-segment and polygon overlap
//!   queries, plus a scalar→RGBA mapper for rendering signed signals.
//! - Points are `nalgebra::Vector2<f64>` (re-exported as [`Vec2`]);
//!   polygons are ordered point slices, implicitly closed.
//!
//! All queries are total over finite inputs and signal "no result" with
//! `Option`/`bool` rather than erroring; NaN/∞ inputs propagate through
//! IEEE arithmetic unchecked.

pub mod color;
pub mod interp;
pub mod polygon;
pub mod sample;
pub mod segment;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::color::{signal_rgba, Rgba};
    pub use crate::interp::{lerp, lerp2};
    pub use crate::polygon::polys_intersect;
    pub use crate::sample::{draw_ring, shift, ReplayToken, RingCfg, VertexCount};
    pub use crate::segment::{segment_intersection, Crossing};
    pub use nalgebra::Vector2 as Vec2;
}

/// Signed area of the parallelogram spanned by vectors `a` and `b` in R².
/// Positive for a→b counterclockwise, negative otherwise.
#[inline]
pub fn parallelogram_area(a: Vec2<f64>, b: Vec2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

//! Overlap probe across ring separations.
//!
//! Purpose
//! - Exercise the crossing predicate end-to-end: draw a reproducible ring
//!   pair, slide one across the other, and report the overlap verdict plus
//!   a color rendering of a signed proximity score.
//!
//! Why this shape
//! - The two rings come from adjacent replay indices of one seed, so the
//!   run is reproducible without any CLI surface.

use std::time::Instant;

use nalgebra::Vector2;
use polycross::color::signal_rgba;
use polycross::polygon::polys_intersect;
use polycross::sample::{draw_ring, shift, ReplayToken, RingCfg, VertexCount};

fn main() {
    let cfg = RingCfg {
        vertex_count: VertexCount::Fixed(24),
        ..RingCfg::default()
    };
    let base = draw_ring(cfg, ReplayToken { seed: 2024, index: 0 });
    let other = draw_ring(cfg, ReplayToken { seed: 2024, index: 1 });
    assert_eq!(base.len(), 24);

    println!("separation  overlap  tint");
    for step in 0..=10 {
        let dx = 0.4 * f64::from(step);
        let moved = shift(&other, Vector2::new(dx, 0.0));
        let start = Instant::now();
        let overlap = polys_intersect(&base, &moved);
        let elapsed_us = start.elapsed().as_secs_f64() * 1e6;
        // Signed proximity: positive while overlapping, negative once clear.
        let score = if overlap { 1.0 - dx / 4.0 } else { -dx / 4.0 };
        println!(
            "{dx:>6.2}       {overlap:<5}   {}  ({elapsed_us:.1} us)",
            signal_rgba(score)
        );
    }
}

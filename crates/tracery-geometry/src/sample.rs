//! Point generators for parametric curves.
//!
//! Each function samples its curve uniformly in parameter space and returns the raw point
//! list. [`factory`](crate::factory) wraps the results in [`Path`](crate::Path)s.

use std::f64::consts::{PI, TAU};
use tracery_core::math::Point;

/// `samples` points on the ellipse around `center`, starting at angle 0 and stepping
/// `2π / samples` (the start point is not repeated).
pub fn ellipse_points(center: Point, radii: Point, samples: usize) -> Vec<Point> {
    if samples == 0 {
        tracing::warn!("ellipse sampled with zero samples");
        return Vec::new();
    }

    let angle_step = TAU / samples as f64;
    (0..samples)
        .map(|i| {
            let angle = i as f64 * angle_step;
            center + Point::new(radii.x * angle.cos(), radii.y * angle.sin())
        })
        .collect()
}

/// `n` points on an Archimedean spiral around the origin.
///
/// Point `i` sits at radius `radius * i / n` and angle `angle_step * i`, so the spiral
/// starts at the origin and never quite reaches `radius`.
pub fn spiral_points(n: usize, radius: f64, angle_step: f64) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let angle = angle_step * i as f64;
            let r = radius * (i as f64 / n as f64);
            Point::new(r * angle.cos(), r * angle.sin())
        })
        .collect()
}

/// `n` points on the lemniscate of Bernoulli (a figure-eight) around the origin.
///
/// The curve is traced over `t ∈ [-π, π)`; `half_width` is the distance from the center
/// to either tip.
pub fn lemniscate_points(n: usize, half_width: f64) -> Vec<Point> {
    if n == 0 {
        return Vec::new();
    }

    let step = TAU / n as f64;
    (0..n)
        .map(|i| {
            let t = -PI + step * i as f64;
            let (sin, cos) = t.sin_cos();
            let denominator = 1.0 + sin * sin;
            Point::new(
                half_width * cos / denominator,
                half_width * cos * sin / denominator,
            )
        })
        .collect()
}

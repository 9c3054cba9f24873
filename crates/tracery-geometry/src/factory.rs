//! Functions that build ready-to-use paths.
//!
//! Every path returned here has its anchor at the centroid of its points and an up to
//! date length.

use std::f64::consts::{FRAC_PI_2, PI};
use tracery_core::math::Point;

use crate::consts::{MAX_ELLIPSE_SAMPLES, MIN_ELLIPSE_SAMPLES};
use crate::sample::{ellipse_points, lemniscate_points, spiral_points};
use crate::{CubicBezier, Path};

/// A two-point path from `start` to `end`.
pub fn line(start: Point, end: Point) -> Path {
    Path::new(vec![start, end])
}

/// A closed `width` x `height` rectangle with its top-left corner at `top_left`.
pub fn rect(top_left: Point, width: f64, height: f64) -> Path {
    let mut path = Path::new(vec![
        Point::ZERO,
        Point::new(width, 0.0),
        Point::new(width, height),
        Point::new(0.0, height),
    ]);
    path.close().translate(top_left.x, top_left.y);
    path
}

/// A closed square with its top-left corner at `top_left`.
pub fn square(top_left: Point, side: f64) -> Path {
    rect(top_left, side, side)
}

/// A closed axis-aligned box through two opposite corners.
pub fn bbox(min: Point, max: Point) -> Path {
    Path::new(vec![
        min,
        Point::new(max.x, min.y),
        max,
        Point::new(min.x, max.y),
        min,
    ])
}

/// A closed ellipse whose sample count follows `x_radius`, clamped to
/// [`MIN_ELLIPSE_SAMPLES`]..=[`MAX_ELLIPSE_SAMPLES`].
pub fn ellipse(origin: Point, x_radius: f64, y_radius: f64) -> Path {
    ellipse_samples(origin, x_radius, y_radius, auto_samples(x_radius))
}

/// A closed circle whose sample count follows `radius`, clamped like [`ellipse`].
pub fn circle(origin: Point, radius: f64) -> Path {
    ellipse_samples(origin, radius, radius, auto_samples(radius))
}

/// A closed ellipse with exactly `samples` distinct points.
pub fn ellipse_samples(origin: Point, x_radius: f64, y_radius: f64, samples: usize) -> Path {
    let mut path = Path::new(ellipse_points(origin, Point::new(x_radius, y_radius), samples));
    path.close();
    path
}

/// A closed regular polygon with `sides` vertices, turned so one vertex points straight
/// up on screen.
pub fn regular_polygon(origin: Point, sides: usize, radius: f64) -> Path {
    let mut path = ellipse_samples(origin, radius, radius, sides);
    if sides > 0 {
        path.rotate(FRAC_PI_2 - PI / sides as f64);
    }
    path
}

/// An open Archimedean spiral of `n` points centered on the origin.
pub fn spiral(n: usize, radius: f64, angle_step: f64) -> Path {
    Path::new(spiral_points(n, radius, angle_step))
}

/// A closed figure-eight of `n` samples centered on the origin.
pub fn lemniscate(n: usize, half_width: f64) -> Path {
    let mut path = Path::new(lemniscate_points(n, half_width));
    path.close();
    path
}

/// A cubic Bezier curve flattened into `samples` evenly spaced (in `t`) points.
pub fn cubic_bezier(
    from: Point,
    control1: Point,
    control2: Point,
    to: Point,
    samples: usize,
) -> Path {
    Path::new(CubicBezier::new(from, control1, control2, to).flatten(samples))
}

fn auto_samples(radius: f64) -> usize {
    // `f64::max` discards NaN, so a NaN radius falls back to the minimum.
    radius
        .max(MIN_ELLIPSE_SAMPLES as f64)
        .min(MAX_ELLIPSE_SAMPLES as f64) as usize
}

/// Double-precision math types from the `glam` crate.
///
/// Path geometry accumulates lengths over many segments and round-trips points through
/// repeated rotations, so everything in Tracery works in `f64`. This module re-exports the
/// `glam` double-precision types that the rest of the workspace builds on.
///
/// # Examples
///
/// ```
/// use tracery_core::math::{DVec2, Point};
///
/// let a = Point::new(0.0, 0.0);
/// let b = DVec2::new(3.0, 4.0);
/// assert_eq!(a.distance(b), 5.0);
/// ```
///
/// [`glam`]: https://docs.rs/glam
pub mod fast {
    pub use glam::{DAffine2, DMat2, DMat3, DVec2, DVec3, dvec2};
}

pub use fast::*;

/// A 2D coordinate. Axes increase right and down (image-pixel convention).
///
/// `DVec2` already provides addition, subtraction, component-wise multiplication,
/// scalar division, [`distance`](DVec2::distance) and [`lerp`](DVec2::lerp). The
/// remaining point operations live on [`PointExt`].
pub type Point = DVec2;

/// Point operations that `glam` does not provide.
pub trait PointExt {
    /// Rotate this point about `origin` by `angle` radians.
    ///
    /// Positive angles turn counter-clockwise on screen when Y points down.
    fn rotate_about(self, angle: f64, origin: Point) -> Point;

    /// Direction angle of the segment from `self` to `end`, in radians.
    fn tangent_angle(self, end: Point) -> f64;
}

impl PointExt for Point {
    #[inline]
    fn rotate_about(self, angle: f64, origin: Point) -> Point {
        let (sin, cos) = angle.sin_cos();
        let d = self - origin;
        Point::new(cos * d.x - sin * d.y + origin.x, sin * d.x + cos * d.y + origin.y)
    }

    #[inline]
    fn tangent_angle(self, end: Point) -> f64 {
        (end.y - self.y).atan2(end.x - self.x)
    }
}

/// Point at `angle` on the circle of `radius` around `center`.
#[inline]
pub fn point_on_circle(center: Point, radius: f64, angle: f64) -> Point {
    Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
}

/// The angle pointing the other way, wrapped with `%` like the angle it came from.
#[inline]
pub fn opposite_angle(angle: f64) -> f64 {
    (angle + std::f64::consts::PI) % std::f64::consts::TAU
}

/// Convert degrees to radians.
#[inline]
pub fn radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Clamp `value` into `[min, max]`.
///
/// Unlike [`f64::clamp`] this never panics when `max < min` (which happens for the
/// length range of an empty path); the lower bound wins.
#[inline]
pub fn clip(value: f64, min: f64, max: f64) -> f64 {
    let value = if value > max { max } else { value };
    if value < min { min } else { value }
}

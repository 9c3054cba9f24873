//! High-level shape primitives.
//!
//! Shapes are plain descriptions of common geometric forms. They can be stored, compared
//! and passed around before being flattened into a [`Path`] with [`Shape::to_path`].

use tracery_core::math::Point;

use crate::{CubicBezier, Path, factory};

/// A high-level shape that can be converted to a path.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// A line segment.
    Line {
        /// Start point
        start: Point,
        /// End point
        end: Point,
    },
    /// An axis-aligned rectangle.
    Rect {
        /// Top-left position
        position: Point,
        /// Size (width, height)
        size: Point,
    },
    /// An axis-aligned box given by two opposite corners.
    BBox {
        /// Minimum corner
        min: Point,
        /// Maximum corner
        max: Point,
    },
    /// A circle.
    Circle {
        /// Center point
        center: Point,
        /// Radius
        radius: f64,
    },
    /// An ellipse.
    Ellipse {
        /// Center point
        center: Point,
        /// Radii (x, y)
        radii: Point,
        /// Fixed sample count; derived from the x radius when `None`
        samples: Option<usize>,
    },
    /// A regular polygon with one vertex pointing up.
    RegularPolygon {
        /// Center point
        center: Point,
        /// Radius (distance from center to vertices)
        radius: f64,
        /// Number of sides
        sides: usize,
    },
    /// An Archimedean spiral around the origin.
    Spiral {
        /// Number of points
        points: usize,
        /// Radius reached at the last turn
        radius: f64,
        /// Angle added per point, in radians
        angle_step: f64,
    },
    /// A lemniscate of Bernoulli (figure-eight) around the origin.
    Lemniscate {
        /// Number of points
        points: usize,
        /// Distance from the center to either tip
        half_width: f64,
    },
    /// A flattened cubic Bezier curve.
    CubicBezier {
        /// The curve
        curve: CubicBezier,
        /// Number of points sampled along the curve
        samples: usize,
    },
    /// A polyline (connected line segments).
    Polyline {
        /// Points defining the polyline
        points: Vec<Point>,
        /// Whether to close the polyline into a polygon
        closed: bool,
    },
    /// A custom path.
    Path(Path),
}

impl Shape {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Create a line segment.
    pub fn line(start: Point, end: Point) -> Self {
        Self::Line { start, end }
    }

    /// Create a rectangle.
    pub fn rect(position: Point, size: Point) -> Self {
        Self::Rect { position, size }
    }

    /// Create a rectangle from center and size.
    pub fn rect_centered(center: Point, size: Point) -> Self {
        Self::Rect {
            position: center - size * 0.5,
            size,
        }
    }

    /// Create a square.
    pub fn square(position: Point, side: f64) -> Self {
        Self::Rect {
            position,
            size: Point::splat(side),
        }
    }

    /// Create a box from two opposite corners.
    pub fn bbox(min: Point, max: Point) -> Self {
        Self::BBox { min, max }
    }

    /// Create a circle.
    pub fn circle(center: Point, radius: f64) -> Self {
        Self::Circle { center, radius }
    }

    /// Create an ellipse.
    pub fn ellipse(center: Point, radii: Point) -> Self {
        Self::Ellipse {
            center,
            radii,
            samples: None,
        }
    }

    /// Create an ellipse with a fixed number of samples.
    pub fn ellipse_samples(center: Point, radii: Point, samples: usize) -> Self {
        Self::Ellipse {
            center,
            radii,
            samples: Some(samples),
        }
    }

    /// Create a regular polygon.
    pub fn regular_polygon(center: Point, radius: f64, sides: usize) -> Self {
        Self::RegularPolygon {
            center,
            radius,
            sides,
        }
    }

    /// Create a spiral.
    pub fn spiral(points: usize, radius: f64, angle_step: f64) -> Self {
        Self::Spiral {
            points,
            radius,
            angle_step,
        }
    }

    /// Create a lemniscate.
    pub fn lemniscate(points: usize, half_width: f64) -> Self {
        Self::Lemniscate { points, half_width }
    }

    /// Create a cubic Bezier curve.
    pub fn cubic_bezier(curve: CubicBezier, samples: usize) -> Self {
        Self::CubicBezier { curve, samples }
    }

    /// Create a polyline.
    pub fn polyline(points: Vec<Point>, closed: bool) -> Self {
        Self::Polyline { points, closed }
    }

    /// Create from a path.
    pub fn path(path: Path) -> Self {
        Self::Path(path)
    }

    // =========================================================================
    // Conversion
    // =========================================================================

    /// Convert this shape to a path.
    pub fn to_path(&self) -> Path {
        let path = match self {
            Shape::Line { start, end } => factory::line(*start, *end),

            Shape::Rect { position, size } => factory::rect(*position, size.x, size.y),

            Shape::BBox { min, max } => factory::bbox(*min, *max),

            Shape::Circle { center, radius } => factory::circle(*center, *radius),

            Shape::Ellipse {
                center,
                radii,
                samples,
            } => match samples {
                Some(samples) => factory::ellipse_samples(*center, radii.x, radii.y, *samples),
                None => factory::ellipse(*center, radii.x, radii.y),
            },

            Shape::RegularPolygon {
                center,
                radius,
                sides,
            } => factory::regular_polygon(*center, *sides, *radius),

            Shape::Spiral {
                points,
                radius,
                angle_step,
            } => factory::spiral(*points, *radius, *angle_step),

            Shape::Lemniscate { points, half_width } => factory::lemniscate(*points, *half_width),

            Shape::CubicBezier { curve, samples } => factory::cubic_bezier(
                curve.from,
                curve.control1,
                curve.control2,
                curve.to,
                *samples,
            ),

            Shape::Polyline { points, closed } => {
                let mut path = Path::new(points.clone());
                if *closed {
                    path.close();
                }
                path
            }

            Shape::Path(path) => path.clone(),
        };

        tracing::trace!(points = path.len(), length = path.length(), "shape flattened");
        path
    }

    /// Get the bounding box of this shape.
    ///
    /// Rectangles, circles and ellipses report their exact analytic bounds; every other
    /// shape reports the bounds of its flattened points.
    pub fn bounds(&self) -> (Point, Point) {
        match self {
            Shape::Rect { position, size } => {
                let corner = *position + *size;
                (position.min(corner), position.max(corner))
            }

            Shape::BBox { min, max } => (min.min(*max), min.max(*max)),

            Shape::Line { start, end } => (start.min(*end), start.max(*end)),

            Shape::Circle { center, radius } => {
                let r = Point::splat(radius.abs());
                (*center - r, *center + r)
            }

            Shape::Ellipse { center, radii, .. } => {
                let r = radii.abs();
                (*center - r, *center + r)
            }

            Shape::Path(path) => path.bounds(),

            _ => self.to_path().bounds(),
        }
    }
}

impl From<Path> for Shape {
    fn from(path: Path) -> Self {
        Self::Path(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_bounds() {
        let shape = Shape::rect(Point::new(10.0, 20.0), Point::new(100.0, 50.0));
        let (min, max) = shape.bounds();
        assert_eq!(min, Point::new(10.0, 20.0));
        assert_eq!(max, Point::new(110.0, 70.0));
    }

    #[test]
    fn test_circle_bounds() {
        let shape = Shape::circle(Point::new(50.0, 50.0), 25.0);
        let (min, max) = shape.bounds();
        assert_eq!(min, Point::new(25.0, 25.0));
        assert_eq!(max, Point::new(75.0, 75.0));
    }

    #[test]
    fn test_rect_to_path() {
        let path = Shape::rect(Point::ZERO, Point::new(100.0, 100.0)).to_path();
        assert_eq!(path.len(), 5);
        assert!(path.is_closed());
    }

    #[test]
    fn test_centered_rect() {
        let shape = Shape::rect_centered(Point::new(50.0, 50.0), Point::new(20.0, 10.0));
        assert_eq!(shape.to_path().anchor(), Point::new(50.0, 50.0));
    }

    #[test]
    fn test_polyline_closed() {
        let points = vec![Point::ZERO, Point::new(10.0, 0.0), Point::new(10.0, 10.0)];
        assert!(!Shape::polyline(points.clone(), false).to_path().is_closed());
        assert!(Shape::polyline(points, true).to_path().is_closed());
    }

    #[test]
    fn test_ellipse_fixed_samples() {
        let path = Shape::ellipse_samples(Point::ZERO, Point::new(30.0, 10.0), 12).to_path();
        assert_eq!(path.len(), 13);
    }

    #[test]
    fn test_flattened_bounds_for_spiral() {
        let shape = Shape::spiral(50, 10.0, 0.5);
        assert_eq!(shape.bounds(), shape.to_path().bounds());
    }
}

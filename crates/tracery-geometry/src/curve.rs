//! Cubic Bezier evaluation and flattening.
//!
//! Curves are flattened by uniform sampling in parameter space, so flat stretches of a curve
//! receive as many points as tight bends.

use tracery_core::math::Point;

/// Evenly spaced numbers over the closed interval `[start, stop]`.
///
/// The last value is exactly `stop`. Returns an empty list for `num == 0` and `[start]`
/// for `num == 1`.
pub fn linspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (num - 1) as f64;
            let mut values: Vec<f64> = (0..num).map(|i| start + i as f64 * step).collect();
            values[num - 1] = stop;
            values
        }
    }
}

/// A cubic Bezier curve (two control points).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    /// Start point
    pub from: Point,
    /// First control point
    pub control1: Point,
    /// Second control point
    pub control2: Point,
    /// End point
    pub to: Point,
}

impl CubicBezier {
    /// Create a new cubic Bezier curve.
    pub fn new(from: Point, control1: Point, control2: Point, to: Point) -> Self {
        Self {
            from,
            control1,
            control2,
            to,
        }
    }

    /// Evaluate the curve at parameter t (0.0 to 1.0).
    pub fn eval(&self, t: f64) -> Point {
        let t2 = t * t;
        let t3 = t2 * t;
        let mt = 1.0 - t;
        let mt2 = mt * mt;
        let mt3 = mt2 * mt;

        self.from * mt3
            + self.control1 * (3.0 * mt2 * t)
            + self.control2 * (3.0 * mt * t2)
            + self.to * t3
    }

    /// Get the derivative at parameter t.
    pub fn derivative(&self, t: f64) -> Point {
        let t2 = t * t;
        let mt = 1.0 - t;
        let mt2 = mt * mt;

        (self.control1 - self.from) * (3.0 * mt2)
            + (self.control2 - self.control1) * (6.0 * mt * t)
            + (self.to - self.control2) * (3.0 * t2)
    }

    /// Get the tangent (normalized derivative) at parameter t.
    pub fn tangent(&self, t: f64) -> Point {
        self.derivative(t).normalize_or_zero()
    }

    /// Split the curve at parameter t, returning two curves.
    pub fn split(&self, t: f64) -> (Self, Self) {
        let p01 = self.from.lerp(self.control1, t);
        let p12 = self.control1.lerp(self.control2, t);
        let p23 = self.control2.lerp(self.to, t);
        let p012 = p01.lerp(p12, t);
        let p123 = p12.lerp(p23, t);
        let p0123 = p012.lerp(p123, t);

        (
            Self::new(self.from, p01, p012, p0123),
            Self::new(p0123, p123, p23, self.to),
        )
    }

    /// Sample the curve at `samples` evenly spaced parameters over `[0, 1]`.
    ///
    /// Both end points are always included once `samples >= 2`.
    pub fn flatten(&self, samples: usize) -> Vec<Point> {
        linspace(0.0, 1.0, samples)
            .into_iter()
            .map(|t| self.eval(t))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curve() -> CubicBezier {
        CubicBezier::new(
            Point::new(0.0, 0.0),
            Point::new(25.0, 100.0),
            Point::new(75.0, 100.0),
            Point::new(100.0, 0.0),
        )
    }

    #[test]
    fn test_linspace() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(2.0, 5.0, 1), vec![2.0]);
        assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(*linspace(0.0, 0.3, 7).last().unwrap(), 0.3);
    }

    #[test]
    fn test_cubic_endpoints() {
        let curve = curve();
        assert_eq!(curve.eval(0.0), curve.from);
        assert_eq!(curve.eval(1.0), curve.to);
    }

    #[test]
    fn test_cubic_midpoint() {
        // Symmetric control polygon: the midpoint sits on the axis of symmetry.
        let mid = curve().eval(0.5);
        assert!((mid.x - 50.0).abs() < 1e-9);
        assert!((mid.y - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_cubic_split() {
        let curve = curve();
        let (left, right) = curve.split(0.3);
        let point = curve.eval(0.3);

        assert!((left.to - point).length() < 1e-9);
        assert!((right.from - point).length() < 1e-9);
        assert!((left.eval(0.5) - curve.eval(0.15)).length() < 1e-9);
    }

    #[test]
    fn test_tangent_at_start_follows_first_control() {
        let tangent = curve().tangent(0.0);
        let expected = Point::new(25.0, 100.0).normalize();
        assert!((tangent - expected).length() < 1e-9);
    }

    #[test]
    fn test_flatten() {
        let curve = curve();
        let points = curve.flatten(10);
        assert_eq!(points.len(), 10);
        assert_eq!(points[0], curve.from);
        assert_eq!(points[9], curve.to);
    }
}

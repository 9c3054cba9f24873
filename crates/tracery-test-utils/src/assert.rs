/// Assert that two `f64` values differ by at most a tolerance (default `1e-9`).
///
/// ```rust
/// use tracery_test_utils::assert_near;
///
/// assert_near!(0.1 + 0.2, 0.3);
/// assert_near!(3.14159, std::f64::consts::PI, 1e-3);
/// ```
#[macro_export]
macro_rules! assert_near {
    ($left:expr, $right:expr $(,)?) => {
        $crate::assert_near!($left, $right, 1e-9)
    };
    ($left:expr, $right:expr, $tolerance:expr $(,)?) => {{
        let (left, right, tolerance): (f64, f64, f64) = ($left, $right, $tolerance);
        assert!(
            (left - right).abs() <= tolerance,
            "assertion `left ≈ right` failed\n  left: {}\n right: {}\n   tol: {}",
            left,
            right,
            tolerance
        );
    }};
}

/// Assert that two points are within a distance of each other (default `1e-9`).
///
/// ```rust
/// use tracery_geometry::Point;
/// use tracery_test_utils::assert_point_near;
///
/// assert_point_near!(Point::new(1.0, 2.0), Point::new(1.0, 2.0 + 1e-12));
/// ```
#[macro_export]
macro_rules! assert_point_near {
    ($left:expr, $right:expr $(,)?) => {
        $crate::assert_point_near!($left, $right, 1e-9)
    };
    ($left:expr, $right:expr, $tolerance:expr $(,)?) => {{
        let (left, right, tolerance) = ($left, $right, $tolerance);
        let distance: f64 = left.distance(right);
        assert!(
            distance <= tolerance,
            "assertion `left ≈ right` failed\n  left: {:?}\n right: {:?}\n  dist: {}",
            left,
            right,
            distance
        );
    }};
}

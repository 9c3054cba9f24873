//! Integration tests for the shape factories and the `Shape` enum.

use tracery_geometry::{CubicBezier, Path, Point, Shape, factory};
use tracery_test_utils::{assert_near, assert_point_near};

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

#[test]
fn test_ellipse_samples_scenario() {
    let path = factory::ellipse_samples(Point::ZERO, 50.0, 50.0, 4);
    assert_eq!(path.len(), 5);
    assert!(path.is_closed());

    let (min, max) = path.bounds();
    assert_point_near!(min, p(-50.0, -50.0));
    assert_point_near!(max, p(50.0, 50.0));
}

#[test]
fn test_circle_sample_count_is_clamped() {
    // Closing point included.
    assert_eq!(factory::circle(Point::ZERO, 5.0).len(), 21);
    assert_eq!(factory::circle(Point::ZERO, 50.0).len(), 51);
    assert_eq!(factory::circle(Point::ZERO, 5000.0).len(), 81);
}

#[test]
fn test_circle_points_on_radius() {
    let center = p(20.0, -10.0);
    let path = factory::circle(center, 30.0);
    for point in path.points() {
        assert_near!(point.distance(center), 30.0, 1e-9);
    }
    assert_point_near!(path.anchor(), center);
}

#[test]
fn test_ellipse_uses_x_radius_for_samples() {
    let path = factory::ellipse(Point::ZERO, 40.0, 10.0);
    assert_eq!(path.len(), 41);
    let (min, max) = path.bounds();
    assert_near!(max.x - min.x, 80.0, 1e-9);
    assert!(max.y - min.y <= 20.0);
}

#[test]
fn test_rect_and_square() {
    let rect = factory::rect(p(10.0, 20.0), 30.0, 40.0);
    assert_eq!(
        rect.points(),
        &[
            p(10.0, 20.0),
            p(40.0, 20.0),
            p(40.0, 60.0),
            p(10.0, 60.0),
            p(10.0, 20.0)
        ]
    );
    assert_near!(rect.length(), 140.0);

    let square = factory::square(p(0.0, 0.0), 5.0);
    assert_eq!(square.bounds(), (p(0.0, 0.0), p(5.0, 5.0)));
}

#[test]
fn test_bbox_traces_corners() {
    let path = factory::bbox(p(-1.0, -2.0), p(3.0, 4.0));
    assert!(path.is_closed());
    assert_eq!(path.bounds(), (p(-1.0, -2.0), p(3.0, 4.0)));
    assert_near!(path.length(), 20.0);
}

#[test]
fn test_regular_polygon_vertex_points_up() {
    // Screen coordinates: "up" is negative y.
    let path = factory::regular_polygon(Point::ZERO, 3, 10.0);
    assert_eq!(path.len(), 4);
    let top = path
        .points()
        .iter()
        .fold(f64::INFINITY, |min_y, point| min_y.min(point.y));
    assert_near!(top, -10.0, 1e-9);
}

#[test]
fn test_regular_polygon_sides_are_equal() {
    let path = factory::regular_polygon(p(5.0, 5.0), 7, 20.0);
    let sides: Vec<f64> = path
        .points()
        .windows(2)
        .map(|pair| pair[0].distance(pair[1]))
        .collect();
    assert_eq!(sides.len(), 7);
    for side in &sides {
        assert_near!(*side, sides[0], 1e-9);
    }
}

#[test]
fn test_spiral_is_open() {
    let path = factory::spiral(200, 100.0, 0.2);
    assert_eq!(path.len(), 200);
    assert!(!path.is_closed());
    assert_eq!(path.start(), Point::ZERO);
}

#[test]
fn test_lemniscate_is_closed_and_symmetric() {
    let path = factory::lemniscate(100, 80.0);
    assert!(path.is_closed());
    let (min, max) = path.bounds();
    assert_near!(min.x, -80.0, 1e-9);
    assert_near!(max.x, 80.0, 1e-9);
    assert_point_near!(path.anchor(), Point::ZERO, 1e-9);
}

#[test]
fn test_cubic_bezier_endpoints() {
    let path = factory::cubic_bezier(p(0.0, 0.0), p(0.0, 50.0), p(100.0, 50.0), p(100.0, 0.0), 32);
    assert_eq!(path.len(), 32);
    assert_eq!(path.start(), p(0.0, 0.0));
    assert_point_near!(path.end(), p(100.0, 0.0));
    assert!(path.length() > 100.0);
}

#[test]
fn test_shape_to_path_matches_factory() {
    let curve = CubicBezier::new(p(0.0, 0.0), p(1.0, 2.0), p(3.0, 2.0), p(4.0, 0.0));
    let cases: Vec<(Shape, Path)> = vec![
        (
            Shape::line(p(1.0, 1.0), p(2.0, 3.0)),
            factory::line(p(1.0, 1.0), p(2.0, 3.0)),
        ),
        (Shape::square(p(0.0, 0.0), 4.0), factory::square(p(0.0, 0.0), 4.0)),
        (Shape::circle(p(3.0, 3.0), 12.0), factory::circle(p(3.0, 3.0), 12.0)),
        (
            Shape::regular_polygon(Point::ZERO, 10.0, 5),
            factory::regular_polygon(Point::ZERO, 5, 10.0),
        ),
        (Shape::lemniscate(40, 10.0), factory::lemniscate(40, 10.0)),
        (
            Shape::cubic_bezier(curve, 10),
            factory::cubic_bezier(curve.from, curve.control1, curve.control2, curve.to, 10),
        ),
    ];

    for (shape, expected) in cases {
        assert_eq!(shape.to_path(), expected, "{:?}", shape);
    }
}

#[test]
fn test_analytic_bounds_contain_flattened_points() {
    let shapes = [
        Shape::circle(p(10.0, 10.0), 25.0),
        Shape::ellipse(p(-5.0, 0.0), p(30.0, 12.0)),
        Shape::rect(p(2.0, 2.0), p(-4.0, 6.0)),
        Shape::bbox(p(5.0, 5.0), p(-5.0, -5.0)),
    ];

    for shape in shapes {
        let (min, max) = shape.bounds();
        for point in shape.to_path().points() {
            assert!(
                point.x >= min.x - 1e-9
                    && point.y >= min.y - 1e-9
                    && point.x <= max.x + 1e-9
                    && point.y <= max.y + 1e-9,
                "{:?} outside bounds of {:?}",
                point,
                shape
            );
        }
    }
}

//! Integration tests for drawing through the `Rasterizer` seam.

use tracery_geometry::{Color, Path, Point, Rasterizer, StrokeStyle, Style, debug_draw, factory};
use tracery_test_utils::{MockRasterizer, RasterCall, assert_point_near};

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

#[test]
fn test_debug_draw_call_sequence() {
    let mut mock = MockRasterizer::new(200, 200);
    let path = Path::new(vec![
        p(10.0, 10.0),
        p(50.0, 10.0),
        p(50.0, 50.0),
        p(30.0, 70.0),
        p(10.0, 50.0),
    ]);

    debug_draw(&mut mock, &path);

    // start, end, second point, two interior vertices
    assert_eq!(
        mock.fill_colors(),
        vec![
            Color::YELLOW,
            Color::YELLOW,
            Color::ORANGE_RED,
            Color::WHITE,
            Color::WHITE
        ]
    );

    // bbox, path, centroid marker, bbox-center marker
    let strokes = mock.stroke_styles();
    assert_eq!(strokes.len(), 4);
    assert_eq!(strokes[0], StrokeStyle::debug());
    assert_eq!(strokes[1].line_width, 1.0);
    assert_eq!(strokes[2].color, Color::CYAN);
    assert_eq!(strokes[3].color, Color::ORANGE);

    let calls = mock.calls();
    assert_eq!(calls[0].points(), Some(factory::bbox(p(10.0, 10.0), p(50.0, 70.0)).points()));
    assert_eq!(calls[6].points(), Some(path.points()));
}

#[test]
fn test_debug_draw_markers_are_centered() {
    let mut mock = MockRasterizer::default();
    let path = factory::rect(p(0.0, 0.0), 40.0, 20.0);

    debug_draw(&mut mock, &path);

    let calls = mock.calls();
    let marker_center = |call: &RasterCall| {
        Path::new(call.points().map(<[Point]>::to_vec).unwrap_or_default()).centroid()
    };
    let n = calls.len();
    assert_point_near!(marker_center(&calls[n - 2]), p(20.0, 10.0), 1e-9);
    assert_point_near!(marker_center(&calls[n - 1]), p(20.0, 10.0), 1e-9);
}

#[test]
fn test_debug_draw_two_point_path() {
    let mut mock = MockRasterizer::default();
    debug_draw(&mut mock, &factory::line(p(0.0, 0.0), p(10.0, 0.0)));
    assert_eq!(
        mock.fill_colors(),
        vec![Color::YELLOW, Color::YELLOW, Color::ORANGE_RED]
    );
}

#[test]
fn test_debug_draw_empty_path_draws_nothing() {
    let mut mock = MockRasterizer::default();
    debug_draw(&mut mock, &Path::default());
    assert_eq!(mock.call_count(), 0);
}

#[test]
fn test_style_draws_fill_then_stroke() {
    let mut mock = MockRasterizer::default();
    let path = factory::circle(p(50.0, 50.0), 20.0);

    Style::fill_and_stroke(Color::BLUE, StrokeStyle::default()).draw(&mut mock, &path);

    let calls = mock.calls();
    assert_eq!(calls.len(), 2);
    assert!(matches!(
        &calls[0],
        RasterCall::Fill { color, closed: true, .. } if *color == Color::BLUE
    ));
    assert!(matches!(&calls[1], RasterCall::Stroke { closed: true, .. }));
}

#[test]
fn test_stroke_only_style() {
    let mut mock = MockRasterizer::default();
    Style::stroke(StrokeStyle::debug()).draw(&mut mock, &factory::line(p(0.0, 0.0), p(1.0, 1.0)));
    assert_eq!(mock.count_fills(), 0);
    assert_eq!(mock.count_strokes(), 1);
}

#[test]
fn test_snapshot_after_clear() {
    let mut mock = MockRasterizer::new(3, 3);
    mock.clear(Color::MAGENTA);
    let frame = mock.snapshot();
    assert_eq!(frame.pixel(1, 1), Some([255, 0, 255, 255]));
}

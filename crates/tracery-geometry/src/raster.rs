//! The drawing seam between paths and pixels.
//!
//! Geometry code never touches pixels directly. Anything that can fill and stroke a
//! [`Path`] implements [`Rasterizer`], and helpers such as [`debug_draw`] are written
//! against the trait.

use tracery_core::math::Point;

use crate::{Color, Frame, Path, StrokeStyle, factory};

const DOT_RADIUS: f64 = 2.0;
const MARKER_RADIUS: f64 = 4.0;
const MARKER_LINE_WIDTH: f64 = 2.0;

/// A 2D drawing surface.
pub trait Rasterizer {
    /// Fill the interior of `path`. Open paths are filled as if closed.
    fn fill(&mut self, path: &Path, color: Color);

    /// Stroke the outline of `path`, joining the end back to the start when the path is
    /// closed.
    fn stroke(&mut self, path: &Path, style: &StrokeStyle);

    /// Paint the whole surface with `color`.
    fn clear(&mut self, color: Color);

    /// Copy the current surface contents.
    fn snapshot(&self) -> Frame;
}

/// Draw diagnostic markers for `path`.
///
/// In order: the bounding box (magenta), yellow dots on the start and end points, an
/// orange-red dot on the second point, white dots on the remaining interior vertices,
/// the path itself, a cyan ring on the centroid and an orange ring on the center of the
/// bounding box.
pub fn debug_draw(rasterizer: &mut impl Rasterizer, path: &Path) {
    if path.is_empty() {
        tracing::debug!("debug_draw skipped for empty path");
        return;
    }

    let (min, max) = path.bounds();
    rasterizer.stroke(&factory::bbox(min, max), &StrokeStyle::debug());

    let dot = |center: Point| factory::circle(center, DOT_RADIUS);
    rasterizer.fill(&dot(path.start()), Color::YELLOW);
    rasterizer.fill(&dot(path.end()), Color::YELLOW);

    let points = path.points();
    if let Some(&second) = points.get(1) {
        rasterizer.fill(&dot(second), Color::ORANGE_RED);
    }
    for &point in points.iter().take(points.len().saturating_sub(1)).skip(2) {
        rasterizer.fill(&dot(point), Color::WHITE);
    }

    rasterizer.stroke(path, &StrokeStyle::default_stroke().with_line_width(1.0));

    let marker = |color: Color| StrokeStyle::solid(color, MARKER_LINE_WIDTH);
    rasterizer.stroke(
        &factory::circle(path.centroid(), MARKER_RADIUS),
        &marker(Color::CYAN),
    );
    rasterizer.stroke(
        &factory::circle(min.lerp(max, 0.5), MARKER_RADIUS),
        &marker(Color::ORANGE),
    );
}

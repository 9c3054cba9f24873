//! Combined style for drawing paths.
//!
//! A style pairs an optional fill color with an optional stroke.

use crate::{Color, Path, Rasterizer, StrokeStyle};

/// Complete style for drawing a path.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Style {
    /// Optional fill color
    pub fill: Option<Color>,
    /// Optional stroke properties
    pub stroke: Option<StrokeStyle>,
}

impl Style {
    /// Create a new empty style (invisible).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fill-only style.
    pub fn fill(color: Color) -> Self {
        Self {
            fill: Some(color),
            stroke: None,
        }
    }

    /// Create a stroke-only style.
    pub fn stroke(stroke: StrokeStyle) -> Self {
        Self {
            fill: None,
            stroke: Some(stroke),
        }
    }

    /// Create a style with both fill and stroke.
    pub fn fill_and_stroke(fill: Color, stroke: StrokeStyle) -> Self {
        Self {
            fill: Some(fill),
            stroke: Some(stroke),
        }
    }

    /// Set the fill color.
    pub fn with_fill(mut self, color: Color) -> Self {
        self.fill = Some(color);
        self
    }

    /// Set the stroke.
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = Some(stroke);
        self
    }

    /// Check if the style draws anything.
    pub fn is_visible(&self) -> bool {
        self.fill.is_some_and(|c| c.a > 0.0) || self.stroke.is_some_and(|s| s.is_visible())
    }

    /// Draw `path` with this style: fill first, then stroke on top.
    pub fn draw(&self, rasterizer: &mut impl Rasterizer, path: &Path) {
        if let Some(color) = self.fill {
            rasterizer.fill(path, color);
        }
        if let Some(stroke) = &self.stroke {
            rasterizer.stroke(path, stroke);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_style_invisible() {
        assert!(!Style::new().is_visible());
    }

    #[test]
    fn test_fill_and_stroke() {
        let style = Style::fill_and_stroke(Color::RED, StrokeStyle::debug());
        assert!(style.is_visible());
        assert_eq!(style.fill, Some(Color::RED));
        assert_eq!(style.stroke, Some(StrokeStyle::debug()));
    }

    #[test]
    fn test_transparent_fill_invisible() {
        assert!(!Style::fill(Color::TRANSPARENT).is_visible());
    }
}

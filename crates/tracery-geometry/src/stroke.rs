//! Stroke properties for path outlines.
//!
//! Defines how paths are stroked: color, width, caps and joins.

use crate::Color;

/// Line cap style for stroke endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    /// Flat cap ending at the endpoint.
    #[default]
    Butt,
    /// Square cap extending beyond the endpoint.
    Square,
    /// Round cap extending beyond the endpoint.
    Round,
    /// Cap bulging out along a cubic curve.
    Cubic,
    /// Cap bulging out along a quadratic curve.
    Quadratic,
}

/// Line join style for stroke corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineJoin {
    /// Miter join (sharp corner).
    #[default]
    Miter,
    /// Round join (rounded corner).
    Round,
    /// Bevel join (flat corner).
    Bevel,
}

/// Stroke properties for path outlines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    /// Stroke color
    pub color: Color,
    /// Stroke width in pixels
    pub line_width: f64,
    /// Line cap style
    pub cap: LineCap,
    /// Line join style
    pub join: LineJoin,
    /// Miter limit for miter joins, as a multiple of the line width
    pub miter_limit: f64,
}

impl StrokeStyle {
    /// Create a solid color stroke with butt caps and miter joins.
    pub fn solid(color: Color, line_width: f64) -> Self {
        Self {
            color,
            line_width,
            cap: LineCap::Butt,
            join: LineJoin::Miter,
            miter_limit: 3.0,
        }
    }

    /// The stroke used when nothing else is specified: white, 1.5 pixels wide.
    pub fn default_stroke() -> Self {
        Self::solid(Color::WHITE, 1.5)
    }

    /// The magenta stroke used for diagnostic overlays.
    pub fn debug() -> Self {
        Self::solid(Color::MAGENTA, 1.5)
    }

    /// Set the color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set the line width.
    pub fn with_line_width(mut self, line_width: f64) -> Self {
        self.line_width = line_width;
        self
    }

    /// Set the line cap style.
    pub fn with_line_cap(mut self, cap: LineCap) -> Self {
        self.cap = cap;
        self
    }

    /// Set the line join style.
    pub fn with_line_join(mut self, join: LineJoin) -> Self {
        self.join = join;
        self
    }

    /// Set the miter limit.
    pub fn with_miter_limit(mut self, limit: f64) -> Self {
        self.miter_limit = limit.max(1.0);
        self
    }

    /// Check if the stroke is visible.
    pub fn is_visible(&self) -> bool {
        self.line_width > 0.0 && self.color.a > 0.0
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::default_stroke()
    }
}

//! Mock implementation of Rasterizer for testing.
//!
//! This module provides a rasterizer that records draw operations
//! without producing any pixels.

use parking_lot::Mutex;
use tracery_core::math::Point;
use tracery_geometry::{Color, Frame, Path, Rasterizer, StrokeStyle};

/// Records a draw call for verification in tests.
#[derive(Debug, Clone, PartialEq)]
pub enum RasterCall {
    Fill {
        points: Vec<Point>,
        closed: bool,
        color: Color,
    },
    Stroke {
        points: Vec<Point>,
        closed: bool,
        style: StrokeStyle,
    },
    Clear {
        color: Color,
    },
    Snapshot,
}

impl RasterCall {
    /// Points of the drawn path, if this call drew one.
    pub fn points(&self) -> Option<&[Point]> {
        match self {
            RasterCall::Fill { points, .. } | RasterCall::Stroke { points, .. } => Some(points),
            RasterCall::Clear { .. } | RasterCall::Snapshot => None,
        }
    }
}

/// Mock implementation of [`Rasterizer`] for testing.
///
/// `snapshot` takes `&self` but still records a call, so the log sits behind a `Mutex`.
/// Snapshots are filled with the most recent clear color (black before any clear).
///
/// # Example
///
/// ```rust
/// use tracery_geometry::{Color, Rasterizer};
/// use tracery_test_utils::{MockRasterizer, RasterCall};
///
/// let mut mock = MockRasterizer::new(4, 4);
/// mock.clear(Color::WHITE);
///
/// let frame = mock.snapshot();
/// assert_eq!(frame.pixel(0, 0), Some([255, 255, 255, 255]));
/// assert_eq!(mock.calls().last(), Some(&RasterCall::Snapshot));
/// ```
pub struct MockRasterizer {
    width: u32,
    height: u32,

    /// Recorded calls for verification
    calls: Mutex<Vec<RasterCall>>,

    background: Color,
}

impl MockRasterizer {
    /// Create a new mock rasterizer with the given surface size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            calls: Mutex::new(Vec::new()),
            background: Color::BLACK,
        }
    }

    /// Get a copy of all recorded calls (for test assertions).
    pub fn calls(&self) -> Vec<RasterCall> {
        self.calls.lock().clone()
    }

    /// Count fill calls.
    pub fn count_fills(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, RasterCall::Fill { .. }))
            .count()
    }

    /// Count stroke calls.
    pub fn count_strokes(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, RasterCall::Stroke { .. }))
            .count()
    }

    /// Colors of every fill call, in order.
    pub fn fill_colors(&self) -> Vec<Color> {
        self.calls
            .lock()
            .iter()
            .filter_map(|call| match call {
                RasterCall::Fill { color, .. } => Some(*color),
                _ => None,
            })
            .collect()
    }

    /// Styles of every stroke call, in order.
    pub fn stroke_styles(&self) -> Vec<StrokeStyle> {
        self.calls
            .lock()
            .iter()
            .filter_map(|call| match call {
                RasterCall::Stroke { style, .. } => Some(*style),
                _ => None,
            })
            .collect()
    }

    /// Clear recorded calls (useful between test steps).
    pub fn clear_calls(&self) {
        self.calls.lock().clear();
    }

    /// Get total number of recorded calls.
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

impl Default for MockRasterizer {
    fn default() -> Self {
        Self::new(640, 480)
    }
}

impl Rasterizer for MockRasterizer {
    fn fill(&mut self, path: &Path, color: Color) {
        self.calls.lock().push(RasterCall::Fill {
            points: path.points().to_vec(),
            closed: path.is_closed(),
            color,
        });
    }

    fn stroke(&mut self, path: &Path, style: &StrokeStyle) {
        self.calls.lock().push(RasterCall::Stroke {
            points: path.points().to_vec(),
            closed: path.is_closed(),
            style: *style,
        });
    }

    fn clear(&mut self, color: Color) {
        self.background = color;
        self.calls.lock().push(RasterCall::Clear { color });
    }

    fn snapshot(&self) -> Frame {
        self.calls.lock().push(RasterCall::Snapshot);
        Frame::filled(self.width, self.height, self.background)
    }
}

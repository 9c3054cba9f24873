//! Tolerances shared by the path operations.

/// A path is closed when its first and last points are closer than this.
pub const CLOSE_EPSILON: f64 = 0.01;

/// `Path::insert_at_length` skips points closer than this to the end of their segment.
pub const INSERT_TOLERANCE: f64 = 0.1;

/// Segments shorter than this are treated as zero-length by arc-length queries.
pub const SEGMENT_EPSILON: f64 = 1e-12;

/// Fewest samples `Shape::Ellipse` and `Shape::Circle` use.
pub const MIN_ELLIPSE_SAMPLES: usize = 20;

/// Most samples `Shape::Ellipse` and `Shape::Circle` use.
pub const MAX_ELLIPSE_SAMPLES: usize = 80;

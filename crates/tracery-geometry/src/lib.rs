//! Tracery Geometry - 2D polyline path geometry
//!
//! This crate provides:
//! - A [`Path`] type: an ordered list of points with a cached length and an anchor
//! - Editing, measurement (arc length, centroid, bounds) and rigid transforms on paths
//! - Factories for lines, rectangles, ellipses, polygons, spirals, lemniscates and Bezier curves
//! - Style values (colors, strokes) and the [`Rasterizer`] drawing seam
//! - Frame sequences for animated export (optional "export" feature)
//!
//! # Example
//!
//! ```
//! use tracery_geometry::*;
//!
//! let mut path = factory::regular_polygon(Point::new(100.0, 100.0), 6, 50.0);
//! path.rotate(0.5).scale(Point::new(2.0, 1.0));
//!
//! let (point, angle) = path.point_angle_at_time(0.25);
//! assert!(path.is_closed());
//! # let _ = (point, angle);
//! ```

// Core primitives
pub mod consts;
mod curve;
mod path;
mod shape;
mod transform;

// Construction
pub mod factory;
pub mod sample;

// Styling
mod color;
mod stroke;
mod style;

// Output
mod error;
mod frame;
mod raster;

// Re-exports
pub use tracery_core::math::Point;

pub use curve::*;
pub use path::*;
pub use shape::*;
pub use transform::*;

pub use color::*;
pub use stroke::*;
pub use style::*;

pub use error::*;
pub use frame::*;
pub use raster::*;

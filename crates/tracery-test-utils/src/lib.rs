//! Test utilities for Tracery.
//!
//! This crate provides testing infrastructure for code that draws paths:
//!
//! - [`MockRasterizer`] - A [`Rasterizer`](tracery_geometry::Rasterizer) that records
//!   every call instead of producing pixels
//! - [`assert_near!`] and [`assert_point_near!`] - Float comparisons with a tolerance
//!
//! # Example
//!
//! ```rust
//! use tracery_geometry::{Color, Point, Rasterizer, factory};
//! use tracery_test_utils::MockRasterizer;
//!
//! let mut mock = MockRasterizer::new(64, 64);
//! mock.fill(&factory::circle(Point::new(32.0, 32.0), 10.0), Color::RED);
//!
//! assert_eq!(mock.count_fills(), 1);
//! ```

mod assert;
mod mock_raster;

pub use mock_raster::*;

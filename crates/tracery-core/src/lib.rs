//! Tracery Core
//!
//! This crate contains the shared foundations of the Tracery geometry library:
//! logging bootstrap, configuration, and the 2D math types used by every other crate.

pub mod config;
pub mod logging;
pub mod math;

pub use config::Config;

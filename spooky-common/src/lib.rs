//! # Spooky Sounds Common Library
//!
//! Shared code for the spooky-sounds workspace:
//! - Error types
//! - Sound directory resolution and wait interval units
//! - Human-readable time formatting for log output

pub mod config;
pub mod error;
pub mod human_time;

pub use config::IntervalUnit;
pub use error::{Error, Result};

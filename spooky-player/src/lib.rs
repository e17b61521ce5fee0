//! # Spooky Sounds Player Library (spooky-player)
//!
//! Plays a random sound effect, waits a random interval, and repeats forever,
//! never playing the same sound twice in a row.
//!
//! **Architecture:** single-threaded loop of select → decode → play → sleep,
//! using symphonia for WAV parsing and cpal for device output.

pub mod assets;
pub mod audio;
pub mod catalog;
pub mod config;
pub mod driver;
pub mod error;
pub mod selector;

pub use catalog::{SoundCatalog, SoundId};
pub use config::PlayerConfig;
pub use driver::SoundLoop;
pub use error::{Error, Result};
pub use selector::Selector;

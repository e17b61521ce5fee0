//! Configuration for the spooky-player daemon
//!
//! Built once at startup from the command line and constant afterwards.

use crate::audio::PlaybackTarget;
use crate::error::Result;
use spooky_common::config::{validate_maximum_interval, DEFAULT_DEVICE, DEFAULT_MAXIMUM_INTERVAL};
use spooky_common::IntervalUnit;
use std::path::PathBuf;

/// Validated player configuration
#[derive(Debug, Clone)]
pub struct PlayerConfig {
    /// Device every sound is played on
    pub target: PlaybackTarget,
    /// Exclusive upper bound of the wait between sounds, in `interval_unit`
    pub maximum_interval: u32,
    pub interval_unit: IntervalUnit,
    /// Directory holding `<sound>.wav` files
    pub sound_dir: PathBuf,
}

impl PlayerConfig {
    /// # Errors
    /// - `maximum_interval` is 0
    pub fn new(
        device: impl Into<String>,
        maximum_interval: u32,
        interval_unit: IntervalUnit,
        sound_dir: impl Into<PathBuf>,
    ) -> Result<Self> {
        Ok(Self {
            target: PlaybackTarget::new(device),
            maximum_interval: validate_maximum_interval(maximum_interval)?,
            interval_unit,
            sound_dir: sound_dir.into(),
        })
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            target: PlaybackTarget::new(DEFAULT_DEVICE),
            maximum_interval: DEFAULT_MAXIMUM_INTERVAL,
            interval_unit: IntervalUnit::Minutes,
            sound_dir: PathBuf::from(spooky_common::config::SOUNDS_DIR_NAME),
        }
    }
}

//! Error types for spooky-player
//!
//! Decoding errors name the sound, playback errors name the device, so the
//! diagnostic printed on exit identifies what failed.

use thiserror::Error;

/// Main error type for spooky-player
#[derive(Error, Debug)]
pub enum Error {
    /// No asset exists for the sound
    #[error("Sound asset not found: {sound} ({location})")]
    AssetNotFound { sound: String, location: String },

    /// Asset exists but is not a readable WAV file
    #[error("Sound asset `{sound}` is corrupt: {reason}")]
    AssetCorrupt { sound: String, reason: String },

    /// Underlying read error while loading or decoding an asset
    #[error("I/O failure reading sound `{sound}`: {source}")]
    IoFailure {
        sound: String,
        #[source]
        source: std::io::Error,
    },

    /// Output device could not be found or opened
    #[error("Audio device `{device}` unavailable: {reason}")]
    DeviceUnavailable { device: String, reason: String },

    /// Samples could not be delivered to the device
    #[error("Failed to write audio to device `{device}`: {reason}")]
    WriteFailure { device: String, reason: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<spooky_common::Error> for Error {
    fn from(err: spooky_common::Error) -> Self {
        Error::Config(err.to_string())
    }
}

/// Convenience Result type using spooky-player Error
pub type Result<T> = std::result::Result<T, Error>;

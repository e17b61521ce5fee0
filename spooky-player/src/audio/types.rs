//! Core audio data types
//!
//! Defines the decoded sample buffer, the source format metadata and the
//! playback target used throughout the audio pipeline.

use std::fmt;
use std::time::Duration;

/// Fixed output sample rate. Assets at other rates are not resampled.
pub const OUTPUT_SAMPLE_RATE: u32 = 44100;

/// Output channel count (mono)
pub const OUTPUT_CHANNELS: u16 = 1;

/// SampleBuffer holds one decoded clip ready for playback.
///
/// **Format:**
/// - Samples are signed 16-bit integers
/// - Mono, one sample per frame
/// - Played at [`OUTPUT_SAMPLE_RATE`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SampleBuffer {
    samples: Vec<i16>,
}

impl SampleBuffer {
    pub fn new(samples: Vec<i16>) -> Self {
        Self { samples }
    }

    /// Number of samples (equal to frames, since the buffer is mono)
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    pub fn into_samples(self) -> Vec<i16> {
        self.samples
    }

    /// Playback duration at the output sample rate
    pub fn duration(&self) -> Duration {
        Duration::from_secs_f64(self.samples.len() as f64 / OUTPUT_SAMPLE_RATE as f64)
    }
}

impl From<Vec<i16>> for SampleBuffer {
    fn from(samples: Vec<i16>) -> Self {
        Self::new(samples)
    }
}

/// Format information read from a WAV header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    pub channels: u16,
    pub sample_rate: u32,
    /// Not every codec reports a bit depth
    pub bits_per_sample: Option<u32>,
}

impl fmt::Display for WavFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "channels={}, sample_rate={}", self.channels, self.sample_rate)?;
        match self.bits_per_sample {
            Some(bits) => write!(f, ", bits_per_sample={}", bits),
            None => write!(f, ", bits_per_sample=unknown"),
        }
    }
}

/// Named output device (hardware id or virtual PCM such as a bluealsa sink)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackTarget(String);

impl PlaybackTarget {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlaybackTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

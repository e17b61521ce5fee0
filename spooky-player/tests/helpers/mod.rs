//! Test helpers
//!
//! Deterministic WAV fixtures generated with hound, either in memory or on
//! disk, plus recording fakes for the sink and sleeper.

#![allow(dead_code)]

use hound::{SampleFormat, WavSpec, WavWriter};
use spooky_player::audio::{AudioSink, PlaybackTarget, SampleBuffer};
use spooky_player::driver::Sleeper;
use spooky_player::{Error, Result};
use std::io::Cursor;
use std::path::Path;
use std::time::Duration;

/// Standard test sample rate (44.1 kHz)
pub const TEST_SAMPLE_RATE: u32 = 44100;

fn spec(channels: u16, sample_rate: u32) -> WavSpec {
    WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    }
}

/// Encode interleaved 16-bit frames as WAV bytes
pub fn wav_bytes(channels: u16, sample_rate: u32, interleaved: &[i16]) -> Vec<u8> {
    let mut bytes = Vec::new();
    {
        let mut writer = WavWriter::new(Cursor::new(&mut bytes), spec(channels, sample_rate))
            .expect("create wav writer");
        for &sample in interleaved {
            writer.write_sample(sample).expect("write sample");
        }
        writer.finalize().expect("finalize wav");
    }
    bytes
}

/// Mono WAV at 44.1 kHz
pub fn mono_wav(samples: &[i16]) -> Vec<u8> {
    wav_bytes(1, TEST_SAMPLE_RATE, samples)
}

/// Stereo WAV at 44.1 kHz from separate channels (must be equal length)
pub fn stereo_wav(left: &[i16], right: &[i16]) -> Vec<u8> {
    assert_eq!(left.len(), right.len());
    let interleaved: Vec<i16> = left
        .iter()
        .zip(right)
        .flat_map(|(&l, &r)| [l, r])
        .collect();
    wav_bytes(2, TEST_SAMPLE_RATE, &interleaved)
}

/// Deterministic ramp that exercises the full i16 range
pub fn ramp(frames: usize) -> Vec<i16> {
    (0..frames)
        .map(|i| (i as i64 * 7919 % 65536 - 32768) as i16)
        .collect()
}

/// Write a mono WAV file to `<dir>/<name>.wav`
pub fn write_mono_wav(dir: &Path, name: &str, samples: &[i16]) {
    std::fs::write(dir.join(format!("{}.wav", name)), mono_wav(samples)).expect("write wav file");
}

/// Sink that records every play call instead of touching hardware
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub played: Vec<(String, Vec<i16>)>,
    /// Fail the nth call (0-based) with a write failure
    pub fail_on_call: Option<usize>,
}

impl AudioSink for RecordingSink {
    fn play(&mut self, target: &PlaybackTarget, buffer: SampleBuffer) -> Result<()> {
        if self.fail_on_call == Some(self.played.len()) {
            return Err(Error::WriteFailure {
                device: target.name().to_string(),
                reason: "injected failure".to_string(),
            });
        }
        self.played.push((target.name().to_string(), buffer.into_samples()));
        Ok(())
    }
}

/// Sleeper that records requested waits and returns immediately
#[derive(Debug, Default)]
pub struct RecordingSleeper {
    pub waits: Vec<Duration>,
}

impl Sleeper for RecordingSleeper {
    fn sleep(&mut self, duration: Duration) {
        self.waits.push(duration);
    }
}

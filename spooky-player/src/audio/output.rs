//! Audio output using cpal
//!
//! Plays one [`SampleBuffer`] at a time on a named device. Each call opens a
//! stream, feeds it from the audio callback, blocks until every sample has
//! been handed to the device and closes the stream again, so the device is
//! never held between sounds.

use crate::audio::types::{PlaybackTarget, SampleBuffer, OUTPUT_CHANNELS, OUTPUT_SAMPLE_RATE};
use crate::error::{Error, Result};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{BufferSize, Device, Host, SampleRate, StreamConfig};
use std::sync::mpsc;
use std::time::Duration;
use tracing::{debug, error, info};

/// Extra time allowed past the clip length before playback counts as stalled
const STALL_GRACE: Duration = Duration::from_secs(5);

/// Destination for decoded sounds.
///
/// `play` blocks until the whole buffer has been accepted by the device and
/// releases the device before returning, on success and on failure.
pub trait AudioSink {
    /// # Errors
    /// - [`Error::DeviceUnavailable`]: the target cannot be found or opened
    /// - [`Error::WriteFailure`]: samples could not be delivered
    fn play(&mut self, target: &PlaybackTarget, buffer: SampleBuffer) -> Result<()>;
}

/// Outcome reported by the audio callback thread
enum StreamEvent {
    /// All samples written; carries the callback-to-playback latency if known
    Drained(Option<Duration>),
    Failed(String),
}

/// [`AudioSink`] backed by the default cpal host (ALSA on Linux)
pub struct CpalSink {
    host: Host,
}

impl CpalSink {
    pub fn new() -> Self {
        Self {
            host: cpal::default_host(),
        }
    }

    /// List available audio output devices.
    pub fn list_devices(&self) -> Result<Vec<String>> {
        let devices: Vec<String> = self
            .host
            .output_devices()
            .map_err(|e| Error::DeviceUnavailable {
                device: "<any>".to_string(),
                reason: format!("Failed to enumerate devices: {}", e),
            })?
            .filter_map(|device| device.name().ok())
            .collect();

        debug!("Found {} output devices", devices.len());
        Ok(devices)
    }

    /// Find the output device whose name matches the target exactly.
    ///
    /// Only names the host enumerates can be opened. Parameterised ALSA PCM
    /// strings that `aplay -L` does not list are reported as unavailable.
    fn open_device(&self, target: &PlaybackTarget) -> Result<Device> {
        let unavailable = |reason: String| Error::DeviceUnavailable {
            device: target.name().to_string(),
            reason,
        };

        let devices: Vec<Device> = self
            .host
            .output_devices()
            .map_err(|e| unavailable(format!("Failed to enumerate devices: {}", e)))?
            .collect();

        let mut known = Vec::with_capacity(devices.len());
        for device in devices {
            match device.name() {
                Ok(name) if name == target.name() => return Ok(device),
                Ok(name) => known.push(name),
                Err(_) => {}
            }
        }

        Err(unavailable(missing_device_reason(&known)))
    }

    /// Mono, signed 16-bit, 44100 Hz, device default buffering
    fn stream_config() -> StreamConfig {
        StreamConfig {
            channels: OUTPUT_CHANNELS,
            sample_rate: SampleRate(OUTPUT_SAMPLE_RATE),
            buffer_size: BufferSize::Default,
        }
    }
}

/// Reason text for a device name that matched nothing the host lists
fn missing_device_reason(known: &[String]) -> String {
    if known.is_empty() {
        "no output device with that name (host lists no output devices)".to_string()
    } else {
        format!(
            "no output device with that name, available: {}",
            known.join(", ")
        )
    }
}

impl Default for CpalSink {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioSink for CpalSink {
    fn play(&mut self, target: &PlaybackTarget, buffer: SampleBuffer) -> Result<()> {
        info!("Playing sound on {}", target);

        let device = self.open_device(target)?;
        let config = Self::stream_config();

        let expected = buffer.duration();
        let samples = buffer.into_samples();
        let total = samples.len();

        let (event_tx, event_rx) = mpsc::channel::<StreamEvent>();
        let error_tx = event_tx.clone();
        let mut position = 0usize;
        let mut drained = false;

        let stream = device
            .build_output_stream(
                &config,
                move |data: &mut [i16], info: &cpal::OutputCallbackInfo| {
                    let remaining = &samples[position..];
                    let count = remaining.len().min(data.len());
                    data[..count].copy_from_slice(&remaining[..count]);
                    // Silence once the clip is exhausted
                    data[count..].fill(0);
                    position += count;

                    if position == total && !drained {
                        drained = true;
                        let timestamp = info.timestamp();
                        let latency = timestamp.playback.duration_since(&timestamp.callback);
                        let _ = event_tx.send(StreamEvent::Drained(latency));
                    }
                },
                move |err| {
                    error!("Audio stream error: {}", err);
                    let _ = error_tx.send(StreamEvent::Failed(err.to_string()));
                },
                None, // No timeout
            )
            .map_err(|e| Error::DeviceUnavailable {
                device: target.name().to_string(),
                reason: format!("Failed to build stream: {}", e),
            })?;

        debug!("Opened audio device {}", target);

        if total == 0 {
            // Nothing to write; dropping the stream closes the device
            drop(stream);
            debug!("Closed audio device {} (empty buffer)", target);
            return Ok(());
        }

        let write_failure = |reason: String| Error::WriteFailure {
            device: target.name().to_string(),
            reason,
        };

        stream
            .play()
            .map_err(|e| write_failure(format!("Failed to start stream: {}", e)))?;

        let result = match event_rx.recv_timeout(expected + STALL_GRACE) {
            Ok(StreamEvent::Drained(latency)) => {
                // Let the last callback's worth of audio reach the speaker
                if let Some(latency) = latency {
                    std::thread::sleep(latency);
                }
                Ok(())
            }
            Ok(StreamEvent::Failed(reason)) => Err(write_failure(reason)),
            Err(mpsc::RecvTimeoutError::Timeout) => Err(write_failure(format!(
                "playback stalled, {} samples not consumed within {:?}",
                total,
                expected + STALL_GRACE
            ))),
            Err(mpsc::RecvTimeoutError::Disconnected) => {
                Err(write_failure("audio stream closed unexpectedly".to_string()))
            }
        };

        if let Err(e) = stream.pause() {
            debug!("Failed to pause stream before closing: {}", e);
        }
        drop(stream);
        debug!("Closed audio device {}", target);

        result
    }
}

//! Driver loop
//!
//! Cycles Selecting → Decoding → Playing → Sleeping forever on the calling
//! thread. Any error ends the loop; nothing is retried or skipped.

use crate::assets::AssetSource;
use crate::audio::{AudioSink, PlaybackTarget, WavDecoder};
use crate::catalog::SoundId;
use crate::config::PlayerConfig;
use crate::error::Result;
use crate::selector::Selector;
use rand::rngs::ThreadRng;
use rand::Rng;
use spooky_common::human_time::format_duration;
use spooky_common::IntervalUnit;
use std::convert::Infallible;
use std::time::Duration;
use tracing::info;

/// Blocking wait between sounds
pub trait Sleeper {
    fn sleep(&mut self, duration: Duration);
}

/// Sleeps the current thread
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Draw the wait before the next sound, uniform in `[0, maximum_interval)`.
///
/// A bound of 0 or 1 leaves only 0.
pub fn next_wait<R: Rng + ?Sized>(rng: &mut R, maximum_interval: u32) -> u32 {
    if maximum_interval <= 1 {
        return 0;
    }
    rng.gen_range(0..maximum_interval)
}

/// What one completed cycle did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleReport {
    pub sound: SoundId,
    /// Samples handed to the sink
    pub samples: usize,
    /// Time slept after playback
    pub wait: Duration,
}

/// The select → decode → play → sleep loop
pub struct SoundLoop<S, K, Z = ThreadSleeper, R = ThreadRng> {
    selector: Selector,
    decoder: WavDecoder<S>,
    sink: K,
    sleeper: Z,
    rng: R,
    target: PlaybackTarget,
    maximum_interval: u32,
    interval_unit: IntervalUnit,
}

impl<S, K, Z, R> SoundLoop<S, K, Z, R>
where
    S: AssetSource,
    K: AudioSink,
    Z: Sleeper,
    R: Rng,
{
    pub fn new(
        selector: Selector,
        source: S,
        sink: K,
        sleeper: Z,
        rng: R,
        config: &PlayerConfig,
    ) -> Self {
        Self {
            selector,
            decoder: WavDecoder::new(source),
            sink,
            sleeper,
            rng,
            target: config.target.clone(),
            maximum_interval: config.maximum_interval,
            interval_unit: config.interval_unit,
        }
    }

    /// Run a single cycle: select, decode, play, then sleep.
    ///
    /// On error the cycle stops where it failed; no sleep happens.
    pub fn run_cycle(&mut self) -> Result<CycleReport> {
        let sound = self.selector.select_next(&mut self.rng);
        info!("Next sound: {}", sound);

        let buffer = self.decoder.decode(&sound)?;
        let samples = buffer.len();

        self.sink.play(&self.target, buffer)?;

        let wait = self
            .interval_unit
            .to_duration(next_wait(&mut self.rng, self.maximum_interval));
        info!("Play next spooky sound in {}", format_duration(wait));
        self.sleeper.sleep(wait);

        Ok(CycleReport {
            sound,
            samples,
            wait,
        })
    }

    /// Run cycles until one fails.
    ///
    /// Never returns `Ok`; the error is the one that stopped the loop.
    pub fn run(&mut self) -> Result<Infallible> {
        info!(
            "Starting sound loop: {} sounds, device {}, maximum interval {} {:?}",
            self.selector.catalog().len(),
            self.target,
            self.maximum_interval,
            self.interval_unit
        );

        loop {
            self.run_cycle()?;
        }
    }

    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    pub fn sleeper(&self) -> &Z {
        &self.sleeper
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_maximum_interval_one_always_zero() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..1000 {
            assert_eq!(next_wait(&mut rng, 1), 0);
        }
    }

    #[test]
    fn test_maximum_interval_zero_is_zero() {
        let mut rng = StdRng::seed_from_u64(11);
        assert_eq!(next_wait(&mut rng, 0), 0);
    }

    #[test]
    fn test_wait_within_bounds() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut seen_max = false;
        let mut seen_zero = false;
        for _ in 0..5000 {
            let wait = next_wait(&mut rng, 15);
            assert!(wait < 15);
            seen_max |= wait == 14;
            seen_zero |= wait == 0;
        }
        assert!(seen_max && seen_zero);
    }
}

//! Configuration defaults, sound directory resolution and interval units

use crate::{Error, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Directory name holding the `<sound>.wav` assets
pub const SOUNDS_DIR_NAME: &str = "sounds";

/// Default playback device.
///
/// A bluealsa virtual PCM routed to a Bluetooth speaker. Other devices can be
/// listed with `aplay -L`, e.g. `hw:CARD=Headphones,DEV=0` on a Raspberry Pi.
///
/// The player opens devices by exact name from the audio host's device list.
/// This name must appear there as written, otherwise playback fails with a
/// device-unavailable error naming the devices that were found.
pub const DEFAULT_DEVICE: &str = "bluealsa:DEV=78:44:05:EB:93:71,PROFILE=a2dp";

/// Default exclusive upper bound of the wait between two sounds
pub const DEFAULT_MAXIMUM_INTERVAL: u32 = 15;

/// Unit in which wait intervals are counted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntervalUnit {
    /// Whole minutes (daemon default)
    #[default]
    Minutes,
    /// Whole seconds
    Seconds,
    /// Milliseconds, mostly useful for short-running loops
    Milliseconds,
}

impl IntervalUnit {
    /// Convert a count of this unit into a `Duration`
    pub fn to_duration(self, count: u32) -> Duration {
        let count = u64::from(count);
        match self {
            IntervalUnit::Minutes => Duration::from_secs(count * 60),
            IntervalUnit::Seconds => Duration::from_secs(count),
            IntervalUnit::Milliseconds => Duration::from_millis(count),
        }
    }
}

/// Validate the maximum interval.
///
/// The wait is drawn from `[0, maximum_interval)`, so the bound must be at
/// least 1 for the range to contain anything.
pub fn validate_maximum_interval(maximum_interval: u32) -> Result<u32> {
    if maximum_interval == 0 {
        return Err(Error::Config(
            "maximumInterval must be at least 1".to_string(),
        ));
    }
    Ok(maximum_interval)
}

/// Resolve the sound directory in priority order:
/// 1. `<cwd>/sounds` if it exists
/// 2. `sounds/` next to the executable or in any of its ancestors
/// 3. `<cwd>/sounds` (missing assets then surface on first decode)
pub fn resolve_sound_dir(cwd: &Path, exe: Option<&Path>) -> PathBuf {
    let local = cwd.join(SOUNDS_DIR_NAME);
    if local.is_dir() {
        debug!("Using sound directory from working directory: {}", local.display());
        return local;
    }

    let mut dir = exe.and_then(Path::parent);
    while let Some(d) = dir {
        let candidate = d.join(SOUNDS_DIR_NAME);
        if candidate.is_dir() {
            debug!("Using sound directory near executable: {}", candidate.display());
            return candidate;
        }
        dir = d.parent();
    }

    local
}

/// Resolve the sound directory for the running process
pub fn resolve_sound_dir_for_process() -> Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    let exe = std::env::current_exe().ok();
    Ok(resolve_sound_dir(&cwd, exe.as_deref()))
}

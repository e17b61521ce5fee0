//! Spooky sound player (spooky-player) - Main entry point
//!
//! Plays a random spooky sound on an ALSA device, waits a random number of
//! minutes and does it again, until the process is killed. Any failure is
//! reported and ends the process with a non-zero status.
//!
//! Devices can be listed with `aplay -L`, for example:
//! - `hw:CARD=Headphones,DEV=0` (Raspberry Pi headphone jack)
//! - `bluealsa:DEV=78:44:05:EB:93:71,PROFILE=a2dp` (Bluetooth speaker via bluealsa)

use anyhow::{Context, Result};
use clap::Parser;
use spooky_common::config::{resolve_sound_dir_for_process, DEFAULT_DEVICE};
use spooky_common::IntervalUnit;
use spooky_player::assets::DirectorySource;
use spooky_player::audio::CpalSink;
use spooky_player::driver::ThreadSleeper;
use spooky_player::{PlayerConfig, Selector, SoundCatalog, SoundLoop};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for spooky-player
///
/// Flags take two dashes. The single-dash spellings `-device` and
/// `-maximumInterval` used by older launch scripts are rewritten before
/// parsing, see [`normalize_legacy_flags`].
#[derive(Parser, Debug)]
#[command(name = "spooky-player")]
#[command(about = "Plays random spooky sounds at random intervals")]
#[command(version)]
struct Args {
    /// Device name where the spooky sounds will be played
    #[arg(long, default_value = DEFAULT_DEVICE)]
    device: String,

    /// Maximum interval, in minutes, before the next spooky sound (exclusive)
    #[arg(
        long = "maximumInterval",
        default_value_t = 15,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    maximum_interval: u32,
}

/// Long flags that older launch scripts pass with a single dash
const LEGACY_FLAGS: [&str; 2] = ["device", "maximumInterval"];

/// Rewrite `-device X` and `-maximumInterval=N` style flags to their
/// two-dash form. Anything else is passed through untouched.
fn normalize_legacy_flags<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    args.into_iter()
        .map(|arg| {
            let Some(rest) = arg.strip_prefix('-') else {
                return arg;
            };
            if rest.starts_with('-') {
                return arg;
            }
            let name = rest.split('=').next().unwrap_or(rest);
            if LEGACY_FLAGS.contains(&name) {
                format!("-{}", arg)
            } else {
                arg
            }
        })
        .collect()
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "spooky_player=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse command-line arguments
    let args = Args::parse_from(normalize_legacy_flags(std::env::args()));

    let sound_dir =
        resolve_sound_dir_for_process().context("Failed to resolve sound directory")?;

    let config = PlayerConfig::new(
        args.device,
        args.maximum_interval,
        IntervalUnit::Minutes,
        sound_dir,
    )
    .context("Invalid configuration")?;

    info!("Playback device: {}", config.target);
    info!("Sound directory: {}", config.sound_dir.display());
    info!("Maximum interval: {} minutes", config.maximum_interval);

    let source = DirectorySource::new(&config.sound_dir);
    let selector = Selector::new(SoundCatalog::default());

    let mut sound_loop = SoundLoop::new(
        selector,
        source,
        CpalSink::new(),
        ThreadSleeper,
        rand::thread_rng(),
        &config,
    );

    match sound_loop.run() {
        Ok(never) => match never {},
        Err(e) => {
            error!("Sound loop stopped: {}", e);
            Err(e).context("Spooky sound player failed")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> std::result::Result<Args, clap::Error> {
        let argv = std::iter::once("spooky-player")
            .chain(args.iter().copied())
            .map(String::from);
        Args::try_parse_from(normalize_legacy_flags(argv))
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]).unwrap();
        assert_eq!(args.device, DEFAULT_DEVICE);
        assert_eq!(args.maximum_interval, 15);
    }

    #[test]
    fn test_double_dash_flags() {
        let args = parse(&["--device", "hw:CARD=Headphones,DEV=0", "--maximumInterval", "3"]).unwrap();
        assert_eq!(args.device, "hw:CARD=Headphones,DEV=0");
        assert_eq!(args.maximum_interval, 3);
    }

    #[test]
    fn test_single_dash_flags_accepted() {
        let args = parse(&["-device", "default", "-maximumInterval", "7"]).unwrap();
        assert_eq!(args.device, "default");
        assert_eq!(args.maximum_interval, 7);

        let args = parse(&["-device=default", "-maximumInterval=2"]).unwrap();
        assert_eq!(args.device, "default");
        assert_eq!(args.maximum_interval, 2);
    }

    #[test]
    fn test_other_arguments_pass_through() {
        let normalized = normalize_legacy_flags(
            ["spooky-player", "--device", "-x", "-V", "-devices"].map(String::from),
        );
        assert_eq!(normalized, vec!["spooky-player", "--device", "-x", "-V", "-devices"]);
    }

    #[test]
    fn test_zero_interval_rejected() {
        assert!(parse(&["--maximumInterval", "0"]).is_err());
        assert!(parse(&["-maximumInterval", "0"]).is_err());
    }
}

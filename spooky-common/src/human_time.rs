//! Human-readable time formatting
//!
//! Used for log lines such as the wait before the next sound.

use std::time::Duration;

/// Time display format selection thresholds (seconds)
const SHORT_FORMAT_MAX: u64 = 100;   // <= 100s → X.XXs
const MEDIUM_FORMAT_MAX: u64 = 6000; // <= 100m → M:SS.Xs
                                     // > 100m → H:MM:SS

/// Format seconds as human-readable time.
///
/// Format selection by typical maximum value:
/// - Short format (`X.XXs`): typical max up to 100 seconds
/// - Medium format (`M:SS.Xs`): typical max above 100s, up to 100m
/// - Long format (`H:MM:SS`): typical max above 100m
///
/// Medium and long formats round before splitting into fields, so seconds
/// never read `60`.
///
/// # Examples
///
/// ```
/// use spooky_common::human_time::format_human_time;
///
/// assert_eq!(format_human_time(45.0, 100), "45.00s");
/// assert_eq!(format_human_time(330.0, 6000), "5:30.0s");
/// assert_eq!(format_human_time(3661.0, 14400), "1:01:01");
/// ```
pub fn format_human_time(seconds: f64, typical_max: u64) -> String {
    let seconds = seconds.max(0.0);

    if typical_max <= SHORT_FORMAT_MAX {
        format!("{:.2}s", seconds)
    } else if typical_max <= MEDIUM_FORMAT_MAX {
        let tenths = (seconds * 10.0).round() as u64;
        let minutes = tenths / 600;
        let secs = (tenths % 600) as f64 / 10.0;
        format!("{}:{:04.1}s", minutes, secs)
    } else {
        let whole = seconds.round() as u64;
        let hours = whole / 3600;
        let mins = (whole % 3600) / 60;
        let secs = whole % 60;
        format!("{}:{:02}:{:02}", hours, mins, secs)
    }
}

/// Format a duration, inferring the display format from its magnitude
pub fn format_duration(duration: Duration) -> String {
    format_human_time(duration.as_secs_f64(), duration.as_secs())
}

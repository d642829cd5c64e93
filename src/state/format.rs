//! Elapsed time formatting.

use std::time::Duration;

/// Format a duration as `MM:SS`, or `H:MM:SS` once it reaches an hour.
/// Sub-second remainders are dropped.
pub fn format_elapsed(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}

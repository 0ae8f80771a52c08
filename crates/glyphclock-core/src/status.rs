//! Bottom status line.

use crate::options::DisplayOptions;

/// `HH:MM:SS`, hours unbounded.
pub fn format_uptime(secs: u64) -> String {
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

/// `Theme: NEON | Format: 24H | Uptime: 00:00:05 | Europe/Lisbon`
pub fn format_status_line(options: &DisplayOptions, uptime_secs: u64, host_timezone: &str) -> String {
    format!(
        "Theme: {} | Format: {}H | Uptime: {} | {}",
        options.theme.name().to_uppercase(),
        options.time_format.hours(),
        format_uptime(uptime_secs),
        host_timezone
    )
}

//! Time sources, process uptime, and the host timezone name.

use std::time::{Duration, Instant};

use chrono::{DateTime, FixedOffset, Local, Utc};

/// Source of the current wall-clock instant.
///
/// Lets callers swap the system clock for a pinned instant in tests or for
/// `glyphclock once --at`.
pub trait TimeSource {
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedTimeSource(pub DateTime<Utc>);

impl TimeSource for FixedTimeSource {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Instant captured once at startup, used only for uptime.
#[derive(Debug, Clone, Copy)]
pub struct ProcessClock {
    started: Instant,
}

impl Default for ProcessClock {
    fn default() -> Self {
        Self::start()
    }
}

impl ProcessClock {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn uptime(&self) -> Duration {
        self.started.elapsed()
    }

    /// Whole seconds since startup.
    pub fn uptime_secs(&self) -> u64 {
        self.uptime().as_secs()
    }
}

/// Name of the host's local timezone.
///
/// Names the zone `chrono::Local` actually uses: a non-empty `TZ` wins, then
/// the IANA identifier reported by the OS, and finally the current local UTC
/// offset (`UTC+02:00`).
pub fn host_timezone_name() -> String {
    timezone_name_from(std::env::var("TZ").ok().as_deref())
}

/// Resolves the host zone name given the value of `TZ`.
fn timezone_name_from(tz_env: Option<&str>) -> String {
    // POSIX allows a leading ':' before a zoneinfo path.
    if let Some(tz) = tz_env.map(|tz| tz.trim().trim_start_matches(':'))
        && !tz.is_empty()
    {
        return tz.to_string();
    }

    match iana_time_zone::get_timezone() {
        Ok(name) => name,
        Err(err) => {
            tracing::debug!(error = %err, "host timezone lookup failed");
            offset_label(Local::now().offset())
        }
    }
}

/// `UTC+09:00` for a fixed offset.
pub fn offset_label(offset: &FixedOffset) -> String {
    format!("UTC{offset}")
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_fixed_time_source_is_pinned() {
        let at = Utc.with_ymd_and_hms(2026, 10, 19, 8, 30, 0).unwrap();
        let source = FixedTimeSource(at);
        assert_eq!(source.now(), at);
        assert_eq!(source.now(), at);
    }

    #[test]
    fn test_uptime_starts_near_zero() {
        let clock = ProcessClock::start();
        assert!(clock.uptime_secs() < 5);
    }

    #[test]
    fn test_tz_variable_wins() {
        assert_eq!(timezone_name_from(Some("Asia/Tokyo")), "Asia/Tokyo");
        assert_eq!(timezone_name_from(Some(":Europe/Lisbon")), "Europe/Lisbon");
    }

    #[test]
    fn test_blank_tz_variable_is_ignored() {
        assert!(!timezone_name_from(Some("  ")).trim().is_empty());
        assert!(!timezone_name_from(None).is_empty());
    }

    #[test]
    fn test_offset_label() {
        assert_eq!(offset_label(&FixedOffset::east_opt(9 * 3600).unwrap()), "UTC+09:00");
        assert_eq!(offset_label(&FixedOffset::west_opt(4 * 3600).unwrap()), "UTC-04:00");
    }

    #[test]
    fn test_host_timezone_name_is_never_empty() {
        assert!(!host_timezone_name().is_empty());
    }
}

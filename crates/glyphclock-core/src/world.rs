//! World clock lines for a fixed set of cities.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Shown instead of a time when the timezone cannot be resolved.
pub const UNKNOWN_TIME: &str = "--:--";

/// Column width the city label is padded to.
const CITY_WIDTH: usize = 8;

/// A city shown alongside the main clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorldClockEntry {
    pub city: &'static str,
    pub icon: &'static str,
    /// IANA timezone identifier, e.g. `Europe/London`.
    pub timezone: &'static str,
}

pub const WORLD_CLOCKS: [WorldClockEntry; 5] = [
    WorldClockEntry {
        city: "New York",
        icon: "🗽",
        timezone: "America/New_York",
    },
    WorldClockEntry {
        city: "London",
        icon: "🏰",
        timezone: "Europe/London",
    },
    WorldClockEntry {
        city: "Tokyo",
        icon: "🗾",
        timezone: "Asia/Tokyo",
    },
    WorldClockEntry {
        city: "Sydney",
        icon: "🇦🇺",
        timezone: "Australia/Sydney",
    },
    WorldClockEntry {
        city: "Dubai",
        icon: "🏜️",
        timezone: "Asia/Dubai",
    },
];

impl WorldClockEntry {
    /// `HH:MM` (24-hour) in this entry's zone, or `None` if the zone is unknown.
    pub fn local_time(&self, instant: DateTime<Utc>) -> Option<String> {
        match self.timezone.parse::<Tz>() {
            Ok(tz) => Some(instant.with_timezone(&tz).format("%H:%M").to_string()),
            Err(err) => {
                tracing::warn!(timezone = self.timezone, error = %err, "unresolvable timezone");
                None
            }
        }
    }

    /// `<icon> <city padded to 8> <HH:MM>`; never fails.
    pub fn format_line(&self, instant: DateTime<Utc>) -> String {
        let time = self
            .local_time(instant)
            .unwrap_or_else(|| UNKNOWN_TIME.to_string());
        format!("{} {:<CITY_WIDTH$} {}", self.icon, self.city, time)
    }
}

/// One line per entry of [`WORLD_CLOCKS`], in order.
pub fn format_world_clocks(instant: DateTime<Utc>) -> [String; 5] {
    WORLD_CLOCKS.map(|entry| entry.format_line(instant))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn instant() -> DateTime<Utc> {
        // Winter in the north, summer in the south: no DST ambiguity for NY/London,
        // Sydney on AEDT (+11).
        Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_always_five_lines_in_order() {
        let lines = format_world_clocks(instant());
        assert_eq!(lines.len(), 5);
        for (line, entry) in lines.iter().zip(WORLD_CLOCKS.iter()) {
            assert!(line.starts_with(&format!("{} {}", entry.icon, entry.city)));
        }
    }

    #[test]
    fn test_times_follow_each_zone() {
        let lines = format_world_clocks(instant());
        assert_eq!(lines[0], "🗽 New York 07:00");
        assert_eq!(lines[1], "🏰 London   12:00");
        assert_eq!(lines[2], "🗾 Tokyo    21:00");
        assert_eq!(lines[3], "🇦🇺 Sydney   23:00");
        assert_eq!(lines[4], "🏜️ Dubai    16:00");
    }

    #[test]
    fn test_unknown_zone_falls_back_to_placeholder() {
        let entry = WorldClockEntry {
            city: "Atlantis",
            icon: "🌊",
            timezone: "Ocean/Atlantis",
        };
        assert_eq!(entry.local_time(instant()), None);
        assert_eq!(entry.format_line(instant()), "🌊 Atlantis --:--");
    }

    #[test]
    fn test_city_padding_is_fixed_width() {
        let line = WORLD_CLOCKS[2].format_line(instant());
        let after_icon = line.split_once(' ').unwrap().1;
        assert_eq!(&after_icon[..CITY_WIDTH], "Tokyo   ");
    }
}

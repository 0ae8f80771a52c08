//! Main clock time string.

use chrono::Timelike;

use crate::options::TimeFormat;

/// Formats `time` as `HH:MM` or `HH:MM:SS`, with an ` AM`/` PM` suffix in
/// 12-hour mode.
///
/// Hours 0 and 12 both read `12` on the 12-hour dial. The result is the input
/// of [`crate::glyph::render_big_text`] for the main display.
pub fn format_clock_time<T: Timelike>(time: &T, format: TimeFormat, include_seconds: bool) -> String {
    let (hour, suffix) = match format {
        TimeFormat::TwentyFourHour => (time.hour(), ""),
        TimeFormat::TwelveHour => {
            let (is_pm, hour12) = time.hour12();
            (hour12, if is_pm { " PM" } else { " AM" })
        }
    };

    if include_seconds {
        format!(
            "{hour:02}:{:02}:{:02}{suffix}",
            time.minute(),
            time.second()
        )
    } else {
        format!("{hour:02}:{:02}{suffix}", time.minute())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;

    use super::*;

    fn at(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn test_midnight_twelve_hour() {
        assert_eq!(
            format_clock_time(&at(0, 0, 0), TimeFormat::TwelveHour, true),
            "12:00:00 AM"
        );
    }

    #[test]
    fn test_midnight_twenty_four_hour() {
        let text = format_clock_time(&at(0, 7, 9), TimeFormat::TwentyFourHour, true);
        assert_eq!(text, "00:07:09");
    }

    #[test]
    fn test_noon_is_pm() {
        assert_eq!(
            format_clock_time(&at(12, 30, 0), TimeFormat::TwelveHour, false),
            "12:30 PM"
        );
    }

    #[test]
    fn test_afternoon_hour_wraps() {
        let text = format_clock_time(&at(13, 5, 0), TimeFormat::TwelveHour, true);
        assert_eq!(text, "01:05:00 PM");
    }

    #[test]
    fn test_late_morning_is_am() {
        assert_eq!(
            format_clock_time(&at(11, 59, 59), TimeFormat::TwelveHour, true),
            "11:59:59 AM"
        );
    }

    #[test]
    fn test_seconds_hidden() {
        assert_eq!(
            format_clock_time(&at(23, 4, 56), TimeFormat::TwentyFourHour, false),
            "23:04"
        );
    }
}

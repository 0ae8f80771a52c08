//! Date line and week-of-year number.

use chrono::{Datelike, NaiveDate};

/// Week of the year, counting the partial week containing January 1 as week 1.
///
/// Computed as `ceil((days_since_jan1 + weekday_of_jan1 + 1) / 7)` with
/// Sunday as weekday 0. Weeks start on Sunday and this is *not* the ISO-8601
/// week number: late December never rolls into week 1 of the next year and
/// early January never belongs to week 52/53.
pub fn week_number<D: Datelike>(date: &D) -> u32 {
    let days_since_jan1 = date.ordinal0();
    let weekday = date.weekday().num_days_from_sunday();
    let jan1_weekday = (weekday + 7 - days_since_jan1 % 7) % 7;
    (days_since_jan1 + jan1_weekday + 1).div_ceil(7)
}

/// `📅 Monday, October 19, 2026 • Week 43`
pub fn format_date_line(date: NaiveDate) -> String {
    format!(
        "📅 {} • Week {}",
        date.format("%A, %B %-d, %Y"),
        week_number(&date)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_jan_first_is_week_one() {
        for year in 1990..=2040 {
            assert_eq!(week_number(&ymd(year, 1, 1)), 1, "year {year}");
        }
    }

    #[test]
    fn test_week_rolls_over_on_sunday() {
        // 2026-01-01 is a Thursday; Sunday the 4th starts week 2.
        assert_eq!(week_number(&ymd(2026, 1, 3)), 1);
        assert_eq!(week_number(&ymd(2026, 1, 4)), 2);
    }

    #[test]
    fn test_jan_first_on_sunday() {
        // 2023-01-01 is a Sunday: days 1-7 are week 1.
        assert_eq!(week_number(&ymd(2023, 1, 7)), 1);
        assert_eq!(week_number(&ymd(2023, 1, 8)), 2);
    }

    #[test]
    fn test_year_end_is_not_iso() {
        // ISO puts 2024-12-31 in week 1 of 2025.
        assert_eq!(week_number(&ymd(2024, 12, 31)), 53);
    }

    #[test]
    fn test_format_date_line() {
        assert_eq!(
            format_date_line(ymd(2026, 10, 19)),
            "📅 Monday, October 19, 2026 • Week 43"
        );
    }

    #[test]
    fn test_format_date_line_unpadded_day() {
        assert!(format_date_line(ymd(2025, 3, 5)).contains("March 5, 2025"));
    }
}

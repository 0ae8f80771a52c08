//! Display options and their toggle transitions.
//!
//! Each toggle is a pure function returning the next value, so the reducer
//! in the TUI only has to swap the old options for the new ones.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Named colour theme. Cycles in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Neon,
    Classic,
    Matrix,
    Cyberpunk,
}

impl Theme {
    /// All themes in cycle order.
    pub const ALL: [Theme; 4] = [Theme::Neon, Theme::Classic, Theme::Matrix, Theme::Cyberpunk];

    /// Returns the next theme, wrapping to the first after the last.
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Lowercase identifier used in config files and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Theme::Neon => "neon",
            Theme::Classic => "classic",
            Theme::Matrix => "matrix",
            Theme::Cyberpunk => "cyberpunk",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(|t| t.name()).collect();
                anyhow::anyhow!("Unknown theme '{s}' (expected one of: {})", names.join(", "))
            })
    }
}

/// Hour format for the main display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum TimeFormat {
    #[default]
    TwentyFourHour,
    TwelveHour,
}

impl TimeFormat {
    /// Flips between 12-hour and 24-hour.
    pub fn toggled(self) -> Self {
        match self {
            TimeFormat::TwentyFourHour => TimeFormat::TwelveHour,
            TimeFormat::TwelveHour => TimeFormat::TwentyFourHour,
        }
    }

    /// Number of hours on the dial: 12 or 24.
    pub fn hours(self) -> u8 {
        match self {
            TimeFormat::TwentyFourHour => 24,
            TimeFormat::TwelveHour => 12,
        }
    }
}

impl TryFrom<u8> for TimeFormat {
    type Error = String;

    fn try_from(hours: u8) -> Result<Self, Self::Error> {
        match hours {
            24 => Ok(TimeFormat::TwentyFourHour),
            12 => Ok(TimeFormat::TwelveHour),
            other => Err(format!("time_format must be 12 or 24, got {other}")),
        }
    }
}

impl From<TimeFormat> for u8 {
    fn from(format: TimeFormat) -> Self {
        format.hours()
    }
}

/// What the clock shows and how.
///
/// Lives for the whole process; only the toggle transitions below produce new
/// values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    pub theme: Theme,
    pub time_format: TimeFormat,
    pub show_seconds: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            time_format: TimeFormat::default(),
            show_seconds: true,
        }
    }
}

impl DisplayOptions {
    #[must_use]
    pub fn with_next_theme(self) -> Self {
        Self {
            theme: self.theme.next(),
            ..self
        }
    }

    #[must_use]
    pub fn with_toggled_format(self) -> Self {
        Self {
            time_format: self.time_format.toggled(),
            ..self
        }
    }

    #[must_use]
    pub fn with_toggled_seconds(self) -> Self {
        Self {
            show_seconds: !self.show_seconds,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = DisplayOptions::default();
        assert_eq!(options.theme, Theme::Neon);
        assert_eq!(options.time_format, TimeFormat::TwentyFourHour);
        assert!(options.show_seconds);
    }

    #[test]
    fn test_theme_cycle_wraps() {
        assert_eq!(Theme::Neon.next(), Theme::Classic);
        assert_eq!(Theme::Classic.next(), Theme::Matrix);
        assert_eq!(Theme::Matrix.next(), Theme::Cyberpunk);
        assert_eq!(Theme::Cyberpunk.next(), Theme::Neon);
    }

    #[test]
    fn test_full_theme_cycle_is_identity() {
        let start = DisplayOptions::default();
        let mut options = start;
        for _ in 0..Theme::ALL.len() {
            options = options.with_next_theme();
        }
        assert_eq!(options, start);
    }

    #[test]
    fn test_format_toggle_twice_is_identity() {
        let start = DisplayOptions::default();
        let once = start.with_toggled_format();
        assert_eq!(once.time_format, TimeFormat::TwelveHour);
        assert_eq!(once.with_toggled_format(), start);
    }

    #[test]
    fn test_seconds_toggle_twice_is_identity() {
        let start = DisplayOptions::default();
        let once = start.with_toggled_seconds();
        assert!(!once.show_seconds);
        assert_eq!(once.with_toggled_seconds(), start);
    }

    #[test]
    fn test_toggles_are_independent() {
        let options = DisplayOptions::default().with_next_theme();
        assert_eq!(options.time_format, TimeFormat::TwentyFourHour);
        assert!(options.show_seconds);
    }

    #[test]
    fn test_theme_from_str_ignores_case() {
        assert_eq!("MATRIX".parse::<Theme>().unwrap(), Theme::Matrix);
        assert!("sepia".parse::<Theme>().is_err());
    }

    #[test]
    fn test_time_format_from_hours() {
        assert_eq!(TimeFormat::try_from(12).unwrap(), TimeFormat::TwelveHour);
        assert_eq!(TimeFormat::try_from(24).unwrap(), TimeFormat::TwentyFourHour);
        assert!(TimeFormat::try_from(13).is_err());
    }
}

//! Core formatting for glyphclock: big ASCII-art time, date/week line,
//! world clocks and status line.
//!
//! Everything here is a pure function of an instant and the current
//! [`DisplayOptions`]; the terminal shell lives in `glyphclock-tui`.

pub mod calendar;
pub mod clock;
pub mod config;
pub mod frame;
pub mod glyph;
pub mod logging;
pub mod options;
pub mod status;
pub mod time_format;
pub mod world;

pub use clock::{FixedTimeSource, ProcessClock, SystemTimeSource, TimeSource};
pub use frame::ClockFrame;
pub use options::{DisplayOptions, Theme, TimeFormat};

//! Application state.
//!
//! ```text
//! AppState
//! ├── options: DisplayOptions   (theme, hour format, seconds)
//! ├── process_clock: ProcessClock (uptime origin)
//! ├── host_timezone: String
//! ├── visible: bool             (terminal focused / never reported)
//! ├── confirm_quit: bool        (quit confirmation overlay open)
//! └── should_quit: bool
//! ```

use chrono::{DateTime, Local};
use glyphclock_core::{ClockFrame, DisplayOptions, ProcessClock};

pub struct AppState {
    pub options: DisplayOptions,
    pub process_clock: ProcessClock,
    pub host_timezone: String,
    /// Ticks only redraw while visible; `FocusLost` clears it.
    pub visible: bool,
    pub confirm_quit: bool,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(options: DisplayOptions, host_timezone: String) -> Self {
        Self {
            options,
            process_clock: ProcessClock::start(),
            host_timezone,
            visible: true,
            confirm_quit: false,
            should_quit: false,
        }
    }

    /// Builds the text for every display slot at `now`.
    pub fn frame_at(&self, now: &DateTime<Local>) -> ClockFrame {
        ClockFrame::compose(
            now,
            &self.options,
            self.process_clock.uptime_secs(),
            &self.host_timezone,
        )
    }
}

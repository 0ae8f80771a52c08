//! One complete update of the four display slots.

use chrono::{DateTime, TimeZone, Utc};

use crate::calendar::format_date_line;
use crate::glyph::render_big_text;
use crate::options::DisplayOptions;
use crate::status::format_status_line;
use crate::time_format::format_clock_time;
use crate::world::format_world_clocks;

/// Text for every output slot, produced once per redraw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockFrame {
    /// 5-row ASCII art of the current time.
    pub big_time: String,
    pub date_line: String,
    pub world_clocks: [String; 5],
    pub status_line: String,
}

impl ClockFrame {
    /// Builds every slot from `now`, which is shown in its own timezone.
    pub fn compose<Tz: TimeZone>(
        now: &DateTime<Tz>,
        options: &DisplayOptions,
        uptime_secs: u64,
        host_timezone: &str,
    ) -> Self {
        let time_text = format_clock_time(now, options.time_format, options.show_seconds);
        Self {
            big_time: render_big_text(&time_text),
            date_line: format_date_line(now.date_naive()),
            world_clocks: format_world_clocks(now.with_timezone(&Utc)),
            status_line: format_status_line(options, uptime_secs, host_timezone),
        }
    }

    /// All slots as plain text, top to bottom, separated by blank lines.
    pub fn to_plain_text(&self) -> String {
        format!(
            "{}\n\n{}\n\n{}\n\n{}\n",
            self.big_time,
            self.date_line,
            self.world_clocks.join("\n"),
            self.status_line
        )
    }
}

//! Prints a single frame to stdout.

use anyhow::Result;
use chrono::{DateTime, FixedOffset, Local, Offset};
use glyphclock_core::clock::{host_timezone_name, offset_label};
use glyphclock_core::{
    ClockFrame, DisplayOptions, FixedTimeSource, ProcessClock, SystemTimeSource, TimeSource,
};

/// Renders one frame at `at` (shown and labelled in its own offset), or at
/// the current local time labelled with the host zone.
pub fn run(options: DisplayOptions, at: Option<DateTime<FixedOffset>>) -> Result<()> {
    let process_clock = ProcessClock::start();

    let (source, offset, zone_label): (Box<dyn TimeSource>, FixedOffset, String) = match at {
        Some(at) => (
            Box::new(FixedTimeSource(at.to_utc())),
            *at.offset(),
            offset_label(at.offset()),
        ),
        None => (
            Box::new(SystemTimeSource),
            Local::now().offset().fix(),
            host_timezone_name(),
        ),
    };
    let now = source.now().with_timezone(&offset);
    tracing::info!(%now, ?options, "rendering single frame");

    let frame = ClockFrame::compose(
        &now,
        &options,
        process_clock.uptime_secs(),
        &zone_label,
    );
    print!("{}", frame.to_plain_text());
    Ok(())
}

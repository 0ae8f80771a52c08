//! Full-screen clock (default command).

use anyhow::Result;
use glyphclock_core::DisplayOptions;
use glyphclock_core::clock::host_timezone_name;

pub fn run(options: DisplayOptions) -> Result<()> {
    glyphclock_tui::run_clock(options, host_timezone_name())
}

//! Full-screen terminal clock.

pub mod effects;
pub mod events;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod theme;
pub mod update;

use std::io::{IsTerminal, stdout};

use anyhow::Result;
use glyphclock_core::DisplayOptions;
pub use runtime::ClockRuntime;
pub use state::AppState;

/// Runs the clock until the user quits.
pub fn run_clock(options: DisplayOptions, host_timezone: String) -> Result<()> {
    if !stdout().is_terminal() {
        anyhow::bail!(
            "The clock display requires a terminal.\n\
             Use `glyphclock once` to print a single frame instead."
        );
    }

    tracing::info!(?options, %host_timezone, "starting clock");
    let mut runtime = ClockRuntime::new(AppState::new(options, host_timezone))?;
    runtime.run()
}

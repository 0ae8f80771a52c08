//! TUI runtime - owns terminal, runs event loop, executes effects.
//!
//! All side effects happen here. The reducer stays pure and produces
//! effects; this module executes them.

use std::io::Stdout;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use chrono::Local;
use crossterm::event;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{render, terminal, update};

/// Redraw cadence while the clock is visible.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Full-screen clock runtime.
///
/// Owns the terminal and state. Terminal state is restored on drop or panic.
pub struct ClockRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub state: AppState,
    /// Last time a Tick event was emitted.
    last_tick: Instant,
}

impl ClockRuntime {
    /// Enters the alternate screen and raw mode.
    pub fn new(state: AppState) -> Result<Self> {
        // Set up panic hook BEFORE entering alternate screen
        terminal::install_panic_hook();

        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        Ok(Self {
            terminal,
            state,
            last_tick: Instant::now(),
        })
    }

    /// Runs the main event loop until the user quits.
    pub fn run(&mut self) -> Result<()> {
        terminal::enable_focus_reporting()?;
        self.event_loop()
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut dirty = true; // Start dirty to ensure initial render

        while !self.state.should_quit {
            if dirty {
                self.draw()?;
                dirty = false;
            }

            for event in self.collect_events()? {
                for effect in update::update(&mut self.state, event) {
                    match effect {
                        UiEffect::Redraw => dirty = true,
                        UiEffect::Quit => tracing::info!("quit requested"),
                    }
                }
            }
        }

        Ok(())
    }

    fn draw(&mut self) -> Result<()> {
        let now = Local::now();
        let clock = self.state.frame_at(&now);
        self.terminal
            .draw(|frame| render::render(&self.state, &clock, frame))
            .context("Failed to draw frame")?;
        Ok(())
    }

    /// Blocks for terminal input until the next tick is due.
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        let time_until_tick = TICK_INTERVAL.saturating_sub(self.last_tick.elapsed());

        if event::poll(time_until_tick)? {
            events.push(UiEvent::Terminal(event::read()?));
            // Drain any remaining buffered events (non-blocking)
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        let now = Instant::now();
        if now.duration_since(self.last_tick) >= TICK_INTERVAL {
            events.push(UiEvent::Tick);
            self.last_tick = next_tick(self.last_tick, now);
        }

        Ok(events)
    }
}

/// Start of the tick period following `last`, as seen at `now`.
///
/// Advances on a fixed schedule so time spent drawing does not accumulate as
/// drift. After a stall longer than one period (suspend, slow terminal) the
/// schedule restarts at `now` instead of firing a burst of catch-up ticks.
fn next_tick(last: Instant, now: Instant) -> Instant {
    let next = last + TICK_INTERVAL;
    if now.duration_since(next) >= TICK_INTERVAL {
        now
    } else {
        next
    }
}

impl Drop for ClockRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}

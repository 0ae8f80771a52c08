//! Events fed to the reducer.

use crossterm::event::Event;

#[derive(Debug, Clone)]
pub enum UiEvent {
    /// One-second heartbeat.
    Tick,
    /// Raw terminal input (keys, focus, resize).
    Terminal(Event),
}

//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! This keeps the reducer pure: it only mutates state and returns effects.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEffect {
    /// Redraw now instead of waiting for the next tick.
    Redraw,
    /// Leave the event loop and restore the terminal.
    Quit,
}

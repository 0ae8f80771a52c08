//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            if app.visible {
                vec![UiEffect::Redraw]
            } else {
                vec![]
            }
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
    }
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::FocusGained => {
            app.visible = true;
            vec![UiEffect::Redraw]
        }
        Event::FocusLost => {
            app.visible = false;
            vec![]
        }
        Event::Resize(..) => vec![UiEffect::Redraw],
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return quit(app);
    }

    if app.confirm_quit {
        return match key.code {
            KeyCode::Char('y' | 'Y') | KeyCode::Enter => quit(app),
            _ => {
                app.confirm_quit = false;
                vec![UiEffect::Redraw]
            }
        };
    }

    let KeyCode::Char(c) = key.code else {
        return vec![];
    };

    let options = app.options;
    app.options = match c.to_ascii_lowercase() {
        't' => options.with_next_theme(),
        'f' => options.with_toggled_format(),
        's' => options.with_toggled_seconds(),
        'q' => {
            app.confirm_quit = true;
            return vec![UiEffect::Redraw];
        }
        _ => return vec![],
    };
    tracing::debug!(options = ?app.options, "display options changed");

    vec![UiEffect::Redraw]
}

fn quit(app: &mut AppState) -> Vec<UiEffect> {
    app.should_quit = true;
    vec![UiEffect::Quit]
}

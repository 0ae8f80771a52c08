//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState` and a precomputed `ClockFrame`, draw to a
//! ratatui Frame, and never mutate state.

use glyphclock_core::ClockFrame;
use glyphclock_core::glyph::GLYPH_HEIGHT;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::state::AppState;
use crate::theme::{Palette, palette};

/// Preferred size of the clock container.
const CONTAINER_WIDTH: u16 = 85;
const CONTAINER_HEIGHT: u16 = 24;

/// Big time plus one blank row above and below.
const BIG_TIME_HEIGHT: u16 = GLYPH_HEIGHT as u16 + 2;
const DATE_HEIGHT: u16 = 2;
/// Five entries plus the block borders.
const WORLD_HEIGHT: u16 = 7;
const CONTROLS_HEIGHT: u16 = 1;
const STATUS_HEIGHT: u16 = 1;

const CONTROLS_TEXT: &str = "T:Theme | F:Format | S:Seconds | Q:Quit";
const CONFIRM_TEXT: &str = "Are you sure you want to close the clock? (y/n)";

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, clock: &ClockFrame, frame: &mut Frame) {
    let area = frame.area();
    let colors = palette(app.options.theme);

    let [body, status] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(STATUS_HEIGHT)]).areas(area);

    let big_width = clock
        .big_time
        .lines()
        .map(UnicodeWidthStr::width)
        .max()
        .unwrap_or(0) as u16;
    let container = centered_rect(
        CONTAINER_WIDTH.max(big_width.saturating_add(4)),
        CONTAINER_HEIGHT,
        body,
    );
    render_container(clock, colors, container, frame);

    frame.render_widget(
        Paragraph::new(clock.status_line.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray).bg(Color::DarkGray)),
        status,
    );

    if app.confirm_quit {
        render_confirm_quit(colors, area, frame);
    }
}

fn render_container(clock: &ClockFrame, colors: Palette, area: Rect, frame: &mut Frame) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Thick)
        .border_style(Style::default().fg(colors.accent))
        .style(Style::default().bg(colors.background))
        .title(Line::from("Digital Clock").centered())
        .title_style(Style::default().fg(colors.accent).add_modifier(Modifier::BOLD));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [big, date, world, controls, _] = Layout::vertical([
        Constraint::Length(BIG_TIME_HEIGHT),
        Constraint::Length(DATE_HEIGHT),
        Constraint::Length(WORLD_HEIGHT),
        Constraint::Length(CONTROLS_HEIGHT),
        Constraint::Min(0),
    ])
    .areas(inner);

    let big_lines: Vec<Line> = std::iter::once(Line::default())
        .chain(clock.big_time.lines().map(Line::from))
        .collect();
    frame.render_widget(
        Paragraph::new(big_lines)
            .alignment(Alignment::Center)
            .style(Style::default().fg(colors.accent).add_modifier(Modifier::BOLD)),
        big,
    );

    frame.render_widget(
        Paragraph::new(clock.date_line.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::White)),
        date,
    );

    let world_lines: Vec<Line> = clock
        .world_clocks
        .iter()
        .map(|l| Line::from(l.as_str()))
        .collect();
    frame.render_widget(
        Paragraph::new(world_lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.accent))
                .title(Line::from("🌍 World Times").centered()),
        ),
        world,
    );

    frame.render_widget(
        Paragraph::new(CONTROLS_TEXT)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray)),
        controls,
    );
}

fn render_confirm_quit(colors: Palette, area: Rect, frame: &mut Frame) {
    let width = CONFIRM_TEXT.width() as u16 + 4;
    let popup = centered_rect(width, 3, area);
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(CONFIRM_TEXT).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.accent))
                .title(Line::from("Quit").centered()),
        ),
        popup,
    );
}

/// A `width` x `height` rect centred in `area`, shrunk to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

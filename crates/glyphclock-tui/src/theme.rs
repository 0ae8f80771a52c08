//! Colour palette for each display theme.

use glyphclock_core::Theme;
use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Border and big-time colour.
    pub accent: Color,
    pub background: Color,
}

pub fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Neon => Palette {
            accent: Color::Cyan,
            background: Color::Rgb(0x00, 0x11, 0x22),
        },
        Theme::Classic => Palette {
            accent: Color::Rgb(0xFF, 0xD7, 0x00),
            background: Color::Rgb(0x22, 0x11, 0x00),
        },
        Theme::Matrix => Palette {
            accent: Color::Green,
            background: Color::Rgb(0x00, 0x11, 0x00),
        },
        Theme::Cyberpunk => Palette {
            accent: Color::Magenta,
            background: Color::Rgb(0x22, 0x00, 0x22),
        },
    }
}

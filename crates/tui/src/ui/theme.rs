use ratatui::style::Color;

use crate::local_state::ThemeMode;

/// Palette for one theme mode. Swapping the mode swaps the whole palette;
/// nothing else in the render path changes.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub dim: Color,
    pub border: Color,
    pub accent: Color,
    pub positive: Color,
    pub negative: Color,
    pub error: Color,
}

impl Theme {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::Rgb(244, 246, 248),
            surface: Color::Rgb(252, 253, 254),
            text: Color::Rgb(40, 44, 52),
            dim: Color::Rgb(120, 126, 134),
            border: Color::Rgb(190, 196, 204),
            accent: Color::Rgb(52, 120, 212),
            positive: Color::Rgb(36, 150, 90),
            negative: Color::Rgb(204, 62, 54),
            error: Color::Rgb(204, 62, 54),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(8, 12, 16),
            surface: Color::Rgb(20, 26, 32),
            text: Color::Rgb(220, 220, 220),
            dim: Color::Rgb(140, 140, 140),
            border: Color::Rgb(70, 78, 86),
            accent: Color::Rgb(80, 160, 212),
            positive: Color::Rgb(46, 204, 113),
            negative: Color::Rgb(231, 76, 60),
            error: Color::Rgb(231, 76, 60),
        }
    }
}

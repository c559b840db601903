//! Colour palettes for the light and dark themes

use ratatui::style::{Color, Modifier, Style};

use crate::config::Theme;

/// Colours used by every view for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub border: Color,
    pub accent: Color,
    pub income: Color,
    pub expense: Color,
    pub highlight: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                background: Color::Rgb(243, 243, 243),
                foreground: Color::Black,
                muted: Color::Rgb(102, 102, 102),
                border: Color::Rgb(160, 160, 160),
                accent: Color::Rgb(40, 167, 69),
                income: Color::Rgb(40, 167, 69),
                expense: Color::Rgb(220, 53, 69),
                highlight: Color::Rgb(221, 221, 221),
            },
            Theme::Dark => Self {
                background: Color::Rgb(18, 18, 18),
                foreground: Color::White,
                muted: Color::Rgb(204, 204, 204),
                border: Color::Rgb(80, 80, 80),
                accent: Color::Rgb(40, 167, 69),
                income: Color::Rgb(72, 199, 101),
                expense: Color::Rgb(235, 87, 100),
                highlight: Color::Rgb(51, 51, 51),
            },
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.background)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Cursor cell inside a focused text field
    pub fn cursor(&self) -> Style {
        Style::default().fg(self.background).bg(self.foreground)
    }

    /// Green for a non-negative balance, red otherwise
    pub fn balance(&self, negative: bool) -> Style {
        let color = if negative { self.expense } else { self.income };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }
}

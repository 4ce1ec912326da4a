//! Light and dark palettes

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }
}

/// Colors used by every chat component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub mode: ThemeMode,
    pub text: Color,
    pub user: Color,
    pub assistant: Color,
    pub system: Color,
    pub accent: Color,
    pub dim: Color,
    pub border: Color,
    pub selected: Color,
    pub cursor: Color,
    pub backdrop: Color,
}

impl Theme {
    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self {
                mode,
                text: Color::White,
                user: Color::Rgb(105, 136, 255),
                assistant: Color::Rgb(220, 220, 220),
                system: Color::Rgb(153, 153, 153),
                accent: Color::Cyan,
                dim: Color::DarkGray,
                border: Color::Gray,
                selected: Color::Green,
                cursor: Color::Yellow,
                backdrop: Color::Rgb(20, 20, 24),
            },
            ThemeMode::Light => Self {
                mode,
                text: Color::Black,
                user: Color::Rgb(65, 88, 208),
                assistant: Color::Rgb(40, 40, 40),
                system: Color::Rgb(110, 110, 110),
                accent: Color::Rgb(20, 143, 173),
                dim: Color::Gray,
                border: Color::DarkGray,
                selected: Color::Rgb(54, 147, 7),
                cursor: Color::Rgb(199, 113, 0),
                backdrop: Color::Rgb(230, 230, 235),
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::for_mode(ThemeMode::default())
    }
}

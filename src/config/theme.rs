//! Theme configuration options for tabla.
//!
//! Defines the `[theme]` section of `tabla.toml`. Each sub-table is a
//! fg/bg pair accepting color names ("Red", "default") or hex values
//! ("#RRGGBB"); parsing lives in [crate::utils::parse_color].

use crate::utils::parse_color;

use ratatui::style::{Modifier, Style};
use serde::Deserialize;

/// A fg/bg color pair as written in the config file.
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ColorPair {
    fg: String,
    bg: String,
}

impl Default for ColorPair {
    fn default() -> Self {
        ColorPair {
            fg: "default".into(),
            bg: "default".into(),
        }
    }
}

impl ColorPair {
    fn named(fg: &str, bg: &str) -> Self {
        ColorPair {
            fg: fg.into(),
            bg: bg.into(),
        }
    }

    pub fn as_style(&self) -> Style {
        Style::default()
            .fg(parse_color(&self.fg))
            .bg(parse_color(&self.bg))
    }
}

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Theme {
    accent: ColorPair,
    selection: ColorPair,
    header: ColorPair,
    directory: ColorPair,
    error: ColorPair,
    selection_icon: String,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            accent: ColorPair::named("cyan", "default"),
            selection: ColorPair::named("black", "cyan"),
            header: ColorPair::named("cyan", "default"),
            directory: ColorPair::named("blue", "default"),
            error: ColorPair::named("red", "default"),
            selection_icon: "> ".into(),
        }
    }
}

impl Theme {
    #[inline]
    pub fn accent_style(&self) -> Style {
        self.accent.as_style()
    }

    #[inline]
    pub fn selection_style(&self) -> Style {
        self.selection.as_style()
    }

    pub fn header_style(&self) -> Style {
        self.header.as_style().add_modifier(Modifier::BOLD)
    }

    #[inline]
    pub fn directory_style(&self) -> Style {
        self.directory.as_style()
    }

    #[inline]
    pub fn error_style(&self) -> Style {
        self.error.as_style()
    }

    #[inline]
    pub fn selection_icon(&self) -> &str {
        &self.selection_icon
    }
}

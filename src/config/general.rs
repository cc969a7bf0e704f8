//! The general configuration settings for tabla.
//!
//! Defines the `[general]` section of `tabla.toml`: hidden-file visibility
//! and the timestamp format used by the Modified column.

use serde::Deserialize;

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct General {
    show_hidden: bool,
    date_format: String,
}

impl Default for General {
    fn default() -> Self {
        General {
            show_hidden: true,
            date_format: "%Y-%m-%d %H:%M:%S".into(),
        }
    }
}

impl General {
    #[inline]
    pub fn show_hidden(&self) -> bool {
        self.show_hidden
    }

    #[inline]
    pub fn date_format(&self) -> &str {
        let trimmed = self.date_format.trim();
        if trimmed.is_empty() {
            "%Y-%m-%d %H:%M:%S"
        } else {
            trimmed
        }
    }
}

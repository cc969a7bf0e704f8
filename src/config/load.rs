//! The main config loading module for tabla.
//!
//! Handles loading and deserializing settings from `tabla.toml`.
//!
//! Provides the main [Config] struct as well as the [RawConfig] used for
//! parsing, and default-file generation for `tb --init`.

use crate::config::Display;
use crate::config::General;
use crate::config::Keys;
use crate::config::Theme;
use crate::utils::get_home;

use serde::Deserialize;
use std::{fs, io, path::Path, path::PathBuf};

/// Raw configuration as read from the toml file, converted into [Config]
/// after parsing.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct RawConfig {
    general: General,
    display: Display,
    theme: Theme,
    keys: Keys,
}

/// Processed configuration used throughout tabla.
#[derive(Debug, Default)]
pub struct Config {
    general: General,
    display: Display,
    theme: Theme,
    keys: Keys,
}

impl From<RawConfig> for Config {
    fn from(raw: RawConfig) -> Self {
        Self {
            general: raw.general,
            display: raw.display,
            theme: raw.theme,
            keys: raw.keys,
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// A missing or unparsable file falls back to the built-in defaults;
    /// a parse error is reported on stderr before the TUI starts.
    pub fn load() -> Self {
        let path = Self::default_path();

        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => match toml::from_str::<RawConfig>(&content) {
                Ok(raw) => raw.into(),
                Err(e) => {
                    eprintln!("Error parsing config: {}", e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    // Getters

    #[inline]
    pub fn general(&self) -> &General {
        &self.general
    }

    #[inline]
    pub fn display(&self) -> &Display {
        &self.display
    }

    #[inline]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    #[inline]
    pub fn keys(&self) -> &Keys {
        &self.keys
    }

    /// Determine the default configuration file path.
    ///
    /// Checks the TABLA_CONFIG environment variable first, then
    /// XDG_CONFIG_HOME, then falls back to ~/.config/tabla/tabla.toml.
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var("TABLA_CONFIG") {
            return PathBuf::from(path);
        }

        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg_config).join("tabla/tabla.toml");
        }

        if let Some(home) = get_home() {
            return home.join(".config/tabla/tabla.toml");
        }

        PathBuf::from("tabla.toml")
    }

    /// Writes a commented default config file for `tb --init`. Refuses to
    /// overwrite an existing file.
    pub fn generate_default(path: &Path) -> io::Result<()> {
        if path.exists() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("config file already exists: {}", path.display()),
            ));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_CONFIG_TEXT)?;
        println!("Wrote default config to {}", path.display());
        Ok(())
    }
}

const DEFAULT_CONFIG_TEXT: &str = r##"# tabla.toml - configuration for tabla

[general]
# Show dotfiles in the tree and the table.
show_hidden = true
# chrono format string for the Modified column.
date_format = "%Y-%m-%d %H:%M:%S"

[display]
# Start with the directory tree pane visible.
tree = true
borders = true
titles = true

[display.layout]
# Width percentages for the tree and table panes.
tree = 30
table = 70

[theme]
selection_icon = "> "

[theme.accent]
fg = "cyan"

[theme.selection]
fg = "black"
bg = "cyan"

[theme.header]
fg = "cyan"

[theme.directory]
fg = "blue"

[theme.error]
fg = "red"

[keys]
up = ["k", "Up"]
down = ["j", "Down"]
top = ["g"]
bottom = ["G"]
expand = ["l", "Right"]
collapse = ["h", "Left"]
activate = ["Enter"]
sort_name = ["1"]
sort_size = ["2"]
sort_modified = ["3"]
quit = ["q", "Esc"]
toggle_tree = ["f"]
focus_next = ["Tab"]
"##;

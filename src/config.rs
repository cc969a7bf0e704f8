//! Configuration for tabla.
//!
//! Settings are read from `tabla.toml` (see [load::Config::default_path]
//! for resolution order) and split into sections:
//! - [general]: hidden files, timestamp format
//! - [display]: pane visibility, borders, layout split
//! - [theme]: colors for panes, selection, header, errors
//! - [input]: key bindings
//!
//! Missing or invalid files fall back to built-in defaults.

pub mod display;
pub mod general;
pub mod input;
pub mod load;
pub mod theme;

pub use display::Display;
pub use general::General;
pub use input::Keys;
pub use load::{Config, RawConfig};
pub use theme::Theme;

//! Miscellaneous utility functions for tabla.
//!
//! Holds the [cli] module for argument handling and the [helpers] module
//! with commonly used utilities:
//! - Color parsing for the theme
//! - Handing a path to the platform's default-application opener
//! - Shortening the home directory path to "~"

pub mod cli;
pub mod helpers;

pub use helpers::{get_home, open_with_default_app, parse_color, shorten_home_path};

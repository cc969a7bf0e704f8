//! Helpers for tabla.
//!
//! Utility functions used across the app:
//! - Color parsing from names or hex codes for the theme
//! - Opening a path with the platform's default application
//! - Displaying home directories as "~" in the path header

use ratatui::style::Color;
use std::io;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};
use std::process::{Command, Stdio};

/// Parses a string (color name or hex) into a ratatui color.
///
/// Supports standard names (red, green, etc.) as well as hex values
/// (#RRGGBB or #RGB). Anything unrecognized falls back to the terminal
/// default.
pub fn parse_color(s: &str) -> Color {
    match s.to_lowercase().as_str() {
        "default" | "reset" => Color::Reset,
        "yellow" => Color::Yellow,
        "red" => Color::Red,
        "blue" => Color::Blue,
        "green" => Color::Green,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        "black" => Color::Black,
        "gray" => Color::Gray,
        "darkgray" => Color::DarkGray,
        _ => {
            if let Some(color) = s.strip_prefix('#') {
                match color.len() {
                    6 => {
                        if let Ok(rgb) = u32::from_str_radix(color, 16) {
                            return Color::Rgb(
                                ((rgb >> 16) & 0xFF) as u8,
                                ((rgb >> 8) & 0xFF) as u8,
                                (rgb & 0xFF) as u8,
                            );
                        }
                    }
                    3 => {
                        let expanded = color
                            .chars()
                            .map(|c| format!("{}{}", c, c))
                            .collect::<String>();
                        if let Ok(rgb) = u32::from_str_radix(&expanded, 16) {
                            return Color::Rgb(
                                ((rgb >> 16) & 0xFF) as u8,
                                ((rgb >> 8) & 0xFF) as u8,
                                (rgb & 0xFF) as u8,
                            );
                        }
                    }
                    _ => {}
                }
            }
            // fallback
            Color::Reset
        }
    }
}

/// Home directory of the current user, if one is known.
pub fn get_home() -> Option<PathBuf> {
    dirs::home_dir()
}

/// Hands a path to the platform's default-application opener.
///
/// The opener runs detached; tabla neither waits for it nor consumes its
/// output, so the terminal stays in the alternate screen.
pub fn open_with_default_app(path: &Path) -> io::Result<()> {
    #[cfg(target_os = "macos")]
    let mut cmd = Command::new("open");

    #[cfg(all(unix, not(target_os = "macos")))]
    let mut cmd = Command::new("xdg-open");

    #[cfg(windows)]
    let mut cmd = {
        let mut c = Command::new("cmd");
        c.args(["/C", "start", ""]);
        c
    };

    cmd.arg(path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
}

/// Shortens the home directory prefix of a path to "~" for display.
pub fn shorten_home_path<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();
    if let Some(home_dir) = dirs::home_dir()
        && let Ok(stripped) = path.strip_prefix(&home_dir)
    {
        if stripped.as_os_str().is_empty() {
            return "~".to_string();
        } else {
            let mut short = stripped.display().to_string();
            if short.starts_with(MAIN_SEPARATOR) {
                short.remove(0);
            }
            return format!("~{}{}", MAIN_SEPARATOR, short);
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_named_and_hex_colors() {
        assert_eq!(parse_color("red"), Color::Red);
        assert_eq!(parse_color("default"), Color::Reset);
        assert_eq!(parse_color("#ff0000"), Color::Rgb(255, 0, 0));
        assert_eq!(parse_color("#f00"), Color::Rgb(255, 0, 0));
        assert_eq!(parse_color("no-such-color"), Color::Reset);
    }

    #[test]
    fn shortens_home_prefix() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(shorten_home_path(&home), "~");
            let nested = home.join("somewhere");
            let short = shorten_home_path(&nested);
            assert!(short.starts_with('~'), "got {}", short);
            assert!(short.ends_with("somewhere"));
        }
    }
}

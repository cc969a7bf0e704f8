//! Small widget helpers shared by the tabla panes.

use crate::app::AppState;
use ratatui::widgets::{Block, Borders};
use unicode_width::UnicodeWidthChar;

/// Builds the bordered/titled block for a pane according to the display
/// config.
pub fn pane_block<'a>(title: &'a str, app: &AppState) -> Block<'a> {
    let display = app.config().display();
    let mut block = Block::default();
    if display.borders() {
        block = block
            .borders(Borders::ALL)
            .border_style(app.config().theme().accent_style());
    }
    if display.titles() {
        block = block.title(title);
    }
    block
}

/// Cleans a line for single-row display and fits it to an exact width:
/// control characters are dropped, tabs expand to the next 4-column stop,
/// and the result is truncated or space-padded to `width` columns.
pub fn fit_to_width(line: &str, width: usize) -> String {
    let mut out = String::with_capacity(width);
    let mut current_w = 0;

    for ch in line.chars() {
        if ch == '\t' {
            let space_count = 4 - (current_w % 4);
            if current_w + space_count > width {
                break;
            }
            out.push_str(&" ".repeat(space_count));
            current_w += space_count;
            continue;
        }

        if ch.is_control() {
            continue;
        }

        let w = ch.width().unwrap_or(0);
        if current_w + w > width {
            break;
        }

        out.push(ch);
        current_w += w;
    }

    if current_w < width {
        out.push_str(&" ".repeat(width - current_w));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use unicode_width::UnicodeWidthStr;

    #[test]
    fn fits_lines_to_exact_width() {
        let cases = ["short.txt", "very_long_filename.txt", "🦀_crab.rs", "\t_tab"];
        for input in cases {
            let result = fit_to_width(input, 10);
            assert_eq!(
                UnicodeWidthStr::width(result.as_str()),
                10,
                "wrong width for input '{}': got '{}'",
                input,
                result
            );
            assert!(!result.chars().any(|c| c.is_control()));
        }
    }
}

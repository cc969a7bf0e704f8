//! UI-related tests for tabla.
//!
//! These tests cover the text-fitting helper and the pane layout split,
//! driven through a parsed configuration the way the renderer uses it.

use ratatui::layout::Rect;
use tabla_tui::app::AppState;
use tabla_tui::config::{Config, RawConfig};
use tabla_tui::ui::layout_chunks;
use tabla_tui::ui::widgets::fit_to_width;
use tempfile::tempdir;

#[test]
fn fit_to_width_produces_exact_width() {
    let pane_width = 10;

    let cases = vec![
        ("short.txt", 10),
        ("very_long_filename.txt", 10),
        ("🦀_crab.rs", 10),
        ("\t_tab", 10),
    ];

    for (input, expected_width) in cases {
        let result = fit_to_width(input, pane_width);
        let actual_width = unicode_width::UnicodeWidthStr::width(result.as_str());

        assert_eq!(
            actual_width, expected_width,
            "Failed to produce exact width for input: '{}'. Result was: '{}' (width: {})",
            input, result, actual_width
        );

        assert!(
            !result.chars().any(|c| c.is_control() && c != ' '),
            "Result contains control characters: {:?}",
            result
        );
    }
}

#[test]
fn layout_chunks_follow_configured_split() -> Result<(), Box<dyn std::error::Error>> {
    let size = Rect::new(0, 0, 100, 10);

    let toml_content = r#"
        [display]
        tree = true

        [display.layout]
        tree = 40
        table = 60
    "#;

    let raw: RawConfig = toml::from_str(toml_content)?;
    let config = Config::from(raw);

    let tmp = tempdir()?;
    let app = AppState::from_dir(&config, tmp.path().to_path_buf());

    let chunks = layout_chunks(size, &app);
    assert_eq!(chunks.len(), 2);

    let total_width: u16 = chunks.iter().map(|c| c.width).sum();
    assert!(total_width <= 100);
    assert!(chunks[0].width >= 39 && chunks[0].width <= 41);
    Ok(())
}

#[test]
fn hidden_tree_gives_table_full_width() -> Result<(), Box<dyn std::error::Error>> {
    let size = Rect::new(0, 0, 80, 10);

    let toml_content = r#"
        [display]
        tree = false
    "#;

    let raw: RawConfig = toml::from_str(toml_content)?;
    let config = Config::from(raw);

    let tmp = tempdir()?;
    let app = AppState::from_dir(&config, tmp.path().to_path_buf());

    let chunks = layout_chunks(size, &app);
    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].width, 80);
    Ok(())
}

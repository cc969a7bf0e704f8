//! Input action handler methods for tabla.
//!
//! Implements the [AppState] methods that turn key events into tree,
//! session and focus changes. Each event is processed to completion before
//! the terminal loop reads the next one.

use crate::app::keymap::{Action, NavAction, SortAction, SystemAction};
use crate::app::state::{AppState, Focus, KeypressResult};
use crate::utils::open_with_default_app;

use crossterm::event::KeyEvent;

impl<'a> AppState<'a> {
    /// Dispatches one key event through the keymap.
    pub fn handle_keypress(&mut self, key: KeyEvent) -> KeypressResult {
        let Some(action) = self.keymap.lookup(key) else {
            return KeypressResult::Continue;
        };

        // A handled key replaces whatever the status line showed.
        self.status = None;

        let result = match action {
            Action::System(SystemAction::Quit) => return KeypressResult::Quit,
            Action::System(SystemAction::ToggleTree) => {
                self.toggle_tree();
                KeypressResult::Consumed
            }
            Action::System(SystemAction::FocusNext) => {
                self.cycle_focus();
                KeypressResult::Consumed
            }
            Action::Sort(sort) => {
                self.handle_sort(sort);
                KeypressResult::Consumed
            }
            Action::Nav(nav) => self.handle_nav(nav),
        };

        self.drain_session_errors();
        result
    }

    fn toggle_tree(&mut self) {
        self.show_tree = !self.show_tree;
        if !self.show_tree {
            self.focus = Focus::Table;
        }
    }

    fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Tree => Focus::Table,
            Focus::Table if self.show_tree => Focus::Tree,
            Focus::Table => Focus::Table,
        };
    }

    /// A sort key acts as a header click on the matching column.
    fn handle_sort(&mut self, sort: SortAction) {
        let column_index = match sort {
            SortAction::Name => 0,
            SortAction::Size => 1,
            SortAction::Modified => 2,
        };
        self.session.on_header_selected(column_index);

        // Keep the cursor on the selected row across the reorder.
        if let Some(pos) = self.session.selected_position() {
            self.cursor = pos;
        }
    }

    fn handle_nav(&mut self, nav: NavAction) -> KeypressResult {
        match self.focus {
            Focus::Tree => self.handle_tree_nav(nav),
            Focus::Table => self.handle_table_nav(nav),
        }
    }

    fn handle_tree_nav(&mut self, nav: NavAction) -> KeypressResult {
        match nav {
            NavAction::Up => self.tree.move_up(),
            NavAction::Down => self.tree.move_down(),
            NavAction::Top => self.tree.move_to_top(),
            NavAction::Bottom => self.tree.move_to_bottom(),
            NavAction::Expand => {
                if let Err(e) = self.tree.expand() {
                    self.status = Some(e.to_string());
                }
            }
            NavAction::Collapse => self.tree.collapse(),
            NavAction::Activate => {
                let path = self.tree.selected_path().to_path_buf();
                self.session.on_directory_selected(&path);
                self.cursor = 0;
            }
        }
        KeypressResult::Consumed
    }

    fn handle_table_nav(&mut self, nav: NavAction) -> KeypressResult {
        let len = self.session.rows().len();
        match nav {
            NavAction::Up => {
                if len == 0 {
                    return KeypressResult::Consumed;
                }
                self.cursor = if self.cursor == 0 {
                    len - 1
                } else {
                    self.cursor - 1
                };
                self.select_cursor_row();
            }
            NavAction::Down => {
                if len == 0 {
                    return KeypressResult::Consumed;
                }
                self.cursor = (self.cursor + 1) % len;
                self.select_cursor_row();
            }
            NavAction::Top => {
                if len == 0 {
                    return KeypressResult::Consumed;
                }
                self.cursor = 0;
                self.select_cursor_row();
            }
            NavAction::Bottom => {
                if len == 0 {
                    return KeypressResult::Consumed;
                }
                self.cursor = len - 1;
                self.select_cursor_row();
            }
            NavAction::Activate => self.activate_row(),
            // Tree-only motions mean nothing here.
            NavAction::Expand | NavAction::Collapse => return KeypressResult::Continue,
        }
        KeypressResult::Consumed
    }

    fn select_cursor_row(&mut self) {
        if let Some(row) = self.session.rows().get(self.cursor) {
            let key = row.key();
            self.session.on_row_selected(key);
        }
    }

    fn activate_row(&mut self) {
        let mut open_error: Option<String> = None;
        self.session.on_row_activated(|path| {
            if let Err(e) = open_with_default_app(path) {
                open_error = Some(format!("could not open {}: {}", path.display(), e));
            }
        });
        if open_error.is_some() {
            self.status = open_error;
        }
    }

    fn drain_session_errors(&mut self) {
        if let Some(last) = self.session.take_error_lines().into_iter().next_back() {
            self.status = Some(last);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crossterm::event::{KeyCode, KeyModifiers};
    use std::fs::{self, File};
    use std::io::Write;
    use tempfile::tempdir;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn tree_activate_fills_table() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = tempdir()?;
        let mut f = File::create(tmp.path().join("data.bin"))?;
        f.write_all(&[0u8; 1500])?;
        drop(f);

        let config = Config::default();
        let mut app = AppState::from_dir(&config, tmp.path().to_path_buf());

        let result = app.handle_keypress(press(KeyCode::Enter));
        assert!(matches!(result, KeypressResult::Consumed));
        assert_eq!(app.session().rows().len(), 1);
        assert_eq!(app.session().rows()[0].size(), "1.5 kB");
        Ok(())
    }

    #[test]
    fn sort_keys_toggle_direction() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = tempdir()?;
        File::create(tmp.path().join("aa"))?;
        File::create(tmp.path().join("bb"))?;

        let config = Config::default();
        let mut app = AppState::from_dir(&config, tmp.path().to_path_buf());
        app.handle_keypress(press(KeyCode::Enter));

        app.handle_keypress(press(KeyCode::Char('1')));
        assert_eq!(app.session().rows()[0].name(), "aa");
        app.handle_keypress(press(KeyCode::Char('1')));
        assert_eq!(app.session().rows()[0].name(), "bb");
        Ok(())
    }

    #[test]
    fn tab_switches_focus_and_quit_quits() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = tempdir()?;
        fs::create_dir(tmp.path().join("sub"))?;

        let config = Config::default();
        let mut app = AppState::from_dir(&config, tmp.path().to_path_buf());
        assert_eq!(app.focus(), Focus::Tree);

        app.handle_keypress(press(KeyCode::Tab));
        assert_eq!(app.focus(), Focus::Table);

        assert!(matches!(
            app.handle_keypress(press(KeyCode::Char('q'))),
            KeypressResult::Quit
        ));
        Ok(())
    }

    #[test]
    fn toggling_tree_off_moves_focus_to_table() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = tempdir()?;
        let config = Config::default();
        let mut app = AppState::from_dir(&config, tmp.path().to_path_buf());

        app.handle_keypress(press(KeyCode::Char('f')));
        assert!(!app.show_tree());
        assert_eq!(app.focus(), Focus::Table);

        app.handle_keypress(press(KeyCode::Char('f')));
        assert!(app.show_tree());
        Ok(())
    }

    #[test]
    fn table_cursor_movement_selects_rows() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = tempdir()?;
        File::create(tmp.path().join("one"))?;
        File::create(tmp.path().join("two"))?;

        let config = Config::default();
        let mut app = AppState::from_dir(&config, tmp.path().to_path_buf());
        app.handle_keypress(press(KeyCode::Enter));
        assert!(app.session().selected().is_none());

        app.handle_keypress(press(KeyCode::Tab));
        app.handle_keypress(press(KeyCode::Down));
        assert!(app.session().selected().is_some());
        Ok(())
    }

    #[test]
    fn unbound_key_passes_through() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = tempdir()?;
        let config = Config::default();
        let mut app = AppState::from_dir(&config, tmp.path().to_path_buf());
        assert!(matches!(
            app.handle_keypress(press(KeyCode::Char('z'))),
            KeypressResult::Continue
        ));
        Ok(())
    }
}

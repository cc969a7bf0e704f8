//! Browser session state for tabla.
//!
//! [BrowserSession] owns everything the file table shows: the current
//! directory, the row set with its key map, the sort state and the
//! selection. Collaborator events (directory selected, header selected, row
//! selected, row activated) arrive as explicit method calls and are
//! processed to completion; there is no background work.
//!
//! Scan failures never escape this module. They become plain-text lines in
//! an error queue the UI drains into the status line, and the table is left
//! empty.

use crate::core::scan::{DirectoryEntry, scan_dir};
use crate::core::table::{Row, RowKey, SortState, build_rows, column_at, sort_rows};

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Lifecycle of the session.
///
/// `Scanning` only exists within one call to
/// [BrowserSession::on_directory_selected]; the scan is synchronous, so by
/// the time the call returns the session is `Ready` or `Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    Scanning,
    Ready,
    Error,
}

/// Holds the table-facing state of the browser.
pub struct BrowserSession {
    phase: SessionPhase,
    current_dir: Option<PathBuf>,
    rows: Vec<Row>,
    entries_by_key: HashMap<RowKey, DirectoryEntry>,
    next_key: u64,
    sort: Option<SortState>,
    selected: Option<RowKey>,
    date_format: String,
    show_hidden: bool,
    error_lines: Vec<String>,
}

impl BrowserSession {
    pub fn new(date_format: &str, show_hidden: bool) -> Self {
        Self {
            phase: SessionPhase::Idle,
            current_dir: None,
            rows: Vec::new(),
            entries_by_key: HashMap::new(),
            next_key: 0,
            sort: None,
            selected: None,
            date_format: date_format.to_string(),
            show_hidden,
            error_lines: Vec::new(),
        }
    }

    // Accessors

    #[inline]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[inline]
    pub fn current_dir(&self) -> Option<&Path> {
        self.current_dir.as_deref()
    }

    #[inline]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[inline]
    pub fn sort(&self) -> Option<SortState> {
        self.sort
    }

    #[inline]
    pub fn selected(&self) -> Option<RowKey> {
        self.selected
    }

    /// Drains the queued plain-text error lines for display.
    pub fn take_error_lines(&mut self) -> Vec<String> {
        std::mem::take(&mut self.error_lines)
    }

    /// Reacts to the navigation pane choosing a directory.
    ///
    /// Rows, key map and selection are discarded before the scan and
    /// rebuilt together from the snapshot, so a stale key can never resolve
    /// against the new row set. An existing sort order is reapplied to the
    /// new rows; it is not reset by a directory change. On failure the
    /// table stays empty and exactly one error line is queued.
    pub fn on_directory_selected(&mut self, path: &Path) {
        self.phase = SessionPhase::Scanning;
        self.rows.clear();
        self.entries_by_key.clear();
        self.selected = None;
        self.current_dir = Some(path.to_path_buf());

        match scan_dir(path) {
            Ok(mut entries) => {
                if !self.show_hidden {
                    entries.retain(|e| !e.is_hidden());
                }
                let (rows, by_key) = build_rows(entries, &self.date_format, &mut self.next_key);
                self.rows = rows;
                self.entries_by_key = by_key;

                if let Some(sort) = self.sort
                    && let Err(e) = sort_rows(&mut self.rows, sort.column, sort.reverse)
                {
                    self.error_lines.push(e.to_string());
                }
                self.phase = SessionPhase::Ready;
            }
            Err(e) => {
                self.error_lines.push(e.to_string());
                self.phase = SessionPhase::Error;
            }
        }
    }

    /// Reacts to a header click on the given column index.
    ///
    /// Clicking the active column flips the direction; any other column
    /// becomes active ascending. Ignored unless the session is `Ready`. The
    /// new sort state is committed only if the re-sort succeeds, so a
    /// malformed size string leaves both order and state untouched.
    pub fn on_header_selected(&mut self, column_index: usize) {
        if self.phase != SessionPhase::Ready {
            return;
        }
        let Some(column) = column_at(column_index) else {
            return;
        };

        let next = match self.sort {
            Some(sort) if sort.column == column.id() => SortState {
                column: sort.column,
                reverse: !sort.reverse,
            },
            _ => SortState {
                column: column.id(),
                reverse: false,
            },
        };

        match sort_rows(&mut self.rows, next.column, next.reverse) {
            Ok(()) => self.sort = Some(next),
            Err(e) => self.error_lines.push(e.to_string()),
        }
    }

    /// Records the row the table cursor landed on.
    pub fn on_row_selected(&mut self, key: RowKey) {
        self.selected = Some(key);
    }

    /// Reacts to a row activation (double click / enter).
    ///
    /// Resolves the selected key through the current key map and hands the
    /// entry's absolute path to the open collaborator. A missing selection
    /// or a key from a previous row set is a no-op.
    pub fn on_row_activated<F: FnMut(&Path)>(&self, mut open: F) {
        if let Some(key) = self.selected
            && let Some(entry) = self.entries_by_key.get(&key)
        {
            open(entry.path());
        }
    }

    /// Position of the selected row in the current ordering, if any.
    pub fn selected_position(&self) -> Option<usize> {
        let key = self.selected?;
        self.rows.iter().position(|row| row.key() == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    fn session() -> BrowserSession {
        BrowserSession::new(DATE_FORMAT, true)
    }

    fn write_file(
        dir: &Path,
        name: &str,
        len: usize,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut f = File::create(dir.join(name))?;
        f.write_all(&vec![b'x'; len])?;
        Ok(())
    }

    #[test]
    fn starts_idle_and_empty() {
        let s = session();
        assert_eq!(s.phase(), SessionPhase::Idle);
        assert!(s.rows().is_empty());
        assert!(s.selected().is_none());
        assert!(s.sort().is_none());
    }

    #[test]
    fn scan_failure_queues_one_error_line() {
        let mut s = session();
        s.on_directory_selected(Path::new("/path/does/not/exist"));
        assert_eq!(s.phase(), SessionPhase::Error);
        assert!(s.rows().is_empty());
        assert_eq!(s.take_error_lines().len(), 1);
        // Drained; nothing left behind.
        assert!(s.take_error_lines().is_empty());
    }

    #[test]
    fn empty_directory_is_ready_with_no_error() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = tempdir()?;
        let mut s = session();
        s.on_directory_selected(tmp.path());
        assert_eq!(s.phase(), SessionPhase::Ready);
        assert!(s.rows().is_empty());
        assert!(s.take_error_lines().is_empty());
        Ok(())
    }

    #[test]
    fn header_click_toggles_and_switches() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = tempdir()?;
        write_file(tmp.path(), "a.txt", 10)?;
        write_file(tmp.path(), "b.txt", 20)?;

        let mut s = session();
        s.on_directory_selected(tmp.path());

        s.on_header_selected(1);
        assert_eq!(
            s.sort(),
            Some(SortState {
                column: crate::core::table::ColumnId::Size,
                reverse: false
            })
        );
        assert_eq!(s.rows()[0].name(), "a.txt");

        // Same header again: direction flips.
        s.on_header_selected(1);
        assert_eq!(s.sort().map(|st| st.reverse), Some(true));
        assert_eq!(s.rows()[0].name(), "b.txt");

        // Different header: ascending again.
        s.on_header_selected(0);
        assert_eq!(
            s.sort(),
            Some(SortState {
                column: crate::core::table::ColumnId::Name,
                reverse: false
            })
        );
        Ok(())
    }

    #[test]
    fn header_click_outside_ready_is_ignored() {
        let mut s = session();
        s.on_header_selected(0);
        assert!(s.sort().is_none());
    }

    #[test]
    fn sort_survives_directory_change() -> Result<(), Box<dyn std::error::Error>> {
        let first = tempdir()?;
        write_file(first.path(), "one.txt", 1)?;
        let second = tempdir()?;
        write_file(second.path(), "bigger.txt", 2000)?;
        write_file(second.path(), "tiny.txt", 5)?;

        let mut s = session();
        s.on_directory_selected(first.path());
        s.on_header_selected(1);

        s.on_directory_selected(second.path());
        assert!(s.sort().is_some(), "sort state must not reset on rescan");
        assert_eq!(s.rows()[0].name(), "tiny.txt");
        Ok(())
    }

    #[test]
    fn activation_without_selection_is_noop() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = tempdir()?;
        write_file(tmp.path(), "a.txt", 1)?;

        let mut s = session();
        s.on_directory_selected(tmp.path());

        let mut opened: Vec<PathBuf> = Vec::new();
        s.on_row_activated(|p| opened.push(p.to_path_buf()));
        assert!(opened.is_empty());
        Ok(())
    }

    #[test]
    fn activation_resolves_selected_path() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = tempdir()?;
        write_file(tmp.path(), "target.txt", 1)?;

        let mut s = session();
        s.on_directory_selected(tmp.path());
        let key = s.rows()[0].key();
        s.on_row_selected(key);

        let mut opened: Vec<PathBuf> = Vec::new();
        s.on_row_activated(|p| opened.push(p.to_path_buf()));
        assert_eq!(opened, vec![tmp.path().join("target.txt")]);
        Ok(())
    }

    #[test]
    fn stale_key_after_directory_change_is_noop() -> Result<(), Box<dyn std::error::Error>> {
        let first = tempdir()?;
        write_file(first.path(), "old.txt", 1)?;
        let second = tempdir()?;
        write_file(second.path(), "new.txt", 1)?;

        let mut s = session();
        s.on_directory_selected(first.path());
        let old_key = s.rows()[0].key();
        s.on_row_selected(old_key);

        s.on_directory_selected(second.path());
        assert!(s.selected().is_none(), "selection cleared by rescan");

        // Even if a stale key sneaks back in, it must not resolve.
        s.on_row_selected(old_key);
        let mut opened: Vec<PathBuf> = Vec::new();
        s.on_row_activated(|p| opened.push(p.to_path_buf()));
        assert!(opened.is_empty());
        Ok(())
    }

    #[test]
    fn hidden_entries_filtered_when_configured() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = tempdir()?;
        write_file(tmp.path(), ".hidden", 1)?;
        write_file(tmp.path(), "shown.txt", 1)?;

        let mut s = BrowserSession::new(DATE_FORMAT, false);
        s.on_directory_selected(tmp.path());
        assert_eq!(s.rows().len(), 1);
        assert_eq!(s.rows()[0].name(), "shown.txt");
        Ok(())
    }
}

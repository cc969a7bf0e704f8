//! Core engine logic for tabla.
//!
//! The non-UI pieces of the browser:
//! - [scan]: one-shot directory enumeration (see [scan_dir], [DirectoryEntry]).
//! - [size]: SI byte-size formatting and its inverse parser.
//! - [table]: the row model, column descriptors and the stable sort engine.
//! - [terminal]: terminal setup/teardown and the crossterm/ratatui event loop.
//!
//! Most callers import [scan_dir], [DirectoryEntry] and the table types
//! from here.

pub mod scan;
pub mod size;
pub mod table;
pub mod terminal;

pub use scan::{DirectoryEntry, SIZE_UNKNOWN, ScanError, scan_dir};
pub use size::{SizeParseError, format_si, parse_si};
pub use table::{COLUMNS, Column, ColumnId, Row, RowKey, SortState, build_rows, format_time, sort_rows};

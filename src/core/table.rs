//! Row model, column descriptors and the sort engine for the file table.
//!
//! A [Row] is the display projection of a [DirectoryEntry]: three formatted
//! strings plus a stable [RowKey] pointing back at the entry that produced
//! it, so selection and activation survive any reordering. Columns live in
//! one static [COLUMNS] table that maps each column to its sort-key
//! function; the size column parses its formatted string back into bytes so
//! it sorts numerically.

use crate::core::scan::DirectoryEntry;
use crate::core::size::{SizeParseError, format_si, parse_si};

use chrono::{DateTime, Local};

use std::cmp::Ordering;
use std::collections::HashMap;
use std::time::SystemTime;

/// Stable identifier linking a displayed row back to its source entry.
///
/// Assigned at insertion and never reused within a session, so a key from a
/// previous row set can be detected as stale instead of resolving to the
/// wrong entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowKey(u64);

/// One formatted table row.
#[derive(Debug, Clone)]
pub struct Row {
    key: RowKey,
    name: String,
    size: String,
    modified: String,
}

impl Row {
    #[inline]
    pub fn key(&self) -> RowKey {
        self.key
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn size(&self) -> &str {
        &self.size
    }

    #[inline]
    pub fn modified(&self) -> &str {
        &self.modified
    }
}

/// Identifies one of the three table columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnId {
    Name,
    Size,
    Modified,
}

/// Sortable key derived from a row for one column.
enum SortKey {
    Text(String),
    Bytes(f64),
}

impl SortKey {
    fn compare(&self, other: &SortKey) -> Ordering {
        match (self, other) {
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            (SortKey::Bytes(a), SortKey::Bytes(b)) => {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            // Keys for one sort always come from the same column.
            _ => Ordering::Equal,
        }
    }
}

/// Static column descriptor: title plus the function that derives a sort
/// key from a row.
pub struct Column {
    id: ColumnId,
    title: &'static str,
    key_fn: fn(&Row) -> Result<SortKey, SizeParseError>,
}

impl Column {
    #[inline]
    pub fn id(&self) -> ColumnId {
        self.id
    }

    #[inline]
    pub fn title(&self) -> &'static str {
        self.title
    }
}

fn name_key(row: &Row) -> Result<SortKey, SizeParseError> {
    Ok(SortKey::Text(row.name.clone()))
}

fn size_key(row: &Row) -> Result<SortKey, SizeParseError> {
    Ok(SortKey::Bytes(parse_si(&row.size)?))
}

fn modified_key(row: &Row) -> Result<SortKey, SizeParseError> {
    Ok(SortKey::Text(row.modified.clone()))
}

/// The table's columns, in display order. Header indices from the UI map
/// straight into this array.
pub const COLUMNS: [Column; 3] = [
    Column {
        id: ColumnId::Name,
        title: "Name",
        key_fn: name_key,
    },
    Column {
        id: ColumnId::Size,
        title: "Size",
        key_fn: size_key,
    },
    Column {
        id: ColumnId::Modified,
        title: "Modified",
        key_fn: modified_key,
    },
];

/// Looks up a column by header index. Out-of-range indices yield `None`.
pub fn column_at(index: usize) -> Option<&'static Column> {
    COLUMNS.get(index)
}

fn column_for(id: ColumnId) -> &'static Column {
    match id {
        ColumnId::Name => &COLUMNS[0],
        ColumnId::Size => &COLUMNS[1],
        ColumnId::Modified => &COLUMNS[2],
    }
}

/// Current sort of the table: active column and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub column: ColumnId,
    pub reverse: bool,
}

/// Formats a modification time for display, `-` when unknown.
pub fn format_time(modified: Option<SystemTime>, format: &str) -> String {
    modified
        .map(|mtime| {
            let dt: DateTime<Local> = DateTime::from(mtime);
            dt.format(format).to_string()
        })
        .unwrap_or_else(|| "-".to_string())
}

/// Projects scanned entries into rows, assigning each a fresh key.
///
/// The row list and the key map are built together from the same batch;
/// callers replace both at once so a key can never outlive the entry it
/// points at.
pub fn build_rows(
    entries: Vec<DirectoryEntry>,
    date_format: &str,
    next_key: &mut u64,
) -> (Vec<Row>, HashMap<RowKey, DirectoryEntry>) {
    let mut rows = Vec::with_capacity(entries.len());
    let mut by_key = HashMap::with_capacity(entries.len());

    for entry in entries {
        let key = RowKey(*next_key);
        *next_key = next_key.wrapping_add(1);

        rows.push(Row {
            key,
            name: entry.name().to_string_lossy().into_owned(),
            size: format_si(entry.size_bytes()),
            modified: format_time(entry.modified(), date_format),
        });
        by_key.insert(key, entry);
    }

    (rows, by_key)
}

/// Stable-sorts `rows` by `column`, optionally reversed.
///
/// All sort keys are derived before anything moves, so a size string that
/// fails to parse aborts the sort with the rows in their previous order
/// instead of half-sorted. Equal rows keep their relative order, which
/// makes repeated identical sorts idempotent.
pub fn sort_rows(
    rows: &mut Vec<Row>,
    column: ColumnId,
    reverse: bool,
) -> Result<(), SizeParseError> {
    let col = column_for(column);

    let mut keys = Vec::with_capacity(rows.len());
    for row in rows.iter() {
        keys.push((col.key_fn)(row)?);
    }

    let old = std::mem::take(rows);
    let mut keyed: Vec<(SortKey, Row)> = keys.into_iter().zip(old).collect();
    keyed.sort_by(|a, b| {
        let ord = a.0.compare(&b.0);
        if reverse { ord.reverse() } else { ord }
    });
    rows.extend(keyed.into_iter().map(|(_, row)| row));

    Ok(())
}

//! Directory snapshot logic for tabla.
//!
//! Provides the [DirectoryEntry] record and [scan_dir], which captures the
//! immediate children of one directory at the moment of the call. No sorting
//! or filtering happens here; the table layer decides presentation order.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use thiserror::Error;

/// Size recorded for children whose metadata could not be read.
pub const SIZE_UNKNOWN: i64 = -1;

/// Error raised when a directory cannot be enumerated.
///
/// Carries the offending path so the message can be shown as-is in the
/// status line. A failed scan produces zero entries.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("directory not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },
    #[error("permission denied: {}", path.display())]
    PermissionDenied { path: PathBuf },
    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScanError {
    fn from_io(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => ScanError::NotFound {
                path: path.to_path_buf(),
            },
            io::ErrorKind::PermissionDenied => ScanError::PermissionDenied {
                path: path.to_path_buf(),
            },
            io::ErrorKind::NotADirectory => ScanError::NotADirectory {
                path: path.to_path_buf(),
            },
            _ => ScanError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }
}

/// One filesystem child captured at scan time.
///
/// Immutable once created; the row set that produced it owns it and the
/// whole batch is discarded on the next scan. The size is signed so sentinel
/// values like [SIZE_UNKNOWN] fit alongside real lengths.
#[derive(Debug, Clone)]
pub struct DirectoryEntry {
    name: OsString,
    size_bytes: i64,
    modified: Option<SystemTime>,
    path: PathBuf,
}

impl DirectoryEntry {
    #[inline]
    pub fn name(&self) -> &OsString {
        &self.name
    }

    #[inline]
    pub fn size_bytes(&self) -> i64 {
        self.size_bytes
    }

    #[inline]
    pub fn modified(&self) -> Option<SystemTime> {
        self.modified
    }

    /// Absolute path of the entry, opaque to formatting. This is what the
    /// open collaborator receives on activation.
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[inline]
    pub fn is_hidden(&self) -> bool {
        self.name.to_string_lossy().starts_with('.')
    }
}

/// Enumerates the immediate children of `path` into a snapshot.
///
/// Files and directories alike are listed, in whatever order the filesystem
/// yields them. Metadata follows symlinks; a child whose metadata cannot be
/// read is still listed with [SIZE_UNKNOWN] and no modified time rather
/// than dropped.
pub fn scan_dir(path: &Path) -> Result<Vec<DirectoryEntry>, ScanError> {
    let meta = fs::metadata(path).map_err(|e| ScanError::from_io(path, e))?;
    if !meta.is_dir() {
        return Err(ScanError::NotADirectory {
            path: path.to_path_buf(),
        });
    }

    let read_dir = fs::read_dir(path).map_err(|e| ScanError::from_io(path, e))?;
    let mut entries = Vec::with_capacity(64);

    for entry in read_dir {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };
        let entry_path = entry.path();
        let name = entry.file_name();

        match fs::metadata(&entry_path) {
            Ok(md) => entries.push(DirectoryEntry {
                name,
                size_bytes: i64::try_from(md.len()).unwrap_or(i64::MAX),
                modified: md.modified().ok(),
                path: entry_path,
            }),
            Err(_) => entries.push(DirectoryEntry {
                name,
                size_bytes: SIZE_UNKNOWN,
                modified: None,
                path: entry_path,
            }),
        }
    }

    Ok(entries)
}

//! Directory tree navigation state for tabla.
//!
//! The left pane shows directories only, as a flattened expandable tree
//! rooted at the starting directory. Expanding a node scans it and splices
//! its subdirectories in below; collapsing removes the subtree. The cursor
//! node is what a "select" action hands to the browser session.

use crate::core::scan::{ScanError, scan_dir};

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// One visible node of the flattened tree.
#[derive(Debug, Clone)]
pub struct TreeNode {
    path: PathBuf,
    name: OsString,
    depth: usize,
    expanded: bool,
}

impl TreeNode {
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[inline]
    pub fn name(&self) -> &OsString {
        &self.name
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    #[inline]
    pub fn expanded(&self) -> bool {
        self.expanded
    }
}

/// Flattened tree of directories with a cursor.
pub struct TreeState {
    nodes: Vec<TreeNode>,
    cursor: usize,
    show_hidden: bool,
}

impl TreeState {
    /// Creates a tree with the root node collapsed. Call [TreeState::expand]
    /// afterwards to populate the first level.
    pub fn new(root: PathBuf, show_hidden: bool) -> Self {
        let name = root
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| root.as_os_str().to_os_string());
        Self {
            nodes: vec![TreeNode {
                path: root,
                name,
                depth: 0,
                expanded: false,
            }],
            cursor: 0,
            show_hidden,
        }
    }

    // Accessors

    #[inline]
    pub fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Path of the cursor node.
    pub fn selected_path(&self) -> &Path {
        &self.nodes[self.cursor].path
    }

    /// Moves the cursor up one node, wrapping at the top.
    pub fn move_up(&mut self) {
        if self.cursor == 0 {
            self.cursor = self.nodes.len() - 1;
        } else {
            self.cursor -= 1;
        }
    }

    /// Moves the cursor down one node, wrapping at the bottom.
    pub fn move_down(&mut self) {
        self.cursor = (self.cursor + 1) % self.nodes.len();
    }

    pub fn move_to_top(&mut self) {
        self.cursor = 0;
    }

    pub fn move_to_bottom(&mut self) {
        self.cursor = self.nodes.len() - 1;
    }

    /// Expands the cursor node, splicing its subdirectories in below it.
    ///
    /// Only directories appear in the tree; plain files are skipped.
    /// Children are listed case-insensitively by name. Expanding an already
    /// expanded node is a no-op.
    pub fn expand(&mut self) -> Result<(), ScanError> {
        let node = &self.nodes[self.cursor];
        if node.expanded {
            return Ok(());
        }
        let parent_path = node.path.clone();
        let depth = node.depth;

        let mut children: Vec<TreeNode> = scan_dir(&parent_path)?
            .into_iter()
            .filter(|e| e.path().is_dir())
            .filter(|e| self.show_hidden || !e.is_hidden())
            .map(|e| TreeNode {
                path: e.path().to_path_buf(),
                name: e.name().clone(),
                depth: depth + 1,
                expanded: false,
            })
            .collect();
        children.sort_by(|a, b| {
            a.name
                .to_string_lossy()
                .to_lowercase()
                .cmp(&b.name.to_string_lossy().to_lowercase())
        });

        self.nodes[self.cursor].expanded = true;
        let insert_at = self.cursor + 1;
        self.nodes.splice(insert_at..insert_at, children);
        Ok(())
    }

    /// Collapses the cursor node, removing every node below it that is
    /// deeper. A collapsed node is left as-is.
    pub fn collapse(&mut self) {
        let node = &self.nodes[self.cursor];
        if !node.expanded {
            return;
        }
        let depth = node.depth;
        let start = self.cursor + 1;
        let end = self.nodes[start..]
            .iter()
            .position(|n| n.depth <= depth)
            .map(|offset| start + offset)
            .unwrap_or(self.nodes.len());

        self.nodes.drain(start..end);
        self.nodes[self.cursor].expanded = false;
    }
}

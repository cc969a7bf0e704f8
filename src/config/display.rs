//! Display configuration options for tabla.
//!
//! Defines the `[display]` section of `tabla.toml`: whether the tree pane
//! starts visible, pane borders and titles, and the horizontal split
//! between tree and table.

use serde::Deserialize;

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Display {
    tree: bool,
    borders: bool,
    titles: bool,
    layout: LayoutSplit,
}

/// Width percentages for the two panes. Values are clamped so the pair
/// always sums to something renderable.
#[derive(Deserialize, Debug, Clone, Copy)]
#[serde(default)]
pub struct LayoutSplit {
    tree: u16,
    table: u16,
}

impl Default for Display {
    fn default() -> Self {
        Display {
            tree: true,
            borders: true,
            titles: true,
            layout: LayoutSplit::default(),
        }
    }
}

impl Default for LayoutSplit {
    fn default() -> Self {
        LayoutSplit {
            tree: 30,
            table: 70,
        }
    }
}

impl Display {
    #[inline]
    pub fn tree(&self) -> bool {
        self.tree
    }

    #[inline]
    pub fn borders(&self) -> bool {
        self.borders
    }

    #[inline]
    pub fn titles(&self) -> bool {
        self.titles
    }

    #[inline]
    pub fn layout(&self) -> LayoutSplit {
        self.layout
    }
}

impl LayoutSplit {
    #[inline]
    pub fn tree_percent(&self) -> u16 {
        self.tree.clamp(10, 90)
    }

    #[inline]
    pub fn table_percent(&self) -> u16 {
        self.table.clamp(10, 90)
    }
}

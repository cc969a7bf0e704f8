//! Terminal UI for tabla.
//!
//! - [render]: the per-frame entry point and layout helpers.
//! - [widgets]: pane blocks and small text-fitting helpers shared by the
//!   tree and table panes.

pub mod render;
pub mod widgets;

pub use render::{layout_chunks, render};

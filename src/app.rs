//! Application state and event handling for tabla.
//!
//! - [session]: the browser session driving the file table.
//! - [tree]: the directory-only navigation tree.
//! - [state]: the top-level [AppState] tying config, keymap, panes and
//!   session together.
//! - [handlers]: keypress dispatch into session/tree events.
//! - [keymap]: key-to-action resolution.

pub mod handlers;
pub mod keymap;
pub mod session;
pub mod state;
pub mod tree;

pub use session::{BrowserSession, SessionPhase};
pub use state::{AppState, Focus, KeypressResult};
pub use tree::{TreeNode, TreeState};

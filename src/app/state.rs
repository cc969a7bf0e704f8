//! Application state and main controller module for tabla.
//!
//! [AppState] ties the pieces together for the lifetime of the TUI:
//! - the loaded configuration and the keymap built from it
//! - the directory tree pane state
//! - the browser session backing the file table
//! - which pane has focus, the table cursor, and the status line
//!
//! It is the context object handed to the terminal loop and the renderer.
//! All mutation happens inside its own event handlers (see
//! [crate::app::handlers]); nothing else writes to this state.

use crate::app::keymap::Keymap;
use crate::app::session::BrowserSession;
use crate::app::tree::TreeState;
use crate::config::Config;
use crate::utils::get_home;

use std::io;
use std::path::PathBuf;

/// How a keypress was handled by the app.
pub enum KeypressResult {
    Continue,
    Consumed,
    Quit,
}

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Tree,
    Table,
}

/// Central application state of tabla.
pub struct AppState<'a> {
    pub(super) config: &'a Config,
    pub(super) keymap: Keymap,

    pub(super) tree: TreeState,
    pub(super) session: BrowserSession,

    pub(super) focus: Focus,
    pub(super) show_tree: bool,
    pub(super) cursor: usize,
    pub(super) status: Option<String>,
}

impl<'a> AppState<'a> {
    /// Creates the app rooted at the user's home directory, falling back to
    /// the current directory when no home is known.
    pub fn new(config: &'a Config) -> io::Result<Self> {
        let root = match get_home() {
            Some(home) => home,
            None => std::env::current_dir()?,
        };
        Ok(Self::from_dir(config, root))
    }

    /// Creates the app rooted at `root`. The tree's first level is expanded
    /// immediately; an expansion failure becomes the initial status line
    /// instead of aborting startup.
    pub fn from_dir(config: &'a Config, root: PathBuf) -> Self {
        let show_hidden = config.general().show_hidden();

        let mut app = Self {
            config,
            keymap: Keymap::from_config(config),
            tree: TreeState::new(root, show_hidden),
            session: BrowserSession::new(config.general().date_format(), show_hidden),
            focus: Focus::Tree,
            show_tree: config.display().tree(),
            cursor: 0,
            status: None,
        };

        if let Err(e) = app.tree.expand() {
            app.status = Some(e.to_string());
        }
        app
    }

    // Getters / accessors

    #[inline]
    pub fn config(&self) -> &Config {
        self.config
    }

    #[inline]
    pub fn tree(&self) -> &TreeState {
        &self.tree
    }

    #[inline]
    pub fn session(&self) -> &BrowserSession {
        &self.session
    }

    #[inline]
    pub fn focus(&self) -> Focus {
        self.focus
    }

    #[inline]
    pub fn show_tree(&self) -> bool {
        self.show_tree
    }

    #[inline]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Table cursor position, `None` while the table is empty.
    pub fn table_cursor(&self) -> Option<usize> {
        if self.session.rows().is_empty() {
            None
        } else {
            Some(self.cursor.min(self.session.rows().len() - 1))
        }
    }

    /// Replaces the status line. Used for startup notices and by the
    /// handlers for error reporting.
    pub fn set_status(&mut self, message: String) {
        self.status = Some(message);
    }
}

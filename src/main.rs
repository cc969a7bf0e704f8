//! main.rs
//! Entry point for tabla

pub(crate) mod app;
pub(crate) mod config;
pub(crate) mod core;
pub(crate) mod ui;
pub(crate) mod utils;

use crate::app::AppState;
use crate::config::Config;
use crate::core::terminal;
use crate::utils::cli::{CliAction, handle_args};

fn main() -> std::io::Result<()> {
    std::panic::set_hook(Box::new(|info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let mut stdout = std::io::stdout();
        let _ = crossterm::execute!(
            stdout,
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::cursor::Show
        );

        eprintln!("\n[tabla] Error occurred: {}", info);

        #[cfg(debug_assertions)]
        {
            let bt = std::backtrace::Backtrace::force_capture();
            eprintln!("\nStack Backtrace:\n{}", bt);
        }
    }));

    let action = handle_args();

    if let CliAction::Exit = action {
        return Ok(());
    }

    let config = Config::load();
    let mut app = AppState::new(&config)?;

    // The PATH argument is accepted but not applied yet; the browser always
    // starts at the home directory. Surface that instead of dropping it.
    if let CliAction::RunAppAtPath(path_arg) = action {
        app.set_status(format!(
            "note: '{}' is ignored for now; starting at the home directory",
            path_arg
        ));
    }

    terminal::run_terminal(&mut app)
}

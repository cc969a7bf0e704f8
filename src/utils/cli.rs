//! Command-line argument parsing and help for tabla.
//!
//! When invoked with no args/flags (tb), tabla simply launches the TUI.

use crate::config::Config;

pub enum CliAction {
    RunApp,
    RunAppAtPath(String),
    Exit,
}

pub fn handle_args() -> CliAction {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        return CliAction::RunApp;
    }

    if args.len() > 2 {
        eprintln!("Error: tabla accepts only one argument at a time.");
        eprintln!("Usage: tb [PATH] or tb [OPTION]");
        return CliAction::Exit;
    }

    match args[1].as_str() {
        "--version" | "-v" => {
            print_version();
            CliAction::Exit
        }
        "-h" | "--help" => {
            print_help();
            CliAction::Exit
        }
        "--keybinds" | "--keybind" | "--key" => {
            print_keybinds();
            CliAction::Exit
        }
        "--init" => {
            if let Err(e) = Config::generate_default(&Config::default_path()) {
                eprintln!("Error: {}", e);
            }
            CliAction::Exit
        }
        arg if !arg.starts_with('-') && !arg.trim().is_empty() => {
            CliAction::RunAppAtPath(arg.to_string())
        }
        arg => {
            eprintln!("Unknown argument: {}", arg);
            eprintln!("Try --help for available options");
            CliAction::Exit
        }
    }
}

fn print_version() {
    println!("tabla {}", env!("CARGO_PKG_VERSION"));
}

fn print_help() {
    println!(
        r#"tabla - a terminal file browser with a sortable directory table

USAGE:
  tb [PATH]

PATH:
  Accepted for forward compatibility but not used yet: the browser
  always starts at your home directory.

OPTIONS:
      --init              Generate a default configuration file
      --keybinds          Display all the default keybinds
  -h, --help              Print help information
  -v, --version           Display the current installed version of tabla

ENVIRONMENT:
  TABLA_CONFIG            Override the default config path
"#
    );
}

const KEYBINDS_TEXT: &str = r##"
=========================
 Key Bindings
=========================
[keys]
  up                        ["k", "up"]
  down                      ["j", "down"]
  top                       ["g"]
  bottom                    ["G"]
  expand                    ["l", "right"]     (tree pane)
  collapse                  ["h", "left"]      (tree pane)
  activate                  ["enter"]          (tree: show directory, table: open file)
  sort_name                 ["1"]
  sort_size                 ["2"]
  sort_modified             ["3"]
  quit                      ["q", "esc"]
  toggle_tree               ["f"]
  focus_next                ["tab"]

  Pressing a sort key again flips the direction; a different sort key
  starts ascending.

  Syntax Reference:
    Modifiers: <c-x> (Ctrl), <m-x>/<a-x> (Alt/Meta), <s-x> (Shift)
    Standard:  ctrl+x, alt+x, shift+x
    Special:   "space", "back", "enter", "esc", "tab"
"##;

fn print_keybinds() {
    println!("{}", KEYBINDS_TEXT);
}

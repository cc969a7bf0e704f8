//! Input configuration options for tabla.
//!
//! Defines the `[keys]` section of `tabla.toml`. Each action takes a list
//! of key strings; parsing into actual key codes happens in the keymap.

use serde::Deserialize;

/// Key bindings for every action.
#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Keys {
    up: Vec<String>,
    down: Vec<String>,
    top: Vec<String>,
    bottom: Vec<String>,
    expand: Vec<String>,
    collapse: Vec<String>,
    activate: Vec<String>,
    sort_name: Vec<String>,
    sort_size: Vec<String>,
    sort_modified: Vec<String>,
    quit: Vec<String>,
    toggle_tree: Vec<String>,
    focus_next: Vec<String>,
}

macro_rules! accessor {
    ($($name:ident),+ $(,)?) => {
        impl Keys {
            $(
                #[inline]
                pub fn $name(&self) -> &[String] {
                    &self.$name
                }
            )+
        }
    };
}

accessor!(
    up,
    down,
    top,
    bottom,
    expand,
    collapse,
    activate,
    sort_name,
    sort_size,
    sort_modified,
    quit,
    toggle_tree,
    focus_next,
);

impl Default for Keys {
    fn default() -> Self {
        Keys {
            up: vec!["k".into(), "Up".into()],
            down: vec!["j".into(), "Down".into()],
            top: vec!["g".into()],
            bottom: vec!["G".into()],
            expand: vec!["l".into(), "Right".into()],
            collapse: vec!["h".into(), "Left".into()],
            activate: vec!["Enter".into()],

            sort_name: vec!["1".into()],
            sort_size: vec!["2".into()],
            sort_modified: vec!["3".into()],

            quit: vec!["q".into(), "Esc".into()],
            toggle_tree: vec!["f".into()],
            focus_next: vec!["Tab".into()],
        }
    }
}

//! Key mapping and action dispatch for tabla.
//!
//! Key strings from the config (`"q"`, `"Ctrl+f"`, `"<c-f>"`, `"enter"`,
//! ...) are parsed into [Key] values and stored in a hashmap keyed by key
//! code + modifiers. Lookup happens once per key event in the terminal
//! loop.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Any action the app reacts to: pane navigation, a sort request, or a
/// system-level command.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Action {
    Nav(NavAction),
    Sort(SortAction),
    System(SystemAction),
}

/// Movement and tree manipulation within the focused pane.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum NavAction {
    Up,
    Down,
    Top,
    Bottom,
    Expand,
    Collapse,
    Activate,
}

/// Header selection, one per table column.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum SortAction {
    Name,
    Size,
    Modified,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum SystemAction {
    Quit,
    ToggleTree,
    FocusNext,
}

/// Key + modifiers as bound in the config.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub(crate) struct Key {
    pub(crate) code: KeyCode,
    pub(crate) modifiers: KeyModifiers,
}

/// Mapping from key to action, built once from the config.
pub(crate) struct Keymap {
    map: HashMap<Key, Action>,
}

impl Keymap {
    #[rustfmt::skip]
    pub(crate) fn from_config(config: &crate::config::Config) -> Self {
        let mut map = HashMap::new();
        let keys = config.keys();

        use NavAction as N;
        use SortAction as So;
        use SystemAction as Sy;

        bind(keys.up(),            Action::Nav(N::Up),             &mut map);
        bind(keys.down(),          Action::Nav(N::Down),           &mut map);
        bind(keys.top(),           Action::Nav(N::Top),            &mut map);
        bind(keys.bottom(),        Action::Nav(N::Bottom),         &mut map);
        bind(keys.expand(),        Action::Nav(N::Expand),         &mut map);
        bind(keys.collapse(),      Action::Nav(N::Collapse),       &mut map);
        bind(keys.activate(),      Action::Nav(N::Activate),       &mut map);

        bind(keys.sort_name(),     Action::Sort(So::Name),         &mut map);
        bind(keys.sort_size(),     Action::Sort(So::Size),         &mut map);
        bind(keys.sort_modified(), Action::Sort(So::Modified),     &mut map);

        bind(keys.quit(),          Action::System(Sy::Quit),       &mut map);
        bind(keys.toggle_tree(),   Action::System(Sy::ToggleTree), &mut map);
        bind(keys.focus_next(),    Action::System(Sy::FocusNext),  &mut map);

        Keymap { map }
    }

    /// Looks up the action for a key event. A shifted character that has no
    /// binding of its own falls back to the shift-less binding.
    pub(crate) fn lookup(&self, key: KeyEvent) -> Option<Action> {
        let k = Key {
            code: key.code,
            modifiers: key.modifiers,
        };

        if let Some(action) = self.map.get(&k).copied() {
            return Some(action);
        }

        if matches!(key.code, KeyCode::Char(_)) && key.modifiers.contains(KeyModifiers::SHIFT) {
            let k2 = Key {
                code: key.code,
                modifiers: key.modifiers - KeyModifiers::SHIFT,
            };
            return self.map.get(&k2).copied();
        }
        None
    }
}

fn bind(key_list: &[String], action: Action, map: &mut HashMap<Key, Action>) {
    for k in key_list {
        if let Some(key) = parse_key(k) {
            map.insert(key, action);
        }
    }
}

/// Parses one key string from the config.
///
/// Accepts plain characters (`"q"`), named keys (`"enter"`, `"tab"`),
/// `Modifier+key` combinations, and bracketed vim-style shorthand
/// (`"<c-f>"`). Returns `None` for anything unrecognized; the binding is
/// simply skipped.
fn parse_key(s: &str) -> Option<Key> {
    let mut modifiers = KeyModifiers::NONE;
    let mut code: Option<KeyCode> = None;

    let is_bracketed = s.starts_with('<') && s.ends_with('>');
    let mut input = s.trim_start_matches('<').trim_end_matches('>').to_string();

    if is_bracketed && input.contains('-') {
        let parts: Vec<&str> = input.split('-').collect();
        for &prefix in parts.iter().take(parts.len().saturating_sub(1)) {
            match prefix.to_lowercase().as_str() {
                "c" | "ctrl" => modifiers |= KeyModifiers::CONTROL,
                "a" | "m" | "alt" => modifiers |= KeyModifiers::ALT,
                "s" | "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return None,
            }
        }
        input = parts.last()?.to_string();
    }

    for part in input.split('+') {
        let p_low = part.to_lowercase();
        match p_low.as_str() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "alt" | "meta" => modifiers |= KeyModifiers::ALT,
            "shift" => modifiers |= KeyModifiers::SHIFT,

            "up" => code = Some(KeyCode::Up),
            "down" => code = Some(KeyCode::Down),
            "left" => code = Some(KeyCode::Left),
            "right" => code = Some(KeyCode::Right),
            "enter" => code = Some(KeyCode::Enter),
            "esc" => code = Some(KeyCode::Esc),
            "backspace" | "back" => code = Some(KeyCode::Backspace),
            "tab" => code = Some(KeyCode::Tab),
            "space" | "spc" => code = Some(KeyCode::Char(' ')),

            _ => {
                if part.len() == 1 {
                    let mut c = part.chars().next()?;
                    if modifiers.contains(KeyModifiers::SHIFT) {
                        c = c.to_ascii_uppercase();
                    }
                    code = Some(KeyCode::Char(c));
                } else if part.is_empty() {
                    continue;
                } else {
                    return None;
                }
            }
        }
    }

    Some(Key {
        code: code?,
        modifiers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_characters_and_names() {
        assert_eq!(
            parse_key("q"),
            Some(Key {
                code: KeyCode::Char('q'),
                modifiers: KeyModifiers::NONE
            })
        );
        assert_eq!(
            parse_key("enter"),
            Some(Key {
                code: KeyCode::Enter,
                modifiers: KeyModifiers::NONE
            })
        );
        assert_eq!(
            parse_key("Tab"),
            Some(Key {
                code: KeyCode::Tab,
                modifiers: KeyModifiers::NONE
            })
        );
    }

    #[test]
    fn parses_modifier_combinations() {
        let expected = Some(Key {
            code: KeyCode::Char('f'),
            modifiers: KeyModifiers::CONTROL,
        });
        assert_eq!(parse_key("Ctrl+f"), expected);
        assert_eq!(parse_key("<c-f>"), expected);
    }

    #[test]
    fn shift_uppercases_characters() {
        assert_eq!(
            parse_key("Shift+g"),
            Some(Key {
                code: KeyCode::Char('G'),
                modifiers: KeyModifiers::SHIFT
            })
        );
    }

    #[test]
    fn rejects_unknown_strings() {
        assert_eq!(parse_key("definitely-not-a-key"), None);
        assert_eq!(parse_key("<x-q>"), None);
    }
}

//! Type-safe key bindings.
//!
//! A [`Binding`] groups one or more [`KeyPress`] values under a help label.
//! Bindings are built either from crossterm key codes directly or from
//! short textual descriptions such as `"shift+down"`:
//!
//! ```rust
//! use bubbletea_autocomplete::key::{new_binding, with_help, with_keys_str, Binding, KeyPress};
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let down = Binding::new(vec![KeyCode::Down]).with_help("↓", "next item");
//! let fast = new_binding(vec![with_keys_str(&["shift+down"]), with_help("⇧↓", "skip ahead")]);
//!
//! assert!(down.matches_press(&KeyPress::from(KeyCode::Down)));
//! assert!(fast.matches_press(&KeyPress::from((KeyCode::Down, KeyModifiers::SHIFT))));
//! assert!(!fast.matches_press(&KeyPress::from(KeyCode::Down)));
//! ```

use crate::error::{Error, Result};
use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key combination: a key code plus the modifiers held with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPress {
    /// The key that was pressed.
    pub code: KeyCode,
    /// Modifiers held while pressing it.
    pub mods: KeyModifiers,
}

impl KeyPress {
    /// Creates a key press from a code and modifier set.
    pub fn new(code: KeyCode, mods: KeyModifiers) -> Self {
        Self { code, mods }
    }

    /// Returns true when the shift modifier is held.
    pub fn shift(&self) -> bool {
        self.mods.contains(KeyModifiers::SHIFT)
    }

    /// Returns true when this press is a bare modifier key (shift, meta,
    /// alt, control and friends) with no other key attached.
    pub fn is_modifier_only(&self) -> bool {
        matches!(self.code, KeyCode::Modifier(_))
    }
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, mods): (KeyCode, KeyModifiers)) -> Self {
        Self::new(code, mods)
    }
}

impl From<&KeyMsg> for KeyPress {
    fn from(msg: &KeyMsg) -> Self {
        Self::new(msg.key, msg.modifiers)
    }
}

/// Help text attached to a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short key label, e.g. `"↓"`.
    pub key: String,
    /// What the key does, e.g. `"next item"`.
    pub desc: String,
}

/// A set of key presses that trigger the same action.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a binding from anything convertible into key presses.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    /// Sets the help label and description.
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Returns the key presses of this binding.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Returns the help entry.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Enables or disables the binding. Disabled bindings never match.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Reports whether the binding is enabled and has at least one key.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Reports whether the given press triggers this binding.
    pub fn matches_press(&self, press: &KeyPress) -> bool {
        self.enabled() && self.keys.iter().any(|k| k == press)
    }

    /// Reports whether a bubbletea key message triggers this binding.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.matches_press(&KeyPress::from(msg))
    }
}

/// Functional option applied by [`new_binding`].
pub type BindingOpt = Box<dyn FnOnce(&mut Binding)>;

/// Builds a binding from a list of options.
pub fn new_binding(opts: Vec<BindingOpt>) -> Binding {
    let mut binding = Binding::default();
    for opt in opts {
        opt(&mut binding);
    }
    binding
}

/// Option that sets the binding's keys.
pub fn with_keys(keys: Vec<KeyPress>) -> BindingOpt {
    Box::new(move |b: &mut Binding| b.keys = keys)
}

/// Option that sets the binding's keys from textual descriptions.
///
/// Descriptions that fail to parse are skipped; use [`parse_key`] when the
/// error matters.
pub fn with_keys_str(keys: &[&str]) -> BindingOpt {
    let parsed: Vec<KeyPress> = keys.iter().filter_map(|k| parse_key(k).ok()).collect();
    with_keys(parsed)
}

/// Option that sets the help label and description.
pub fn with_help(key: &str, desc: &str) -> BindingOpt {
    let help = Help {
        key: key.to_string(),
        desc: desc.to_string(),
    };
    Box::new(move |b: &mut Binding| b.help = help)
}

/// Option that disables the binding.
pub fn with_disabled() -> BindingOpt {
    Box::new(|b: &mut Binding| b.disabled = true)
}

/// Reports whether a key message matches a binding.
pub fn matches_binding(msg: &KeyMsg, binding: &Binding) -> bool {
    binding.matches(msg)
}

/// Parses a description such as `"ctrl+n"`, `"shift+up"` or `"space"`.
pub fn parse_key(s: &str) -> Result<KeyPress> {
    let lowered = s.trim().to_lowercase();
    if lowered.is_empty() {
        return Err(Error::InvalidKey(s.to_string()));
    }

    let mut mods = KeyModifiers::NONE;
    let mut parts: Vec<&str> = lowered.split('+').collect();
    // "ctrl++" style descriptions leave an empty tail; treat it as the plus key.
    let key_part = match parts.pop() {
        Some("") if lowered.ends_with("++") => "+",
        Some(part) => part,
        None => return Err(Error::InvalidKey(s.to_string())),
    };

    for part in parts.into_iter().filter(|p| !p.is_empty()) {
        mods |= match part {
            "ctrl" | "control" => KeyModifiers::CONTROL,
            "alt" | "option" => KeyModifiers::ALT,
            "shift" => KeyModifiers::SHIFT,
            "meta" | "super" | "cmd" => KeyModifiers::SUPER,
            _ => return Err(Error::InvalidKey(s.to_string())),
        };
    }

    let code = match key_part {
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "space" | " " => KeyCode::Char(' '),
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pgup" | "pageup" => KeyCode::PageUp,
        "pgdown" | "pagedown" => KeyCode::PageDown,
        other => {
            let mut chars = other.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return Err(Error::InvalidKey(s.to_string())),
            }
        }
    };

    Ok(KeyPress::new(code, mods))
}

/// Implemented by key maps that can describe themselves for a help view.
pub trait KeyMap {
    /// Bindings shown in the compact help line.
    fn short_help(&self) -> Vec<&Binding>;

    /// Bindings grouped into columns for the expanded help view.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_and_modified_keys() {
        assert_eq!(parse_key("down").unwrap(), KeyPress::from(KeyCode::Down));
        assert_eq!(
            parse_key("Shift+Up").unwrap(),
            KeyPress::from((KeyCode::Up, KeyModifiers::SHIFT))
        );
        assert_eq!(
            parse_key("space").unwrap(),
            KeyPress::from(KeyCode::Char(' '))
        );
        assert_eq!(
            parse_key("ctrl+n").unwrap(),
            KeyPress::from((KeyCode::Char('n'), KeyModifiers::CONTROL))
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_key(""), Err(Error::InvalidKey(String::new())));
        assert!(parse_key("hyper+x").is_err());
        assert!(parse_key("downward").is_err());
    }

    #[test]
    fn test_with_keys_str_skips_invalid() {
        let b = new_binding(vec![with_keys_str(&["enter", "nonsense"])]);
        assert_eq!(b.keys(), &[KeyPress::from(KeyCode::Enter)]);
    }

    #[test]
    fn test_disabled_binding_never_matches() {
        let mut b = Binding::new(vec![KeyCode::Esc]);
        assert!(b.matches_press(&KeyPress::from(KeyCode::Esc)));
        b.set_enabled(false);
        assert!(!b.matches_press(&KeyPress::from(KeyCode::Esc)));

        let off = new_binding(vec![with_keys_str(&["esc"]), with_disabled()]);
        assert!(!off.enabled());
    }

    #[test]
    fn test_modifiers_must_match_exactly() {
        let b = Binding::new(vec![KeyCode::Down]);
        assert!(!b.matches_press(&KeyPress::from((KeyCode::Down, KeyModifiers::SHIFT))));
    }

    #[test]
    fn test_key_msg_matching() {
        let b = new_binding(vec![with_keys_str(&["shift+down"]), with_help("⇧↓", "jump")]);
        let msg = KeyMsg {
            key: KeyCode::Down,
            modifiers: KeyModifiers::SHIFT,
        };
        assert!(matches_binding(&msg, &b));
        assert_eq!(b.help().desc, "jump");
    }
}

//! Key bindings for the autocomplete component.

use super::types::Surface;
use crate::key::{self, new_binding, with_help, with_keys_str, Binding, KeyPress};
use crossterm::event::KeyModifiers;

/// How far shift+arrow moves the highlight.
pub const FAST_MOVE_AMOUNT: i64 = 5;

/// What a routed key press does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Move the highlight by this many items.
    Move(i64),
    /// Commit the highlighted item if the menu is open.
    SelectHighlighted,
    /// Close the menu and restore the input text.
    Reset,
    /// Button only: open the menu, or close/commit when it is open.
    Toggle,
}

/// Key bindings for the input and the toggle button.
///
/// The input consults every binding except `toggle`, since a space typed
/// into the input is text.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Move the highlight down one item.
    pub highlight_next: Binding,
    /// Move the highlight down several items.
    pub highlight_next_fast: Binding,
    /// Move the highlight up one item.
    pub highlight_prev: Binding,
    /// Move the highlight up several items.
    pub highlight_prev_fast: Binding,
    /// Commit the highlighted item.
    pub select: Binding,
    /// Dismiss the menu.
    pub dismiss: Binding,
    /// Open or close the menu from the button.
    pub toggle: Binding,
}

impl Default for KeyMap {
    fn default() -> Self {
        default_key_map()
    }
}

/// The stock bindings: arrows, shift+arrows, enter, escape and space.
pub fn default_key_map() -> KeyMap {
    KeyMap {
        highlight_next: new_binding(vec![with_keys_str(&["down"]), with_help("↓", "next")]),
        highlight_next_fast: new_binding(vec![
            with_keys_str(&["shift+down"]),
            with_help("⇧↓", "skip down"),
        ]),
        highlight_prev: new_binding(vec![with_keys_str(&["up"]), with_help("↑", "previous")]),
        highlight_prev_fast: new_binding(vec![
            with_keys_str(&["shift+up"]),
            with_help("⇧↑", "skip up"),
        ]),
        select: new_binding(vec![with_keys_str(&["enter"]), with_help("enter", "select")]),
        dismiss: new_binding(vec![with_keys_str(&["esc"]), with_help("esc", "dismiss")]),
        toggle: new_binding(vec![with_keys_str(&["space"]), with_help("space", "toggle menu")]),
    }
}

impl KeyMap {
    /// Looks up the action bound to `press` on `surface`.
    ///
    /// An exact match wins. Otherwise modifiers other than shift are
    /// dropped, then shift too, so ctrl+down still moves one item and
    /// alt+shift+down still moves five.
    pub fn action(&self, press: &KeyPress, surface: Surface) -> Option<KeyAction> {
        let shift_only = KeyPress::new(press.code, press.mods & KeyModifiers::SHIFT);
        let bare = KeyPress::new(press.code, KeyModifiers::NONE);
        [*press, shift_only, bare]
            .iter()
            .find_map(|p| self.exact_action(p, surface))
    }

    fn exact_action(&self, press: &KeyPress, surface: Surface) -> Option<KeyAction> {
        if self.highlight_next_fast.matches_press(press) {
            Some(KeyAction::Move(FAST_MOVE_AMOUNT))
        } else if self.highlight_next.matches_press(press) {
            Some(KeyAction::Move(1))
        } else if self.highlight_prev_fast.matches_press(press) {
            Some(KeyAction::Move(-FAST_MOVE_AMOUNT))
        } else if self.highlight_prev.matches_press(press) {
            Some(KeyAction::Move(-1))
        } else if self.select.matches_press(press) {
            Some(KeyAction::SelectHighlighted)
        } else if self.dismiss.matches_press(press) {
            Some(KeyAction::Reset)
        } else if surface == Surface::Button && self.toggle.matches_press(press) {
            Some(KeyAction::Toggle)
        } else {
            None
        }
    }
}

impl key::KeyMap for KeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![
            &self.highlight_next,
            &self.highlight_prev,
            &self.select,
            &self.dismiss,
        ]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![
            vec![
                &self.highlight_next,
                &self.highlight_prev,
                &self.highlight_next_fast,
                &self.highlight_prev_fast,
            ],
            vec![&self.select, &self.dismiss, &self.toggle],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn test_arrows_and_shift_arrows() {
        let km = default_key_map();
        let down = KeyPress::from(KeyCode::Down);
        let shift_up = KeyPress::from((KeyCode::Up, KeyModifiers::SHIFT));
        assert_eq!(km.action(&down, Surface::Input), Some(KeyAction::Move(1)));
        assert_eq!(
            km.action(&shift_up, Surface::Input),
            Some(KeyAction::Move(-FAST_MOVE_AMOUNT))
        );
    }

    #[test]
    fn test_space_only_on_button() {
        let km = default_key_map();
        let space = KeyPress::from(KeyCode::Char(' '));
        assert_eq!(km.action(&space, Surface::Input), None);
        assert_eq!(km.action(&space, Surface::Button), Some(KeyAction::Toggle));
    }

    #[test]
    fn test_enter_and_escape() {
        let km = default_key_map();
        assert_eq!(
            km.action(&KeyPress::from(KeyCode::Enter), Surface::Button),
            Some(KeyAction::SelectHighlighted)
        );
        assert_eq!(
            km.action(&KeyPress::from(KeyCode::Esc), Surface::Input),
            Some(KeyAction::Reset)
        );
        assert_eq!(km.action(&KeyPress::from(KeyCode::Char('x')), Surface::Input), None);
    }

    #[test]
    fn test_extra_modifiers_fall_back_to_plain_bindings() {
        let km = default_key_map();
        let ctrl_down = KeyPress::from((KeyCode::Down, KeyModifiers::CONTROL));
        let alt_shift_up = KeyPress::from((KeyCode::Up, KeyModifiers::ALT | KeyModifiers::SHIFT));
        let shift_enter = KeyPress::from((KeyCode::Enter, KeyModifiers::SHIFT));
        assert_eq!(km.action(&ctrl_down, Surface::Input), Some(KeyAction::Move(1)));
        assert_eq!(
            km.action(&alt_shift_up, Surface::Input),
            Some(KeyAction::Move(-FAST_MOVE_AMOUNT))
        );
        assert_eq!(km.action(&shift_enter, Surface::Button), Some(KeyAction::SelectHighlighted));
        let ctrl_x = KeyPress::from((KeyCode::Char('x'), KeyModifiers::CONTROL));
        assert_eq!(km.action(&ctrl_x, Surface::Input), None);
    }
}

//! Action methods for the autocomplete component.
//!
//! Each action applies one state transition and then runs its follow-up
//! effects (scroll, focus, change callback), which therefore always see the
//! new state.

use super::keymap::KeyAction;
use super::model::Model;
use super::types::{Change, Surface, Value};
use crate::event::Event;
use crate::host::ScrollRequest;
use crate::navigation::next_index;

impl<V: Value> Model<V> {
    fn scroll_to(&mut self, index: Option<usize>, align_to_top: bool) {
        if let Some(item_index) = index {
            self.host.scroll_into_view(ScrollRequest {
                item_index,
                container: self.root_node,
                align_to_top,
            });
        }
    }

    /// Highlights `index` (or nothing) and scrolls it into view.
    pub fn set_highlighted_index(&mut self, index: Option<usize>) {
        self.state.highlighted_index = index;
        tracing::trace!(id = self.id, ?index, "highlight");
        self.scroll_to(index, false);
    }

    /// Highlights the configured default index.
    pub fn set_default_highlighted_index(&mut self) {
        self.set_highlighted_index(self.options.default_highlighted_index);
    }

    /// Highlights the rendered item holding the current selection, or the
    /// first item when it is not rendered, aligning it to the top.
    pub fn highlight_selected_item(&mut self) {
        let index = self
            .state
            .selected_value
            .index_in(&self.registry)
            .unwrap_or(0);
        self.state.highlighted_index = Some(index);
        tracing::trace!(id = self.id, index, "highlight selection");
        self.scroll_to(Some(index), true);
    }

    /// Opens the menu, then highlights `index`.
    pub fn highlight_index(&mut self, index: Option<usize>) {
        self.open_menu_then(move |m| m.set_highlighted_index(index));
    }

    /// Moves the highlight by `amount` items. A closed menu is opened
    /// instead, with the default highlight; the amount is ignored then.
    pub fn move_highlighted_index(&mut self, amount: i64) {
        if self.state.is_open {
            self.change_highlighted_index(amount);
        } else {
            self.open_menu_then(|m| m.set_default_highlighted_index());
        }
    }

    /// Moves the highlight by `amount` items within the rendered list.
    /// Walking off either end clears the highlight; an empty list is left
    /// alone.
    pub fn change_highlighted_index(&mut self, amount: i64) {
        if self.registry.is_empty() {
            return;
        }
        let next = next_index(self.state.highlighted_index, amount, self.registry.len());
        self.set_highlighted_index(next);
    }

    /// Empties the selection, closes the menu and puts focus back on the
    /// input.
    pub fn clear_selection(&mut self) {
        let previous_value = self.state.selected_value.clone();
        self.state.selected_value = previous_value.cleared();
        self.state.is_open = false;
        tracing::debug!(id = self.id, "selection cleared");

        self.focus = Some(Surface::Input);
        self.host.focus_input();
        if previous_value != self.state.selected_value {
            self.notify_change(previous_value);
        }
    }

    /// Commits `value`.
    ///
    /// Single-select replaces the selection and closes the menu. Multi-select
    /// toggles the value's membership and keeps the menu as it is. Either
    /// way the input shows the new selection's text and the change callback
    /// runs.
    pub fn select_item(&mut self, value: V) {
        let previous_value = self.state.selected_value.clone();
        if !self.state.selected_value.is_multiple() {
            self.reset();
        }
        self.state.selected_value.commit(value);
        self.state.input_value = self.selection_text();
        tracing::debug!(id = self.id, input = %self.state.input_value, "selection committed");
        self.notify_change(previous_value);
    }

    /// Commits the value rendered under `index`. Nothing happens when
    /// `index` is `None` or was not rendered.
    pub fn select_item_at_index(&mut self, index: Option<usize>) {
        let Some(index) = index else {
            return;
        };
        if let Some(value) = self.item_from_index(index).cloned() {
            self.select_item(value);
        }
    }

    /// Commits the highlighted item, if any.
    pub fn select_highlighted_item(&mut self) {
        self.select_item_at_index(self.state.highlighted_index);
    }

    /// Closes the menu, clears the highlight and restores the input text to
    /// the selection. The selection itself is untouched.
    pub fn reset(&mut self) {
        self.state.is_open = false;
        self.state.highlighted_index = None;
        self.state.input_value = self.selection_text();
        tracing::debug!(id = self.id, "reset");
    }

    /// Flips the menu, or sets it to `open` when given.
    ///
    /// An opened menu highlights the selection when there is one and the
    /// default index otherwise.
    pub fn toggle_menu(&mut self, open: Option<bool>) {
        self.toggle_menu_then(open, |_| {});
    }

    /// [`Model::toggle_menu`] followed by `then`, which runs after the
    /// highlight has been adjusted.
    pub fn toggle_menu_then<F>(&mut self, open: Option<bool>, then: F)
    where
        F: FnOnce(&mut Self),
    {
        self.state.is_open = open.unwrap_or(!self.state.is_open);
        tracing::debug!(id = self.id, open = self.state.is_open, "menu toggled");
        if self.state.is_open {
            if self.state.selected_value.is_empty() {
                self.set_default_highlighted_index();
            } else {
                self.highlight_selected_item();
            }
        }
        then(self);
    }

    /// Opens the menu.
    pub fn open_menu(&mut self) {
        self.toggle_menu(Some(true));
    }

    /// Opens the menu, then runs `then`.
    pub fn open_menu_then<F: FnOnce(&mut Self)>(&mut self, then: F) {
        self.toggle_menu_then(Some(true), then);
    }

    /// Closes the menu.
    pub fn close_menu(&mut self) {
        self.toggle_menu(Some(false));
    }

    /// Closes the menu, then runs `then`.
    pub fn close_menu_then<F: FnOnce(&mut Self)>(&mut self, then: F) {
        self.toggle_menu_then(Some(false), then);
    }

    /// Replaces the input text. Typing does not change the selection.
    pub fn set_input_value(&mut self, text: impl Into<String>) {
        self.state.input_value = text.into();
    }

    fn notify_change(&mut self, previous_value: crate::selection::Selection<V>) {
        let change = Change {
            selected_value: self.state.selected_value.clone(),
            previous_value,
        };
        (self.options.on_change)(&change);
    }

    fn run_key_action(&mut self, action: KeyAction, event: &mut Event) {
        event.prevent_default();
        match action {
            KeyAction::Move(amount) => self.move_highlighted_index(amount),
            KeyAction::SelectHighlighted => {
                if self.state.is_open {
                    self.select_highlighted_item();
                }
            }
            KeyAction::Reset => self.reset(),
            KeyAction::Toggle => {
                if !self.state.is_open {
                    self.open_menu();
                } else if self.state.highlighted_index.is_none() {
                    self.close_menu();
                } else {
                    self.select_highlighted_item();
                }
            }
        }
    }

    /// Key handling for the text input. Unbound keys other than bare
    /// modifiers open the menu, since the user is typing.
    pub(super) fn input_key_down(&mut self, event: &mut Event) {
        let Some(press) = event.key else {
            return;
        };
        match self.options.key_map.action(&press, Surface::Input) {
            Some(action) => self.run_key_action(action, event),
            None if !press.is_modifier_only() => self.open_menu(),
            None => {}
        }
    }

    /// Key handling for the toggle button.
    pub(super) fn button_key_down(&mut self, event: &mut Event) {
        let Some(press) = event.key else {
            return;
        };
        if let Some(action) = self.options.key_map.action(&press, Surface::Button) {
            self.run_key_action(action, event);
        }
    }

    /// Input focus loss. Ignored while the pointer is held, so a press on
    /// an item can still land as a click.
    pub(super) fn input_blur(&mut self) {
        if !self.is_pointer_down() {
            self.reset();
        }
    }

    /// Root click: selects the item the click landed on.
    pub(super) fn root_click(&mut self, event: &mut Event) {
        event.prevent_default();
        let index = event
            .target
            .as_ref()
            .and_then(|t| t.attributes.get_index(super::types::ITEM_INDEX_ATTR));
        if index.is_some() {
            self.select_item_at_index(index);
        }
    }
}

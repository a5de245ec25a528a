//! Internal prop bundles for the root, button, input and item elements.
//!
//! Each bundle is what the controller itself needs on the element. The
//! render context merges the caller's props over it.

use super::model::Model;
use super::types::{AutocompleteProps, Value, INPUT_ATTR, ITEM_INDEX_ATTR};
use crate::event::{Event, EventKind};
use crate::props::{compose_handlers, handler, Props};

/// Attribute the root node reference is stored under by default.
pub const DEFAULT_REF_KEY: &str = "ref";

impl<V: Value> Model<V> {
    pub(super) fn root_bundle(&self, ref_key: &str) -> AutocompleteProps<V> {
        let click = compose_handlers(
            self.options.on_click.clone(),
            handler(|m: &mut Model<V>, e: &mut Event| m.root_click(e)),
        );
        let mut props = Props::new().attr(ref_key, self.root_node);
        props.handlers.set(EventKind::Click, click);
        props
    }

    pub(super) fn button_bundle(&self) -> AutocompleteProps<V> {
        let open = self.state.is_open;
        Props::new()
            .attr("role", "button")
            .attr("aria-label", if open { "close menu" } else { "open menu" })
            .attr("aria-expanded", open)
            .attr("aria-haspopup", true)
            .on(EventKind::Click, |m: &mut Model<V>, e: &mut Event| {
                e.prevent_default();
                m.toggle_menu(None);
            })
            .on(EventKind::KeyDown, |m: &mut Model<V>, e: &mut Event| {
                m.button_key_down(e)
            })
    }

    pub(super) fn input_bundle(&self) -> AutocompleteProps<V> {
        Props::new()
            .attr(INPUT_ATTR, true)
            .attr("role", "combobox")
            .attr("aria-autocomplete", "list")
            .attr("aria-expanded", self.state.is_open)
            .attr("autocomplete", "off")
            .attr("value", self.state.input_value.as_str())
            .on(EventKind::Change, |m: &mut Model<V>, e: &mut Event| {
                if let Some(text) = e.value.clone() {
                    m.set_input_value(text);
                }
            })
            .on(EventKind::KeyDown, |m: &mut Model<V>, e: &mut Event| {
                m.input_key_down(e)
            })
            .on(EventKind::Blur, |m: &mut Model<V>, _: &mut Event| {
                m.input_blur()
            })
    }

    pub(super) fn item_bundle(&self, index: usize) -> AutocompleteProps<V> {
        Props::new()
            .attr(ITEM_INDEX_ATTR, index)
            .on(EventKind::MouseEnter, move |m: &mut Model<V>, _: &mut Event| {
                m.set_highlighted_index(Some(index))
            })
    }
}

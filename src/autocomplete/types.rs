//! Core types for the autocomplete component.

use super::model::Model;
use crate::element::Element;
use crate::props::{Handler, Props};
use crate::selection::Selection;
use std::fmt;
use std::sync::Arc;

/// Values an autocomplete can offer and select.
///
/// Blanket-implemented for every cloneable, comparable, displayable type
/// that can cross threads.
pub trait Value: Clone + PartialEq + fmt::Display + Send + Sync + 'static {}

impl<T> Value for T where T: Clone + PartialEq + fmt::Display + Send + Sync + 'static {}

/// Attribute marking a rendered item with its registry index.
pub const ITEM_INDEX_ATTR: &str = "data-autocomplete-item-index";

/// Attribute marking the text input.
pub const INPUT_ATTR: &str = "data-autocomplete-input";

/// Props attached to elements of an autocomplete.
pub type AutocompleteProps<V> = Props<Model<V>>;

/// Elements returned by an autocomplete render function.
pub type AutocompleteElement<V> = Element<Model<V>>;

/// Event handler acting on an autocomplete.
pub type AutocompleteHandler<V> = Handler<Model<V>>;

/// Projects a value to its display text.
pub type GetValueFn<V> = Arc<dyn Fn(&V) -> String + Send + Sync>;

/// Receives every committed selection change.
pub type OnChangeFn<V> = Box<dyn FnMut(&Change<V>) + Send>;

/// Payload of the change callback.
#[derive(Debug, Clone, PartialEq)]
pub struct Change<V> {
    /// The selection after the change.
    pub selected_value: Selection<V>,
    /// The selection before the change.
    pub previous_value: Selection<V>,
}

/// Which focusable element keyboard input is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    /// The text input. Uses the generic key table.
    Input,
    /// The toggle button. Uses the generic table plus space.
    Button,
}

/// Trailing edge of the status debounce.
#[derive(Debug, Clone)]
pub struct StatusTickMsg {
    /// The autocomplete this tick belongs to.
    pub id: usize,
    pub(super) tag: usize,
}

/// Sent by the document subscription when a pointer release lands outside
/// the autocomplete root.
#[derive(Debug, Clone)]
pub struct OutsideReleaseMsg {
    /// The autocomplete that should reset.
    pub id: usize,
}

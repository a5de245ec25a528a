//! Construction-time configuration for the autocomplete component.

use super::keymap::{default_key_map, KeyMap};
use super::model::Model;
use super::types::{Change, GetValueFn, OnChangeFn, Value};
use crate::a11y::{default_status_message, StatusInput, StatusMessageFn};
use crate::event::Event;
use crate::props::{handler, AttrValue, Attributes, Handler};
use crate::selection::Selection;
use std::sync::Arc;
use std::time::Duration;

/// How long the status message waits for the highlight to settle.
pub const DEFAULT_STATUS_DEBOUNCE: Duration = Duration::from_millis(200);

/// Configuration for [`Model::new`]. Fixed for the life of the model.
///
/// ```rust
/// use bubbletea_autocomplete::autocomplete::Options;
///
/// let options = Options::new(|change: &bubbletea_autocomplete::autocomplete::Change<String>| {
///     println!("now {:?}", change.selected_value);
/// })
/// .with_multiple(true)
/// .with_default_highlighted_index(Some(0))
/// .with_get_value(|s: &String| s.to_uppercase());
/// # let _ = options;
/// ```
pub struct Options<V: Value> {
    pub(super) default_highlighted_index: Option<usize>,
    pub(super) default_value: Option<Selection<V>>,
    pub(super) multiple: bool,
    pub(super) get_value: GetValueFn<V>,
    pub(super) status_message: StatusMessageFn<V>,
    pub(super) on_change: OnChangeFn<V>,
    pub(super) on_click: Option<Handler<Model<V>>>,
    pub(super) root_attributes: Attributes,
    pub(super) key_map: KeyMap,
    pub(super) status_debounce: Duration,
}

impl<V: Value> Options<V> {
    /// Default options. The change callback is the one required setting.
    pub fn new<F>(on_change: F) -> Self
    where
        F: FnMut(&Change<V>) + Send + 'static,
    {
        Self {
            default_highlighted_index: None,
            default_value: None,
            multiple: false,
            get_value: Arc::new(|v: &V| v.to_string()),
            status_message: Arc::new(|input: &StatusInput<'_, V>| default_status_message(input)),
            on_change: Box::new(on_change),
            on_click: None,
            root_attributes: Attributes::new(),
            key_map: default_key_map(),
            status_debounce: DEFAULT_STATUS_DEBOUNCE,
        }
    }

    /// Highlight applied when the menu opens with nothing selected.
    pub fn with_default_highlighted_index(mut self, index: Option<usize>) -> Self {
        self.default_highlighted_index = index;
        self
    }

    /// Initial selection. In multi-select mode it becomes a one-item sequence.
    pub fn with_default_value(mut self, value: V) -> Self {
        self.default_value = Some(Selection::Single(Some(value)));
        self
    }

    /// Initial selection as a sequence. In single-select mode only the first
    /// value is kept.
    pub fn with_default_values(mut self, values: Vec<V>) -> Self {
        self.default_value = Some(Selection::Multiple(values));
        self
    }

    /// Allows several values to be selected at once.
    pub fn with_multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    /// Replaces the value-to-text projection (default: `Display`).
    pub fn with_get_value<F>(mut self, get_value: F) -> Self
    where
        F: Fn(&V) -> String + Send + Sync + 'static,
    {
        self.get_value = Arc::new(get_value);
        self
    }

    /// Replaces the status message builder.
    pub fn with_a11y_status_message<F>(mut self, f: F) -> Self
    where
        F: Fn(&StatusInput<'_, V>) -> String + Send + Sync + 'static,
    {
        self.status_message = Arc::new(f);
        self
    }

    /// Runs before the built-in root click handling. Preventing default in
    /// it suppresses selection by click.
    pub fn with_on_click<F>(mut self, f: F) -> Self
    where
        F: Fn(&mut Model<V>, &mut Event) + Send + Sync + 'static,
    {
        self.on_click = Some(handler(f));
        self
    }

    /// Attributes applied to the returned element when the render function
    /// leaves root props to the controller.
    pub fn with_root_attribute(mut self, name: &str, value: impl Into<AttrValue>) -> Self {
        self.root_attributes.set(name, value);
        self
    }

    /// Replaces the key bindings.
    pub fn with_key_map(mut self, key_map: KeyMap) -> Self {
        self.key_map = key_map;
        self
    }

    /// Changes the status debounce window.
    pub fn with_status_debounce(mut self, window: Duration) -> Self {
        self.status_debounce = window;
        self
    }

    /// The initial selection, reconciled with the selection mode.
    pub(super) fn initial_selection(&self) -> Selection<V> {
        match &self.default_value {
            Some(value) => value.clone().into_mode(self.multiple),
            None => Selection::empty(self.multiple),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(_: &Change<i32>) {}

    #[test]
    fn test_falsy_default_is_kept() {
        let o = Options::new(noop).with_default_value(0);
        assert_eq!(o.initial_selection(), Selection::Single(Some(0)));
    }

    #[test]
    fn test_default_follows_mode() {
        let o = Options::new(noop).with_multiple(true).with_default_value(4);
        assert_eq!(o.initial_selection(), Selection::Multiple(vec![4]));

        let o = Options::new(noop).with_default_values(vec![1, 2]);
        assert_eq!(o.initial_selection(), Selection::Single(Some(1)));

        let o = Options::new(noop).with_multiple(true);
        assert_eq!(o.initial_selection(), Selection::Multiple(vec![]));
    }

    #[test]
    fn test_stock_settings() {
        let o = Options::new(noop);
        assert_eq!(o.status_debounce, DEFAULT_STATUS_DEBOUNCE);
        assert_eq!((o.get_value)(&7), "7");
        assert!(o.default_highlighted_index.is_none());
    }
}

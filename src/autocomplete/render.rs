//! The render cycle: prop getters handed to the render function, item
//! collection and root-bundle injection.

use super::getters::DEFAULT_REF_KEY;
use super::model::Model;
use super::types::{AutocompleteElement, AutocompleteProps, Value};
use crate::element::ElementKind;
use crate::error::{Error, Result};
use crate::registry::RegistryBuilder;
use crate::selection::Selection;

/// What a render function sees: the current state and the prop getters.
///
/// Items are collected as their props are requested; the collected list
/// becomes the model's registry once the render function returns.
pub struct RenderContext<'a, V: Value> {
    model: &'a Model<V>,
    items: RegistryBuilder<V>,
    root_applied: bool,
}

impl<'a, V: Value> RenderContext<'a, V> {
    fn new(model: &'a Model<V>) -> Self {
        Self {
            model,
            items: RegistryBuilder::new(),
            root_applied: false,
        }
    }

    /// The model being rendered.
    pub fn model(&self) -> &Model<V> {
        self.model
    }

    /// Whether the menu is open.
    pub fn is_open(&self) -> bool {
        self.model.is_open()
    }

    /// The highlighted index.
    pub fn highlighted_index(&self) -> Option<usize> {
        self.model.highlighted_index()
    }

    /// The input text.
    pub fn input_value(&self) -> &str {
        self.model.input_value()
    }

    /// The committed selection.
    pub fn selected_value(&self) -> &Selection<V> {
        self.model.selected_value()
    }

    /// Whether `index` is the highlighted item.
    pub fn is_highlighted(&self, index: usize) -> bool {
        self.model.highlighted_index() == Some(index)
    }

    /// Whether `value` is part of the selection.
    pub fn is_selected(&self, value: &V) -> bool {
        self.model.selected_value().contains(value)
    }

    /// The value rendered under `index` in the previous pass.
    pub fn item_from_index(&self, index: usize) -> Option<&V> {
        self.model.item_from_index(index)
    }

    /// Props for the root element, with the node reference under `"ref"`.
    pub fn root_props(&mut self, props: AutocompleteProps<V>) -> AutocompleteProps<V> {
        self.root_props_with_ref_key(DEFAULT_REF_KEY, props)
    }

    /// Props for the root element, with the node reference stored under
    /// `ref_key`.
    pub fn root_props_with_ref_key(
        &mut self,
        ref_key: &str,
        props: AutocompleteProps<V>,
    ) -> AutocompleteProps<V> {
        self.root_applied = true;
        self.model.root_bundle(ref_key).merged_with(props)
    }

    /// Props for the menu toggle button.
    pub fn button_props(&self, props: AutocompleteProps<V>) -> AutocompleteProps<V> {
        self.model.button_bundle().merged_with(props)
    }

    /// Props for the text input.
    pub fn input_props(&self, props: AutocompleteProps<V>) -> AutocompleteProps<V> {
        self.model.input_bundle().merged_with(props)
    }

    /// Props for one menu item. Registers `value` under `index` for this
    /// pass; items whose props are never requested cannot be navigated to.
    pub fn item_props(
        &mut self,
        index: usize,
        value: V,
        props: AutocompleteProps<V>,
    ) -> AutocompleteProps<V> {
        self.items.register(index, value);
        self.model.item_bundle(index).merged_with(props)
    }
}

impl<V: Value> Model<V> {
    /// Runs one render pass.
    ///
    /// `f` builds the element tree. When it never asks for root props, the
    /// root bundle (plus the configured root attributes) is attached to the
    /// returned element, which must then be intrinsic: a component element
    /// yields [`Error::RootPropsNotApplied`].
    pub fn render<F>(&mut self, f: F) -> Result<AutocompleteElement<V>>
    where
        F: FnOnce(&mut RenderContext<'_, V>) -> AutocompleteElement<V>,
    {
        let (element, items, root_applied) = {
            let mut ctx = RenderContext::new(self);
            let element = f(&mut ctx);
            (element, ctx.items, ctx.root_applied)
        };

        // `f` saw last cycle's highlight; it is only clamped to the new list here.
        self.registry = items.commit();
        tracing::trace!(id = self.id, items = self.registry.len(), "registry committed");
        if self
            .state
            .highlighted_index
            .is_some_and(|i| i >= self.registry.len())
        {
            self.state.highlighted_index = None;
        }

        if root_applied {
            return Ok(element);
        }
        if let ElementKind::Component(name) = &element.kind {
            return Err(Error::RootPropsNotApplied {
                element: name.clone(),
            });
        }

        let mut element = element;
        let mut caller = std::mem::take(&mut element.props);
        let mut attributes = self.options.root_attributes.clone();
        attributes.extend(std::mem::take(&mut caller.attributes));
        caller.attributes = attributes;
        element.props = self.root_bundle(DEFAULT_REF_KEY).merged_with(caller);
        Ok(element)
    }
}

//! The renderer boundary.
//!
//! A render function returns an [`Element`] tree built from the prop bundles
//! it requested. The controller never draws anything; the host walks the tree
//! to draw it and routes events back through the bundles.

use crate::event::{Event, NodeId};
use crate::props::{AttrValue, Props};
use std::fmt;

/// What kind of element a node is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementKind {
    /// A primitive element the host knows how to draw (`"div"`, `"input"`).
    /// Props can be attached to it directly.
    Intrinsic(String),
    /// A caller-defined component. The controller cannot see inside it.
    Component(String),
}

impl ElementKind {
    /// The tag or component name.
    pub fn name(&self) -> &str {
        match self {
            ElementKind::Intrinsic(name) | ElementKind::Component(name) => name,
        }
    }
}

/// A node in the tree returned by a render function.
pub struct Element<C> {
    /// Element kind.
    pub kind: ElementKind,
    /// Attached attributes and handlers.
    pub props: Props<C>,
    /// Child nodes.
    pub children: Vec<Element<C>>,
    /// Text content.
    pub text: Option<String>,
}

impl<C> Clone for Element<C> {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind.clone(),
            props: self.props.clone(),
            children: self.children.clone(),
            text: self.text.clone(),
        }
    }
}

impl<C> fmt::Debug for Element<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("kind", &self.kind)
            .field("props", &self.props)
            .field("children", &self.children)
            .field("text", &self.text)
            .finish()
    }
}

impl<C: 'static> Element<C> {
    /// A primitive element with the given tag.
    pub fn intrinsic(tag: impl Into<String>) -> Self {
        Self::with_kind(ElementKind::Intrinsic(tag.into()))
    }

    /// A caller-defined component element.
    pub fn component(name: impl Into<String>) -> Self {
        Self::with_kind(ElementKind::Component(name.into()))
    }

    fn with_kind(kind: ElementKind) -> Self {
        Self {
            kind,
            props: Props::new(),
            children: Vec::new(),
            text: None,
        }
    }

    /// Replaces the element's props.
    pub fn props(mut self, props: Props<C>) -> Self {
        self.props = props;
        self
    }

    /// Appends a child.
    pub fn child(mut self, child: Element<C>) -> Self {
        self.children.push(child);
        self
    }

    /// Appends several children.
    pub fn children(mut self, children: impl IntoIterator<Item = Element<C>>) -> Self {
        self.children.extend(children);
        self
    }

    /// Sets text content.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// True for primitive elements.
    pub fn is_intrinsic(&self) -> bool {
        matches!(self.kind, ElementKind::Intrinsic(_))
    }

    /// Depth-first search for the first node satisfying `pred`.
    pub fn find<P>(&self, pred: P) -> Option<&Element<C>>
    where
        P: Fn(&Element<C>) -> bool + Copy,
    {
        if pred(self) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(pred))
    }

    /// Finds the first node whose attribute `name` equals `value`.
    pub fn find_by_attr(&self, name: &str, value: &AttrValue) -> Option<&Element<C>> {
        self.find(|e| e.props.attributes.get(name) == Some(value))
    }

    /// True when this node or a descendant carries `node` as any attribute
    /// value (typically its `ref`).
    pub fn contains_node(&self, node: NodeId) -> bool {
        self.find(|e| {
            e.props
                .attributes
                .iter()
                .any(|(_, v)| *v == AttrValue::Node(node))
        })
        .is_some()
    }

    /// Describes this element as an event target.
    pub fn target(&self) -> crate::event::Target {
        crate::event::Target::new(None, self.props.attributes.clone())
    }

    /// Dispatches an event to this element's props.
    pub fn dispatch(&self, ctx: &mut C, event: &mut Event) -> bool {
        self.props.dispatch(ctx, event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_by_attr_walks_children() {
        let tree: Element<()> = Element::intrinsic("div").child(
            Element::intrinsic("ul").children(vec![
                Element::intrinsic("li").props(Props::new().attr("k", 1usize)),
                Element::intrinsic("li").props(Props::new().attr("k", 2usize)),
            ]),
        );
        let found = tree.find_by_attr("k", &AttrValue::Int(2));
        assert!(found.is_some_and(|e| e.kind.name() == "li"));
        assert!(tree.find_by_attr("k", &AttrValue::Int(3)).is_none());
    }

    #[test]
    fn test_contains_node() {
        let id = NodeId::next();
        let tree: Element<()> =
            Element::intrinsic("div").child(Element::intrinsic("span").props(Props::new().attr("ref", id)));
        assert!(tree.contains_node(id));
        assert!(!tree.contains_node(NodeId::next()));
    }

    #[test]
    fn test_kinds() {
        assert!(Element::<()>::intrinsic("div").is_intrinsic());
        assert!(!Element::<()>::component("Menu").is_intrinsic());
    }
}

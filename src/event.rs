//! Synthetic events delivered to prop-bundle handlers.
//!
//! The host translates whatever its UI layer reports (a terminal key, a
//! mouse click resolved to a widget, a focus change) into an [`Event`] and
//! hands it to the handler of the element it happened on. Handlers can mark
//! the event default-prevented; a prevented event skips the controller's
//! own handler when the two are composed.

use crate::key::KeyPress;
use crate::props::Attributes;
use crossterm::event::{KeyCode, KeyModifiers};
use std::sync::atomic::{AtomicU64, Ordering};

static LAST_NODE_ID: AtomicU64 = AtomicU64::new(0);

/// Opaque identity of a rendered node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

impl NodeId {
    /// Allocates a process-unique node id.
    pub fn next() -> Self {
        NodeId(LAST_NODE_ID.fetch_add(1, Ordering::Relaxed) + 1)
    }
}

/// The element an event was fired on, described by the attributes the host
/// attached to it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Target {
    /// Node identity, when the host tracks one.
    pub node: Option<NodeId>,
    /// Attributes of the target element.
    pub attributes: Attributes,
}

impl Target {
    /// Builds a target from the attributes of a rendered element.
    pub fn new(node: Option<NodeId>, attributes: Attributes) -> Self {
        Self { node, attributes }
    }
}

/// Which handler slot an event is meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// A click (pointer press and release on the same element).
    Click,
    /// A key press while the element has focus.
    KeyDown,
    /// The text content of an input changed.
    Change,
    /// The element lost focus.
    Blur,
    /// The pointer moved onto the element.
    MouseEnter,
}

/// An event flowing through a prop-bundle handler.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    /// What happened.
    pub kind: EventKind,
    /// The key for [`EventKind::KeyDown`] events.
    pub key: Option<KeyPress>,
    /// The new text for [`EventKind::Change`] events.
    pub value: Option<String>,
    /// The element the event originated from.
    pub target: Option<Target>,
    default_prevented: bool,
}

impl Event {
    fn of(kind: EventKind) -> Self {
        Self {
            kind,
            key: None,
            value: None,
            target: None,
            default_prevented: false,
        }
    }

    /// A click on `target`.
    pub fn click(target: Option<Target>) -> Self {
        Self {
            target,
            ..Self::of(EventKind::Click)
        }
    }

    /// A key press.
    pub fn key_down(press: impl Into<KeyPress>) -> Self {
        Self {
            key: Some(press.into()),
            ..Self::of(EventKind::KeyDown)
        }
    }

    /// A key press with modifiers.
    pub fn key_down_with(code: KeyCode, mods: KeyModifiers) -> Self {
        Self::key_down((code, mods))
    }

    /// An input change carrying the new text.
    pub fn change(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            ..Self::of(EventKind::Change)
        }
    }

    /// A focus loss.
    pub fn blur() -> Self {
        Self::of(EventKind::Blur)
    }

    /// The pointer entering an element.
    pub fn mouse_enter() -> Self {
        Self::of(EventKind::MouseEnter)
    }

    /// Marks the event so the host skips its default action and composed
    /// internal handlers do not run.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Whether some handler called [`Event::prevent_default`].
    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_ids_are_unique() {
        let a = NodeId::next();
        let b = NodeId::next();
        assert_ne!(a, b);
    }

    #[test]
    fn test_prevent_default() {
        let mut e = Event::blur();
        assert!(!e.is_default_prevented());
        e.prevent_default();
        assert!(e.is_default_prevented());
    }

    #[test]
    fn test_constructors_fill_payload() {
        let e = Event::key_down_with(KeyCode::Down, KeyModifiers::SHIFT);
        assert_eq!(e.kind, EventKind::KeyDown);
        assert!(e.key.is_some_and(|k| k.shift()));
        assert_eq!(Event::change("ab").value.as_deref(), Some("ab"));
    }
}

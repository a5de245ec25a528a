//! Prop bundles: attributes plus event handlers for one rendered element.
//!
//! Bundles produced by the controller are merged with whatever the caller
//! passes in. Attributes merge shallowly with the caller winning. Handlers
//! are never overwritten; they are chained with [`compose_handlers`] so the
//! caller's handler runs first and can veto the internal one by calling
//! [`Event::prevent_default`].
//!
//! Handlers receive the context they act on (the controller model) as an
//! explicit `&mut` argument, so a bundle holds no borrow of it and can be
//! stored on a rendered element.

use crate::event::{Event, EventKind, NodeId};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// An event handler acting on context `C`.
pub type Handler<C> = Arc<dyn Fn(&mut C, &mut Event) + Send + Sync>;

/// Wraps a closure as a [`Handler`].
pub fn handler<C, F>(f: F) -> Handler<C>
where
    F: Fn(&mut C, &mut Event) + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Chains an optional caller handler in front of an internal one.
///
/// The caller's handler always runs. The internal handler runs afterwards
/// unless the event has been default-prevented by then.
pub fn compose_handlers<C: 'static>(external: Option<Handler<C>>, internal: Handler<C>) -> Handler<C> {
    match external {
        None => internal,
        Some(external) => Arc::new(move |ctx: &mut C, event: &mut Event| {
            external(ctx, event);
            if !event.is_default_prevented() {
                internal(ctx, event);
            }
        }),
    }
}

/// An attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// Text.
    Str(String),
    /// Flag.
    Bool(bool),
    /// Integer.
    Int(i64),
    /// Reference to a rendered node.
    Node(NodeId),
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Str(s) => write!(f, "{}", s),
            AttrValue::Bool(b) => write!(f, "{}", b),
            AttrValue::Int(i) => write!(f, "{}", i),
            AttrValue::Node(NodeId(id)) => write!(f, "#{}", id),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Str(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::Str(s)
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        AttrValue::Bool(b)
    }
}

impl From<i64> for AttrValue {
    fn from(i: i64) -> Self {
        AttrValue::Int(i)
    }
}

impl From<usize> for AttrValue {
    fn from(i: usize) -> Self {
        AttrValue::Int(i64::try_from(i).unwrap_or(i64::MAX))
    }
}

impl From<NodeId> for AttrValue {
    fn from(id: NodeId) -> Self {
        AttrValue::Node(id)
    }
}

/// Named attributes of an element, ordered by name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes(BTreeMap<String, AttrValue>);

impl Attributes {
    /// No attributes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        self.0.insert(name.into(), value.into());
    }

    /// Builder form of [`Attributes::set`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Looks up an attribute.
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.0.get(name)
    }

    /// Looks up an attribute and reads it as a non-negative integer.
    /// Text values are parsed.
    pub fn get_index(&self, name: &str) -> Option<usize> {
        match self.0.get(name)? {
            AttrValue::Int(i) => usize::try_from(*i).ok(),
            AttrValue::Str(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// True when the attribute is present.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Removes an attribute.
    pub fn remove(&mut self, name: &str) -> Option<AttrValue> {
        self.0.remove(name)
    }

    /// Copies every attribute of `other` over `self`.
    pub fn extend(&mut self, other: Attributes) {
        self.0.extend(other.0);
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when there are no attributes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Handler slots of a bundle.
pub struct Handlers<C> {
    slots: BTreeMap<HandlerSlot, Handler<C>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct HandlerSlot(u8);

impl From<EventKind> for HandlerSlot {
    fn from(kind: EventKind) -> Self {
        HandlerSlot(match kind {
            EventKind::Click => 0,
            EventKind::KeyDown => 1,
            EventKind::Change => 2,
            EventKind::Blur => 3,
            EventKind::MouseEnter => 4,
        })
    }
}

impl<C> Default for Handlers<C> {
    fn default() -> Self {
        Self {
            slots: BTreeMap::new(),
        }
    }
}

impl<C> Clone for Handlers<C> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
        }
    }
}

impl<C> Handlers<C> {
    /// Installs a handler for `kind`, replacing any previous one.
    pub fn set(&mut self, kind: EventKind, handler: Handler<C>) {
        self.slots.insert(kind.into(), handler);
    }

    /// The handler for `kind`, if any.
    pub fn get(&self, kind: EventKind) -> Option<&Handler<C>> {
        self.slots.get(&kind.into())
    }

    /// Removes and returns the handler for `kind`.
    pub fn take(&mut self, kind: EventKind) -> Option<Handler<C>> {
        self.slots.remove(&kind.into())
    }

    /// True when a handler is installed for `kind`.
    pub fn has(&self, kind: EventKind) -> bool {
        self.slots.contains_key(&kind.into())
    }
}

const ALL_KINDS: [EventKind; 5] = [
    EventKind::Click,
    EventKind::KeyDown,
    EventKind::Change,
    EventKind::Blur,
    EventKind::MouseEnter,
];

/// Attributes and handlers for one element.
pub struct Props<C> {
    /// Element attributes.
    pub attributes: Attributes,
    /// Element event handlers.
    pub handlers: Handlers<C>,
}

impl<C> Default for Props<C> {
    fn default() -> Self {
        Self {
            attributes: Attributes::default(),
            handlers: Handlers::default(),
        }
    }
}

impl<C> Clone for Props<C> {
    fn clone(&self) -> Self {
        Self {
            attributes: self.attributes.clone(),
            handlers: self.handlers.clone(),
        }
    }
}

impl<C> fmt::Debug for Props<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kinds: Vec<EventKind> = ALL_KINDS
            .iter()
            .copied()
            .filter(|k| self.handlers.has(*k))
            .collect();
        f.debug_struct("Props")
            .field("attributes", &self.attributes)
            .field("handlers", &kinds)
            .finish()
    }
}

impl<C: 'static> Props<C> {
    /// An empty bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an attribute.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attributes.set(name, value);
        self
    }

    /// Adds a handler.
    pub fn on<F>(mut self, kind: EventKind, f: F) -> Self
    where
        F: Fn(&mut C, &mut Event) + Send + Sync + 'static,
    {
        self.handlers.set(kind, handler(f));
        self
    }

    /// Layers caller-supplied props over `self`, the internal bundle.
    ///
    /// Caller attributes replace internal ones of the same name. For every
    /// event kind the internal handler is composed behind the caller's.
    pub fn merged_with(mut self, mut external: Props<C>) -> Props<C> {
        self.attributes.extend(external.attributes);
        for kind in ALL_KINDS {
            let outer = external.handlers.take(kind);
            match self.handlers.take(kind) {
                Some(inner) => self.handlers.set(kind, compose_handlers(outer, inner)),
                None => {
                    if let Some(outer) = outer {
                        self.handlers.set(kind, outer);
                    }
                }
            }
        }
        self
    }

    /// Runs the handler matching the event's kind against `ctx`.
    /// Returns false when the bundle has no handler for it.
    pub fn dispatch(&self, ctx: &mut C, event: &mut Event) -> bool {
        match self.handlers.get(event.kind) {
            Some(h) => {
                h(ctx, event);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Log(Vec<&'static str>);

    fn push(tag: &'static str) -> Handler<Log> {
        handler(move |log: &mut Log, _| log.0.push(tag))
    }

    #[test]
    fn test_external_runs_before_internal() {
        let h = compose_handlers(Some(push("outer")), push("inner"));
        let mut log = Log::default();
        h(&mut log, &mut Event::blur());
        assert_eq!(log.0, vec!["outer", "inner"]);
    }

    #[test]
    fn test_prevent_default_skips_internal() {
        let outer = handler(|log: &mut Log, e: &mut Event| {
            log.0.push("outer");
            e.prevent_default();
        });
        let h = compose_handlers(Some(outer), push("inner"));
        let mut log = Log::default();
        h(&mut log, &mut Event::blur());
        assert_eq!(log.0, vec!["outer"]);
    }

    #[test]
    fn test_missing_external_is_internal() {
        let h = compose_handlers(None, push("inner"));
        let mut log = Log::default();
        h(&mut log, &mut Event::click(None));
        assert_eq!(log.0, vec!["inner"]);
    }

    #[test]
    fn test_merge_attributes_caller_wins_and_handlers_compose() {
        let internal = Props::<Log>::new()
            .attr("role", "button")
            .attr("aria-haspopup", true)
            .on(EventKind::Click, |log: &mut Log, _: &mut Event| log.0.push("inner"));
        let external = Props::<Log>::new()
            .attr("role", "link")
            .on(EventKind::Click, |log: &mut Log, _: &mut Event| log.0.push("outer"))
            .on(EventKind::Blur, |log: &mut Log, _: &mut Event| log.0.push("blur"));

        let merged = internal.merged_with(external);
        assert_eq!(merged.attributes.get("role"), Some(&AttrValue::from("link")));
        assert_eq!(merged.attributes.get("aria-haspopup"), Some(&AttrValue::Bool(true)));

        let mut log = Log::default();
        assert!(merged.dispatch(&mut log, &mut Event::click(None)));
        assert!(merged.dispatch(&mut log, &mut Event::blur()));
        assert!(!merged.dispatch(&mut log, &mut Event::mouse_enter()));
        assert_eq!(log.0, vec!["outer", "inner", "blur"]);
    }

    #[test]
    fn test_get_index_reads_ints_and_text() {
        let a = Attributes::new()
            .with("n", 3usize)
            .with("s", "7")
            .with("neg", -1i64)
            .with("flag", true);
        assert_eq!(a.get_index("n"), Some(3));
        assert_eq!(a.get_index("s"), Some(7));
        assert_eq!(a.get_index("neg"), None);
        assert_eq!(a.get_index("flag"), None);
        assert_eq!(a.get_index("missing"), None);
    }

    #[test]
    fn test_huge_usize_saturates() {
        assert_eq!(AttrValue::from(usize::MAX), AttrValue::Int(i64::MAX));
        assert_eq!(AttrValue::from(7usize), AttrValue::Int(7));
    }
}

//! Document-level pointer listeners.
//!
//! Some interaction rules depend on pointer activity anywhere in the
//! application, not just on the widget: a press that starts on a menu item
//! blurs the input before the click lands, and a release outside the widget
//! should dismiss it. The host feeds every raw pointer press and release into
//! a [`Document`]; components subscribe to it and answer with messages for
//! their own `update` loop.
//!
//! ```rust
//! use bubbletea_autocomplete::document::{Document, Listener, PointerEvent, PointerKind};
//! use bubbletea_rs::Msg;
//! use std::sync::Arc;
//!
//! let doc = Document::new();
//! let noop: Listener = Arc::new(|_: &PointerEvent| -> Option<Msg> { None });
//! let sub = doc.subscribe(vec![(PointerKind::Up, noop)]);
//! assert_eq!(doc.listener_count(), 1);
//! sub.unsubscribe();
//! sub.unsubscribe(); // second call is a no-op
//! assert_eq!(doc.listener_count(), 0);
//! ```

use crate::event::NodeId;
use bubbletea_rs::Msg;
use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

static GLOBAL: Lazy<Document> = Lazy::new(Document::new);

/// Pointer button transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    /// Button pressed.
    Down,
    /// Button released.
    Up,
}

/// A raw pointer transition somewhere in the application.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerEvent {
    /// Press or release.
    pub kind: PointerKind,
    /// The node under the pointer followed by its ancestors, innermost
    /// first. Empty when the pointer is over nothing the host tracks.
    pub path: Vec<NodeId>,
}

impl PointerEvent {
    /// A press over `path`.
    pub fn down(path: Vec<NodeId>) -> Self {
        Self {
            kind: PointerKind::Down,
            path,
        }
    }

    /// A release over `path`.
    pub fn up(path: Vec<NodeId>) -> Self {
        Self {
            kind: PointerKind::Up,
            path,
        }
    }

    /// True when `node` is the target or one of its ancestors.
    pub fn is_within(&self, node: NodeId) -> bool {
        self.path.contains(&node)
    }
}

/// A pointer listener. It may answer with a message for its component.
pub type Listener = Arc<dyn Fn(&PointerEvent) -> Option<Msg> + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ListenerId(u64);

struct Inner {
    listeners: Mutex<Vec<(ListenerId, PointerKind, Listener)>>,
    last_id: AtomicU64,
}

/// A shared pointer-event hub. Cloning yields another handle to the same hub.
#[derive(Clone)]
pub struct Document {
    inner: Arc<Inner>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl Document {
    /// A fresh, independent hub.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                listeners: Mutex::new(Vec::new()),
                last_id: AtomicU64::new(0),
            }),
        }
    }

    /// The process-wide hub.
    pub fn global() -> Document {
        GLOBAL.clone()
    }

    fn listeners(&self) -> MutexGuard<'_, Vec<(ListenerId, PointerKind, Listener)>> {
        self.inner
            .listeners
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Installs listeners and returns the handle that removes them.
    pub fn subscribe(&self, listeners: Vec<(PointerKind, Listener)>) -> Subscription {
        let mut ids = Vec::with_capacity(listeners.len());
        {
            let mut guard = self.listeners();
            for (kind, listener) in listeners {
                let id = ListenerId(self.inner.last_id.fetch_add(1, Ordering::Relaxed) + 1);
                guard.push((id, kind, listener));
                ids.push(id);
            }
        }
        tracing::trace!(count = ids.len(), "document listeners installed");
        Subscription {
            state: Arc::new(SubscriptionState {
                document: self.clone(),
                ids,
                active: AtomicBool::new(true),
            }),
        }
    }

    fn remove(&self, ids: &[ListenerId]) {
        self.listeners().retain(|(id, _, _)| !ids.contains(id));
    }

    /// Number of installed listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners().len()
    }

    /// Delivers a pointer event to every listener registered for its kind
    /// and collects their answers.
    ///
    /// Listeners run without the hub locked, so they may subscribe or
    /// unsubscribe while handling the event.
    pub fn dispatch(&self, event: &PointerEvent) -> Vec<Msg> {
        let targets: Vec<Listener> = self
            .listeners()
            .iter()
            .filter(|(_, kind, _)| *kind == event.kind)
            .map(|(_, _, l)| Arc::clone(l))
            .collect();
        targets.iter().filter_map(|l| l(event)).collect()
    }

    /// Shorthand for dispatching a press.
    pub fn pointer_down(&self, path: Vec<NodeId>) -> Vec<Msg> {
        self.dispatch(&PointerEvent::down(path))
    }

    /// Shorthand for dispatching a release.
    pub fn pointer_up(&self, path: Vec<NodeId>) -> Vec<Msg> {
        self.dispatch(&PointerEvent::up(path))
    }
}

struct SubscriptionState {
    document: Document,
    ids: Vec<ListenerId>,
    active: AtomicBool,
}

impl SubscriptionState {
    fn cancel(&self) {
        if self.active.swap(false, Ordering::SeqCst) {
            self.document.remove(&self.ids);
            tracing::trace!(count = self.ids.len(), "document listeners removed");
        }
    }
}

/// Owns a group of installed listeners.
///
/// [`Subscription::unsubscribe`] removes them; calling it again does
/// nothing. Dropping the subscription also unsubscribes.
pub struct Subscription {
    state: Arc<SubscriptionState>,
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

impl Subscription {
    /// Removes the listeners. Idempotent.
    pub fn unsubscribe(&self) {
        self.state.cancel();
    }

    /// False once unsubscribed.
    pub fn is_active(&self) -> bool {
        self.state.active.load(Ordering::SeqCst)
    }

    /// A second handle on the same listeners, used by the owning component
    /// to check liveness and to tear down on its own.
    pub(crate) fn watcher(&self) -> SubscriptionWatcher {
        SubscriptionWatcher {
            state: Arc::clone(&self.state),
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.state.cancel();
    }
}

/// Non-owning view of a [`Subscription`]. Dropping it leaves the listeners
/// installed.
pub(crate) struct SubscriptionWatcher {
    state: Arc<SubscriptionState>,
}

impl SubscriptionWatcher {
    pub(crate) fn is_active(&self) -> bool {
        self.state.active.load(Ordering::SeqCst)
    }

    pub(crate) fn cancel(&self) {
        self.state.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    struct Ping(usize);

    fn counting(counter: Arc<AtomicUsize>) -> Listener {
        Arc::new(move |_: &PointerEvent| {
            let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
            Some(Box::new(Ping(n)) as Msg)
        })
    }

    #[test]
    fn test_dispatch_filters_by_kind() {
        let doc = Document::new();
        let downs = Arc::new(AtomicUsize::new(0));
        let ups = Arc::new(AtomicUsize::new(0));
        let _sub = doc.subscribe(vec![
            (PointerKind::Down, counting(downs.clone())),
            (PointerKind::Up, counting(ups.clone())),
        ]);

        let msgs = doc.pointer_down(vec![]);
        assert_eq!(msgs.len(), 1);
        assert!(msgs[0].downcast_ref::<Ping>().is_some_and(|p| p.0 == 1));
        doc.pointer_up(vec![]);
        doc.pointer_up(vec![]);
        assert_eq!(downs.load(Ordering::SeqCst), 1);
        assert_eq!(ups.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_unsubscribe_is_idempotent_and_symmetric() {
        let doc = Document::new();
        let hits = Arc::new(AtomicUsize::new(0));
        for _ in 0..3 {
            let sub = doc.subscribe(vec![(PointerKind::Up, counting(hits.clone()))]);
            assert_eq!(doc.listener_count(), 1);
            sub.unsubscribe();
            sub.unsubscribe();
            assert!(!sub.is_active());
            assert_eq!(doc.listener_count(), 0);
        }
        doc.pointer_up(vec![]);
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_drop_unsubscribes_but_watcher_does_not() {
        let doc = Document::new();
        let noop: Listener = Arc::new(|_: &PointerEvent| -> Option<Msg> { None });
        let sub = doc.subscribe(vec![(PointerKind::Down, noop)]);
        let watcher = sub.watcher();
        drop(watcher);
        assert_eq!(doc.listener_count(), 1);
        drop(sub);
        assert_eq!(doc.listener_count(), 0);
    }

    #[test]
    fn test_is_within_path() {
        let a = NodeId::next();
        let b = NodeId::next();
        let ev = PointerEvent::up(vec![a, b]);
        assert!(ev.is_within(b));
        assert!(!ev.is_within(NodeId::next()));
    }
}

//! Core model implementation for the autocomplete component.

use super::options::Options;
use super::types::{OutsideReleaseMsg, StatusTickMsg, Surface, Value};
use crate::a11y::StatusInput;
use crate::document::{Document, Listener, PointerEvent, PointerKind, Subscription, SubscriptionWatcher};
use crate::event::{Event, NodeId};
use crate::host::{Host, NoopHost};
use crate::key::KeyPress;
use crate::props::Props;
use crate::registry::Registry;
use crate::selection::Selection;
use crate::Component;
use bubbletea_rs::{tick, Cmd, KeyMsg, Msg};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

// Lets tick and pointer messages find the instance that scheduled them.
static LAST_ID: AtomicUsize = AtomicUsize::new(0);

fn next_id() -> usize {
    LAST_ID.fetch_add(1, Ordering::Relaxed) + 1
}

/// The interaction state of one autocomplete.
#[derive(Debug, Clone, PartialEq)]
pub struct State<V> {
    /// Whether the menu is shown and navigable.
    pub is_open: bool,
    /// Registry index of the highlighted item.
    pub highlighted_index: Option<usize>,
    /// Text in the input.
    pub input_value: String,
    /// The committed selection.
    pub selected_value: Selection<V>,
}

/// A headless autocomplete controller.
///
/// The model owns the interaction state and nothing visual. Each frame the
/// host calls [`Model::render`] with a function that builds its own element
/// tree from the prop bundles the model hands out; events on those elements
/// come back through [`Model::dispatch`], key messages and timer ticks
/// through [`Model::update`]. Every entry point returns the command that
/// schedules the debounced accessibility status, if one is due.
///
/// # Examples
///
/// ```rust
/// use bubbletea_autocomplete::autocomplete::{new, Change, Options};
/// use bubbletea_autocomplete::element::Element;
/// use bubbletea_autocomplete::props::Props;
///
/// let mut ac = new(Options::new(|_: &Change<&'static str>| {}));
/// let fruits = ["apple", "banana", "cherry"];
///
/// let tree = ac
///     .render(|ctx| {
///         let items: Vec<_> = fruits
///             .iter()
///             .enumerate()
///             .map(|(i, f)| Element::intrinsic("li").props(ctx.item_props(i, *f, Props::new())).text(*f))
///             .collect();
///         Element::intrinsic("div")
///             .props(ctx.root_props(Props::new()))
///             .child(Element::intrinsic("input").props(ctx.input_props(Props::new())))
///             .child(Element::intrinsic("ul").children(items))
///     })
///     .expect("root props were applied");
///
/// assert_eq!(ac.registry().len(), 3);
/// assert!(tree.is_intrinsic());
///
/// ac.select_item("banana");
/// assert_eq!(ac.input_value(), "banana");
/// assert!(!ac.is_open());
/// ```
pub struct Model<V: Value> {
    pub(super) id: usize,
    pub(super) state: State<V>,
    pub(super) options: Options<V>,
    pub(super) host: Box<dyn Host>,
    pub(super) registry: Registry<V>,
    pub(super) root_node: NodeId,
    pub(super) pointer_down: Arc<AtomicBool>,
    pub(super) subscription: Option<SubscriptionWatcher>,
    pub(super) focus: Option<Surface>,
    status_tag: usize,
    status_snapshot: (Option<usize>, Selection<V>),
}

/// Creates an autocomplete whose host ignores scroll, focus and status
/// requests.
pub fn new<V: Value>(options: Options<V>) -> Model<V> {
    Model::new(options, NoopHost)
}

impl<V: Value> Model<V> {
    /// Creates an autocomplete with the given options and host.
    ///
    /// The selection starts at the configured default and the input shows
    /// its display text. The menu is closed and nothing is highlighted.
    pub fn new(options: Options<V>, host: impl Host + 'static) -> Self {
        let selected_value = options.initial_selection();
        let input_value = selected_value.display(|v| (options.get_value)(v));
        Self {
            id: next_id(),
            state: State {
                is_open: false,
                highlighted_index: None,
                input_value,
                selected_value: selected_value.clone(),
            },
            options,
            host: Box::new(host),
            registry: Registry::default(),
            root_node: NodeId::next(),
            pointer_down: Arc::new(AtomicBool::new(false)),
            subscription: None,
            focus: None,
            status_tag: 0,
            status_snapshot: (None, selected_value),
        }
    }

    /// Unique id of this instance, carried by its messages.
    pub fn id(&self) -> usize {
        self.id
    }

    /// The node id the root bundle references.
    pub fn root_node(&self) -> NodeId {
        self.root_node
    }

    /// A snapshot of the interaction state.
    pub fn state(&self) -> &State<V> {
        &self.state
    }

    /// Whether the menu is open.
    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    /// The highlighted registry index.
    pub fn highlighted_index(&self) -> Option<usize> {
        self.state.highlighted_index
    }

    /// The input text.
    pub fn input_value(&self) -> &str {
        &self.state.input_value
    }

    /// The committed selection.
    pub fn selected_value(&self) -> &Selection<V> {
        &self.state.selected_value
    }

    /// Items rendered by the last render pass.
    pub fn registry(&self) -> &Registry<V> {
        &self.registry
    }

    /// The value rendered under `index` in the last render pass.
    pub fn item_from_index(&self, index: usize) -> Option<&V> {
        self.registry.get(index).map(|e| &e.value)
    }

    /// Display text of a value, via the configured projection.
    pub fn display_value(&self, value: &V) -> String {
        (self.options.get_value)(value)
    }

    /// Display text of the current selection.
    pub(super) fn selection_text(&self) -> String {
        self.state
            .selected_value
            .display(|v| (self.options.get_value)(v))
    }

    /// Whether the pointer is currently held down anywhere in the document.
    pub fn is_pointer_down(&self) -> bool {
        self.pointer_down.load(Ordering::SeqCst)
    }

    /// Which surface receives routed key messages.
    pub fn focused_surface(&self) -> Option<Surface> {
        self.focus
    }

    /// Routes key messages to the toggle button.
    pub fn focus_button(&mut self) {
        self.focus = Some(Surface::Button);
    }

    /// Whether the document listeners are installed and status messages
    /// may be published.
    pub fn is_mounted(&self) -> bool {
        self.subscription.as_ref().is_some_and(|s| s.is_active())
    }

    /// Activates the instance: installs the document listeners that track
    /// pointer presses and detect releases outside the root.
    ///
    /// Mounting again tears down the previous listeners first, so a model
    /// never has more than one set installed. The returned subscription is
    /// the teardown handle; pass it to [`Model::unmount`] or unsubscribe it
    /// directly.
    pub fn mount(&mut self, document: &Document) -> Subscription {
        if let Some(previous) = self.subscription.take() {
            previous.cancel();
        }
        self.pointer_down.store(false, Ordering::SeqCst);

        let down_flag = Arc::clone(&self.pointer_down);
        let on_down: Listener = Arc::new(move |_: &PointerEvent| -> Option<Msg> {
            down_flag.store(true, Ordering::SeqCst);
            None
        });

        let up_flag = Arc::clone(&self.pointer_down);
        let root = self.root_node;
        let id = self.id;
        let on_up: Listener = Arc::new(move |event: &PointerEvent| -> Option<Msg> {
            up_flag.store(false, Ordering::SeqCst);
            if event.is_within(root) {
                None
            } else {
                Some(Box::new(OutsideReleaseMsg { id }) as Msg)
            }
        });

        let subscription =
            document.subscribe(vec![(PointerKind::Down, on_down), (PointerKind::Up, on_up)]);
        self.subscription = Some(subscription.watcher());
        tracing::debug!(id = self.id, "autocomplete mounted");
        subscription
    }

    /// Deactivates the instance: removes the document listeners and drops
    /// any status message still waiting on its debounce.
    pub fn unmount(&mut self, subscription: Subscription) {
        subscription.unsubscribe();
        if let Some(watcher) = self.subscription.take() {
            watcher.cancel();
        }
        self.cancel_status();
        tracing::debug!(id = self.id, "autocomplete unmounted");
    }

    /// Drops the pending status message, if any.
    pub fn cancel_status(&mut self) {
        self.status_tag += 1;
    }

    /// Runs the handler of `props` that matches the event, then flushes.
    pub fn dispatch(&mut self, props: &Props<Model<V>>, event: &mut Event) -> Option<Cmd> {
        props.dispatch(self, event);
        self.flush()
    }

    /// The bubbletea update hook.
    ///
    /// Handles key messages for the focused surface, the status debounce
    /// tick and outside-release notices from the document subscription.
    /// Key messages go straight to the built-in key tables; caller handlers
    /// on the element bundles only see events delivered via
    /// [`Model::dispatch`].
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            let mut event = Event::key_down(KeyPress::from(key_msg));
            match self.focus {
                Some(Surface::Input) => self.input_key_down(&mut event),
                Some(Surface::Button) => self.button_key_down(&mut event),
                None => {}
            }
        } else if let Some(tick_msg) = msg.downcast_ref::<StatusTickMsg>() {
            self.handle_status_tick(tick_msg);
        } else if let Some(outside) = msg.downcast_ref::<OutsideReleaseMsg>() {
            if outside.id == self.id {
                tracing::debug!(id = self.id, "pointer released outside root");
                self.reset();
            }
        }
        self.flush()
    }

    /// Compares the highlight and selection with the previous flush and,
    /// when either changed, restarts the status debounce.
    ///
    /// Every entry point of the model calls this before returning. Hosts
    /// that call action methods directly should call it afterwards and run
    /// the returned command.
    pub fn flush(&mut self) -> Option<Cmd> {
        if self.status_snapshot.0 == self.state.highlighted_index
            && self.status_snapshot.1 == self.state.selected_value
        {
            return None;
        }
        self.status_snapshot = (
            self.state.highlighted_index,
            self.state.selected_value.clone(),
        );
        Some(self.status_cmd())
    }

    fn status_cmd(&mut self) -> Cmd {
        self.status_tag += 1;
        let id = self.id;
        let tag = self.status_tag;
        tick(self.options.status_debounce, move |_| {
            Box::new(StatusTickMsg { id, tag }) as Msg
        })
    }

    fn handle_status_tick(&mut self, msg: &StatusTickMsg) {
        if msg.id != self.id {
            return;
        }
        if msg.tag != self.status_tag || !self.is_mounted() {
            tracing::trace!(id = self.id, tag = msg.tag, "stale status tick dropped");
            return;
        }
        let message = self.status_message();
        tracing::debug!(id = self.id, %message, "a11y status");
        self.host.set_a11y_status(&message);
    }

    /// The status message for the current highlight and rendered items.
    pub fn status_message(&self) -> String {
        let highlighted = self
            .state
            .highlighted_index
            .and_then(|i| self.registry.get(i))
            .map(|e| &e.value);
        let get_value = |v: &V| (self.options.get_value)(v);
        (self.options.status_message)(&StatusInput {
            result_count: self.registry.len(),
            highlighted_item: highlighted,
            get_value: &get_value,
        })
    }

    #[cfg(test)]
    pub(super) fn status_tag(&self) -> usize {
        self.status_tag
    }
}

impl<V: Value> Component for Model<V> {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus = Some(Surface::Input);
        None
    }

    fn blur(&mut self) {
        if self.focus == Some(Surface::Input) {
            self.input_blur();
        }
        self.focus = None;
    }

    fn focused(&self) -> bool {
        self.focus.is_some()
    }
}

impl<V: Value> std::fmt::Debug for Model<V>
where
    V: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("id", &self.id)
            .field("state", &self.state)
            .field("registry", &self.registry)
            .field("focus", &self.focus)
            .finish()
    }
}

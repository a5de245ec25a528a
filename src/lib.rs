#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-autocomplete/")]

//! # bubbletea-autocomplete
//!
//! A headless autocomplete (combobox) controller for
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs) applications.
//!
//! ## Overview
//!
//! The controller manages the interaction state of one autocomplete widget:
//! whether the menu is open, which item is highlighted, the text in the input
//! and the committed selection. It renders nothing. Each frame the host calls
//! [`Autocomplete::render`] with its own render function, asks the render
//! context for prop bundles (root, toggle button, text input, items) and
//! attaches them to the elements it draws. Events on those elements flow back
//! into the controller, which updates its state and schedules an accessibility
//! status message.
//!
//! ## Features
//!
//! - **Keyboard navigation** with arrows, shift+arrows, enter, escape and space
//! - **Single or multiple selection**, fixed at construction
//! - **Composable prop bundles**: caller handlers run first and can veto the
//!   built-in ones with [`Event::prevent_default`](event::Event::prevent_default)
//! - **Outside-click detection** through a document-level pointer subscription
//! - **Debounced status messages** delivered as bubbletea tick commands
//!
//! ## Focus Management
//!
//! The controller implements the [`Component`] trait. Focusing routes key
//! messages to the text input; blurring runs the input blur logic.
//!
//! ```rust
//! use bubbletea_autocomplete::prelude::*;
//!
//! let mut ac = autocomplete_new(Options::new(|_: &Change<String>| {}));
//! assert!(!ac.focused());
//! ac.focus();
//! assert!(ac.focused());
//! ac.blur();
//! assert!(!ac.focused());
//! ```
//!
//! ## Integration with bubbletea-rs
//!
//! ```rust
//! use bubbletea_autocomplete::prelude::*;
//! use bubbletea_rs::{Cmd, Msg};
//!
//! struct App {
//!     fruit: Autocomplete<String>,
//!     _listeners: Subscription,
//! }
//!
//! impl App {
//!     fn new() -> Self {
//!         let mut fruit = autocomplete_new(Options::new(|c: &Change<String>| {
//!             tracing::info!(selected = ?c.selected_value, "fruit picked");
//!         }));
//!         let listeners = fruit.mount(&Document::global());
//!         fruit.focus();
//!         Self { fruit, _listeners: listeners }
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.fruit.update(msg)
//!     }
//! }
//!
//! let _app = App::new();
//! ```

pub mod a11y;
pub mod autocomplete;
pub mod document;
pub mod element;
pub mod error;
pub mod event;
pub mod host;
pub mod key;
pub mod navigation;
pub mod props;
pub mod registry;
pub mod selection;

use bubbletea_rs::Cmd;

/// Core trait for components that support focus management.
///
/// Components that implement this trait can take part in a focus ring:
/// the focused component receives keyboard input, the others ignore it.
///
/// ## Implementation Guidelines
///
/// - `focus()` sets the focused state and may return a command for
///   initialization
/// - `blur()` unsets it and runs whatever the component does on focus loss
/// - `focused()` reports the current state
///
/// ## Examples
///
/// ```rust
/// use bubbletea_autocomplete::prelude::*;
/// use bubbletea_rs::Cmd;
///
/// fn cycle<T: Component>(component: &mut T) {
///     let _cmd: Option<Cmd> = component.focus();
///     assert!(component.focused());
///     component.blur();
///     assert!(!component.focused());
/// }
///
/// let mut ac = autocomplete_new(Options::new(|_: &Change<u32>| {}));
/// cycle(&mut ac);
/// ```
pub trait Component {
    /// Sets the component to focused state. May return a command for the
    /// bubbletea runtime.
    fn focus(&mut self) -> Option<Cmd>;

    /// Sets the component to blurred (unfocused) state.
    fn blur(&mut self);

    /// Returns the current focus state of the component.
    fn focused(&self) -> bool;
}

pub use autocomplete::Model as Autocomplete;
pub use autocomplete::{
    default_key_map as autocomplete_default_key_map, new as autocomplete_new, Change,
    KeyMap as AutocompleteKeyMap, Options, OutsideReleaseMsg, RenderContext, State,
    StatusTickMsg, Surface,
};
pub use document::{Document, PointerEvent, PointerKind, Subscription};
pub use element::{Element, ElementKind};
pub use error::{Error, Result};
pub use event::{Event, EventKind, NodeId, Target};
pub use host::{Host, NoopHost, ScrollRequest};
pub use key::{
    matches_binding, new_binding, with_disabled, with_help, with_keys, with_keys_str, Binding,
    Help as KeyHelp, KeyMap, KeyPress,
};
pub use props::{compose_handlers, handler, AttrValue, Attributes, Handler, Props};
pub use selection::Selection;

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_autocomplete::prelude::*;
///
/// let ac: Autocomplete<&'static str> = autocomplete_new(Options::new(|_: &Change<&'static str>| {}));
/// assert_eq!(ac.selected_value(), &Selection::Single(None));
/// ```
pub mod prelude {
    pub use crate::a11y::{default_status_message, LiveRegion, StatusInput};
    pub use crate::Component;
    pub use crate::{
        autocomplete_default_key_map, autocomplete_new, Autocomplete, AutocompleteKeyMap, Change,
        Document, Element, Error, Event, EventKind, Host, NoopHost, Options, Props,
        RenderContext, Selection, Subscription, Surface,
    };
    pub use crate::{Binding, KeyMap, KeyPress};
}

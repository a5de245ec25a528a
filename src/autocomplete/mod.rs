//! Headless autocomplete (combobox) controller for Bubble Tea applications.
//!
//! The controller owns the interaction state of one autocomplete: whether the
//! menu is open, which item is highlighted, the input text and the committed
//! selection. It draws nothing. The host renders its own root, toggle
//! button, text input and items, attaching the prop bundles the controller
//! hands out, and feeds events back in.
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_autocomplete::autocomplete::{new, Change, Options};
//! use bubbletea_autocomplete::element::Element;
//! use bubbletea_autocomplete::event::Event;
//! use bubbletea_autocomplete::props::Props;
//! use crossterm::event::KeyCode;
//!
//! let mut ac = new(Options::new(|_: &Change<String>| {}));
//! let items = vec!["red".to_string(), "green".to_string()];
//!
//! let render = |ac: &mut bubbletea_autocomplete::Autocomplete<String>| {
//!     ac.render(|ctx| {
//!         let input = ctx.input_props(Props::new());
//!         let list: Vec<_> = items
//!             .iter()
//!             .enumerate()
//!             .map(|(i, s)| Element::intrinsic("li").props(ctx.item_props(i, s.clone(), Props::new())))
//!             .collect();
//!         Element::intrinsic("div")
//!             .child(Element::intrinsic("input").props(input))
//!             .child(Element::intrinsic("ul").children(list))
//!     })
//! };
//!
//! let tree = render(&mut ac).expect("intrinsic root");
//! let input = tree.children[0].props.clone();
//!
//! // First arrow opens the menu, the second highlights the first item.
//! ac.dispatch(&input, &mut Event::key_down(KeyCode::Down));
//! render(&mut ac).expect("intrinsic root");
//! ac.dispatch(&input, &mut Event::key_down(KeyCode::Down));
//! assert_eq!(ac.highlighted_index(), Some(0));
//!
//! ac.dispatch(&input, &mut Event::key_down(KeyCode::Enter));
//! assert_eq!(ac.input_value(), "red");
//! ```
//!
//! # Lifecycle
//!
//! [`Model::mount`] installs the document pointer listeners and returns the
//! [`Subscription`](crate::document::Subscription) that removes them;
//! [`Model::unmount`] tears everything down, including a pending status
//! message.
//!
//! # Key Bindings
//!
//! Arrows move the highlight (shift moves five items), enter commits, escape
//! resets and space on the toggle button opens, closes or commits. See
//! [`KeyMap`].

pub mod getters;
pub mod keymap;
pub mod methods;
pub mod model;
pub mod options;
pub mod render;
pub mod types;


pub use getters::DEFAULT_REF_KEY;
pub use keymap::{default_key_map, KeyAction, KeyMap, FAST_MOVE_AMOUNT};
pub use model::{new, Model, State};
pub use options::{Options, DEFAULT_STATUS_DEBOUNCE};
pub use render::RenderContext;
pub use types::{
    AutocompleteElement, AutocompleteHandler, AutocompleteProps, Change, GetValueFn,
    OnChangeFn, OutsideReleaseMsg, StatusTickMsg, Surface, Value, INPUT_ATTR, ITEM_INDEX_ATTR,
};

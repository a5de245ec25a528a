//! Host collaborators.
//!
//! The controller decides *that* something should scroll, gain focus or be
//! announced; the host decides *how*. Every method has a do-nothing default so
//! a host only implements what its UI layer supports.

use crate::event::NodeId;

/// A request to bring a highlighted item into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    /// Index of the item to reveal (its `data-autocomplete-item-index`).
    pub item_index: usize,
    /// The scrolling container, i.e. the widget root.
    pub container: NodeId,
    /// Align the item with the top of the container instead of scrolling
    /// the minimum distance.
    pub align_to_top: bool,
}

/// Side effects the controller asks its host to perform.
pub trait Host: Send {
    /// Scrolls an item into view.
    fn scroll_into_view(&mut self, _request: ScrollRequest) {}

    /// Moves keyboard focus to the text input.
    fn focus_input(&mut self) {}

    /// Publishes an accessibility status message.
    fn set_a11y_status(&mut self, _message: &str) {}
}

/// A host that ignores every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHost;

impl Host for NoopHost {}

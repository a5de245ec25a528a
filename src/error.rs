//! Error types for bubbletea-autocomplete.

use thiserror::Error;

/// Errors surfaced by the autocomplete controller.
///
/// The controller treats almost every odd UI state (an empty item list,
/// selecting an index nobody rendered, a blur while the pointer is held)
/// as a silent no-op. The variants here are programmer mistakes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The render function returned a component element without ever
    /// requesting the root props, so there is nowhere to attach the
    /// root handlers.
    #[error(
        "the render function returned the component element `{element}`; \
         apply `root_props` yourself when returning a non-intrinsic element"
    )]
    RootPropsNotApplied {
        /// Name of the element that was returned.
        element: String,
    },

    /// A key description such as `"shift+down"` could not be parsed.
    #[error("invalid key description: {0:?}")]
    InvalidKey(String),
}

/// Result type for bubbletea-autocomplete operations.
pub type Result<T> = std::result::Result<T, Error>;

//! Accessibility status messages.
//!
//! After the highlight or the selection changes the controller describes the
//! menu in one sentence ("3 results are available, ...") and hands it to the
//! host, which reads it out or shows it in a status line. Messages are
//! debounced by the controller; this module only builds them.

use crate::host::Host;
use std::sync::{Arc, Mutex};

/// Everything a status message function gets to look at.
pub struct StatusInput<'a, V> {
    /// Number of items rendered in the last pass.
    pub result_count: usize,
    /// The highlighted item's value, if any.
    pub highlighted_item: Option<&'a V>,
    /// Projects a value to its display text.
    pub get_value: &'a dyn Fn(&V) -> String,
}

/// Builds the status message.
pub type StatusMessageFn<V> = Arc<dyn Fn(&StatusInput<'_, V>) -> String + Send + Sync>;

/// The stock message:
///
/// - `"No results."` when nothing is rendered,
/// - a count plus a navigation hint when nothing is highlighted,
/// - the highlighted item's display text otherwise.
///
/// ```rust
/// use bubbletea_autocomplete::a11y::{default_status_message, StatusInput};
///
/// let show = |v: &&str| v.to_string();
/// let msg = default_status_message(&StatusInput {
///     result_count: 1,
///     highlighted_item: None,
///     get_value: &show,
/// });
/// assert_eq!(msg, "1 result is available, use up and down arrow keys to navigate.");
/// ```
pub fn default_status_message<V>(input: &StatusInput<'_, V>) -> String {
    if input.result_count == 0 {
        return "No results.".to_string();
    }
    match input.highlighted_item {
        Some(item) => (input.get_value)(item),
        None => format!(
            "{} {} available, use up and down arrow keys to navigate.",
            input.result_count,
            if input.result_count == 1 {
                "result is"
            } else {
                "results are"
            }
        ),
    }
}

/// A [`Host`] that keeps the most recent status message, for hosts that
/// render it in a status line rather than speak it.
///
/// Clones share the same message.
#[derive(Debug, Clone, Default)]
pub struct LiveRegion {
    message: Arc<Mutex<String>>,
}

impl LiveRegion {
    /// An empty region.
    pub fn new() -> Self {
        Self::default()
    }

    /// The last published message.
    pub fn message(&self) -> String {
        self.message
            .lock()
            .map(|m| m.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }
}

impl Host for LiveRegion {
    fn set_a11y_status(&mut self, message: &str) {
        let mut guard = self
            .message
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = message.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(count: usize, item: Option<&&str>) -> String {
        let show = |v: &&str| format!("<{}>", v);
        default_status_message(&StatusInput {
            result_count: count,
            highlighted_item: item,
            get_value: &show,
        })
    }

    #[test]
    fn test_no_results() {
        assert_eq!(message(0, None), "No results.");
        assert_eq!(message(0, Some(&"a")), "No results.");
    }

    #[test]
    fn test_counts_are_pluralized() {
        assert_eq!(
            message(3, None),
            "3 results are available, use up and down arrow keys to navigate."
        );
        assert_eq!(
            message(1, None),
            "1 result is available, use up and down arrow keys to navigate."
        );
    }

    #[test]
    fn test_highlighted_item_uses_projection() {
        assert_eq!(message(2, Some(&"b")), "<b>");
    }

    #[test]
    fn test_live_region_keeps_last_message() {
        let region = LiveRegion::new();
        let mut host = region.clone();
        host.set_a11y_status("first");
        host.set_a11y_status("second");
        assert_eq!(region.message(), "second");
    }
}

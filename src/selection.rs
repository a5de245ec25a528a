//! Committed selection.
//!
//! Whether a controller holds one value or a sequence of values is fixed
//! when it is constructed. [`Selection`] carries that choice as its variant,
//! so every operation here keeps the mode it started with.

use crate::registry::Registry;

/// The user's committed choice.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection<V> {
    /// Single-select mode. `None` is the empty selection.
    Single(Option<V>),
    /// Multi-select mode, in insertion order.
    Multiple(Vec<V>),
}

impl<V: Clone + PartialEq> Selection<V> {
    /// The empty selection for the given mode.
    pub fn empty(multiple: bool) -> Self {
        if multiple {
            Selection::Multiple(Vec::new())
        } else {
            Selection::Single(None)
        }
    }

    /// True for the multi-select variant.
    pub fn is_multiple(&self) -> bool {
        matches!(self, Selection::Multiple(_))
    }

    /// True when nothing is selected.
    pub fn is_empty(&self) -> bool {
        match self {
            Selection::Single(value) => value.is_none(),
            Selection::Multiple(values) => values.is_empty(),
        }
    }

    /// An empty selection of the same mode.
    pub fn cleared(&self) -> Self {
        Self::empty(self.is_multiple())
    }

    /// The selected values, zero or one of them in single mode.
    pub fn values(&self) -> &[V] {
        match self {
            Selection::Single(value) => value.as_slice(),
            Selection::Multiple(values) => values,
        }
    }

    /// True when `value` is part of the selection.
    pub fn contains(&self, value: &V) -> bool {
        self.values().contains(value)
    }

    /// Commits `value`: single mode replaces the selection, multi mode
    /// toggles membership (removing keeps the order of the rest).
    pub fn commit(&mut self, value: V) {
        match self {
            Selection::Single(current) => *current = Some(value),
            Selection::Multiple(values) => {
                if let Some(pos) = values.iter().position(|v| *v == value) {
                    values.remove(pos);
                } else {
                    values.push(value);
                }
            }
        }
    }

    /// Display text: the projected value in single mode, the projections
    /// joined with `", "` in multi mode.
    pub fn display<F>(&self, get_value: F) -> String
    where
        F: Fn(&V) -> String,
    {
        self.values()
            .iter()
            .map(get_value)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Registry index of the first selected value that is currently
    /// rendered.
    pub fn index_in(&self, registry: &Registry<V>) -> Option<usize> {
        self.values().iter().find_map(|v| registry.index_of(v))
    }

    /// Converts a selection built for one mode into the other.
    ///
    /// A sequence collapses to its first value in single mode; a single
    /// value becomes a one-element sequence in multi mode.
    pub fn into_mode(self, multiple: bool) -> Self {
        match (self, multiple) {
            (Selection::Single(v), true) => Selection::Multiple(v.into_iter().collect()),
            (Selection::Multiple(vs), false) => Selection::Single(vs.into_iter().next()),
            (same, _) => same,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::RegistryBuilder;

    fn show(v: &&str) -> String {
        v.to_uppercase()
    }

    #[test]
    fn test_single_commit_replaces() {
        let mut s = Selection::empty(false);
        assert!(s.is_empty());
        s.commit("a");
        s.commit("b");
        assert_eq!(s, Selection::Single(Some("b")));
        assert_eq!(s.display(show), "B");
    }

    #[test]
    fn test_multiple_commit_toggles_in_order() {
        let mut s = Selection::empty(true);
        s.commit("b");
        s.commit("a");
        assert_eq!(s.display(|v: &&str| v.to_string()), "b, a");
        s.commit("c");
        s.commit("b");
        assert_eq!(s, Selection::Multiple(vec!["a", "c"]));
    }

    #[test]
    fn test_cleared_keeps_mode() {
        let s = Selection::Multiple(vec![1, 2]);
        assert_eq!(s.cleared(), Selection::Multiple(vec![]));
        let s = Selection::Single(Some(1));
        assert_eq!(s.cleared(), Selection::Single(None));
    }

    #[test]
    fn test_index_in_registry() {
        let mut b = RegistryBuilder::new();
        b.register(0, "x");
        b.register(1, "y");
        let r = b.commit();
        assert_eq!(Selection::Single(Some("y")).index_in(&r), Some(1));
        assert_eq!(Selection::Single(Some("q")).index_in(&r), None);
        assert_eq!(Selection::Multiple(vec!["q", "y", "x"]).index_in(&r), Some(1));
    }

    #[test]
    fn test_into_mode() {
        assert_eq!(
            Selection::Single(Some(0)).into_mode(true),
            Selection::Multiple(vec![0])
        );
        assert_eq!(
            Selection::Multiple(vec![3, 4]).into_mode(false),
            Selection::Single(Some(3))
        );
        assert_eq!(
            Selection::<i32>::Single(None).into_mode(true),
            Selection::Multiple(vec![])
        );
    }
}

//! Per-render item registry.
//!
//! Items become navigable by asking for their props during a render. The
//! registry is built in two phases: a [`RegistryBuilder`] collects entries
//! while the render function runs, then [`RegistryBuilder::commit`] turns it
//! into the [`Registry`] that answers lookups until the next render.

/// One navigable item: the caller-supplied index and its value.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry<V> {
    /// Position of the item, usually its index in the filtered list.
    pub index: usize,
    /// The value selected when this item is chosen.
    pub value: V,
}

/// Collects entries during a single render pass.
#[derive(Debug)]
pub struct RegistryBuilder<V> {
    entries: Vec<Entry<V>>,
}

impl<V> Default for RegistryBuilder<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<V> RegistryBuilder<V> {
    /// Starts an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares an item. Index uniqueness is up to the caller.
    pub fn register(&mut self, index: usize, value: V) {
        self.entries.push(Entry { index, value });
    }

    /// Number of items declared so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no items were declared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Freezes the collected entries into a queryable registry.
    pub fn commit(self) -> Registry<V> {
        Registry {
            entries: self.entries,
        }
    }
}

/// The items declared by the most recent render.
#[derive(Debug, Clone)]
pub struct Registry<V> {
    entries: Vec<Entry<V>>,
}

impl<V> Default for Registry<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<V: PartialEq> Registry<V> {
    /// Number of registered items.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the last render declared no items.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up the entry registered under `index`.
    pub fn get(&self, index: usize) -> Option<&Entry<V>> {
        self.entries.iter().find(|e| e.index == index)
    }

    /// Returns the index of the first entry holding `value`.
    pub fn index_of(&self, value: &V) -> Option<usize> {
        self.entries
            .iter()
            .find(|e| &e.value == value)
            .map(|e| e.index)
    }

    /// Iterates over the entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry<V>> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Registry<&'static str> {
        let mut b = RegistryBuilder::new();
        b.register(0, "a");
        b.register(1, "b");
        b.register(2, "c");
        b.commit()
    }

    #[test]
    fn test_lookups() {
        let r = abc();
        assert_eq!(r.len(), 3);
        assert_eq!(r.get(1).map(|e| e.value), Some("b"));
        assert_eq!(r.get(7), None);
        assert_eq!(r.index_of(&"c"), Some(2));
        assert_eq!(r.index_of(&"z"), None);
    }

    #[test]
    fn test_indices_are_caller_supplied() {
        let mut b = RegistryBuilder::new();
        b.register(10, "x");
        b.register(4, "y");
        let r = b.commit();
        assert_eq!(r.get(4).map(|e| e.value), Some("y"));
        assert_eq!(r.get(0), None);
        assert_eq!(r.iter().map(|e| e.index).collect::<Vec<_>>(), vec![10, 4]);
    }

    #[test]
    fn test_default_is_empty() {
        let r: Registry<u32> = Registry::default();
        assert!(r.is_empty());
        assert!(RegistryBuilder::<u32>::new().is_empty());
    }
}

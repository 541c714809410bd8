// Eagerly materialized multi-map produced by to_lookup

use std::hash::Hash;

use indexmap::IndexMap;

use super::Grouping;

/// An immutable multi-map from key to an ordered list of elements.
///
/// Built once from a full pass over a source; keys keep first-insertion
/// order, elements keep source order within their bucket, and no mutating
/// API exists after construction.
#[derive(Debug, Clone)]
pub struct Lookup<K, E> {
    map: IndexMap<K, Vec<E>>,
}

impl<K, E> Lookup<K, E>
where
    K: Hash + Eq,
{
    pub(crate) fn new(map: IndexMap<K, Vec<E>>) -> Self {
        Lookup { map }
    }

    /// The number of distinct keys in the lookup.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the lookup contains no keys.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Whether the lookup contains the key.
    pub fn contains_key(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    /// The elements stored under a key.
    ///
    /// A missing key yields an empty slice, never an error or an absent
    /// sentinel.
    pub fn get(&self, key: &K) -> &[E] {
        self.map.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterate over the keys, in first-insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.map.keys()
    }

    /// Iterate over the per-key element lists, in first-insertion key order.
    pub fn values(&self) -> impl Iterator<Item = &[E]> {
        self.map.values().map(Vec::as_slice)
    }

    /// Iterate over `(key, elements)` entries, in first-insertion key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &[E])> {
        self.map.iter().map(|(key, values)| (key, values.as_slice()))
    }
}

impl<K, E> IntoIterator for Lookup<K, E>
where
    K: Hash + Eq + 'static,
    E: 'static,
{
    type Item = Grouping<K, E>;
    type IntoIter = Box<dyn Iterator<Item = Grouping<K, E>>>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(
            self.map
                .into_iter()
                .map(|(key, elements)| Grouping::new(key, elements)),
        )
    }
}

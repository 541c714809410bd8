// Materialization terminals

use std::hash::Hash;

use indexmap::{IndexMap, IndexSet};
use log::debug;

use crate::sequence::{Lookup, Sequence};

/// Drain the full enumeration into a vector, preserving order.
pub fn to_vec<T: 'static>(source: &Sequence<T>) -> Vec<T> {
    source.iter().collect()
}

/// Drain the full enumeration into a set, deduplicating by equality and
/// preserving first-seen order.
pub fn to_set<T>(source: &Sequence<T>) -> IndexSet<T>
where
    T: Hash + Eq + 'static,
{
    source.iter().collect()
}

/// Eagerly group the sequence into a [`Lookup`].
///
/// Same grouping semantics as `group_by` (first-seen key order, source order
/// within buckets), but materialized in one pass with buckets frozen on
/// return.
pub fn to_lookup<T, K, F>(source: &Sequence<T>, key_selector: F) -> Lookup<K, T>
where
    T: 'static,
    K: Hash + Eq + 'static,
    F: Fn(&T) -> K,
{
    to_lookup_select(source, key_selector, |item| item)
}

/// Like [`to_lookup`], but transforms each item through an element selector
/// before placing it in its bucket.
pub fn to_lookup_select<T, K, V, F, E>(
    source: &Sequence<T>,
    key_selector: F,
    element_selector: E,
) -> Lookup<K, V>
where
    T: 'static,
    K: Hash + Eq + 'static,
    V: 'static,
    F: Fn(&T) -> K,
    E: Fn(T) -> V,
{
    let mut buckets: IndexMap<K, Vec<V>> = IndexMap::new();

    for item in source.iter() {
        let key = key_selector(&item);
        buckets.entry(key).or_default().push(element_selector(item));
    }
    debug!("materialized lookup with {} keys", buckets.len());

    Lookup::new(buckets)
}

// Equality-based grouping

use std::hash::Hash;
use std::rc::Rc;

use indexmap::IndexMap;
use log::trace;

use crate::sequence::{Grouping, Sequence};

/// Group a sequence's items by a key.
///
/// Deferred but buffering: enumeration consumes the entire upstream in a
/// single pass before yielding anything, then produces one [`Grouping`] per
/// distinct key, in first-seen key order. Within each group, elements keep
/// their original source order.
pub fn group_by<T, K, F>(source: &Sequence<T>, key_selector: F) -> Sequence<Grouping<K, T>>
where
    T: 'static,
    K: Hash + Eq + 'static,
    F: Fn(&T) -> K + 'static,
{
    group_by_select(source, key_selector, |item| item)
}

/// Like [`group_by`], but transforms each item through an element selector
/// before placing it in its group.
pub fn group_by_select<T, K, V, F, E>(
    source: &Sequence<T>,
    key_selector: F,
    element_selector: E,
) -> Sequence<Grouping<K, V>>
where
    T: 'static,
    K: Hash + Eq + 'static,
    V: 'static,
    F: Fn(&T) -> K + 'static,
    E: Fn(T) -> V + 'static,
{
    let upstream = source.clone();
    let key_selector = Rc::new(key_selector);
    let element_selector = Rc::new(element_selector);

    Sequence::defer(move || {
        let mut buckets: IndexMap<K, Vec<V>> = IndexMap::new();

        for item in upstream.iter() {
            let key = key_selector(&item);
            buckets.entry(key).or_default().push(element_selector(item));
        }
        trace!("grouped buffered input into {} buckets", buckets.len());

        buckets
            .into_iter()
            .map(|(key, elements)| Grouping::new(key, elements))
            .collect::<Vec<_>>()
    })
}

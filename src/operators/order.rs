// Sorting operators producing OrderedSequence values

use std::rc::Rc;

use crate::sequence::{comparer, default_comparer, descending, Comparer, OrderedSequence, Sequence};

fn key_comparer<T, K, F>(key_selector: F, key_comparer: Comparer<K>) -> Comparer<T>
where
    T: 'static,
    K: 'static,
    F: Fn(&T) -> K + 'static,
{
    comparer(move |a: &T, b: &T| key_comparer(&key_selector(a), &key_selector(b)))
}

/// Sort a sequence ascending by a key, using the key type's own order.
pub fn order_by<T, K, F>(source: &Sequence<T>, key_selector: F) -> OrderedSequence<T>
where
    T: 'static,
    K: Ord + 'static,
    F: Fn(&T) -> K + 'static,
{
    order_by_with(source, key_selector, default_comparer())
}

/// Sort a sequence ascending by a key, using a caller-supplied key comparer.
pub fn order_by_with<T, K, F>(
    source: &Sequence<T>,
    key_selector: F,
    key_cmp: Comparer<K>,
) -> OrderedSequence<T>
where
    T: 'static,
    K: 'static,
    F: Fn(&T) -> K + 'static,
{
    OrderedSequence::new(source.clone(), key_comparer(key_selector, key_cmp))
}

/// Sort a sequence descending by a key, using the key type's own order.
pub fn order_by_descending<T, K, F>(source: &Sequence<T>, key_selector: F) -> OrderedSequence<T>
where
    T: 'static,
    K: Ord + 'static,
    F: Fn(&T) -> K + 'static,
{
    order_by_descending_with(source, key_selector, default_comparer())
}

/// Sort a sequence descending by a key, using a caller-supplied key comparer.
pub fn order_by_descending_with<T, K, F>(
    source: &Sequence<T>,
    key_selector: F,
    key_cmp: Comparer<K>,
) -> OrderedSequence<T>
where
    T: 'static,
    K: 'static,
    F: Fn(&T) -> K + 'static,
{
    OrderedSequence::new(
        source.clone(),
        descending(key_comparer(key_selector, key_cmp)),
    )
}

/// Add a subordinate ascending ordering to an already-ordered sequence.
///
/// The new key only breaks ties the existing composed comparer leaves
/// unresolved; the result sorts the *original* pre-sort upstream with the
/// extended comparer, so the whole multi-key sort stays stable.
pub fn then_by<T, K, F>(source: &OrderedSequence<T>, key_selector: F) -> OrderedSequence<T>
where
    T: 'static,
    K: Ord + 'static,
    F: Fn(&T) -> K + 'static,
{
    then_by_with(source, key_selector, default_comparer())
}

/// Add a subordinate ascending ordering with a caller-supplied key comparer.
pub fn then_by_with<T, K, F>(
    source: &OrderedSequence<T>,
    key_selector: F,
    key_cmp: Comparer<K>,
) -> OrderedSequence<T>
where
    T: 'static,
    K: 'static,
    F: Fn(&T) -> K + 'static,
{
    let chained = source.chain_comparer(key_comparer(key_selector, key_cmp));
    OrderedSequence::new(source.source().clone(), chained)
}

/// Add a subordinate descending ordering to an already-ordered sequence.
pub fn then_by_descending<T, K, F>(
    source: &OrderedSequence<T>,
    key_selector: F,
) -> OrderedSequence<T>
where
    T: 'static,
    K: Ord + 'static,
    F: Fn(&T) -> K + 'static,
{
    then_by_descending_with(source, key_selector, default_comparer())
}

/// Add a subordinate descending ordering with a caller-supplied key comparer.
pub fn then_by_descending_with<T, K, F>(
    source: &OrderedSequence<T>,
    key_selector: F,
    key_cmp: Comparer<K>,
) -> OrderedSequence<T>
where
    T: 'static,
    K: 'static,
    F: Fn(&T) -> K + 'static,
{
    let chained = source.chain_comparer(descending(key_comparer(key_selector, key_cmp)));
    OrderedSequence::new(source.source().clone(), chained)
}

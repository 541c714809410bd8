// Operator-attachment layer: binds the free operator functions onto the
// Sequence and OrderedSequence method surface so pipelines chain fluently.
// Pure delegation; all operator logic lives in the operators and terminal
// modules.

use std::hash::Hash;

use indexmap::IndexSet;

use crate::operators;
use crate::sequence::{Comparer, Grouping, Lookup, OrderedSequence, Sequence};
use crate::terminal::{self, AsNumber, SequenceResult};

impl<T: 'static> Sequence<T> {
    // ---- intermediate operators ----

    /// Filter with an indexed predicate; the index counts every upstream
    /// item, including rejected ones.
    pub fn filter<P>(&self, predicate: P) -> Sequence<T>
    where
        P: Fn(&T, usize) -> bool + 'static,
    {
        operators::filter(self, predicate)
    }

    /// Project each item through an indexed selector, 1:1.
    pub fn select<U, S>(&self, selector: S) -> Sequence<U>
    where
        U: 'static,
        S: Fn(T, usize) -> U + 'static,
    {
        operators::select(self, selector)
    }

    /// Map each item to an inner sequence and flatten the results in outer,
    /// then inner, order.
    pub fn select_many<U, C>(&self, collection_selector: C) -> Sequence<U>
    where
        U: 'static,
        C: Fn(&T, usize) -> Sequence<U> + 'static,
    {
        operators::select_many(self, collection_selector)
    }

    /// Flatten like `select_many`, combining each outer item with each of
    /// its inner items through a result selector.
    pub fn select_many_with<U, R, C, S>(
        &self,
        collection_selector: C,
        result_selector: S,
    ) -> Sequence<R>
    where
        U: 'static,
        R: 'static,
        C: Fn(&T, usize) -> Sequence<U> + 'static,
        S: Fn(&T, U) -> R + 'static,
    {
        operators::select_many_with(self, collection_selector, result_selector)
    }

    /// Group items by key, in first-seen key order.
    pub fn group_by<K, F>(&self, key_selector: F) -> Sequence<Grouping<K, T>>
    where
        K: Hash + Eq + 'static,
        F: Fn(&T) -> K + 'static,
    {
        operators::group_by(self, key_selector)
    }

    /// Group items by key, transforming each through an element selector.
    pub fn group_by_select<K, V, F, E>(
        &self,
        key_selector: F,
        element_selector: E,
    ) -> Sequence<Grouping<K, V>>
    where
        K: Hash + Eq + 'static,
        V: 'static,
        F: Fn(&T) -> K + 'static,
        E: Fn(T) -> V + 'static,
    {
        operators::group_by_select(self, key_selector, element_selector)
    }

    /// Sort ascending by a key using the key type's own order.
    pub fn order_by<K, F>(&self, key_selector: F) -> OrderedSequence<T>
    where
        K: Ord + 'static,
        F: Fn(&T) -> K + 'static,
    {
        operators::order_by(self, key_selector)
    }

    /// Sort ascending by a key using a caller-supplied key comparer.
    pub fn order_by_with<K, F>(&self, key_selector: F, key_cmp: Comparer<K>) -> OrderedSequence<T>
    where
        K: 'static,
        F: Fn(&T) -> K + 'static,
    {
        operators::order_by_with(self, key_selector, key_cmp)
    }

    /// Sort descending by a key using the key type's own order.
    pub fn order_by_descending<K, F>(&self, key_selector: F) -> OrderedSequence<T>
    where
        K: Ord + 'static,
        F: Fn(&T) -> K + 'static,
    {
        operators::order_by_descending(self, key_selector)
    }

    /// Sort descending by a key using a caller-supplied key comparer.
    pub fn order_by_descending_with<K, F>(
        &self,
        key_selector: F,
        key_cmp: Comparer<K>,
    ) -> OrderedSequence<T>
    where
        K: 'static,
        F: Fn(&T) -> K + 'static,
    {
        operators::order_by_descending_with(self, key_selector, key_cmp)
    }

    /// Yield at most `count` items, abandoning the upstream at the limit.
    pub fn take(&self, count: usize) -> Sequence<T> {
        operators::take(self, count)
    }

    /// Discard the first `count` items and yield the remainder.
    pub fn skip(&self, count: usize) -> Sequence<T> {
        operators::skip(self, count)
    }

    // ---- terminal operators ----

    /// Drain the sequence into a vector.
    pub fn to_vec(&self) -> Vec<T> {
        terminal::to_vec(self)
    }

    /// Drain the sequence into a set, deduplicating in first-seen order.
    pub fn to_set(&self) -> IndexSet<T>
    where
        T: Hash + Eq,
    {
        terminal::to_set(self)
    }

    /// Eagerly group the sequence into a [`Lookup`].
    pub fn to_lookup<K, F>(&self, key_selector: F) -> Lookup<K, T>
    where
        K: Hash + Eq + 'static,
        F: Fn(&T) -> K,
    {
        terminal::to_lookup(self, key_selector)
    }

    /// Eagerly group into a [`Lookup`], transforming each item through an
    /// element selector.
    pub fn to_lookup_select<K, V, F, E>(&self, key_selector: F, element_selector: E) -> Lookup<K, V>
    where
        K: Hash + Eq + 'static,
        V: 'static,
        F: Fn(&T) -> K,
        E: Fn(T) -> V,
    {
        terminal::to_lookup_select(self, key_selector, element_selector)
    }

    /// Count every item.
    pub fn count(&self) -> usize {
        terminal::count(self)
    }

    /// Count the items matching an indexed predicate.
    pub fn count_where<P>(&self, predicate: P) -> usize
    where
        P: Fn(&T, usize) -> bool,
    {
        terminal::count_where(self, predicate)
    }

    /// Whether any item exists; short-circuits on the first one.
    pub fn any(&self) -> bool {
        terminal::any(self)
    }

    /// Whether any item matches; short-circuits on the first match.
    pub fn any_where<P>(&self, predicate: P) -> bool
    where
        P: Fn(&T, usize) -> bool,
    {
        terminal::any_where(self, predicate)
    }

    /// Whether every item matches; vacuously true on an empty sequence.
    pub fn all<P>(&self, predicate: P) -> bool
    where
        P: Fn(&T, usize) -> bool,
    {
        terminal::all(self, predicate)
    }

    /// The first item, or an error on an empty sequence.
    pub fn first(&self) -> SequenceResult<T> {
        terminal::first(self)
    }

    /// The first matching item, or an error when nothing matches.
    pub fn first_where<P>(&self, predicate: P) -> SequenceResult<T>
    where
        P: Fn(&T, usize) -> bool,
    {
        terminal::first_where(self, predicate)
    }

    /// The first item, or `None` on an empty sequence.
    pub fn first_or_default(&self) -> Option<T> {
        terminal::first_or_default(self)
    }

    /// The first matching item, or `None` when nothing matches.
    pub fn first_or_default_where<P>(&self, predicate: P) -> Option<T>
    where
        P: Fn(&T, usize) -> bool,
    {
        terminal::first_or_default_where(self, predicate)
    }

    /// The only item; errors on an empty sequence or a second item.
    pub fn single(&self) -> SequenceResult<T> {
        terminal::single(self)
    }

    /// The only matching item; errors on no match or a second match.
    pub fn single_where<P>(&self, predicate: P) -> SequenceResult<T>
    where
        P: Fn(&T, usize) -> bool,
    {
        terminal::single_where(self, predicate)
    }

    /// The only item or `None` when empty; a second item is still an error.
    pub fn single_or_default(&self) -> SequenceResult<Option<T>> {
        terminal::single_or_default(self)
    }

    /// The only matching item or `None`; a second match is still an error.
    pub fn single_or_default_where<P>(&self, predicate: P) -> SequenceResult<Option<T>>
    where
        P: Fn(&T, usize) -> bool,
    {
        terminal::single_or_default_where(self, predicate)
    }

    /// Sum the items' numeric values, skipping absent ones.
    pub fn sum(&self) -> f64
    where
        T: AsNumber,
    {
        terminal::sum(self)
    }

    /// Sum selector-mapped values, skipping absent ones.
    pub fn sum_of<S>(&self, selector: S) -> f64
    where
        S: Fn(&T) -> Option<f64>,
    {
        terminal::sum_of(self, selector)
    }

    /// Average the items' numeric values over the contributing count.
    pub fn average(&self) -> f64
    where
        T: AsNumber,
    {
        terminal::average(self)
    }

    /// Average selector-mapped values over the contributing count.
    pub fn average_of<S>(&self, selector: S) -> f64
    where
        S: Fn(&T) -> Option<f64>,
    {
        terminal::average_of(self, selector)
    }

    /// The smallest numeric value, or `None` when nothing contributes.
    pub fn min(&self) -> Option<f64>
    where
        T: AsNumber,
    {
        terminal::min(self)
    }

    /// The smallest selector-mapped value, or `None` when nothing
    /// contributes.
    pub fn min_of<S>(&self, selector: S) -> Option<f64>
    where
        S: Fn(&T) -> Option<f64>,
    {
        terminal::min_of(self, selector)
    }

    /// The largest numeric value, or `None` when nothing contributes.
    pub fn max(&self) -> Option<f64>
    where
        T: AsNumber,
    {
        terminal::max(self)
    }

    /// The largest selector-mapped value, or `None` when nothing
    /// contributes.
    pub fn max_of<S>(&self, selector: S) -> Option<f64>
    where
        S: Fn(&T) -> Option<f64>,
    {
        terminal::max_of(self, selector)
    }
}

impl<T: 'static> OrderedSequence<T> {
    /// Add a subordinate ascending ordering that only breaks remaining ties.
    pub fn then_by<K, F>(&self, key_selector: F) -> OrderedSequence<T>
    where
        K: Ord + 'static,
        F: Fn(&T) -> K + 'static,
    {
        operators::then_by(self, key_selector)
    }

    /// Add a subordinate ascending ordering with a caller-supplied key
    /// comparer.
    pub fn then_by_with<K, F>(&self, key_selector: F, key_cmp: Comparer<K>) -> OrderedSequence<T>
    where
        K: 'static,
        F: Fn(&T) -> K + 'static,
    {
        operators::then_by_with(self, key_selector, key_cmp)
    }

    /// Add a subordinate descending ordering that only breaks remaining
    /// ties.
    pub fn then_by_descending<K, F>(&self, key_selector: F) -> OrderedSequence<T>
    where
        K: Ord + 'static,
        F: Fn(&T) -> K + 'static,
    {
        operators::then_by_descending(self, key_selector)
    }

    /// Add a subordinate descending ordering with a caller-supplied key
    /// comparer.
    pub fn then_by_descending_with<K, F>(
        &self,
        key_selector: F,
        key_cmp: Comparer<K>,
    ) -> OrderedSequence<T>
    where
        K: 'static,
        F: Fn(&T) -> K + 'static,
    {
        operators::then_by_descending_with(self, key_selector, key_cmp)
    }
}

// Buffered, stable, chainable sort layered on Sequence

use std::ops::Deref;
use std::rc::Rc;

use log::trace;

use super::{Comparer, Sequence};

/// A sequence with an ordering applied.
///
/// Sorting is deferred: enumeration buffers the entire upstream, sorts it
/// with the composed comparer, and yields the buffered values in order.
/// Every enumeration re-buffers and re-sorts from scratch; computed ordering
/// is not cached across runs.
///
/// The sort is stable: each buffered element is decorated with its original
/// position, and that position decides ties the comparer leaves unresolved.
pub struct OrderedSequence<T> {
    source: Sequence<T>,
    comparer: Comparer<T>,
    sorted: Sequence<T>,
}

impl<T: 'static> OrderedSequence<T> {
    pub(crate) fn new(source: Sequence<T>, comparer: Comparer<T>) -> Self {
        let sorted = {
            let upstream = source.clone();
            let comparer = Rc::clone(&comparer);
            Sequence::defer(move || {
                let comparer = Rc::clone(&comparer);
                let mut buffered: Vec<(usize, T)> = upstream.iter().enumerate().collect();
                trace!("sorting {} buffered elements", buffered.len());
                buffered.sort_by(|(ia, a), (ib, b)| comparer(a, b).then(ia.cmp(ib)));
                buffered.into_iter().map(|(_, value)| value)
            })
        };

        OrderedSequence {
            source,
            comparer,
            sorted,
        }
    }

    /// The original, pre-sort upstream. Subordinate orderings are built over
    /// this, never over the already-sorted view.
    pub(crate) fn source(&self) -> &Sequence<T> {
        &self.source
    }

    /// Compose a lower-priority comparer onto the existing one.
    ///
    /// The existing comparer is consulted first; `next` only decides ties it
    /// reports as equal, so prior orderings are never overridden.
    pub(crate) fn chain_comparer(&self, next: Comparer<T>) -> Comparer<T> {
        let current = Rc::clone(&self.comparer);
        Rc::new(move |a, b| current(a, b).then_with(|| next(a, b)))
    }
}

impl<T> Clone for OrderedSequence<T> {
    fn clone(&self) -> Self {
        OrderedSequence {
            source: self.source.clone(),
            comparer: Rc::clone(&self.comparer),
            sorted: self.sorted.clone(),
        }
    }
}

impl<T> Deref for OrderedSequence<T> {
    type Target = Sequence<T>;

    fn deref(&self) -> &Sequence<T> {
        &self.sorted
    }
}

impl<T: 'static> IntoIterator for &OrderedSequence<T> {
    type Item = T;
    type IntoIter = Box<dyn Iterator<Item = T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.sorted.iter()
    }
}

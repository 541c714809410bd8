// Quantifier terminals

use crate::sequence::Sequence;

/// Count every item in the sequence.
pub fn count<T: 'static>(source: &Sequence<T>) -> usize {
    source.iter().count()
}

/// Count the items matching an indexed predicate.
///
/// The index counts every scanned item, matching or not.
pub fn count_where<T, P>(source: &Sequence<T>, predicate: P) -> usize
where
    T: 'static,
    P: Fn(&T, usize) -> bool,
{
    let mut result = 0;
    for (index, item) in source.iter().enumerate() {
        if predicate(&item, index) {
            result += 1;
        }
    }
    result
}

/// Whether the sequence contains any item at all.
///
/// Existence-only semantics: the first item short-circuits `true` regardless
/// of its value, so a sequence of absent values is still non-empty.
pub fn any<T: 'static>(source: &Sequence<T>) -> bool {
    source.iter().next().is_some()
}

/// Whether any item matches the predicate; short-circuits on the first match.
pub fn any_where<T, P>(source: &Sequence<T>, predicate: P) -> bool
where
    T: 'static,
    P: Fn(&T, usize) -> bool,
{
    for (index, item) in source.iter().enumerate() {
        if predicate(&item, index) {
            return true;
        }
    }
    false
}

/// Whether every item matches the predicate; short-circuits on the first
/// non-match. Vacuously true for an empty sequence.
pub fn all<T, P>(source: &Sequence<T>, predicate: P) -> bool
where
    T: 'static,
    P: Fn(&T, usize) -> bool,
{
    for (index, item) in source.iter().enumerate() {
        if !predicate(&item, index) {
            return false;
        }
    }
    true
}

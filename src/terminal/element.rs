// Element-selection terminals

use crate::sequence::Sequence;

use super::{SequenceError, SequenceResult};

/// Return the first item of the sequence, failing if it is empty.
///
/// Enumeration stops after one item; the upstream is never drained.
pub fn first<T: 'static>(source: &Sequence<T>) -> SequenceResult<T> {
    source.iter().next().ok_or(SequenceError::Empty)
}

/// Return the first item matching the predicate, failing if none does.
pub fn first_where<T, P>(source: &Sequence<T>, predicate: P) -> SequenceResult<T>
where
    T: 'static,
    P: Fn(&T, usize) -> bool,
{
    let mut index = 0;
    for item in source.iter() {
        if predicate(&item, index) {
            return Ok(item);
        }
        index += 1;
    }
    Err(SequenceError::NoMatch)
}

/// Return the first item, or `None` for an empty sequence.
pub fn first_or_default<T: 'static>(source: &Sequence<T>) -> Option<T> {
    source.iter().next()
}

/// Return the first item matching the predicate, or `None` if none does.
pub fn first_or_default_where<T, P>(source: &Sequence<T>, predicate: P) -> Option<T>
where
    T: 'static,
    P: Fn(&T, usize) -> bool,
{
    let mut index = 0;
    for item in source.iter() {
        if predicate(&item, index) {
            return Some(item);
        }
        index += 1;
    }
    None
}

/// Return the only item of the sequence.
///
/// Fails with [`SequenceError::Empty`] when no item exists and with
/// [`SequenceError::MoreThanOne`] the moment a second item is found.
pub fn single<T: 'static>(source: &Sequence<T>) -> SequenceResult<T> {
    let mut items = source.iter();
    let found = items.next().ok_or(SequenceError::Empty)?;
    if items.next().is_some() {
        return Err(SequenceError::MoreThanOne);
    }
    Ok(found)
}

/// Return the only item matching the predicate.
///
/// Fails with [`SequenceError::NoMatch`] when nothing matches and with
/// [`SequenceError::MoreThanOneMatch`] the moment a second match is found.
pub fn single_where<T, P>(source: &Sequence<T>, predicate: P) -> SequenceResult<T>
where
    T: 'static,
    P: Fn(&T, usize) -> bool,
{
    let mut found = None;
    let mut index = 0;
    for item in source.iter() {
        if predicate(&item, index) {
            if found.is_some() {
                return Err(SequenceError::MoreThanOneMatch);
            }
            found = Some(item);
        }
        index += 1;
    }
    found.ok_or(SequenceError::NoMatch)
}

/// Return the only item, or `None` for an empty sequence.
///
/// Uniqueness is still required: a second item is an error.
pub fn single_or_default<T: 'static>(source: &Sequence<T>) -> SequenceResult<Option<T>> {
    let mut items = source.iter();
    let found = items.next();
    if found.is_some() && items.next().is_some() {
        return Err(SequenceError::MoreThanOne);
    }
    Ok(found)
}

/// Return the only item matching the predicate, or `None` when nothing does.
///
/// Uniqueness is still required: a second match is an error.
pub fn single_or_default_where<T, P>(source: &Sequence<T>, predicate: P) -> SequenceResult<Option<T>>
where
    T: 'static,
    P: Fn(&T, usize) -> bool,
{
    let mut found = None;
    let mut index = 0;
    for item in source.iter() {
        if predicate(&item, index) {
            if found.is_some() {
                return Err(SequenceError::MoreThanOneMatch);
            }
            found = Some(item);
        }
        index += 1;
    }
    Ok(found)
}

// Partitioning operators

use crate::sequence::Sequence;

/// Yield at most `count` items from the start of the sequence.
///
/// With a count of zero the result is empty. Once the limit is hit the
/// upstream enumeration is abandoned rather than drained, so expensive or
/// unbounded upstream sources are never pulled past the limit.
pub fn take<T: 'static>(source: &Sequence<T>, count: usize) -> Sequence<T> {
    let upstream = source.clone();
    Sequence::defer(move || upstream.iter().take(count))
}

/// Discard the first `count` items and yield the remainder.
///
/// With a count of zero the sequence passes through unchanged; a count past
/// the end of the sequence yields nothing rather than raising.
pub fn skip<T: 'static>(source: &Sequence<T>, count: usize) -> Sequence<T> {
    let upstream = source.clone();
    Sequence::defer(move || upstream.iter().skip(count))
}

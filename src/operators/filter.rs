// Predicate filtering

use std::rc::Rc;

use crate::sequence::Sequence;

/// Filter a sequence with an indexed predicate.
///
/// The index is zero-based, resets on every enumeration, and counts every
/// upstream item seen, including the ones the predicate rejects.
pub fn filter<T, P>(source: &Sequence<T>, predicate: P) -> Sequence<T>
where
    T: 'static,
    P: Fn(&T, usize) -> bool + 'static,
{
    let upstream = source.clone();
    let predicate = Rc::new(predicate);

    Sequence::defer(move || {
        let predicate = Rc::clone(&predicate);
        let mut index = 0;
        upstream.iter().filter(move |item| {
            let keep = predicate(item, index);
            index += 1;
            keep
        })
    })
}

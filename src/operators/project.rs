// Projection and flattening

use std::rc::Rc;

use crate::sequence::Sequence;

/// Project each item through an indexed selector, 1:1.
pub fn select<T, U, S>(source: &Sequence<T>, selector: S) -> Sequence<U>
where
    T: 'static,
    U: 'static,
    S: Fn(T, usize) -> U + 'static,
{
    let upstream = source.clone();
    let selector = Rc::new(selector);

    Sequence::defer(move || {
        let selector = Rc::clone(&selector);
        upstream
            .iter()
            .enumerate()
            .map(move |(index, item)| selector(item, index))
    })
}

/// Map each item to an inner sequence and flatten the results.
///
/// Each inner sequence is fully exhausted before the next outer item is
/// pulled: the result is the concatenation of per-outer-item runs, in outer
/// order, each run in inner order. The outer index counts outer items only.
pub fn select_many<T, U, C>(source: &Sequence<T>, collection_selector: C) -> Sequence<U>
where
    T: 'static,
    U: 'static,
    C: Fn(&T, usize) -> Sequence<U> + 'static,
{
    let upstream = source.clone();
    let collection_selector = Rc::new(collection_selector);

    Sequence::defer(move || {
        let collection_selector = Rc::clone(&collection_selector);
        upstream
            .iter()
            .enumerate()
            .flat_map(move |(index, outer)| collection_selector(&outer, index).iter())
    })
}

/// Like [`select_many`], but combines each outer item with each of its inner
/// items through a result selector.
pub fn select_many_with<T, U, R, C, S>(
    source: &Sequence<T>,
    collection_selector: C,
    result_selector: S,
) -> Sequence<R>
where
    T: 'static,
    U: 'static,
    R: 'static,
    C: Fn(&T, usize) -> Sequence<U> + 'static,
    S: Fn(&T, U) -> R + 'static,
{
    let upstream = source.clone();
    let collection_selector = Rc::new(collection_selector);
    let result_selector = Rc::new(result_selector);

    Sequence::defer(move || {
        let collection_selector = Rc::clone(&collection_selector);
        let result_selector = Rc::clone(&result_selector);
        upstream.iter().enumerate().flat_map(move |(index, outer)| {
            let inner = collection_selector(&outer, index);
            let result_selector = Rc::clone(&result_selector);
            inner
                .iter()
                .map(move |item| result_selector(&outer, item))
        })
    })
}

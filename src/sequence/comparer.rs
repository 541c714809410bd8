// Total-order comparison functions for ordering operators

use std::cmp::Ordering;
use std::rc::Rc;

/// A shared comparison function establishing a total order between two values.
pub type Comparer<T> = Rc<dyn Fn(&T, &T) -> Ordering>;

/// The default comparer: the type's own total order.
pub fn default_comparer<T: Ord + 'static>() -> Comparer<T> {
    Rc::new(|a, b| a.cmp(b))
}

/// Wrap a caller-supplied comparison closure as a [`Comparer`].
pub fn comparer<T, F>(f: F) -> Comparer<T>
where
    F: Fn(&T, &T) -> Ordering + 'static,
{
    Rc::new(f)
}

/// Reverse the order established by a comparer.
pub fn descending<T: 'static>(comparer: Comparer<T>) -> Comparer<T> {
    Rc::new(move |a, b| comparer(b, a))
}

/// A comparer over optional values where an absent value sorts after any
/// present value.
///
/// This is the opposite of the `Ord` impl for `Option`, which places `None`
/// first; callers needing different absent-value handling supply their own
/// comparer.
pub fn nulls_last<T: Ord + 'static>() -> Comparer<Option<T>> {
    Rc::new(|a, b| match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => a.cmp(b),
    })
}

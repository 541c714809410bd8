// Sequence module for the deferred-evaluation core

mod comparer;
mod grouping;
mod lookup;
mod ordered;

pub use comparer::*;
pub use grouping::*;
pub use lookup::*;
pub use ordered::*;

use std::rc::Rc;

/// A deferred, re-iterable view over items of type `T`.
///
/// A `Sequence` holds an enumeration *factory* rather than a single consumed
/// iterator: every call to [`Sequence::iter`] invokes the factory anew and
/// produces an independent enumeration. Chained operators each wrap their
/// upstream in a new `Sequence`, so no work happens until a terminal
/// operator drives the outermost enumeration.
pub struct Sequence<T> {
    factory: Rc<dyn Fn() -> Box<dyn Iterator<Item = T>>>,
}

impl<T> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        Sequence {
            factory: Rc::clone(&self.factory),
        }
    }
}

impl<T: 'static> Sequence<T> {
    /// Wrap an enumerable source in a sequence.
    ///
    /// The source is re-exposed on every enumeration; if the source itself is
    /// single-pass, re-enumeration inherits that limitation, but the sequence
    /// never adds one of its own.
    pub fn from<I>(source: I) -> Self
    where
        I: IntoIterator<Item = T> + Clone + 'static,
    {
        Self::defer(move || source.clone())
    }

    /// Wrap a zero-argument enumeration factory.
    ///
    /// The factory is called once per enumeration, so any counters captured
    /// inside it reset naturally between runs.
    pub fn defer<I, F>(factory: F) -> Self
    where
        I: IntoIterator<Item = T> + 'static,
        F: Fn() -> I + 'static,
    {
        Sequence {
            factory: Rc::new(move || Box::new(factory().into_iter())),
        }
    }

    /// Create a sequence with no elements.
    pub fn empty() -> Self {
        Self::defer(std::iter::empty)
    }

    /// Open a fresh enumeration over the sequence.
    pub fn iter(&self) -> Box<dyn Iterator<Item = T>> {
        (self.factory)()
    }
}

impl<T: 'static> IntoIterator for &Sequence<T> {
    type Item = T;
    type IntoIter = Box<dyn Iterator<Item = T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Wrap an enumerable source in a [`Sequence`].
pub fn from<T, I>(source: I) -> Sequence<T>
where
    T: 'static,
    I: IntoIterator<Item = T> + Clone + 'static,
{
    Sequence::from(source)
}

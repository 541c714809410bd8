// Terminal operators: each drives one full (or early-exiting) enumeration
// and returns a concrete value or materialized container.

mod aggregate;
mod element;
mod materialize;
mod quantify;

pub use aggregate::*;
pub use element::*;
pub use materialize::*;
pub use quantify::*;

use thiserror::Error;

/// Contract-violation errors raised by element-selection terminals.
///
/// Every failure is surfaced synchronously to the caller of the terminal
/// that detected it; the pipeline definition itself stays valid and can be
/// re-enumerated afterward.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SequenceError {
    #[error("the source sequence is empty")]
    Empty,

    #[error("no element satisfies the condition")]
    NoMatch,

    #[error("the source sequence contains more than one element")]
    MoreThanOne,

    #[error("more than one element satisfies the condition")]
    MoreThanOneMatch,
}

/// Result type alias for SequenceError
pub type SequenceResult<T> = Result<T, SequenceError>;

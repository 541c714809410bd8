// Rust Sequence Engine

//! # Rust Sequence Engine
//!
//! A lazy, re-iterable sequence processing library written in Rust.
//!
//! ## Features
//!
//! - Deferred evaluation: operator chains describe work, terminals run it
//! - Re-iterable pipelines: every enumeration starts from scratch
//! - Filtering, projection and flattening with positional indexes
//! - Stable multi-key sorting (`order_by` / `then_by`) with custom comparers
//! - Equality-based grouping into `Grouping` and `Lookup` containers
//! - Quantifiers, element selection and null-skipping numeric aggregation
//!
//! ## Example
//!
//! ```rust
//! use rust_sequence_engine::Sequence;
//!
//! #[derive(Clone)]
//! struct Order {
//!     customer: &'static str,
//!     amount: f64,
//! }
//!
//! let orders = vec![
//!     Order { customer: "alice", amount: 120.0 },
//!     Order { customer: "bob", amount: 80.0 },
//!     Order { customer: "alice", amount: 45.0 },
//!     Order { customer: "carol", amount: 200.0 },
//! ];
//!
//! // Declare a pipeline; nothing runs yet.
//! let large = Sequence::from(orders)
//!     .filter(|order, _| order.amount >= 80.0)
//!     .order_by(|order| order.customer);
//!
//! // Terminal operators drive the enumeration.
//! assert_eq!(large.count(), 3);
//! assert_eq!(large.sum_of(|order| Some(order.amount)), 400.0);
//!
//! // The pipeline stays reusable after any terminal call.
//! let customers: Vec<_> = large.select(|order, _| order.customer).to_vec();
//! assert_eq!(customers, vec!["alice", "bob", "carol"]);
//! ```

pub mod operators;
pub mod sequence;
pub mod terminal;

mod chain;

// Re-export main types
pub use sequence::{
    comparer, default_comparer, descending, from, nulls_last, Comparer, Grouping, Lookup,
    OrderedSequence, Sequence,
};
pub use terminal::{AsNumber, SequenceError, SequenceResult};

// Intermediate operators: each consumes an upstream sequence and returns a
// new deferred one. Nothing here runs until a terminal operator enumerates.

mod filter;
mod group;
mod order;
mod partition;
mod project;

pub use filter::*;
pub use group::*;
pub use order::*;
pub use partition::*;
pub use project::*;

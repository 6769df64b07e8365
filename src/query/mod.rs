//! The stateless match query engine.
//!
//! Every function here borrows its input and returns a new derived view;
//! nothing is mutated and nothing can fail.

mod calendar;
mod facets;
mod filter;
mod sort;
mod status;
mod tab;

pub use calendar::*;
pub use facets::*;
pub use filter::*;
pub use sort::*;
pub use status::*;
pub use tab::*;

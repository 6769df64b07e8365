//! Explicit view state for the site's pages.
//!
//! Each page keeps its state in a plain struct and changes it only through
//! [`Reducer::reduce`], which consumes the old state and returns the next
//! one. Derived listings come from the stateless [`crate::query`] engine.

mod calendar;
mod carousel;
mod game_filter;
mod header;
mod home;
mod search;

pub use calendar::*;
pub use carousel::*;
pub use game_filter::*;
pub use header::*;
pub use home::*;
pub use search::*;

/// A state value that evolves by applying actions.
pub trait Reducer: Sized {
    type Action;

    fn reduce(self, action: Self::Action) -> Self;

    /// Apply a sequence of actions in order.
    fn reduce_all<I>(self, actions: I) -> Self
    where
        I: IntoIterator<Item = Self::Action>,
    {
        actions.into_iter().fold(self, Self::reduce)
    }
}

//! Filtering, calendar bucketing and page state for esports match listings.
//!
//! Raw records enter through [`normalize`], the stateless [`query`] engine
//! derives read-only views from them, and the reducers in [`view`] hold the
//! state of each page. [`MatchTracker`] ties the three together.

pub use config::{CalendarConfig, CarouselConfig, TrackerConfig};
pub use error::{MatchError, Result};
pub use model::*;
pub use query::{MatchCalendar, Tab};
pub use repository::{FavoritesStore, InMemoryFavorites, MatchRepository, StaticMatchRepository};
pub use tracker::MatchTracker;
pub use view::{CalendarAction, CalendarState, SearchAction, SearchState, ViewMode};

pub mod config;
pub mod error;
pub mod model;
pub mod normalize;
pub mod query;
pub mod repository;
pub(crate) mod sample;
pub mod tracker;
pub mod view;

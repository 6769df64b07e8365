use chrono::{DateTime, Utc};
use tracing::{debug, instrument};

use crate::config::TrackerConfig;
use crate::model::Match;
use crate::query::{self, MatchCalendar, Tab};
use crate::repository::MatchRepository;
use crate::view::{
    CalendarState, CalendarView, CarouselState, GameFilterState, SearchState, SearchView,
};

/// The main entry point for building page views.
///
/// `MatchTracker` takes a snapshot of a [`MatchRepository`] and answers
/// view queries against it. The snapshot is read-only until
/// [`MatchTracker::refresh`] replaces it.
///
/// # Examples
///
/// ```
/// # fn example() -> match_tracker::Result<()> {
/// use match_tracker::{MatchTracker, SearchAction, SearchState, StaticMatchRepository};
/// use match_tracker::view::Reducer;
///
/// let tracker = MatchTracker::new(StaticMatchRepository::sample()?);
/// let state = SearchState::default().reduce(SearchAction::SetTeamName("cloud".into()));
/// let view = tracker.search(&state);
/// println!("Found {} matches", view.results.len());
/// # Ok(())
/// # }
/// ```
pub struct MatchTracker<R> {
    repository: R,
    config: TrackerConfig,
    matches: Vec<Match>,
}

impl<R: MatchRepository> MatchTracker<R> {
    /// Create a tracker with default settings.
    pub fn new(repository: R) -> Self {
        Self::with_config(repository, TrackerConfig::default())
    }

    /// Create a tracker using the provided settings.
    pub fn with_config(repository: R, config: TrackerConfig) -> Self {
        let matches = repository.list_matches();
        debug!(count = matches.len(), "loaded matches");
        Self {
            repository,
            config,
            matches,
        }
    }

    /// Reload the snapshot from the repository.
    pub fn refresh(&mut self) {
        self.matches = self.repository.list_matches();
        debug!(count = self.matches.len(), "reloaded matches");
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    /// Look up a match by id, e.g. for the detail dialog.
    pub fn find(&self, id: &str) -> Option<&Match> {
        self.matches.iter().find(|m| m.id == id)
    }

    /// Results and filter chips for the search page.
    #[instrument(skip(self))]
    pub fn search(&self, state: &SearchState) -> SearchView<'_> {
        let view = state.view(&self.matches);
        debug!(count = view.results.len(), "built search view");
        view
    }

    /// Matches under one tab, in snapshot order.
    #[instrument(skip(self))]
    pub fn tab(&self, tab: Tab) -> Vec<&Match> {
        let matches = tab.project(&self.matches);
        debug!(count = matches.len(), "projected tab");
        matches
    }

    /// Every match bucketed by day in the configured zone.
    pub fn calendar(&self) -> MatchCalendar<'_> {
        MatchCalendar::new(&self.matches, self.config.calendar.time_zone)
    }

    /// The upcoming schedule narrowed to the selected game.
    #[instrument(skip(self, games), fields(game = ?games.selected))]
    pub fn schedule(&self, state: &CalendarState, games: &GameFilterState) -> CalendarView<'_> {
        let filtered = games.apply(&self.matches);
        let upcoming = Tab::Upcoming.project_refs(filtered);
        let calendar = MatchCalendar::from_refs(upcoming, self.config.calendar.time_zone);
        let view = state.view(&calendar);
        debug!(count = view.matches.len(), "built schedule view");
        view
    }

    /// Distinct game and tournament labels across the snapshot, each in
    /// order of first appearance.
    #[instrument(skip(self))]
    pub fn facets(&self) -> (Vec<&str>, Vec<&str>) {
        let games = query::game_types(&self.matches);
        let tournaments = query::tournaments(&self.matches);
        debug!(
            games = games.len(),
            tournaments = tournaments.len(),
            "collected facets"
        );
        (games, tournaments)
    }

    /// Every match ordered by start time.
    #[instrument(skip(self))]
    pub fn chronological(&self) -> Vec<&Match> {
        let matches = query::sort_chronologically(&self.matches);
        debug!(count = matches.len(), "sorted matches");
        matches
    }

    /// Matches that should have started by `now` but never went live.
    #[instrument(skip(self))]
    pub fn stale(&self, now: DateTime<Utc>) -> Vec<&Match> {
        let matches = query::stale_matches(&self.matches, now);
        debug!(count = matches.len(), "found stale matches");
        matches
    }

    /// Scroll state for the live matches strip.
    pub fn carousel(&self) -> CarouselState {
        CarouselState::new(self.config.carousel)
    }
}

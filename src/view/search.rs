use crate::model::{Match, MatchFilter};
use crate::query::{self, Tab};
use crate::view::Reducer;

/// State of the search results page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    /// Text in the search box. Submitting it is the data source's concern;
    /// it does not narrow the listing by itself.
    pub query: String,
    pub filter: MatchFilter,
    pub show_filters: bool,
    pub active_tab: Tab,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchAction {
    SetQuery(String),
    ToggleFilters,
    /// Select a game chip, or clear it if it is already selected.
    ToggleGameType(String),
    /// Select a tournament chip, or clear it if it is already selected.
    ToggleTournament(String),
    /// An empty name clears the team criterion.
    SetTeamName(String),
    SetLiveOnly(bool),
    ClearFilters,
    SelectTab(Tab),
}

fn toggle(current: Option<String>, value: String) -> Option<String> {
    match current {
        Some(current) if current == value => None,
        _ => Some(value),
    }
}

impl Reducer for SearchState {
    type Action = SearchAction;

    fn reduce(self, action: SearchAction) -> Self {
        match action {
            SearchAction::SetQuery(query) => Self { query, ..self },
            SearchAction::ToggleFilters => Self {
                show_filters: !self.show_filters,
                ..self
            },
            SearchAction::ToggleGameType(game_type) => {
                let mut filter = self.filter;
                filter.game_type = toggle(filter.game_type, game_type);
                Self { filter, ..self }
            }
            SearchAction::ToggleTournament(tournament) => {
                let mut filter = self.filter;
                filter.tournament = toggle(filter.tournament, tournament);
                Self { filter, ..self }
            }
            SearchAction::SetTeamName(name) => {
                let mut filter = self.filter;
                let name = name.trim();
                filter.team_name = (!name.is_empty()).then(|| name.to_string());
                Self { filter, ..self }
            }
            SearchAction::SetLiveOnly(live_only) => Self {
                filter: MatchFilter {
                    live_only,
                    ..self.filter
                },
                ..self
            },
            SearchAction::ClearFilters => Self {
                filter: MatchFilter::default(),
                ..self
            },
            SearchAction::SelectTab(active_tab) => Self { active_tab, ..self },
        }
    }
}

/// What the search page renders for a given state.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchView<'a> {
    pub results: Vec<&'a Match>,
    /// Chips offered for the game criterion, from the unfiltered listing.
    pub game_types: Vec<&'a str>,
    /// Chips offered for the tournament criterion, from the unfiltered
    /// listing.
    pub tournaments: Vec<&'a str>,
}

impl SearchState {
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// Apply the filter, then the active tab.
    pub fn results<'a>(&self, matches: &'a [Match]) -> Vec<&'a Match> {
        let filtered = query::filter_matches(matches, &self.filter);
        self.active_tab.project_refs(filtered)
    }

    pub fn view<'a>(&self, matches: &'a [Match]) -> SearchView<'a> {
        SearchView {
            results: self.results(matches),
            game_types: query::game_types(matches),
            tournaments: query::tournaments(matches),
        }
    }
}

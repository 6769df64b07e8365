use tracing::debug;

use crate::repository::FavoritesStore;
use crate::view::Reducer;

/// State of the landing page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HomeState {
    pub search_query: String,
    /// Search results replace the live and upcoming sections while a
    /// non-empty query is active.
    pub show_search_results: bool,
    pub selected_game: Option<String>,
    /// Id of the match shown in the detail dialog.
    pub selected_match: Option<String>,
    pub show_match_detail: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeAction {
    Search(String),
    SelectGame(Option<String>),
    /// Open the detail dialog for a match.
    SelectMatch(String),
    SetDetailOpen(bool),
}

impl Reducer for HomeState {
    type Action = HomeAction;

    fn reduce(self, action: HomeAction) -> Self {
        match action {
            HomeAction::Search(search_query) => Self {
                show_search_results: !search_query.is_empty(),
                search_query,
                ..self
            },
            HomeAction::SelectGame(selected_game) => Self {
                selected_game,
                ..self
            },
            HomeAction::SelectMatch(id) => Self {
                selected_match: Some(id),
                show_match_detail: true,
                ..self
            },
            HomeAction::SetDetailOpen(show_match_detail) => Self {
                show_match_detail,
                ..self
            },
        }
    }
}

impl HomeState {
    /// Add the match in the detail dialog to `favorites`.
    ///
    /// Returns `false` when no match is selected.
    pub fn add_selected_to_favorites<F: FavoritesStore>(&self, favorites: &mut F) -> bool {
        match &self.selected_match {
            Some(id) => {
                debug!(id = %id, "adding match to favorites");
                favorites.add(id);
                true
            }
            None => false,
        }
    }
}

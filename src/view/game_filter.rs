use crate::model::{Game, Match, MatchFilter};
use crate::query::filter_matches;
use crate::view::Reducer;

/// State of the game filter bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameFilterState {
    pub games: Vec<Game>,
    /// Id of the selected game, if any.
    pub selected: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameFilterAction {
    /// Select a game by id, or clear the selection if it is already
    /// selected.
    Toggle(String),
    Clear,
}

impl Default for GameFilterState {
    fn default() -> Self {
        Self::new(Game::catalog())
    }
}

impl GameFilterState {
    pub fn new(games: Vec<Game>) -> Self {
        Self {
            games,
            selected: None,
        }
    }

    pub fn selected_game(&self) -> Option<&Game> {
        let selected = self.selected.as_deref()?;
        self.games.iter().find(|game| game.id == selected)
    }

    /// The filter narrowing a listing to the selected game.
    ///
    /// Returns `None` when the selected id is missing from the catalog; no
    /// match belongs to an unknown game.
    pub fn match_filter(&self) -> Option<MatchFilter> {
        match (&self.selected, self.selected_game()) {
            (_, Some(game)) => Some(MatchFilter::default().game_type(game.name.clone())),
            (Some(_), None) => None,
            (None, None) => Some(MatchFilter::default()),
        }
    }

    /// Narrow `matches` to the selected game, keeping their order.
    pub fn apply<'a>(&self, matches: &'a [Match]) -> Vec<&'a Match> {
        match self.match_filter() {
            Some(filter) => filter_matches(matches, &filter),
            None => Vec::new(),
        }
    }
}

impl Reducer for GameFilterState {
    type Action = GameFilterAction;

    fn reduce(self, action: GameFilterAction) -> Self {
        let selected = match action {
            GameFilterAction::Toggle(id) if self.selected.as_ref() == Some(&id) => None,
            GameFilterAction::Toggle(id) => Some(id),
            GameFilterAction::Clear => None,
        };
        Self { selected, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::fixtures::{abc, ids};

    #[test]
    fn test_toggle() {
        let state = GameFilterState::default().reduce(GameFilterAction::Toggle("lol".to_string()));
        assert_eq!(state.selected.as_deref(), Some("lol"));
        assert_eq!(
            state.selected_game().map(|g| g.name.as_str()),
            Some("League of Legends")
        );

        let state = state.reduce(GameFilterAction::Toggle("lol".to_string()));
        assert_eq!(state.selected, None);

        let state = state
            .reduce(GameFilterAction::Toggle("csgo".to_string()))
            .reduce(GameFilterAction::Clear);
        assert_eq!(state.selected, None);
    }

    #[test]
    fn test_match_filter_uses_display_name() {
        let matches = abc();
        let state = GameFilterState::default().reduce(GameFilterAction::Toggle("csgo".to_string()));
        assert_eq!(
            state.match_filter(),
            Some(MatchFilter::default().game_type("CS:GO"))
        );
        assert_eq!(ids(&state.apply(&matches)), vec!["B"]);
    }

    #[test]
    fn test_match_filter_without_selection() {
        let state = GameFilterState::default();
        assert!(state.match_filter().is_some_and(|filter| filter.is_empty()));
        assert_eq!(state.apply(&abc()).len(), 3);
    }

    #[test]
    fn test_unknown_game_matches_nothing() {
        let matches = abc();
        let state =
            GameFilterState::default().reduce(GameFilterAction::Toggle("chess".to_string()));
        assert!(state.selected_game().is_none());
        assert_eq!(state.match_filter(), None);
        assert!(state.apply(&matches).is_empty());
    }

    #[test]
    fn test_unknown_id_equal_to_a_game_label_matches_nothing() {
        // "CS:GO" is match B's game label, not a catalog id.
        let matches = abc();
        let state =
            GameFilterState::default().reduce(GameFilterAction::Toggle("CS:GO".to_string()));
        assert_eq!(state.match_filter(), None);
        assert!(state.apply(&matches).is_empty());
    }

    #[test]
    fn test_default_catalog() {
        let state = GameFilterState::default();
        assert_eq!(state.games.len(), 8);
        assert_eq!(state.games[0].id, "lol");
    }
}

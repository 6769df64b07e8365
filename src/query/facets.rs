use itertools::Itertools;

use crate::model::Match;

/// Distinct game labels in order of first appearance.
pub fn game_types(matches: &[Match]) -> Vec<&str> {
    matches.iter().map(|m| m.game_type.as_str()).unique().collect_vec()
}

/// Distinct tournament labels in order of first appearance.
pub fn tournaments(matches: &[Match]) -> Vec<&str> {
    matches.iter().map(|m| m.tournament.as_str()).unique().collect_vec()
}

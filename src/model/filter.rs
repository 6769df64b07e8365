use serde::{Deserialize, Serialize};

use super::match_item::Match;

/// A conjunction of optional match criteria.
///
/// Unset fields impose no constraint, so `MatchFilter::default()` keeps
/// every match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchFilter {
    /// Exact, case-sensitive game label.
    pub game_type: Option<String>,
    /// Exact tournament label.
    pub tournament: Option<String>,
    /// Case-insensitive substring of either team's name.
    pub team_name: Option<String>,
    pub live_only: bool,
}

impl MatchFilter {
    pub fn live() -> Self {
        Self {
            live_only: true,
            ..Self::default()
        }
    }

    pub fn game_type(mut self, game_type: impl Into<String>) -> Self {
        self.game_type = Some(game_type.into());
        self
    }

    pub fn tournament(mut self, tournament: impl Into<String>) -> Self {
        self.tournament = Some(tournament.into());
        self
    }

    pub fn team_name(mut self, team_name: impl Into<String>) -> Self {
        self.team_name = Some(team_name.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Check every set criterion against `m`.
    pub fn matches(&self, m: &Match) -> bool {
        if self.live_only && !m.is_live {
            return false;
        }
        if let Some(game_type) = &self.game_type {
            if m.game_type != *game_type {
                return false;
            }
        }
        if let Some(tournament) = &self.tournament {
            if m.tournament != *tournament {
                return false;
            }
        }
        if let Some(team_name) = &self.team_name {
            if !m.involves_team(team_name) {
                return false;
            }
        }
        true
    }
}

use serde::Serialize;

/// One side of a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub logo: String,
    /// Present once the match has started.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
}

impl Team {
    /// Case-insensitive substring test against the team name.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn name_contains_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }
}

/// All errors that can occur while ingesting match records or building
/// configuration.
///
/// The query functions themselves never fail; everything here is raised at
/// the boundary where raw data or settings enter the crate.
#[derive(thiserror::Error, Debug)]
pub enum MatchError {
    /// A match did not list exactly two teams.
    #[error("match {id} must have exactly two teams, found {count}")]
    TeamCount { id: String, count: usize },

    /// Both sides of a match reference the same team.
    #[error("match {id} references team {team_id} twice")]
    DuplicateTeam { id: String, team_id: String },

    /// A required text field was empty.
    #[error("match {id} has an empty {field}")]
    MissingField { id: String, field: &'static str },

    /// The start time was not a valid RFC 3339 timestamp.
    #[error("failed to parse start time for match {id}: {source}")]
    StartTime {
        id: String,
        source: chrono::ParseError,
    },

    /// A team carried a negative score.
    #[error("match {id} has negative score {score} for team {team_id}")]
    NegativeScore {
        id: String,
        team_id: String,
        score: i64,
    },

    /// A match that has not started yet already carries a score.
    #[error("match {id} has a score before it started")]
    ScoreBeforeStart { id: String },

    /// The payload was not valid JSON for the expected shape.
    #[error("invalid payload: {0}")]
    Json(#[from] serde_json::Error),

    /// The configured reference time zone is not a known IANA name.
    #[error("unknown time zone: {0}")]
    UnknownTimeZone(String),

    /// A configuration value was out of range.
    #[error("invalid {field}: {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, MatchError>;

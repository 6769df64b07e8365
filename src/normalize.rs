//! Turning raw match records into validated [`Match`] values.
//!
//! Everything that reaches the query engine passes through here. Records that
//! break an invariant are rejected rather than patched up.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::error::{MatchError, Result};
use crate::model::{Match, Team};

/// A match record as delivered by a data source.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMatch {
    pub id: String,
    pub teams: Vec<RawTeam>,
    pub game_type: String,
    pub tournament: String,
    /// RFC 3339 timestamp, e.g. `2023-06-15T18:00:00Z`.
    pub start_time: String,
    #[serde(default)]
    pub is_live: bool,
    #[serde(default)]
    pub stream_url: Option<String>,
}

/// A team entry inside a [`RawMatch`].
#[derive(Debug, Clone, Deserialize)]
pub struct RawTeam {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub score: Option<i64>,
}

/// Validate a single record.
///
/// `now` decides whether a non-live match has started yet, which in turn
/// decides whether it may carry scores.
pub fn normalize_match(raw: RawMatch, now: DateTime<Utc>) -> Result<Match> {
    let id = raw.id.trim().to_string();
    if id.is_empty() {
        return Err(MatchError::MissingField {
            id: raw.id,
            field: "id",
        });
    }
    require(&id, &raw.game_type, "game type")?;
    require(&id, &raw.tournament, "tournament")?;

    let start_time = DateTime::parse_from_rfc3339(raw.start_time.trim())
        .map_err(|source| MatchError::StartTime {
            id: id.clone(),
            source,
        })?
        .with_timezone(&Utc);

    let count = raw.teams.len();
    let [home, away]: [RawTeam; 2] = raw
        .teams
        .try_into()
        .map_err(|_| MatchError::TeamCount {
            id: id.clone(),
            count,
        })?;
    if home.id.trim() == away.id.trim() {
        return Err(MatchError::DuplicateTeam {
            id,
            team_id: home.id.trim().to_string(),
        });
    }

    let not_started = !raw.is_live && start_time > now;
    if not_started && (home.score.is_some() || away.score.is_some()) {
        return Err(MatchError::ScoreBeforeStart { id });
    }

    let teams = [
        normalize_team(&id, home, raw.is_live)?,
        normalize_team(&id, away, raw.is_live)?,
    ];

    let stream_url = raw
        .stream_url
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty());
    let stream_url = if raw.is_live {
        stream_url
    } else {
        if stream_url.is_some() {
            debug!(id = %id, "dropping stream url from match that is not live");
        }
        None
    };

    Ok(Match {
        id,
        teams,
        game_type: raw.game_type.trim().to_string(),
        tournament: raw.tournament.trim().to_string(),
        start_time,
        is_live: raw.is_live,
        stream_url,
    })
}

fn require(id: &str, value: &str, field: &'static str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(MatchError::MissingField {
            id: id.to_string(),
            field,
        });
    }
    Ok(())
}

fn normalize_team(match_id: &str, raw: RawTeam, is_live: bool) -> Result<Team> {
    require(match_id, &raw.id, "team id")?;
    require(match_id, &raw.name, "team name")?;

    let score = match raw.score {
        Some(score) => Some(u32::try_from(score).map_err(|_| MatchError::NegativeScore {
            id: match_id.to_string(),
            team_id: raw.id.clone(),
            score,
        })?),
        None if is_live => Some(0),
        None => None,
    };

    Ok(Team {
        id: raw.id.trim().to_string(),
        name: raw.name.trim().to_string(),
        logo: raw.logo,
        score,
    })
}

/// Validate a batch, skipping records that fail and later records that
/// repeat an id already accepted.
#[instrument(skip(raws), fields(count = raws.len()))]
pub fn normalize_all(raws: Vec<RawMatch>, now: DateTime<Utc>) -> Vec<Match> {
    let mut seen = HashSet::new();
    let mut matches = Vec::with_capacity(raws.len());
    for raw in raws {
        match normalize_match(raw, now) {
            Ok(m) if !seen.insert(m.id.clone()) => {
                warn!(id = %m.id, "skipping duplicate match id");
            }
            Ok(m) => matches.push(m),
            Err(e) => warn!(error = %e, "skipping invalid match record"),
        }
    }
    debug!(accepted = matches.len(), "normalized match records");
    matches
}

/// Parse a JSON array of raw records and normalize it.
///
/// Malformed JSON is an error; individual invalid records are skipped.
pub fn parse_matches(json: &str, now: DateTime<Utc>) -> Result<Vec<Match>> {
    let raws: Vec<RawMatch> = serde_json::from_str(json)?;
    Ok(normalize_all(raws, now))
}

use std::collections::HashSet;

use crate::error::Result;
use crate::model::Match;
use crate::{normalize, sample};

/// A read-only source of matches.
pub trait MatchRepository: Send + Sync {
    fn list_matches(&self) -> Vec<Match>;
}

/// Tracks which matches a user has marked as favorites.
pub trait FavoritesStore: Send {
    fn add(&mut self, match_id: &str);
    fn remove(&mut self, match_id: &str);
    fn contains(&self, match_id: &str) -> bool;

    /// Flip the favorite flag and return the new state.
    fn toggle(&mut self, match_id: &str) -> bool {
        if self.contains(match_id) {
            self.remove(match_id);
            false
        } else {
            self.add(match_id);
            true
        }
    }
}

/// A repository over a fixed, already-normalized collection.
#[derive(Debug, Clone, Default)]
pub struct StaticMatchRepository {
    matches: Vec<Match>,
}

impl StaticMatchRepository {
    pub fn new(matches: Vec<Match>) -> Self {
        Self { matches }
    }

    /// The site's demo listing, loaded through the normal ingest path.
    ///
    /// The records carry fixed 2023 timestamps, so they are validated against
    /// a fixed instant on that day rather than the wall clock.
    pub fn sample() -> Result<Self> {
        let matches = normalize::parse_matches(sample::SAMPLE_MATCHES, sample::reference_time())?;
        Ok(Self::new(matches))
    }
}

impl MatchRepository for StaticMatchRepository {
    fn list_matches(&self) -> Vec<Match> {
        self.matches.clone()
    }
}

/// Favorites held in memory for the lifetime of the value.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFavorites {
    ids: HashSet<String>,
}

impl InMemoryFavorites {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl FavoritesStore for InMemoryFavorites {
    fn add(&mut self, match_id: &str) {
        self.ids.insert(match_id.to_string());
    }

    fn remove(&mut self, match_id: &str) {
        self.ids.remove(match_id);
    }

    fn contains(&self, match_id: &str) -> bool {
        self.ids.contains(match_id)
    }
}

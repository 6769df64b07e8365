use chrono::{DateTime, Utc};
use itertools::Itertools;

use crate::model::{Match, MatchStatus};

/// Matches past their start time that were never reported live.
///
/// These still appear under [`Tab::Upcoming`](super::Tab::Upcoming); views
/// use this list to mark them instead of presenting them as scheduled.
pub fn stale_matches(matches: &[Match], now: DateTime<Utc>) -> Vec<&Match> {
    matches
        .iter()
        .filter(|m| m.status_at(now) == MatchStatus::Stale)
        .collect_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::fixtures::{abc, at, ids};

    #[test]
    fn test_stale_matches() {
        let matches = abc();
        assert!(stale_matches(&matches, at(2023, 6, 16, 20, 0)).is_empty());
        assert_eq!(ids(&stale_matches(&matches, at(2023, 6, 16, 21, 0))), vec!["B"]);
    }
}

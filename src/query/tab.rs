use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::filter::filter_refs;
use crate::model::{Match, MatchFilter};

/// The named views of a match list.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    All,
    Live,
    /// Every match that is not live, including ones already past their
    /// start time.
    Upcoming,
}

impl Tab {
    /// Project `matches` onto this tab.
    pub fn project<'a>(self, matches: &'a [Match]) -> Vec<&'a Match> {
        self.project_refs(matches.iter())
    }

    /// [`Tab::project`] over an already-borrowed view.
    pub fn project_refs<'a, I>(self, matches: I) -> Vec<&'a Match>
    where
        I: IntoIterator<Item = &'a Match>,
    {
        match self {
            Tab::All => matches.into_iter().collect_vec(),
            Tab::Live => filter_refs(matches, &MatchFilter::live()),
            Tab::Upcoming => matches.into_iter().filter(|m| !m.is_live).collect_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;
    use crate::query::fixtures::{abc, ids};

    #[test]
    fn test_project() {
        let matches = abc();
        assert_eq!(ids(&Tab::All.project(&matches)), vec!["A", "B", "C"]);
        assert_eq!(ids(&Tab::Live.project(&matches)), vec!["A", "C"]);
        assert_eq!(ids(&Tab::Upcoming.project(&matches)), vec!["B"]);
    }

    #[test]
    fn test_live_and_upcoming_partition_all() {
        let matches = abc();
        let live = Tab::Live.project(&matches).len();
        let upcoming = Tab::Upcoming.project(&matches).len();
        assert_eq!(live + upcoming, Tab::All.project(&matches).len());
    }

    #[test]
    fn test_names_round_trip() {
        for tab in Tab::iter() {
            assert_eq!(Tab::from_str(&tab.to_string()).unwrap(), tab);
        }
        assert_eq!(Tab::from_str("upcoming").unwrap(), Tab::Upcoming);
        assert!(Tab::from_str("finished").is_err());
    }
}

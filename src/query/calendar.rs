use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use itertools::Itertools;

use crate::model::Match;

/// The calendar day `start_time` falls on in `time_zone`.
pub fn day_of(start_time: DateTime<Utc>, time_zone: Tz) -> NaiveDate {
    start_time.with_timezone(&time_zone).date_naive()
}

/// Matches grouped by the calendar day they start on.
///
/// Each match lands in exactly one bucket. Within a bucket matches keep the
/// order they were supplied in.
#[derive(Debug, Clone)]
pub struct MatchCalendar<'a> {
    time_zone: Tz,
    days: BTreeMap<NaiveDate, Vec<&'a Match>>,
}

impl<'a> MatchCalendar<'a> {
    pub fn new(matches: &'a [Match], time_zone: Tz) -> Self {
        Self::from_refs(matches.iter(), time_zone)
    }

    pub fn from_refs<I>(matches: I, time_zone: Tz) -> Self
    where
        I: IntoIterator<Item = &'a Match>,
    {
        let mut days: BTreeMap<NaiveDate, Vec<&'a Match>> = BTreeMap::new();
        for m in matches {
            days.entry(day_of(m.start_time, time_zone))
                .or_default()
                .push(m);
        }
        Self { time_zone, days }
    }

    pub fn time_zone(&self) -> Tz {
        self.time_zone
    }

    /// Matches starting on `date`, ignoring time of day.
    pub fn matches_on_date(&self, date: NaiveDate) -> &[&'a Match] {
        self.days.get(&date).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn has_matches_on(&self, date: NaiveDate) -> bool {
        self.days.contains_key(&date)
    }

    /// All bucketed matches, day by day.
    pub fn matches(&self) -> impl Iterator<Item = &'a Match> + '_ {
        self.days.values().flatten().copied()
    }

    /// Every day with at least one match, ascending and without repeats.
    pub fn dates_with_matches(&self) -> Vec<NaiveDate> {
        self.days.keys().copied().collect_vec()
    }

    /// Days with matches inside `from..=to`, for highlighting a visible
    /// calendar range. An inverted range yields nothing.
    pub fn dates_between(&self, from: NaiveDate, to: NaiveDate) -> Vec<NaiveDate> {
        if from > to {
            return Vec::new();
        }
        self.days.range(from..=to).map(|(day, _)| *day).collect_vec()
    }
}

/// Shorthand for [`MatchCalendar::matches_on_date`] without keeping the
/// buckets around.
pub fn matches_on_date(matches: &[Match], date: NaiveDate, time_zone: Tz) -> Vec<&Match> {
    matches
        .iter()
        .filter(|m| day_of(m.start_time, time_zone) == date)
        .collect_vec()
}

/// Shorthand for [`MatchCalendar::dates_with_matches`].
pub fn dates_with_matches(matches: &[Match], time_zone: Tz) -> Vec<NaiveDate> {
    MatchCalendar::new(matches, time_zone).dates_with_matches()
}

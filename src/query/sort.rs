use itertools::Itertools;

use crate::model::Match;

/// Order matches by ascending start time.
///
/// The sort is stable: matches starting at the same instant keep their
/// input order.
pub fn sort_chronologically<'a, I>(matches: I) -> Vec<&'a Match>
where
    I: IntoIterator<Item = &'a Match>,
{
    matches
        .into_iter()
        .sorted_by_key(|m| m.start_time)
        .collect_vec()
}

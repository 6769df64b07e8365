use itertools::Itertools;

use crate::model::{Match, MatchFilter};

/// Keep the matches satisfying every criterion of `filter`, in their
/// original order.
pub fn filter_matches<'a>(matches: &'a [Match], filter: &MatchFilter) -> Vec<&'a Match> {
    filter_refs(matches.iter(), filter)
}

/// [`filter_matches`] over an already-borrowed view.
pub fn filter_refs<'a, I>(matches: I, filter: &MatchFilter) -> Vec<&'a Match>
where
    I: IntoIterator<Item = &'a Match>,
{
    matches.into_iter().filter(|m| filter.matches(m)).collect_vec()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::query::fixtures::{abc, ids};

    #[test]
    fn test_empty_filter_is_identity() {
        let matches = abc();
        let result = filter_matches(&matches, &MatchFilter::default());
        assert_eq!(ids(&result), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(filter_matches(&[], &MatchFilter::live().team_name("x")).is_empty());
    }

    #[test]
    fn test_live_only_preserves_order() {
        let matches = abc();
        let result = filter_matches(&matches, &MatchFilter::live());
        assert_eq!(ids(&result), vec!["A", "C"]);
    }

    #[rstest]
    #[case::team_substring(MatchFilter::default().team_name("cloud"), vec!["A"])]
    #[case::team_upper(MatchFilter::default().team_name("G2"), vec!["B"])]
    #[case::team_away_side(MatchFilter::default().team_name("drx"), vec!["C"])]
    #[case::team_empty_needle(MatchFilter::default().team_name(""), vec!["A", "B", "C"])]
    #[case::game(MatchFilter::default().game_type("League of Legends"), vec!["A", "C"])]
    #[case::game_is_case_sensitive(MatchFilter::default().game_type("league of legends"), vec![])]
    #[case::game_is_exact(MatchFilter::default().game_type("League"), vec![])]
    #[case::tournament(MatchFilter::default().tournament("LCK Summer"), vec!["C"])]
    #[case::conjunction(
        MatchFilter::live().game_type("League of Legends").team_name("t1"),
        vec!["C"]
    )]
    #[case::no_overlap(MatchFilter::live().game_type("CS:GO"), vec![])]
    fn test_criteria(#[case] filter: MatchFilter, #[case] expected: Vec<&str>) {
        let matches = abc();
        let result = filter_matches(&matches, &filter);
        assert_eq!(ids(&result), expected);
    }

    #[test]
    fn test_filter_agrees_with_match_filter_matches() {
        let matches = abc();
        let filter = MatchFilter::default().team_name("LIQUID");
        for m in &matches {
            let kept = filter_matches(std::slice::from_ref(m), &filter).len() == 1;
            assert_eq!(kept, filter.matches(m));
        }
    }
}

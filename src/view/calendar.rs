use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::model::Match;
use crate::query::{self, MatchCalendar};
use crate::view::Reducer;

/// How the schedule is laid out.
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
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// One selected day at a time.
    #[default]
    Calendar,
    /// Every match in start order.
    List,
}

/// State of the schedule page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarState {
    pub selected_date: NaiveDate,
    pub view_mode: ViewMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarAction {
    SelectDate(NaiveDate),
    SetViewMode(ViewMode),
}

impl CalendarState {
    pub fn new(selected_date: NaiveDate) -> Self {
        Self {
            selected_date,
            view_mode: ViewMode::default(),
        }
    }

    /// Start on the current day in `time_zone`.
    pub fn today(time_zone: Tz) -> Self {
        Self::new(query::day_of(Utc::now(), time_zone))
    }

    pub fn view<'a>(&self, calendar: &MatchCalendar<'a>) -> CalendarView<'a> {
        let matches = match self.view_mode {
            ViewMode::Calendar => calendar.matches_on_date(self.selected_date).to_vec(),
            ViewMode::List => query::sort_chronologically(calendar.matches()),
        };
        CalendarView {
            selected_date: self.selected_date,
            highlighted: calendar.dates_with_matches(),
            matches,
        }
    }
}

impl Reducer for CalendarState {
    type Action = CalendarAction;

    fn reduce(self, action: CalendarAction) -> Self {
        match action {
            CalendarAction::SelectDate(selected_date) => Self {
                selected_date,
                ..self
            },
            CalendarAction::SetViewMode(view_mode) => Self { view_mode, ..self },
        }
    }
}

/// What the schedule page renders for a given state.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarView<'a> {
    pub selected_date: NaiveDate,
    /// Days to mark in the date picker.
    pub highlighted: Vec<NaiveDate>,
    pub matches: Vec<&'a Match>,
}

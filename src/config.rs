use chrono_tz::Tz;
use serde::Deserialize;

use crate::error::{MatchError, Result};

/// Settings for the calendar view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarConfig {
    /// Zone whose calendar days matches are bucketed into. Defaults to UTC.
    pub time_zone: Tz,
}

impl CalendarConfig {
    /// Build from an IANA zone name such as `Europe/Istanbul`.
    pub fn from_zone_name(name: &str) -> Result<Self> {
        let time_zone = name
            .trim()
            .parse::<Tz>()
            .map_err(|_| MatchError::UnknownTimeZone(name.to_string()))?;
        Ok(Self { time_zone })
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self { time_zone: Tz::UTC }
    }
}

/// Settings for horizontally scrolling match strips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselConfig {
    scroll_step: u32,
    edge_tolerance: u32,
}

impl CarouselConfig {
    /// One card width plus the gap between cards.
    pub const DEFAULT_SCROLL_STEP: u32 = 370;
    pub const DEFAULT_EDGE_TOLERANCE: u32 = 10;

    /// `scroll_step` is how far one arrow click moves the strip and must be
    /// positive. The right arrow hides once the strip is within
    /// `edge_tolerance` pixels of its end.
    pub fn new(scroll_step: u32, edge_tolerance: u32) -> Result<Self> {
        if scroll_step == 0 {
            return Err(MatchError::InvalidConfig {
                field: "scroll_step",
                reason: "must be greater than zero",
            });
        }
        Ok(Self {
            scroll_step,
            edge_tolerance,
        })
    }

    pub fn scroll_step(&self) -> u32 {
        self.scroll_step
    }

    pub fn edge_tolerance(&self) -> u32 {
        self.edge_tolerance
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            scroll_step: Self::DEFAULT_SCROLL_STEP,
            edge_tolerance: Self::DEFAULT_EDGE_TOLERANCE,
        }
    }
}

/// Top-level settings for a [`MatchTracker`](crate::MatchTracker).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrackerConfig {
    pub calendar: CalendarConfig,
    pub carousel: CarouselConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawTrackerConfig {
    time_zone: String,
    scroll_step: u32,
    edge_tolerance: u32,
}

impl Default for RawTrackerConfig {
    fn default() -> Self {
        Self {
            time_zone: "UTC".to_string(),
            scroll_step: CarouselConfig::DEFAULT_SCROLL_STEP,
            edge_tolerance: CarouselConfig::DEFAULT_EDGE_TOLERANCE,
        }
    }
}

impl TrackerConfig {
    /// Parse and validate a JSON settings object. Missing keys take their
    /// defaults.
    ///
    /// ```
    /// let config = match_tracker::TrackerConfig::from_json(
    ///     r#"{"timeZone": "Europe/Istanbul", "scrollStep": 380}"#,
    /// )?;
    /// assert_eq!(config.carousel.scroll_step(), 380);
    /// # Ok::<(), match_tracker::MatchError>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawTrackerConfig = serde_json::from_str(json)?;
        Ok(Self {
            calendar: CalendarConfig::from_zone_name(&raw.time_zone)?,
            carousel: CarouselConfig::new(raw.scroll_step, raw.edge_tolerance)?,
        })
    }
}

use serde::{Deserialize, Serialize};

use crate::config::CarouselConfig;
use crate::view::Reducer;

/// Scroll geometry of a horizontal strip, in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollMetrics {
    pub scroll_left: u32,
    pub scroll_width: u32,
    pub client_width: u32,
}

impl ScrollMetrics {
    /// Furthest the strip can scroll right.
    pub fn max_scroll_left(&self) -> u32 {
        self.scroll_width.saturating_sub(self.client_width)
    }

    /// Where one arrow click in `direction` lands, clamped to the strip.
    pub fn scroll_target(&self, direction: ScrollDirection, config: &CarouselConfig) -> u32 {
        match direction {
            ScrollDirection::Left => self.scroll_left.saturating_sub(config.scroll_step()),
            ScrollDirection::Right => self
                .scroll_left
                .saturating_add(config.scroll_step())
                .min(self.max_scroll_left()),
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display, strum_macros::EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum ScrollDirection {
    Left,
    Right,
}

/// Which scroll arrows to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrowVisibility {
    pub left: bool,
    pub right: bool,
}

impl Default for ArrowVisibility {
    /// Before the first measurement the strip sits at its start with more
    /// content to the right.
    fn default() -> Self {
        Self {
            left: false,
            right: true,
        }
    }
}

impl ArrowVisibility {
    pub fn from_metrics(metrics: &ScrollMetrics, config: &CarouselConfig) -> Self {
        let remaining = i64::from(metrics.scroll_width)
            - i64::from(metrics.client_width)
            - i64::from(config.edge_tolerance());
        Self {
            left: metrics.scroll_left > 0,
            right: i64::from(metrics.scroll_left) < remaining,
        }
    }
}

/// State of a scrolling strip such as the live matches row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CarouselState {
    pub config: CarouselConfig,
    /// Last measured geometry; `None` until the strip has been laid out.
    pub metrics: Option<ScrollMetrics>,
    pub arrows: ArrowVisibility,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselAction {
    /// The strip was laid out or scrolled.
    Measured(ScrollMetrics),
    /// An arrow was clicked.
    Scroll(ScrollDirection),
}

impl CarouselState {
    pub fn new(config: CarouselConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }
}

impl Reducer for CarouselState {
    type Action = CarouselAction;

    fn reduce(self, action: CarouselAction) -> Self {
        let metrics = match action {
            CarouselAction::Measured(metrics) => metrics,
            CarouselAction::Scroll(direction) => match self.metrics {
                Some(metrics) => ScrollMetrics {
                    scroll_left: metrics.scroll_target(direction, &self.config),
                    ..metrics
                },
                // Nothing to scroll before layout.
                None => return self,
            },
        };
        Self {
            metrics: Some(metrics),
            arrows: ArrowVisibility::from_metrics(&metrics, &self.config),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn metrics(scroll_left: u32) -> ScrollMetrics {
        ScrollMetrics {
            scroll_left,
            scroll_width: 1850,
            client_width: 1000,
        }
    }

    #[rstest]
    #[case::at_start(0, false, true)]
    #[case::middle(400, true, true)]
    #[case::inside_tolerance(841, true, false)]
    #[case::tolerance_boundary(840, true, false)]
    #[case::just_before_tolerance(839, true, true)]
    #[case::at_end(850, true, false)]
    fn test_arrow_visibility(
        #[case] scroll_left: u32,
        #[case] left: bool,
        #[case] right: bool,
    ) {
        let arrows =
            ArrowVisibility::from_metrics(&metrics(scroll_left), &CarouselConfig::default());
        assert_eq!(arrows, ArrowVisibility { left, right });
    }

    #[test]
    fn test_content_narrower_than_viewport() {
        let narrow = ScrollMetrics {
            scroll_left: 0,
            scroll_width: 600,
            client_width: 1000,
        };
        let arrows = ArrowVisibility::from_metrics(&narrow, &CarouselConfig::default());
        assert_eq!(
            arrows,
            ArrowVisibility {
                left: false,
                right: false
            }
        );
        assert_eq!(narrow.max_scroll_left(), 0);
        assert_eq!(
            narrow.scroll_target(ScrollDirection::Right, &CarouselConfig::default()),
            0
        );
    }

    #[test]
    fn test_scroll_clamps_to_strip() {
        let config = CarouselConfig::default();
        assert_eq!(metrics(0).scroll_target(ScrollDirection::Right, &config), 370);
        assert_eq!(metrics(700).scroll_target(ScrollDirection::Right, &config), 850);
        assert_eq!(metrics(200).scroll_target(ScrollDirection::Left, &config), 0);
        assert_eq!(metrics(500).scroll_target(ScrollDirection::Left, &config), 130);
    }

    #[test]
    fn test_reducer() {
        let state = CarouselState::default();
        assert_eq!(state.arrows, ArrowVisibility::default());

        // Clicking before layout does nothing.
        assert_eq!(
            state.reduce(CarouselAction::Scroll(ScrollDirection::Right)),
            state
        );

        let state = state.reduce_all([
            CarouselAction::Measured(metrics(0)),
            CarouselAction::Scroll(ScrollDirection::Right),
            CarouselAction::Scroll(ScrollDirection::Right),
        ]);
        assert_eq!(state.metrics.map(|m| m.scroll_left), Some(740));
        assert_eq!(
            state.arrows,
            ArrowVisibility {
                left: true,
                right: true
            }
        );

        let state = state.reduce(CarouselAction::Scroll(ScrollDirection::Right));
        assert_eq!(state.metrics.map(|m| m.scroll_left), Some(850));
        assert!(!state.arrows.right);
    }

    #[test]
    fn test_custom_step() {
        let config = CarouselConfig::new(380, 10).unwrap();
        let state = CarouselState::new(config).reduce_all([
            CarouselAction::Measured(metrics(0)),
            CarouselAction::Scroll(ScrollDirection::Right),
        ]);
        assert_eq!(state.metrics.map(|m| m.scroll_left), Some(380));
    }
}

use rust_decimal::Decimal;

use crate::core::ValueScale;
use crate::core::primitives::{range_to_position_distance, step_gap};

use super::SliderEngineConfig;

/// Constraint options as they actually apply.
///
/// Range, fixed and crossing options only take effect on ordered sliders;
/// otherwise they fall back to their disabled defaults.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct SliderBehaviorState {
    pub(super) total: u64,
    pub(super) gap: Option<Decimal>,
    pub(super) enable_cross: bool,
    pub(super) fixed: bool,
    /// Position distance for `min_range`, `None` when unconstrained.
    pub(super) min_range_distance: Option<f64>,
    /// Position distance for `max_range`, `None` when unconstrained.
    pub(super) max_range_distance: Option<f64>,
}

impl Default for SliderBehaviorState {
    fn default() -> Self {
        Self {
            total: 0,
            gap: None,
            enable_cross: true,
            fixed: false,
            min_range_distance: None,
            max_range_distance: None,
        }
    }
}

impl SliderBehaviorState {
    pub(super) fn resolve(config: &SliderEngineConfig, scale: &ValueScale, total: u64) -> Self {
        let span = scale.span();
        let distance = |range: Option<Decimal>| {
            range
                .filter(|range| config.order && !range.is_zero())
                .map(|range| range_to_position_distance(Some(range), span))
        };

        Self {
            total,
            gap: step_gap(total),
            enable_cross: !config.order || config.enable_cross,
            fixed: config.order && config.fixed,
            min_range_distance: distance(config.min_range),
            max_range_distance: distance(config.max_range),
        }
    }

    pub(super) fn limits_range(self) -> bool {
        self.min_range_distance.is_some() || self.max_range_distance.is_some()
    }
}

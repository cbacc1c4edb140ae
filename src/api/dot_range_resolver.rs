use crate::core::DotPosRange;
use crate::core::primitives::{POSITION_MAX, POSITION_MIN};

use super::SliderEngine;

/// Result of clamping a requested position into a dot's valid range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct ValidPos {
    pub(super) pos: f64,
    pub(super) in_range: bool,
}

impl SliderEngine {
    /// Valid position interval per dot.
    ///
    /// Lower bound: the `min_range` floor (`distance * index`), the left
    /// neighbor when crossing is disabled, and the dot's own `min` option.
    /// Upper bound mirrors it from the right.
    pub(super) fn resolve_dot_pos_ranges(&self) -> Vec<DotPosRange> {
        let positions = &self.model.dots_pos;
        let last = positions.len().saturating_sub(1);
        let behavior = self.behavior;

        (0..positions.len())
            .map(|index| {
                let mut min = POSITION_MIN;
                let mut max = POSITION_MAX;

                if let Some(distance) = behavior.min_range_distance {
                    min = min.max(distance * index as f64);
                    max = max.min(POSITION_MAX - distance * (last - index) as f64);
                }
                if !behavior.enable_cross {
                    if let Some(prev) = index.checked_sub(1).map(|prev| positions[prev]) {
                        min = min.max(prev);
                    }
                    if let Some(next) = positions.get(index + 1) {
                        max = max.min(*next);
                    }
                }
                if let Some(bound) = self.dot_option_pos(index, DotBound::Min) {
                    min = min.max(bound);
                }
                if let Some(bound) = self.dot_option_pos(index, DotBound::Max) {
                    max = max.min(bound);
                }

                DotPosRange::new(min, max)
            })
            .collect()
    }

    pub(super) fn valid_pos(&self, pos: f64, index: usize) -> ValidPos {
        let Some(range) = self.model.dot_pos_ranges.get(index) else {
            return ValidPos {
                pos,
                in_range: true,
            };
        };
        if pos < range.min {
            ValidPos {
                pos: range.min,
                in_range: false,
            }
        } else if pos > range.max {
            ValidPos {
                pos: range.max,
                in_range: false,
            }
        } else {
            ValidPos {
                pos,
                in_range: true,
            }
        }
    }

    fn dot_option_pos(&self, index: usize, bound: DotBound) -> Option<f64> {
        let option = self.config.dot_options.as_ref()?.for_dot(index)?;
        let value = match bound {
            DotBound::Min => option.min.as_ref(),
            DotBound::Max => option.max.as_ref(),
        }?;
        Some(self.parse_value(value))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DotBound {
    Min,
    Max,
}

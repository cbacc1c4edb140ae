use ordered_float::OrderedFloat;
use rust_decimal::Decimal;
use tracing::{debug, trace};

use crate::core::primitives::{POSITION_MAX, clamp_position, position_to_step, step_to_position};
use crate::core::{SliderInput, SliderValue};
use crate::error::SliderErrorKind;

use super::SliderEngine;

impl SliderEngine {
    /// Replaces every dot value and re-derives positions.
    ///
    /// The number of values sets the dot count.
    pub fn set_value(&mut self, value: impl Into<SliderInput>) {
        self.model.dots_value = value.into().into_values();
        debug!(dots = self.model.dot_count(), "set slider value");
        self.sync_dots_pos();
        self.refresh_derived();
    }

    /// Moves every dot to the given positions.
    ///
    /// Positions are clamped to the track and ordered sliders sort them first.
    /// Values are derived from the positions (snapped to the nearest mark when
    /// `included` is on); with `adsorb` the positions are then re-derived from
    /// those values.
    pub fn set_dots_pos(&mut self, positions: &[f64]) {
        if positions.len() != self.model.dot_count()
            || positions.iter().any(|pos| !pos.is_finite())
        {
            self.errors.report(SliderErrorKind::Value);
            return;
        }

        let mut positions: Vec<f64> = positions.iter().copied().map(clamp_position).collect();
        if self.config.order {
            positions.sort_by_key(|pos| OrderedFloat(*pos));
        }
        let values = positions
            .iter()
            .map(|pos| self.value_by_pos(*pos))
            .collect();

        self.model.dots_pos = positions;
        self.model.dots_value = values;
        if self.config.adsorb {
            self.sync_dots_pos();
        }
        trace!(positions = ?self.model.dots_pos, "set dot positions");
        self.refresh_derived();
    }

    /// Maps a value onto the track.
    ///
    /// Invalid or out-of-range values are reported and map to 0.
    #[must_use]
    pub fn parse_value(&self, value: &SliderValue) -> f64 {
        match self.scale.step_of(value) {
            Ok(step) => step_to_position(step, self.behavior.gap),
            Err(kind) => {
                self.errors.report(kind);
                0.0
            }
        }
    }

    /// Maps a track position onto the nearest achievable value.
    #[must_use]
    pub fn parse_pos(&self, pos: f64) -> SliderValue {
        if !pos.is_finite() {
            self.errors.report(SliderErrorKind::Value);
        }
        let index = position_to_step(pos, self.behavior.gap, self.behavior.total);
        self.scale.value_at(index)
    }

    /// Value at a step index, clamped to `[0, total]`.
    #[must_use]
    pub fn get_value_by_index(&self, index: i64) -> SliderValue {
        let index = u64::try_from(index).unwrap_or(0).min(self.behavior.total);
        self.scale.value_at(index)
    }

    /// Step index of a value: dataset position, or `(value - min) / interval`.
    ///
    /// Returns `None` when the value is not in the dataset or not numeric.
    #[must_use]
    pub fn get_index_by_value(&self, value: &SliderValue) -> Option<Decimal> {
        self.scale.index_of(value)
    }

    /// Index of the dot closest to `pos`; ties go to the lowest index.
    #[must_use]
    pub fn get_recent_dot(&self, pos: f64) -> Option<usize> {
        self.model
            .dots_pos
            .iter()
            .enumerate()
            .min_by_key(|(index, dot_pos)| (OrderedFloat((*dot_pos - pos).abs()), *index))
            .map(|(index, _)| index)
    }

    /// Value for a dragged position, honoring `included` mark snapping.
    pub(super) fn value_by_pos(&self, pos: f64) -> SliderValue {
        let mut value = self.parse_pos(pos);
        if self.config.included {
            let mut nearest = POSITION_MAX;
            for mark in &self.model.marks {
                let distance = (mark.position - pos).abs();
                if distance < nearest {
                    nearest = distance;
                    value = mark.value.clone();
                }
            }
        }
        value
    }
}


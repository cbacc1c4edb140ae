use tracing::trace;

use crate::core::{DatasetScale, IntervalScale, ValueScale};
use crate::error::SliderErrorKind;

use super::{SliderEngine, slider_behavior::SliderBehaviorState};

impl SliderEngine {
    /// Runs the full dependency chain after a configuration change:
    /// option validation, value scale and total steps, gap, positions from
    /// values, then dot ranges, process ranges, marks and indices.
    pub(super) fn rebuild_from_config(&mut self) {
        if !self.config.order && self.config.has_order_only_options() {
            self.errors.report(SliderErrorKind::Order);
        }

        self.scale = self.resolve_value_scale();
        let total = self.scale.total().unwrap_or_else(|kind| {
            self.errors.report(kind);
            0
        });
        self.behavior = SliderBehaviorState::resolve(&self.config, &self.scale, total);
        self.sync_dots_pos();
        self.refresh_derived();
    }

    fn resolve_value_scale(&self) -> ValueScale {
        if let Some(data) = &self.config.dataset {
            match DatasetScale::new(data.clone()) {
                Ok(scale) => return ValueScale::Dataset(scale),
                Err(kind) => self.errors.report(kind),
            }
        }
        ValueScale::Interval(IntervalScale::new(
            self.config.min,
            self.config.max,
            self.config.interval,
        ))
    }

    /// Re-derives every dot position from its value.
    pub(super) fn sync_dots_pos(&mut self) {
        let positions = self
            .model
            .dots_value
            .iter()
            .map(|value| self.parse_value(value))
            .collect();
        self.model.dots_pos = positions;
    }

    /// Rebuilds state derived from the current positions and values.
    pub(super) fn refresh_derived(&mut self) {
        self.model.dot_pos_ranges = self.resolve_dot_pos_ranges();
        self.model.process = self.resolve_process_ranges();
        self.model.marks = self.build_mark_list();
        self.model.dots_index = self
            .model
            .dots_value
            .iter()
            .map(|value| self.scale.index_of(value))
            .collect();
        trace!(
            dots = self.model.dot_count(),
            process_ranges = self.model.process.len(),
            marks = self.model.marks.len(),
            "refreshed derived slider state"
        );
    }
}

use ordered_float::OrderedFloat;

use crate::core::ProcessRange;
use crate::core::primitives::POSITION_MIN;

use super::{ProcessFn, SliderEngine};

impl SliderEngine {
    /// Installs a custom process function; it replaces the default highlight.
    pub fn set_process_fn(&mut self, process: ProcessFn) {
        self.process_fn = Some(process);
        self.refresh_derived();
    }

    /// Returns to the default highlight driven by `config.process`.
    pub fn clear_process_fn(&mut self) {
        self.process_fn = None;
        self.refresh_derived();
    }

    /// True when `pos` lies inside any highlighted range, bounds inclusive.
    #[must_use]
    pub fn is_active_by_pos(&self, pos: f64) -> bool {
        self.model
            .process
            .iter()
            .any(|range| range.contains(pos))
    }

    pub(super) fn resolve_process_ranges(&self) -> Vec<ProcessRange> {
        let positions = &self.model.dots_pos;
        if let Some(process) = &self.process_fn {
            return process(positions);
        }
        if !self.config.process {
            return Vec::new();
        }

        match positions.as_slice() {
            [] => Vec::new(),
            [single] => vec![ProcessRange::new(POSITION_MIN, *single)],
            _ => {
                let start = positions.iter().copied().map(OrderedFloat).min();
                let end = positions.iter().copied().map(OrderedFloat).max();
                match (start, end) {
                    (Some(start), Some(end)) => vec![ProcessRange::new(start.0, end.0)],
                    _ => Vec::new(),
                }
            }
        }
    }
}

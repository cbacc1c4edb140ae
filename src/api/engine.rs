use std::sync::Arc;

use rust_decimal::Decimal;

use crate::core::{DotPosRange, Mark, MarkOverride, ProcessRange, SliderValue, ValueScale};
use crate::interaction::InteractionState;

use super::{
    SliderEngineConfig, error_reporter::ErrorReporter, slider_behavior::SliderBehaviorState,
    slider_model::SliderModel,
};

/// Generator form of marks: called once per achievable value, `None` suppresses
/// the mark.
pub type MarkGeneratorFn =
    Arc<dyn Fn(&SliderValue) -> Option<MarkOverride> + Send + Sync + 'static>;

/// Custom process: receives current dot positions, returns highlighted ranges.
pub type ProcessFn = Arc<dyn Fn(&[f64]) -> Vec<ProcessRange> + Send + Sync + 'static>;

/// Main facade consumed by the embedding UI layer.
///
/// `SliderEngine` owns the dot values and positions, keeps every derived
/// collection (dot ranges, process ranges, marks, indices) in step with them,
/// and reports constraint violations without ever aborting an operation.
pub struct SliderEngine {
    pub(super) config: SliderEngineConfig,
    pub(super) scale: ValueScale,
    pub(super) behavior: SliderBehaviorState,
    pub(super) model: SliderModel,
    pub(super) mark_generator: Option<MarkGeneratorFn>,
    pub(super) process_fn: Option<ProcessFn>,
    pub(super) errors: ErrorReporter,
}

impl SliderEngine {
    #[must_use]
    pub fn config(&self) -> &SliderEngineConfig {
        &self.config
    }

    /// Number of steps between the first and last achievable value.
    ///
    /// 0 when the interval does not divide the range.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.behavior.total
    }

    #[must_use]
    pub fn dots_value(&self) -> &[SliderValue] {
        &self.model.dots_value
    }

    #[must_use]
    pub fn dots_pos(&self) -> &[f64] {
        &self.model.dots_pos
    }

    #[must_use]
    pub fn dots_index(&self) -> &[Option<Decimal>] {
        &self.model.dots_index
    }

    #[must_use]
    pub fn dot_count(&self) -> usize {
        self.model.dot_count()
    }

    /// Position interval each dot may currently be moved within.
    #[must_use]
    pub fn dot_pos_ranges(&self) -> &[DotPosRange] {
        &self.model.dot_pos_ranges
    }

    #[must_use]
    pub fn process_ranges(&self) -> &[ProcessRange] {
        &self.model.process
    }

    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.model.marks
    }

    #[must_use]
    pub fn interaction(&self) -> InteractionState {
        self.model.interaction
    }

    pub fn interaction_mut(&mut self) -> &mut InteractionState {
        &mut self.model.interaction
    }
}

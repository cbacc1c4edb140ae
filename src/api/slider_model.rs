use rust_decimal::Decimal;

use crate::core::{DotPosRange, Mark, ProcessRange, SliderValue};
use crate::interaction::InteractionState;

/// Dot state plus everything derived from it.
///
/// `dots_value` and `dots_pos` always have the same length; the derived
/// vectors are rebuilt from them after every mutation.
#[derive(Debug, Clone, Default, PartialEq)]
pub(super) struct SliderModel {
    pub(super) dots_value: Vec<SliderValue>,
    pub(super) dots_pos: Vec<f64>,
    pub(super) dots_index: Vec<Option<Decimal>>,
    pub(super) dot_pos_ranges: Vec<DotPosRange>,
    pub(super) process: Vec<ProcessRange>,
    pub(super) marks: Vec<Mark>,
    pub(super) interaction: InteractionState,
}

impl SliderModel {
    pub(super) fn dot_count(&self) -> usize {
        self.dots_pos.len()
    }
}

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{DotPosRange, Mark, ProcessRange, SliderValue};

/// Current layout version written into every serialized snapshot.
pub const SLIDER_SNAPSHOT_VERSION: u32 = 1;

/// Serializable read model of one engine state.
///
/// The per-dot vectors (`dots_value`, `dots_pos`, `dots_index`,
/// `dot_pos_ranges`) are index-aligned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderSnapshot {
    pub version: u32,
    pub total: u64,
    pub dots_value: Vec<SliderValue>,
    pub dots_pos: Vec<f64>,
    pub dots_index: Vec<Option<Decimal>>,
    pub dot_pos_ranges: Vec<DotPosRange>,
    pub process: Vec<ProcessRange>,
    pub marks: Vec<Mark>,
    #[serde(default)]
    pub dragging: bool,
    #[serde(default)]
    pub focused: bool,
}

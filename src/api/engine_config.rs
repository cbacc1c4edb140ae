use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{DotOptions, MarksOption, SliderValue};
use crate::error::{SliderError, SliderResult};

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load slider
/// setup. Closure-valued options (mark generator, custom process, error
/// handler) are installed on the engine instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderEngineConfig {
    #[serde(default = "default_min")]
    pub min: Decimal,
    #[serde(default = "default_max")]
    pub max: Decimal,
    #[serde(default = "default_interval")]
    pub interval: Decimal,
    /// When present, values are drawn from this list and `min`/`max`/`interval`
    /// are ignored.
    #[serde(default)]
    pub dataset: Option<Vec<SliderValue>>,
    #[serde(default = "default_true")]
    pub order: bool,
    #[serde(default = "default_true")]
    pub enable_cross: bool,
    #[serde(default)]
    pub fixed: bool,
    /// Minimum distance between adjacent dots, in value units.
    #[serde(default)]
    pub min_range: Option<Decimal>,
    /// Maximum distance between adjacent dots, in value units.
    #[serde(default)]
    pub max_range: Option<Decimal>,
    #[serde(default)]
    pub included: bool,
    #[serde(default)]
    pub adsorb: bool,
    #[serde(default)]
    pub marks: MarksOption,
    #[serde(default = "default_true")]
    pub process: bool,
    #[serde(default)]
    pub dot_options: Option<DotOptions>,
}

impl Default for SliderEngineConfig {
    fn default() -> Self {
        Self::new(default_min(), default_max())
    }
}

impl SliderEngineConfig {
    /// Creates a config over `[min, max]` with unit interval and default behavior.
    #[must_use]
    pub fn new(min: impl Into<Decimal>, max: impl Into<Decimal>) -> Self {
        Self {
            min: min.into(),
            max: max.into(),
            interval: default_interval(),
            dataset: None,
            order: true,
            enable_cross: true,
            fixed: false,
            min_range: None,
            max_range: None,
            included: false,
            adsorb: false,
            marks: MarksOption::Disabled,
            process: true,
            dot_options: None,
        }
    }

    /// Draws values from `data` instead of the numeric range.
    #[must_use]
    pub fn with_dataset<I, V>(mut self, data: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<SliderValue>,
    {
        self.dataset = Some(data.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_interval(mut self, interval: impl Into<Decimal>) -> Self {
        self.interval = interval.into();
        self
    }

    #[must_use]
    pub fn with_order(mut self, order: bool) -> Self {
        self.order = order;
        self
    }

    #[must_use]
    pub fn with_enable_cross(mut self, enable_cross: bool) -> Self {
        self.enable_cross = enable_cross;
        self
    }

    #[must_use]
    pub fn with_fixed(mut self, fixed: bool) -> Self {
        self.fixed = fixed;
        self
    }

    #[must_use]
    pub fn with_min_range(mut self, range: impl Into<Decimal>) -> Self {
        self.min_range = Some(range.into());
        self
    }

    #[must_use]
    pub fn with_max_range(mut self, range: impl Into<Decimal>) -> Self {
        self.max_range = Some(range.into());
        self
    }

    /// Snaps dragged values to the nearest mark value.
    #[must_use]
    pub fn with_included(mut self, included: bool) -> Self {
        self.included = included;
        self
    }

    /// Re-derives positions from values after every drag.
    #[must_use]
    pub fn with_adsorb(mut self, adsorb: bool) -> Self {
        self.adsorb = adsorb;
        self
    }

    #[must_use]
    pub fn with_marks(mut self, marks: MarksOption) -> Self {
        self.marks = marks;
        self
    }

    #[must_use]
    pub fn with_process(mut self, process: bool) -> Self {
        self.process = process;
        self
    }

    #[must_use]
    pub fn with_dot_options(mut self, options: DotOptions) -> Self {
        self.dot_options = Some(options);
        self
    }

    /// True when any option that only applies to ordered sliders is set.
    #[must_use]
    pub fn has_order_only_options(&self) -> bool {
        let is_set = |range: Option<Decimal>| range.is_some_and(|range| !range.is_zero());
        is_set(self.min_range) || is_set(self.max_range) || self.fixed || !self.enable_cross
    }

    pub fn from_json_str(input: &str) -> SliderResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| SliderError::InvalidData(format!("failed to parse slider config: {e}")))
    }

    pub fn to_json_pretty(&self) -> SliderResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            SliderError::InvalidData(format!("failed to serialize slider config: {e}"))
        })
    }
}

fn default_min() -> Decimal {
    Decimal::ZERO
}

fn default_max() -> Decimal {
    Decimal::ONE_HUNDRED
}

fn default_interval() -> Decimal {
    Decimal::ONE
}

fn default_true() -> bool {
    true
}

use rust_decimal::Decimal;
use tracing::debug;

use crate::core::{DotOptions, MarksOption, SliderValue};

use super::{SliderEngine, SliderEngineConfig, SliderErrorHandlerFn};

impl SliderEngine {
    /// Replaces the whole configuration and rebuilds every derived value.
    pub fn set_config(&mut self, config: SliderEngineConfig) {
        self.config = config;
        self.apply_config_change("config");
    }

    pub fn set_min(&mut self, min: impl Into<Decimal>) {
        self.config.min = min.into();
        self.apply_config_change("min");
    }

    pub fn set_max(&mut self, max: impl Into<Decimal>) {
        self.config.max = max.into();
        self.apply_config_change("max");
    }

    pub fn set_interval(&mut self, interval: impl Into<Decimal>) {
        self.config.interval = interval.into();
        self.apply_config_change("interval");
    }

    pub fn set_dataset(&mut self, dataset: Option<Vec<SliderValue>>) {
        self.config.dataset = dataset;
        self.apply_config_change("dataset");
    }

    pub fn set_order(&mut self, order: bool) {
        self.config.order = order;
        self.apply_config_change("order");
    }

    pub fn set_enable_cross(&mut self, enable_cross: bool) {
        self.config.enable_cross = enable_cross;
        self.apply_config_change("enable_cross");
    }

    pub fn set_fixed(&mut self, fixed: bool) {
        self.config.fixed = fixed;
        self.apply_config_change("fixed");
    }

    pub fn set_min_range(&mut self, range: Option<Decimal>) {
        self.config.min_range = range;
        self.apply_config_change("min_range");
    }

    pub fn set_max_range(&mut self, range: Option<Decimal>) {
        self.config.max_range = range;
        self.apply_config_change("max_range");
    }

    pub fn set_included(&mut self, included: bool) {
        self.config.included = included;
        self.apply_config_change("included");
    }

    pub fn set_adsorb(&mut self, adsorb: bool) {
        self.config.adsorb = adsorb;
        self.apply_config_change("adsorb");
    }

    /// Sets the serializable marks form; drops any installed generator.
    pub fn set_marks(&mut self, marks: MarksOption) {
        self.config.marks = marks;
        self.mark_generator = None;
        self.apply_config_change("marks");
    }

    /// Toggles the default highlight; drops any installed process function.
    pub fn set_process(&mut self, process: bool) {
        self.config.process = process;
        self.process_fn = None;
        self.apply_config_change("process");
    }

    pub fn set_dot_options(&mut self, options: Option<DotOptions>) {
        self.config.dot_options = options;
        self.apply_config_change("dot_options");
    }

    pub fn set_error_handler(&mut self, handler: SliderErrorHandlerFn) {
        self.errors.set_handler(Some(handler));
    }

    pub fn clear_error_handler(&mut self) {
        self.errors.set_handler(None);
    }

    fn apply_config_change(&mut self, field: &'static str) {
        debug!(field, "slider config changed");
        self.rebuild_from_config();
    }
}

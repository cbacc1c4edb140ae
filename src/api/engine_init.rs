use tracing::debug;

use crate::core::{IntervalScale, SliderInput, ValueScale};

use super::{
    SliderEngine, SliderEngineConfig, SliderErrorHandlerFn, error_reporter::ErrorReporter,
    slider_behavior::SliderBehaviorState, slider_model::SliderModel,
};

impl SliderEngine {
    /// Creates an engine and places its dots at `initial`.
    ///
    /// Misconfiguration never fails construction; it is logged and the engine
    /// starts in a degraded but consistent state.
    #[must_use]
    pub fn new(config: SliderEngineConfig, initial: impl Into<SliderInput>) -> Self {
        Self::bootstrap(config, initial.into(), ErrorReporter::default())
    }

    /// Same as [`SliderEngine::new`], with `handler` already receiving the
    /// violations found while bootstrapping.
    #[must_use]
    pub fn new_with_error_handler(
        config: SliderEngineConfig,
        initial: impl Into<SliderInput>,
        handler: SliderErrorHandlerFn,
    ) -> Self {
        Self::bootstrap(config, initial.into(), ErrorReporter::with_handler(handler))
    }

    fn bootstrap(config: SliderEngineConfig, initial: SliderInput, errors: ErrorReporter) -> Self {
        let scale = ValueScale::Interval(IntervalScale::new(
            config.min,
            config.max,
            config.interval,
        ));
        let mut engine = Self {
            config,
            scale,
            behavior: SliderBehaviorState::default(),
            model: SliderModel::default(),
            mark_generator: None,
            process_fn: None,
            errors,
        };
        engine.model.dots_value = initial.into_values();
        engine.rebuild_from_config();
        debug!(
            dots = engine.model.dot_count(),
            total = engine.behavior.total,
            "slider engine initialized"
        );
        engine
    }
}

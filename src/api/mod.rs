mod config_controller;
mod dot_move_controller;
mod dot_range_resolver;
mod engine;
mod engine_config;
mod engine_init;
mod engine_snapshot;
mod error_reporter;
mod mark_list_builder;
mod process_resolver;
mod recompute_coordinator;
mod slider_behavior;
mod slider_model;
mod snapshot_controller;
mod value_controller;

pub use engine::{MarkGeneratorFn, ProcessFn, SliderEngine};
pub use engine_config::SliderEngineConfig;
pub use engine_snapshot::{SLIDER_SNAPSHOT_VERSION, SliderSnapshot};
pub use error_reporter::SliderErrorHandlerFn;

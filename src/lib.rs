//! slider-rs: position/value mapping core for multi-dot range sliders.
//!
//! The crate converts between track positions (percentages in `[0, 100]`)
//! and slider values (exact decimals or entries of a discrete dataset),
//! enforces ordering and spacing constraints between dots, and derives the
//! highlighted process ranges and tick marks a UI layer renders.
//!
//! Rendering, hit-testing and event capture stay with the embedding UI; it
//! forwards percentage positions into [`SliderEngine::set_dot_pos`] and reads
//! the updated read model back out.
//!
//! ```
//! use slider_rs::{SliderEngine, SliderEngineConfig, SliderValue};
//!
//! let mut engine = SliderEngine::new(SliderEngineConfig::new(0, 100), vec![0, 40]);
//! engine.set_dot_pos(25.0, 0);
//! assert_eq!(engine.dots_value()[0], SliderValue::from(25));
//! assert!(engine.is_active_by_pos(30.0));
//! ```

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod telemetry;

pub use api::{SliderEngine, SliderEngineConfig, SliderSnapshot};
pub use crate::core::{SliderInput, SliderValue};
pub use error::{SliderError, SliderErrorKind, SliderResult};

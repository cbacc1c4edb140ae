pub mod mark;
pub mod primitives;
pub mod types;
pub mod value_scale;

pub use mark::{Mark, MarkEntry, MarkOverride, MarkStyle, MarksOption};
pub use types::{DotOption, DotOptions, DotPosRange, ProcessRange, SliderInput, SliderValue};
pub use value_scale::{DatasetScale, IntervalScale, ValueScale};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type SliderResult<T> = Result<T, SliderError>;

/// Non-fatal constraint violations reported through the engine error sink.
///
/// Codes are stable and match the numeric kinds hosts already key on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SliderErrorKind {
    Value,
    Interval,
    Min,
    Max,
    Order,
}

impl SliderErrorKind {
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Value => 1,
            Self::Interval => 2,
            Self::Min => 3,
            Self::Max => 4,
            Self::Order => 5,
        }
    }

    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Value),
            2 => Some(Self::Interval),
            3 => Some(Self::Min),
            4 => Some(Self::Max),
            5 => Some(Self::Order),
            _ => None,
        }
    }

    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Value => "The type of the \"value\" is illegal",
            Self::Interval => {
                "The prop \"interval\" is invalid, \"(max - min)\" must be divisible by \"interval\""
            }
            Self::Min => "The \"value\" must be greater than or equal to the \"min\".",
            Self::Max => "The \"value\" must be less than or equal to the \"max\".",
            Self::Order => {
                "When \"order\" is false, the parameters \"minRange\", \"maxRange\", \"fixed\", \"enabled\" are invalid."
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum SliderError {
    #[error("{}", .0.message())]
    Constraint(SliderErrorKind),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

impl SliderError {
    /// Returns the constraint kind when this error is a slider constraint.
    #[must_use]
    pub fn kind(&self) -> Option<SliderErrorKind> {
        match self {
            Self::Constraint(kind) => Some(*kind),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<SliderErrorKind> for SliderError {
    fn from(kind: SliderErrorKind) -> Self {
        Self::Constraint(kind)
    }
}

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::SliderErrorKind;

use super::SliderValue;

/// Evenly stepped numeric mapping: `min + index * interval`.
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalScale {
    min: Decimal,
    max: Decimal,
    interval: Decimal,
}

impl IntervalScale {
    #[must_use]
    pub fn new(min: Decimal, max: Decimal, interval: Decimal) -> Self {
        Self { min, max, interval }
    }

    #[must_use]
    pub fn bounds(&self) -> (Decimal, Decimal) {
        (self.min, self.max)
    }

    #[must_use]
    pub fn interval(&self) -> Decimal {
        self.interval
    }

    /// Number of steps between `min` and `max`.
    ///
    /// The range must be an exact, non-negative multiple of the interval.
    pub fn total(&self) -> Result<u64, SliderErrorKind> {
        let steps = self
            .max
            .checked_sub(self.min)
            .and_then(|span| span.checked_div(self.interval))
            .ok_or(SliderErrorKind::Interval)?;
        if !steps.fract().is_zero() || steps.is_sign_negative() {
            return Err(SliderErrorKind::Interval);
        }
        steps.to_u64().ok_or(SliderErrorKind::Interval)
    }

    fn offset_steps(&self, value: Decimal) -> Option<Decimal> {
        value
            .checked_sub(self.min)
            .and_then(|offset| offset.checked_div(self.interval))
    }

    fn step_of(&self, value: &SliderValue) -> Result<Decimal, SliderErrorKind> {
        let value = value.as_decimal().ok_or(SliderErrorKind::Value)?;
        if value < self.min {
            return Err(SliderErrorKind::Min);
        }
        if value > self.max {
            return Err(SliderErrorKind::Max);
        }
        // A zero interval is already reported through `total`.
        Ok(self.offset_steps(value).unwrap_or(Decimal::ZERO))
    }

    fn value_at(&self, index: u64) -> SliderValue {
        let value = Decimal::from(index)
            .checked_mul(self.interval)
            .and_then(|offset| offset.checked_add(self.min))
            .unwrap_or(self.max);
        SliderValue::Number(value)
    }
}

/// Discrete mapping over an explicit ordered list of values.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetScale {
    data: Vec<SliderValue>,
}

impl DatasetScale {
    /// An empty dataset has no step count and is rejected as an interval error.
    pub fn new(data: Vec<SliderValue>) -> Result<Self, SliderErrorKind> {
        if data.is_empty() {
            return Err(SliderErrorKind::Interval);
        }
        Ok(Self { data })
    }

    #[must_use]
    pub fn data(&self) -> &[SliderValue] {
        &self.data
    }

    fn position_of(&self, value: &SliderValue) -> Option<usize> {
        self.data.iter().position(|item| item == value)
    }
}

/// Position/value mapping selected once from the configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueScale {
    Interval(IntervalScale),
    Dataset(DatasetScale),
}

impl ValueScale {
    pub fn total(&self) -> Result<u64, SliderErrorKind> {
        match self {
            Self::Interval(scale) => scale.total(),
            Self::Dataset(scale) => Ok(scale.data.len() as u64 - 1),
        }
    }

    /// Width of the scale in value units (dataset steps in dataset mode).
    #[must_use]
    pub fn span(&self) -> Decimal {
        match self {
            Self::Interval(scale) => scale.max.checked_sub(scale.min).unwrap_or(Decimal::ZERO),
            Self::Dataset(scale) => Decimal::from(scale.data.len() as u64 - 1),
        }
    }

    /// Step offset of a value, validated against the scale.
    pub fn step_of(&self, value: &SliderValue) -> Result<Decimal, SliderErrorKind> {
        match self {
            Self::Interval(scale) => scale.step_of(value),
            Self::Dataset(scale) => scale
                .position_of(value)
                .map(|index| Decimal::from(index as u64))
                .ok_or(SliderErrorKind::Value),
        }
    }

    /// Value at a step index; callers clamp `index` to `[0, total]`.
    #[must_use]
    pub fn value_at(&self, index: u64) -> SliderValue {
        match self {
            Self::Interval(scale) => scale.value_at(index),
            Self::Dataset(scale) => {
                let last = scale.data.len() - 1;
                let index = usize::try_from(index).map_or(last, |index| index.min(last));
                scale.data[index].clone()
            }
        }
    }

    /// Raw index of a value without bounds validation.
    ///
    /// Interval mode may return a fractional index for off-grid values.
    #[must_use]
    pub fn index_of(&self, value: &SliderValue) -> Option<Decimal> {
        match self {
            Self::Interval(scale) => value
                .as_decimal()
                .and_then(|value| scale.offset_steps(value)),
            Self::Dataset(scale) => scale
                .position_of(value)
                .map(|index| Decimal::from(index as u64)),
        }
    }

    /// Every achievable value, in step order.
    #[must_use]
    pub fn values(&self, total: u64) -> Vec<SliderValue> {
        match self {
            Self::Interval(scale) => (0..=total).map(|index| scale.value_at(index)).collect(),
            Self::Dataset(scale) => scale.data.clone(),
        }
    }
}

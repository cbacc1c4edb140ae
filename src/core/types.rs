use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::de::{self, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// Semantic slider value.
///
/// Numeric values are kept as exact decimals. Text covers numeric strings
/// (parsed on demand in interval mode) and arbitrary dataset entries.
///
/// JSON numbers deserialize as `Number`, JSON strings always as `Text`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SliderValue {
    Number(Decimal),
    Text(String),
}

impl SliderValue {
    #[must_use]
    pub fn number(value: impl Into<Decimal>) -> Self {
        Self::Number(value.into())
    }

    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Numeric reading of the value.
    ///
    /// Text is accepted when it parses as a plain or scientific decimal.
    #[must_use]
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    return None;
                }
                Decimal::from_str(text)
                    .or_else(|_| Decimal::from_scientific(text))
                    .ok()
            }
        }
    }
}

impl fmt::Display for SliderValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{}", value.normalize()),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl<'de> Deserialize<'de> for SliderValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(SliderValueVisitor)
    }
}

struct SliderValueVisitor;

impl<'de> Visitor<'de> for SliderValueVisitor {
    type Value = SliderValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number or a string")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<SliderValue, E> {
        Ok(SliderValue::Number(Decimal::from(value)))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<SliderValue, E> {
        Ok(SliderValue::Number(Decimal::from(value)))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<SliderValue, E> {
        Decimal::from_f64(value)
            .map(SliderValue::Number)
            .ok_or_else(|| E::invalid_value(Unexpected::Float(value), &self))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<SliderValue, E> {
        Ok(SliderValue::Text(value.to_owned()))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<SliderValue, E> {
        Ok(SliderValue::Text(value))
    }
}

impl From<Decimal> for SliderValue {
    fn from(value: Decimal) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for SliderValue {
    fn from(value: i32) -> Self {
        Self::Number(Decimal::from(value))
    }
}

impl From<i64> for SliderValue {
    fn from(value: i64) -> Self {
        Self::Number(Decimal::from(value))
    }
}

impl From<u32> for SliderValue {
    fn from(value: u32) -> Self {
        Self::Number(Decimal::from(value))
    }
}

/// Non-finite floats have no decimal form and become text, which later
/// reports as an illegal value.
impl From<f64> for SliderValue {
    fn from(value: f64) -> Self {
        match Decimal::from_f64(value) {
            Some(decimal) if value.is_finite() => Self::Number(decimal),
            _ => Self::Text(value.to_string()),
        }
    }
}

impl From<&str> for SliderValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for SliderValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Argument accepted by `set_value`: one value or one value per dot.
#[derive(Debug, Clone, PartialEq)]
pub enum SliderInput {
    Single(SliderValue),
    Multiple(Vec<SliderValue>),
}

impl SliderInput {
    #[must_use]
    pub fn into_values(self) -> Vec<SliderValue> {
        match self {
            Self::Single(value) => vec![value],
            Self::Multiple(values) => values,
        }
    }
}

impl From<SliderValue> for SliderInput {
    fn from(value: SliderValue) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<SliderValue>> for SliderInput {
    fn from(values: Vec<SliderValue>) -> Self {
        Self::Multiple(values)
    }
}

impl From<Decimal> for SliderInput {
    fn from(value: Decimal) -> Self {
        Self::Single(value.into())
    }
}

impl From<i32> for SliderInput {
    fn from(value: i32) -> Self {
        Self::Single(value.into())
    }
}

impl From<f64> for SliderInput {
    fn from(value: f64) -> Self {
        Self::Single(value.into())
    }
}

impl From<&str> for SliderInput {
    fn from(value: &str) -> Self {
        Self::Single(value.into())
    }
}

impl From<Vec<i32>> for SliderInput {
    fn from(values: Vec<i32>) -> Self {
        Self::Multiple(values.into_iter().map(SliderValue::from).collect())
    }
}

impl From<Vec<f64>> for SliderInput {
    fn from(values: Vec<f64>) -> Self {
        Self::Multiple(values.into_iter().map(SliderValue::from).collect())
    }
}

impl From<Vec<&str>> for SliderInput {
    fn from(values: Vec<&str>) -> Self {
        Self::Multiple(values.into_iter().map(SliderValue::from).collect())
    }
}

/// Highlighted track segment in position space, bounds inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProcessRange {
    pub start: f64,
    pub end: f64,
}

impl ProcessRange {
    #[must_use]
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn contains(self, pos: f64) -> bool {
        pos >= self.start && pos <= self.end
    }
}

/// Position interval a single dot may currently occupy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DotPosRange {
    pub min: f64,
    pub max: f64,
}

impl DotPosRange {
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

/// Per-dot value bounds layered on top of the slider range.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DotOption {
    #[serde(default)]
    pub min: Option<SliderValue>,
    #[serde(default)]
    pub max: Option<SliderValue>,
}

impl DotOption {
    #[must_use]
    pub fn with_min(mut self, min: impl Into<SliderValue>) -> Self {
        self.min = Some(min.into());
        self
    }

    #[must_use]
    pub fn with_max(mut self, max: impl Into<SliderValue>) -> Self {
        self.max = Some(max.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DotOptions {
    /// Same bounds for every dot.
    Shared(DotOption),
    /// Bounds by dot index; dots past the end are unconstrained.
    PerDot(Vec<DotOption>),
}

impl DotOptions {
    #[must_use]
    pub fn for_dot(&self, index: usize) -> Option<&DotOption> {
        match self {
            Self::Shared(option) => Some(option),
            Self::PerDot(options) => options.get(index),
        }
    }
}

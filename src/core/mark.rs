use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::SliderValue;

/// Opaque style declarations forwarded to the UI layer untouched.
pub type MarkStyle = IndexMap<String, String>;

/// Resolved tick mark exposed in the read model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mark {
    pub position: f64,
    pub value: SliderValue,
    pub label: String,
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<MarkStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_style: Option<MarkStyle>,
}

/// Per-mark presentation overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarkOverride {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub style: Option<MarkStyle>,
    #[serde(default)]
    pub active_style: Option<MarkStyle>,
}

impl MarkOverride {
    #[must_use]
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: MarkStyle) -> Self {
        self.style = Some(style);
        self
    }

    #[must_use]
    pub fn with_active_style(mut self, style: MarkStyle) -> Self {
        self.active_style = Some(style);
        self
    }
}

/// Entry of the mapping form: a bare label or a full override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MarkEntry {
    Label(String),
    Override(MarkOverride),
}

impl MarkEntry {
    #[must_use]
    pub fn into_override(self) -> MarkOverride {
        match self {
            Self::Label(label) => MarkOverride::labeled(label),
            Self::Override(mark) => mark,
        }
    }
}

/// Serializable mark definitions.
///
/// The generator form is a closure and lives on the engine instead
/// (`SliderEngine::set_mark_generator`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarksOption {
    #[default]
    Disabled,
    /// One mark per achievable step value.
    All,
    /// Marks at the listed values.
    Values(Vec<SliderValue>),
    /// Marks keyed by stringified value.
    Labeled(IndexMap<String, MarkEntry>),
}

impl MarksOption {
    #[must_use]
    pub fn values<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<SliderValue>,
    {
        Self::Values(values.into_iter().map(Into::into).collect())
    }

    #[must_use]
    pub fn labeled<I, K, E>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, E)>,
        K: Into<String>,
        E: Into<MarkEntry>,
    {
        Self::Labeled(
            entries
                .into_iter()
                .map(|(key, entry)| (key.into(), entry.into()))
                .collect(),
        )
    }
}

impl From<&str> for MarkEntry {
    fn from(label: &str) -> Self {
        Self::Label(label.to_owned())
    }
}

impl From<String> for MarkEntry {
    fn from(label: String) -> Self {
        Self::Label(label)
    }
}

impl From<MarkOverride> for MarkEntry {
    fn from(mark: MarkOverride) -> Self {
        Self::Override(mark)
    }
}

use rust_decimal::Decimal;

use crate::core::{Mark, MarkOverride, MarksOption, SliderValue, ValueScale};

use super::{MarkGeneratorFn, SliderEngine};

impl SliderEngine {
    /// Installs the generator form of marks, replacing `config.marks`.
    pub fn set_mark_generator(&mut self, generator: MarkGeneratorFn) {
        self.mark_generator = Some(generator);
        self.refresh_derived();
    }

    /// Returns to the marks described by `config.marks`.
    pub fn clear_mark_generator(&mut self) {
        self.mark_generator = None;
        self.refresh_derived();
    }

    pub(super) fn build_mark_list(&self) -> Vec<Mark> {
        if let Some(generator) = &self.mark_generator {
            return self
                .achievable_values()
                .into_iter()
                .filter_map(|value| {
                    let mark = generator(&value)?;
                    Some(self.mark_for(value, Some(mark)))
                })
                .collect();
        }

        match &self.config.marks {
            MarksOption::Disabled => Vec::new(),
            MarksOption::All => self
                .achievable_values()
                .into_iter()
                .map(|value| self.mark_for(value, None))
                .collect(),
            MarksOption::Values(values) => values
                .iter()
                .map(|value| self.mark_for(value.clone(), None))
                .collect(),
            MarksOption::Labeled(entries) => {
                let mut numeric: Vec<(Decimal, &String)> = Vec::new();
                let mut other: Vec<&String> = Vec::new();
                for key in entries.keys() {
                    match SliderValue::text(key.as_str()).as_decimal() {
                        Some(number) => numeric.push((number, key)),
                        None => other.push(key),
                    }
                }
                // Stable: equal numeric keys keep insertion order.
                numeric.sort_by_key(|(number, _)| *number);

                numeric
                    .into_iter()
                    .map(|(number, key)| (Some(number), key))
                    .chain(other.into_iter().map(|key| (None, key)))
                    .filter_map(|(number, key)| {
                        let entry = entries.get(key)?.clone();
                        let value = self.mark_key_value(key, number);
                        Some(self.mark_for(value, Some(entry.into_override())))
                    })
                    .collect()
            }
        }
    }

    /// Resolves a mapping key to the value it stands for: the number in
    /// interval mode, the dataset entry displayed as `key` in dataset mode.
    fn mark_key_value(&self, key: &str, number: Option<Decimal>) -> SliderValue {
        match &self.scale {
            ValueScale::Interval(_) => {
                number.map_or_else(|| SliderValue::text(key), SliderValue::Number)
            }
            ValueScale::Dataset(scale) => scale
                .data()
                .iter()
                .find(|value| value.to_string() == key)
                .cloned()
                .unwrap_or_else(|| SliderValue::text(key)),
        }
    }

    fn achievable_values(&self) -> Vec<SliderValue> {
        self.scale.values(self.behavior.total)
    }

    fn mark_for(&self, value: SliderValue, mark: Option<MarkOverride>) -> Mark {
        let position = self.parse_value(&value);
        let mark = mark.unwrap_or_default();
        Mark {
            position,
            label: mark.label.unwrap_or_else(|| value.to_string()),
            value,
            active: self.is_active_by_pos(position),
            style: mark.style,
            active_style: mark.active_style,
        }
    }
}

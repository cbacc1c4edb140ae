use crate::core::primitives::{POSITION_MAX, POSITION_MIN};
use crate::error::{SliderError, SliderResult};

use super::{SLIDER_SNAPSHOT_VERSION, SliderEngine, SliderSnapshot};

impl SliderEngine {
    #[must_use]
    pub fn snapshot(&self) -> SliderSnapshot {
        let interaction = self.model.interaction;
        SliderSnapshot {
            version: SLIDER_SNAPSHOT_VERSION,
            total: self.behavior.total,
            dots_value: self.model.dots_value.clone(),
            dots_pos: self.model.dots_pos.clone(),
            dots_index: self.model.dots_index.clone(),
            dot_pos_ranges: self.model.dot_pos_ranges.clone(),
            process: self.model.process.clone(),
            marks: self.model.marks.clone(),
            dragging: interaction.has_drag(),
            focused: interaction.has_focus(),
        }
    }

    pub fn snapshot_json_pretty(&self) -> SliderResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| SliderError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}

impl SliderSnapshot {
    /// Parses a stored snapshot and rejects ones no engine could have produced.
    pub fn from_json_str(input: &str) -> SliderResult<Self> {
        let snapshot: Self = serde_json::from_str(input)
            .map_err(|e| SliderError::InvalidData(format!("failed to parse snapshot: {e}")))?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Checks the layout version, per-dot vector parity and that every dot
    /// sits on the track.
    pub fn validate(&self) -> SliderResult<()> {
        if self.version != SLIDER_SNAPSHOT_VERSION {
            return Err(SliderError::InvalidData(format!(
                "unsupported snapshot version: {}",
                self.version
            )));
        }

        let dots = self.dots_pos.len();
        let lengths = [
            ("dots_value", self.dots_value.len()),
            ("dots_index", self.dots_index.len()),
            ("dot_pos_ranges", self.dot_pos_ranges.len()),
        ];
        if let Some((field, len)) = lengths.into_iter().find(|(_, len)| *len != dots) {
            return Err(SliderError::InvalidData(format!(
                "snapshot {field} has {len} entries for {dots} dots"
            )));
        }

        if let Some(pos) = self
            .dots_pos
            .iter()
            .find(|pos| !(POSITION_MIN..=POSITION_MAX).contains(*pos))
        {
            return Err(SliderError::InvalidData(format!(
                "snapshot dot position {pos} is off the track"
            )));
        }
        Ok(())
    }
}

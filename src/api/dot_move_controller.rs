use smallvec::{SmallVec, smallvec};
use tracing::trace;

use crate::error::SliderErrorKind;

use super::SliderEngine;

/// Per-dot position deltas for one move.
type DotDeltas = SmallVec<[f64; 4]>;

impl SliderEngine {
    /// Moves dot `index` towards `pos`.
    ///
    /// The target is clamped to the dot's valid range first. Depending on the
    /// behavior, the move then shifts every dot rigidly (`fixed`), drags
    /// neighbors along while a min/max range is violated, or moves only the
    /// one dot.
    pub fn set_dot_pos(&mut self, pos: f64, index: usize) {
        let Some(&current) = self.model.dots_pos.get(index) else {
            self.errors.report(SliderErrorKind::Value);
            return;
        };
        if !pos.is_finite() {
            self.errors.report(SliderErrorKind::Value);
            return;
        }

        let pos = self.valid_pos(pos, index).pos;
        let change = pos - current;
        if change == 0.0 {
            return;
        }

        let deltas = if self.behavior.fixed {
            self.fixed_deltas(change, index)
        } else if self.behavior.limits_range() {
            self.limit_range_deltas(pos, change, index)
        } else {
            let mut deltas: DotDeltas = smallvec![0.0; self.model.dot_count()];
            deltas[index] = change;
            deltas
        };
        trace!(index, change, deltas = ?deltas.as_slice(), "move dot");

        let positions: Vec<f64> = self
            .model
            .dots_pos
            .iter()
            .zip(&deltas)
            .map(|(pos, delta)| pos + delta)
            .collect();
        self.set_dots_pos(&positions);
    }

    /// Shared delta for a rigid move.
    ///
    /// Any other dot that would leave its range shrinks the delta to the
    /// distance it can still travel, keeping the sign.
    fn fixed_deltas(&self, change: f64, index: usize) -> DotDeltas {
        let mut change = change;
        for (dot, &origin) in self.model.dots_pos.iter().enumerate() {
            if dot == index {
                continue;
            }
            let valid = self.valid_pos(origin + change, dot);
            if !valid.in_range {
                let sign = if change < 0.0 { -1.0 } else { 1.0 };
                change = (valid.pos - origin).abs().min(change.abs()) * sign;
            }
        }
        smallvec![change; self.model.dot_count()]
    }

    /// Deltas when a min/max range is configured.
    ///
    /// Starting at the moved dot, neighbors are pulled along (pushed ahead for
    /// `min_range`, dragged behind for `max_range`) for as long as the gap to
    /// the previously placed dot violates the range.
    fn limit_range_deltas(&self, pos: f64, change: f64, index: usize) -> DotDeltas {
        let positions = &self.model.dots_pos;
        let mut moved: SmallVec<[(usize, f64); 4]> = smallvec![(index, change)];
        let forward = change > 0.0;

        let limits = [
            (true, self.behavior.min_range_distance),
            (false, self.behavior.max_range_distance),
        ];
        for (is_min_range, limit) in limits {
            let Some(limit) = limit else {
                continue;
            };
            let step: isize = if is_min_range == forward { 1 } else { -1 };
            let violates = |a: f64, b: f64| {
                let gap = (a - b).abs();
                if is_min_range { gap < limit } else { gap > limit }
            };

            let mut cursor = index.checked_add_signed(step);
            let mut placed = pos;
            while let Some(dot) = cursor {
                let Some(&next) = positions.get(dot) else {
                    break;
                };
                if !violates(next, placed) {
                    break;
                }
                let last = self.valid_pos(next + change, dot).pos;
                moved.push((dot, last - next));
                placed = last;
                cursor = dot.checked_add_signed(step);
            }
        }

        (0..positions.len())
            .map(|dot| {
                moved
                    .iter()
                    .find(|(moved_dot, _)| *moved_dot == dot)
                    .map_or(0.0, |(_, delta)| *delta)
            })
            .collect()
    }
}

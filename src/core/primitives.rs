use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

pub const POSITION_MIN: f64 = 0.0;
pub const POSITION_MAX: f64 = 100.0;

#[must_use]
pub fn decimal_to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

#[must_use]
pub fn f64_to_decimal(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    Decimal::from_f64(value)
}

#[must_use]
pub fn clamp_position(pos: f64) -> f64 {
    pos.clamp(POSITION_MIN, POSITION_MAX)
}

/// Percentage distance between two adjacent steps, `None` when there are no steps.
#[must_use]
pub fn step_gap(total: u64) -> Option<Decimal> {
    if total == 0 {
        return None;
    }
    Decimal::ONE_HUNDRED.checked_div(Decimal::from(total))
}

/// Maps a (possibly fractional) step offset onto the track.
///
/// Without steps every position collapses to 0.
#[must_use]
pub fn step_to_position(step: Decimal, gap: Option<Decimal>) -> f64 {
    let Some(gap) = gap else {
        return POSITION_MIN;
    };
    step.checked_mul(gap)
        .map(decimal_to_f64)
        .map_or(POSITION_MIN, clamp_position)
}

/// Maps a track position onto the nearest step index in `[0, total]`.
///
/// Halves round up, matching pointer snapping on the track.
#[must_use]
pub fn position_to_step(pos: f64, gap: Option<Decimal>, total: u64) -> u64 {
    let (Some(gap), Some(pos)) = (gap, f64_to_decimal(clamp_position(pos))) else {
        return 0;
    };
    let Some(raw) = pos.checked_div(gap) else {
        return 0;
    };
    let rounded = raw.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_sign_negative() {
        return 0;
    }
    rounded.to_u64().map_or(total, |index| index.min(total))
}

/// Converts a value-unit range into a position distance.
///
/// Absent or zero ranges, and an empty span, mean "unconstrained" (100).
#[must_use]
pub fn range_to_position_distance(range: Option<Decimal>, span: Decimal) -> f64 {
    let Some(range) = range.filter(|range| !range.is_zero()) else {
        return POSITION_MAX;
    };
    range
        .checked_div(span)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .map_or(POSITION_MAX, decimal_to_f64)
}

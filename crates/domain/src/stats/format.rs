//! Display formatting for stat values.

/// Render an hour amount rounded to `decimals` places with an `h` suffix.
///
/// Halfway values round up (`2.25` → `2.3h`, `0.5` → `1h` at zero places).
/// Negative and non-finite amounts are shown as zero, so the result never
/// reads `-0.0h` or `NaNh`.
#[must_use]
pub fn format_hours(hours: f64, decimals: usize) -> String {
    format!("{:.decimals$}h", round_half_up(displayable(hours), decimals))
}

/// Render `<count> <noun>`, choosing `singular` only when `count == 1`.
#[must_use]
pub fn pluralize(count: u32, singular: &str, plural: &str) -> String {
    let noun = if count == 1 { singular } else { plural };
    format!("{count} {noun}")
}

fn round_half_up(hours: f64, decimals: usize) -> f64 {
    let scale = 10f64.powi(i32::try_from(decimals).unwrap_or(i32::MAX));
    let rounded = (hours * scale).round() / scale;
    if rounded.is_finite() { rounded } else { hours }
}

fn displayable(hours: f64) -> f64 {
    if hours.is_finite() && hours > 0.0 {
        hours
    } else {
        0.0
    }
}

//! Progress bar derivation
//!
//! The label is derived state: whenever current or goal changes, it is
//! rewritten to "{current}/{goal}". Percentage math never divides by zero;
//! a goal of 0 counts as 0% rather than producing NaN or infinity.

use crate::domain::config::FlierConfig;

/// The label a progress bar should carry for the given values
pub fn auto_label(current: u32, goal: u32) -> String {
    format!("{}/{}", current, goal)
}

/// Fill percentage, clamped to 100. A zero goal yields 0.0.
pub fn percentage(current: u32, goal: u32) -> f64 {
    if goal == 0 {
        return 0.0;
    }
    (current as f64 / goal as f64 * 100.0).min(100.0)
}

/// Parse a user-typed amount; anything non-numeric coerces to 0
pub fn parse_amount(input: &str) -> u32 {
    input.trim().parse().unwrap_or(0)
}

/// Re-derive the label if it no longer matches current/goal
pub fn sync_label(config: FlierConfig) -> FlierConfig {
    let label = auto_label(config.progress.current, config.progress.goal);
    if config.progress.label == label {
        return config;
    }
    let mut synced = config;
    synced.progress.label = label;
    synced
}

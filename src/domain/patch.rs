//! Configuration patching
//!
//! Every edit produces a new `FlierConfig` from the previous value plus a
//! patch. The merge is shallow: a patch field replaces its whole top-level
//! branch, so callers changing one sub-field of `progress` or `dimensions`
//! must supply the complete branch.

use crate::domain::config::{DayBlock, Dimensions, FlierConfig, ProgressBar, RightPanel};
use crate::domain::migration;

/// A partial flyer configuration; `None` fields are left as they were.
#[derive(Debug, Clone, Default)]
pub struct ConfigPatch {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub header_color: Option<String>,
    pub days: Option<Vec<DayBlock>>,
    pub right_panel: Option<RightPanel>,
    pub progress: Option<ProgressBar>,
    pub dimensions: Option<Dimensions>,
}

/// Produce a new configuration with every present patch field replaced.
/// No validation happens here; out-of-range values surface visually only.
pub fn apply(current: &FlierConfig, patch: ConfigPatch) -> FlierConfig {
    FlierConfig {
        title: patch.title.unwrap_or_else(|| current.title.clone()),
        subtitle: patch.subtitle.unwrap_or_else(|| current.subtitle.clone()),
        header_color: patch
            .header_color
            .unwrap_or_else(|| current.header_color.clone()),
        days: patch.days.unwrap_or_else(|| current.days.clone()),
        right_panel: patch
            .right_panel
            .unwrap_or_else(|| current.right_panel.clone()),
        progress: patch.progress.unwrap_or_else(|| current.progress.clone()),
        dimensions: patch
            .dimensions
            .unwrap_or_else(|| current.dimensions.clone()),
    }
}

/// The built-in default configuration, re-migrated
pub fn default_config() -> FlierConfig {
    migration::migrate(FlierConfig::built_in_default())
}

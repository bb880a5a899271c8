//! Hashtag format migration
//!
//! Older flyer documents stored hashtags as bare strings; the current form
//! carries a per-entry color. `migrate` upgrades a configuration in one pass
//! and is idempotent, so it runs on every load and after every update.

use crate::domain::config::{FlierConfig, Hashtag};

/// Color assigned to even-indexed legacy hashtags
pub const EVEN_HASHTAG_COLOR: &str = "#FFFFFF";
/// Color assigned to odd-indexed legacy hashtags
pub const ODD_HASHTAG_COLOR: &str = "#FFC107";

/// Whether any hashtag is still in the legacy bare-string form
pub fn needs_migration(config: &FlierConfig) -> bool {
    config.right_panel.hashtags.iter().any(Hashtag::is_plain)
}

/// Upgrade legacy hashtags to the styled form.
///
/// Colors are a function of position only: even index is white, odd index is
/// amber. Entries already in the styled form pass through unchanged, so a
/// second application is a no-op.
pub fn migrate(config: FlierConfig) -> FlierConfig {
    if !needs_migration(&config) {
        return config;
    }

    let mut migrated = config;
    migrated.right_panel.hashtags = migrated
        .right_panel
        .hashtags
        .into_iter()
        .enumerate()
        .map(|(index, hashtag)| match hashtag {
            Hashtag::Plain(text) => Hashtag::styled(text, positional_color(index)),
            styled => styled,
        })
        .collect();
    migrated
}

fn positional_color(index: usize) -> &'static str {
    if index % 2 == 0 {
        EVEN_HASHTAG_COLOR
    } else {
        ODD_HASHTAG_COLOR
    }
}

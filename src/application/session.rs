//! Editing session
//!
//! Owns the live configuration for one editing pass and enforces the update
//! pipeline: apply patch, migrate hashtags, re-derive the progress label.
//! Week derivation is never part of construction; it only happens when the
//! user explicitly selects a week, so a freshly loaded document is never
//! clobbered before it has been touched.

use crate::domain::patch::{self, ConfigPatch};
use crate::domain::{migration, progress, week, FlierConfig};
use chrono::NaiveDate;

pub struct EditorSession {
    config: FlierConfig,
}

impl EditorSession {
    /// Start a session from a loaded configuration. The value is migrated
    /// but day names and dates are left exactly as loaded.
    pub fn new(config: FlierConfig) -> Self {
        EditorSession {
            config: migration::migrate(config),
        }
    }

    pub fn config(&self) -> &FlierConfig {
        &self.config
    }

    /// Apply a patch and run the normalization pipeline.
    /// Returns whether the configuration actually changed.
    pub fn update(&mut self, patch: ConfigPatch) -> bool {
        let next = progress::sync_label(migration::migrate(patch::apply(&self.config, patch)));
        if next == self.config {
            return false;
        }
        self.config = next;
        true
    }

    /// Select the week containing `date`: snap to its Sunday and rewrite
    /// day names and dates, keeping all other day fields.
    /// Returns the snapped start-of-week date.
    pub fn select_week(&mut self, date: NaiveDate) -> NaiveDate {
        let start = week::snap_to_sunday(date);
        let days = week::derive_week(start, &self.config.days);
        self.update(ConfigPatch {
            days: Some(days),
            ..Default::default()
        });
        start
    }

    /// Restore the built-in default configuration
    pub fn reset(&mut self) {
        self.config = patch::default_config();
    }
}

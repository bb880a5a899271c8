//! Scalar field editing use case
//!
//! String-keyed get/set over the flyer's simple fields, mirroring the flat
//! inputs of the editing surface. Branch fields (progress, dimensions,
//! right panel) are replaced wholesale underneath.

use crate::application::session::EditorSession;
use crate::domain::{progress, ConfigPatch};
use crate::error::{FlierError, Result};
use crate::infrastructure::{DocumentRepository, FileSystemRepository};
use regex::Regex;
use std::sync::OnceLock;

fn hex_color_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^#[0-9a-fA-F]{6}$").unwrap())
}

/// Validate a #RRGGBB color token
pub fn validate_hex_color(value: &str) -> Result<()> {
    if hex_color_regex().is_match(value) {
        Ok(())
    } else {
        Err(FlierError::InvalidColor(value.to_string()))
    }
}

/// Service for reading and writing scalar flyer fields
pub struct FieldService {
    repository: FileSystemRepository,
}

impl FieldService {
    pub fn new(repository: FileSystemRepository) -> Self {
        FieldService { repository }
    }

    /// Get a single field value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load()?;

        match key {
            "title" => Ok(config.title),
            "subtitle" => Ok(config.subtitle),
            "header-color" => Ok(config.header_color),
            "background-image" => Ok(config.right_panel.background_image),
            "progress-color" => Ok(config.progress.color),
            "progress-current" => Ok(config.progress.current.to_string()),
            "progress-goal" => Ok(config.progress.goal.to_string()),
            "progress-label" => Ok(config.progress.label),
            "width" => Ok(config.dimensions.width),
            "height" => Ok(config.dimensions.height),
            _ => Err(FlierError::Config(format!(
                "Unknown field: '{}'. Valid fields are: title, subtitle, header-color, \
                background-image, progress-color, progress-current, progress-goal, \
                progress-label, width, height",
                key
            ))),
        }
    }

    /// Set a single field value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut session = EditorSession::new(self.repository.load()?);
        let current = session.config();

        let patch = match key {
            "title" => ConfigPatch {
                title: Some(value.to_string()),
                ..Default::default()
            },
            "subtitle" => ConfigPatch {
                subtitle: Some(value.to_string()),
                ..Default::default()
            },
            "header-color" => {
                validate_hex_color(value)?;
                ConfigPatch {
                    header_color: Some(value.to_string()),
                    ..Default::default()
                }
            }
            "background-image" => {
                let mut panel = current.right_panel.clone();
                panel.background_image = value.trim().to_string();
                ConfigPatch {
                    right_panel: Some(panel),
                    ..Default::default()
                }
            }
            "progress-color" => {
                validate_hex_color(value)?;
                let mut bar = current.progress.clone();
                bar.color = value.to_string();
                ConfigPatch {
                    progress: Some(bar),
                    ..Default::default()
                }
            }
            "width" | "height" => {
                let mut dimensions = current.dimensions.clone();
                if key == "width" {
                    dimensions.width = value.to_string();
                } else {
                    dimensions.height = value.to_string();
                }
                ConfigPatch {
                    dimensions: Some(dimensions),
                    ..Default::default()
                }
            }
            "progress-label" => {
                return Err(FlierError::Config(
                    "Cannot set 'progress-label' directly; it is derived from \
                    progress-current and progress-goal"
                        .to_string(),
                ));
            }
            "progress-current" | "progress-goal" => {
                return Err(FlierError::Config(format!(
                    "Cannot set '{}' here; use 'flier progress --current N --goal N'",
                    key
                )));
            }
            _ => {
                return Err(FlierError::Config(format!(
                    "Unknown field: '{}'. Valid fields are: title, subtitle, header-color, \
                    background-image, progress-color, width, height",
                    key
                )));
            }
        };

        session.update(patch);
        self.repository.save(session.config())
    }

    /// Update progress values. Inputs are raw user text; non-numeric input
    /// coerces to 0. The label is re-derived as part of the update.
    pub fn set_progress(&self, current: Option<&str>, goal: Option<&str>) -> Result<String> {
        let mut session = EditorSession::new(self.repository.load()?);

        let mut bar = session.config().progress.clone();
        if let Some(raw) = current {
            bar.current = progress::parse_amount(raw);
        }
        if let Some(raw) = goal {
            bar.goal = progress::parse_amount(raw);
        }

        session.update(ConfigPatch {
            progress: Some(bar),
            ..Default::default()
        });
        self.repository.save(session.config())?;
        Ok(session.config().progress.label.clone())
    }
}

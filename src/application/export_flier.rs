//! Flyer export use case
//!
//! Rendering and artifact delivery are collaborator seams: the service feeds
//! the full configuration plus chrome-only options to a renderer, then hands
//! the artifact to an exporter. A failed export must leave no partial
//! artifact behind; the exporter owns that cleanup.

use crate::domain::FlierConfig;
use crate::error::Result;
use crate::infrastructure::{DocumentRepository, FileSystemRepository};
use std::path::Path;

/// Chrome-only rendering switches; they never change flyer data
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Strip editing chrome (preview border) from the artifact
    pub for_export: bool,
    /// Render with the dark theme
    pub dark_mode: bool,
    /// Pixel-density multiplier for the artifact
    pub scale: u8,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            for_export: false,
            dark_mode: false,
            scale: 2,
        }
    }
}

/// Turns a flyer configuration into a displayable artifact
pub trait FlierRenderer {
    fn render(&self, config: &FlierConfig, options: &RenderOptions) -> Result<String>;
}

/// Delivers a rendered artifact to its destination
pub trait ArtifactExporter {
    fn export(&self, artifact: &str, destination: &Path) -> Result<()>;
}

/// Service orchestrating render + export of the current flyer
pub struct ExportService<R, E> {
    repository: FileSystemRepository,
    renderer: R,
    exporter: E,
}

impl<R: FlierRenderer, E: ArtifactExporter> ExportService<R, E> {
    pub fn new(repository: FileSystemRepository, renderer: R, exporter: E) -> Self {
        ExportService {
            repository,
            renderer,
            exporter,
        }
    }

    /// Render the current flyer and export it to `destination`.
    /// The document itself is read-only here; export never edits state.
    pub fn execute(&self, destination: &Path, dark_mode: bool) -> Result<()> {
        let config = self.repository.load()?;
        let options = RenderOptions {
            for_export: true,
            dark_mode,
            ..Default::default()
        };
        let artifact = self.renderer.render(&config, &options)?;
        self.exporter.export(&artifact, destination)
    }
}

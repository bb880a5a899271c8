//! Flyer document persistence
//!
//! The flyer being edited lives in a flier.toml document. Loading always
//! funnels the value through the hashtag migration before anyone reads it;
//! saving writes the migrated form only.

use crate::domain::{migration, FlierConfig, DAY_COUNT};
use crate::error::{FlierError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the flyer document file
pub const DOCUMENT_NAME: &str = "flier.toml";

/// Abstract store for the flyer document
pub trait DocumentRepository {
    /// Get the directory holding the document
    fn root(&self) -> &Path;

    /// Load and migrate the flyer configuration
    fn load(&self) -> Result<FlierConfig>;

    /// Save the flyer configuration (migrated before writing)
    fn save(&self, config: &FlierConfig) -> Result<()>;

    /// Check whether a flyer document exists here
    fn is_initialized(&self) -> bool;
}

/// File system implementation of DocumentRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository rooted at the given directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover the flyer root by walking up from the current directory.
    /// FLIER_ROOT, when set, takes precedence over discovery.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("FLIER_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_document(&path) {
                return Ok(FileSystemRepository::new(path));
            }
            return Err(FlierError::Config(format!(
                "FLIER_ROOT is set to '{}' but no {} found there. \
                Run 'flier init' in that directory or unset FLIER_ROOT.",
                path.display(),
                DOCUMENT_NAME
            )));
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the flyer root by walking up from a specific directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_document(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(FlierError::NotFlierDirectory(start.to_path_buf()));
                }
            }
        }
    }

    /// Path of the document file within the root
    pub fn document_path(&self) -> PathBuf {
        self.root.join(DOCUMENT_NAME)
    }

    fn has_document(path: &Path) -> bool {
        path.join(DOCUMENT_NAME).is_file()
    }
}

impl DocumentRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load(&self) -> Result<FlierConfig> {
        let contents = fs::read_to_string(self.document_path()).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                FlierError::NotFlierDirectory(self.root.clone())
            } else {
                FlierError::Io(e)
            }
        })?;

        let config: FlierConfig = toml::from_str(&contents)?;
        if config.days.len() != DAY_COUNT {
            return Err(FlierError::Config(format!(
                "Malformed {}: expected {} day blocks, found {}. \
                Restore the missing [[days]] entries or run 'flier init' in a \
                fresh directory.",
                DOCUMENT_NAME,
                DAY_COUNT,
                config.days.len()
            )));
        }
        Ok(migration::migrate(config))
    }

    fn save(&self, config: &FlierConfig) -> Result<()> {
        // A document with legacy hashtags mixes strings and tables in one
        // array, which TOML cannot serialize; migrate before writing.
        let migrated = migration::migrate(config.clone());
        let contents = toml::to_string_pretty(&migrated)?;
        fs::write(self.document_path(), contents)?;
        Ok(())
    }

    fn is_initialized(&self) -> bool {
        Self::has_document(&self.root)
    }
}

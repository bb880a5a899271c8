//! Initialize flyer use case

use crate::domain::patch::default_config;
use crate::error::{FlierError, Result};
use crate::infrastructure::{DocumentRepository, FileSystemRepository, DOCUMENT_NAME};
use std::fs;
use std::path::Path;

/// Create a new flyer document at the specified path.
pub fn init(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());
    if repo.is_initialized() {
        return Err(FlierError::Config(format!(
            "Already a flier directory: {} exists in {}",
            DOCUMENT_NAME,
            path.display()
        )));
    }

    repo.save(&default_config())?;

    println!("Initialized flyer at {}", path.display());
    println!("Edit it with 'flier set', 'flier event', 'flier week', ...");

    Ok(())
}

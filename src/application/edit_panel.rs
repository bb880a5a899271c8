//! Right-panel editing use case: hashtags and quotes

use crate::application::session::EditorSession;
use crate::domain::{ConfigPatch, Hashtag, RightPanel};
use crate::error::{FlierError, Result};
use crate::infrastructure::{DocumentRepository, FileSystemRepository};

/// Service for editing the right-hand hero panel
pub struct PanelService {
    repository: FileSystemRepository,
}

impl PanelService {
    pub fn new(repository: FileSystemRepository) -> Self {
        PanelService { repository }
    }

    /// Append a hashtag. The entry goes in as legacy text and picks up its
    /// positional color from the migration pass inside the update.
    pub fn add_hashtag(&self, text: &str) -> Result<Hashtag> {
        let panel = self.edit_panel(|panel| {
            panel.hashtags.push(Hashtag::Plain(text.to_string()));
            Ok(())
        })?;
        panel
            .hashtags
            .last()
            .cloned()
            .ok_or_else(|| FlierError::Config("Hashtag list empty after add".to_string()))
    }

    /// Remove the hashtag at a 1-based position
    pub fn remove_hashtag(&self, position: usize) -> Result<()> {
        self.edit_panel(|panel| {
            if position == 0 || position > panel.hashtags.len() {
                return Err(FlierError::HashtagNotFound(position));
            }
            panel.hashtags.remove(position - 1);
            Ok(())
        })?;
        Ok(())
    }

    /// Append an inspirational quote
    pub fn add_quote(&self, text: &str) -> Result<()> {
        self.edit_panel(|panel| {
            panel.inspirational_quotes.push(text.to_string());
            Ok(())
        })?;
        Ok(())
    }

    /// Remove the quote at a 1-based position
    pub fn remove_quote(&self, position: usize) -> Result<()> {
        self.edit_panel(|panel| {
            if position == 0 || position > panel.inspirational_quotes.len() {
                return Err(FlierError::QuoteNotFound(position));
            }
            panel.inspirational_quotes.remove(position - 1);
            Ok(())
        })?;
        Ok(())
    }

    fn edit_panel<F>(&self, edit: F) -> Result<RightPanel>
    where
        F: FnOnce(&mut RightPanel) -> Result<()>,
    {
        let mut session = EditorSession::new(self.repository.load()?);

        let mut panel = session.config().right_panel.clone();
        edit(&mut panel)?;

        session.update(ConfigPatch {
            right_panel: Some(panel),
            ..Default::default()
        });
        self.repository.save(session.config())?;
        Ok(session.config().right_panel.clone())
    }
}

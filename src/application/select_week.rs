//! Week selection use case
//!
//! Parses a user-supplied date, snaps it to the Sunday starting that week
//! and rewrites day names/dates across the flyer. An unparseable date fails
//! before anything is loaded or written, so the document keeps its prior
//! week untouched.

use crate::application::session::EditorSession;
use crate::domain::week;
use crate::error::Result;
use crate::infrastructure::{DocumentRepository, FileSystemRepository};
use chrono::NaiveDate;

/// Service for selecting the displayed week
pub struct WeekService {
    repository: FileSystemRepository,
}

impl WeekService {
    pub fn new(repository: FileSystemRepository) -> Self {
        WeekService { repository }
    }

    /// Select the week containing the given YYYY-MM-DD date.
    /// Returns the snapped start-of-week Sunday.
    pub fn select(&self, input: &str) -> Result<NaiveDate> {
        let date = week::parse_week_start(input)?;

        let mut session = EditorSession::new(self.repository.load()?);
        let start = session.select_week(date);
        self.repository.save(session.config())?;
        Ok(start)
    }
}

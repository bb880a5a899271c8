//! Day and event editing use case

use crate::application::edit_fields::validate_hex_color;
use crate::application::session::EditorSession;
use crate::domain::{ConfigPatch, DayEvent, FlierConfig, GuestShape, SpecialGuest};
use crate::error::{FlierError, Result};
use crate::infrastructure::{DocumentRepository, FileSystemRepository};

/// Resolve a user-supplied day reference to an index into `days`.
/// Accepts a 1-based position or a day name (case-insensitive).
pub fn resolve_day(config: &FlierConfig, reference: &str) -> Result<usize> {
    let trimmed = reference.trim();

    if let Ok(position) = trimmed.parse::<usize>() {
        if (1..=config.days.len()).contains(&position) {
            return Ok(position - 1);
        }
        return Err(FlierError::UnknownDay(reference.to_string()));
    }

    config
        .days
        .iter()
        .position(|block| block.day.eq_ignore_ascii_case(trimmed))
        .ok_or_else(|| FlierError::UnknownDay(reference.to_string()))
}

/// Service for editing day blocks: events, colors, guest annotations
pub struct DayService {
    repository: FileSystemRepository,
}

impl DayService {
    pub fn new(repository: FileSystemRepository) -> Self {
        DayService { repository }
    }

    /// Append an event to a day. Returns the day name for reporting.
    pub fn add_event(
        &self,
        day_ref: &str,
        title: &str,
        time: &str,
        is_optional: bool,
    ) -> Result<String> {
        self.edit_day(day_ref, |block| {
            block.events.push(DayEvent {
                title: title.to_string(),
                time: time.to_string(),
                is_optional,
            });
            Ok(())
        })
    }

    /// Remove the event at a 1-based position within a day
    pub fn remove_event(&self, day_ref: &str, position: usize) -> Result<String> {
        self.edit_day(day_ref, |block| {
            if position == 0 || position > block.events.len() {
                return Err(FlierError::EventNotFound {
                    day: block.day.clone(),
                    index: position,
                });
            }
            block.events.remove(position - 1);
            Ok(())
        })
    }

    /// Mark or unmark an event as optional
    pub fn set_event_optional(
        &self,
        day_ref: &str,
        position: usize,
        is_optional: bool,
    ) -> Result<String> {
        self.edit_day(day_ref, |block| {
            if position == 0 || position > block.events.len() {
                return Err(FlierError::EventNotFound {
                    day: block.day.clone(),
                    index: position,
                });
            }
            block.events[position - 1].is_optional = is_optional;
            Ok(())
        })
    }

    /// Set or clear a per-day header color override
    pub fn set_color(&self, day_ref: &str, color: Option<&str>) -> Result<String> {
        if let Some(value) = color {
            validate_hex_color(value)?;
        }
        self.edit_day(day_ref, |block| {
            block.color = color.map(str::to_string);
            Ok(())
        })
    }

    /// Enable a special-guest annotation on a day
    pub fn set_guest(
        &self,
        day_ref: &str,
        text: &str,
        shape: GuestShape,
        color: Option<&str>,
    ) -> Result<String> {
        if let Some(value) = color {
            validate_hex_color(value)?;
        }
        self.edit_day(day_ref, |block| {
            let guest_color = color
                .map(str::to_string)
                .unwrap_or_else(|| block.special_guest.color.clone());
            block.special_guest = SpecialGuest {
                enabled: true,
                text: text.to_string(),
                shape,
                color: guest_color,
            };
            Ok(())
        })
    }

    /// Disable a day's special-guest annotation
    pub fn clear_guest(&self, day_ref: &str) -> Result<String> {
        self.edit_day(day_ref, |block| {
            block.special_guest.enabled = false;
            block.special_guest.text.clear();
            Ok(())
        })
    }

    fn edit_day<F>(&self, day_ref: &str, edit: F) -> Result<String>
    where
        F: FnOnce(&mut crate::domain::DayBlock) -> Result<()>,
    {
        let mut session = EditorSession::new(self.repository.load()?);

        let index = resolve_day(session.config(), day_ref)?;
        let mut days = session.config().days.clone();
        edit(&mut days[index])?;
        let day_name = days[index].day.clone();

        session.update(ConfigPatch {
            days: Some(days),
            ..Default::default()
        });
        self.repository.save(session.config())?;
        Ok(day_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_day_by_name() {
        let config = FlierConfig::built_in_default();
        assert_eq!(resolve_day(&config, "MONDAY").unwrap(), 0);
        assert_eq!(resolve_day(&config, "sunday").unwrap(), 6);
        assert_eq!(resolve_day(&config, " Friday ").unwrap(), 4);
    }

    #[test]
    fn test_resolve_day_by_position() {
        let config = FlierConfig::built_in_default();
        assert_eq!(resolve_day(&config, "1").unwrap(), 0);
        assert_eq!(resolve_day(&config, "7").unwrap(), 6);
    }

    #[test]
    fn test_resolve_day_rejects_bad_references() {
        let config = FlierConfig::built_in_default();
        assert!(matches!(
            resolve_day(&config, "0"),
            Err(FlierError::UnknownDay(_))
        ));
        assert!(matches!(
            resolve_day(&config, "8"),
            Err(FlierError::UnknownDay(_))
        ));
        assert!(matches!(
            resolve_day(&config, "SOMEDAY"),
            Err(FlierError::UnknownDay(_))
        ));
    }
}

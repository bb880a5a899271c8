//! Error types for flier

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the flier application
#[derive(Debug, Error)]
pub enum FlierError {
    #[error("Not a flier directory: {0}")]
    NotFlierDirectory(PathBuf),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Unknown day: {0}")]
    UnknownDay(String),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("No event {index} on {day}")]
    EventNotFound { day: String, index: usize },

    #[error("No hashtag at position {0}")]
    HashtagNotFound(usize),

    #[error("No quote at position {0}")]
    QuoteNotFound(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl FlierError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            FlierError::NotFlierDirectory(_) => 2,
            FlierError::InvalidDate(_) => 3,
            FlierError::UnknownDay(_) => 4,
            FlierError::InvalidColor(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            FlierError::NotFlierDirectory(path) => {
                format!(
                    "Not a flier directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'flier init' in this directory to create a new flyer\n\
                    • Navigate to a directory containing flier.toml\n\
                    • Set FLIER_ROOT environment variable to your flyer path",
                    path.display()
                )
            }
            FlierError::InvalidDate(date_str) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Expected format: YYYY-MM-DD\n\
                    Example: flier week 2024-03-03\n\n\
                    Any day of the week works; the date is snapped back to the\n\
                    Sunday that starts that week.",
                    date_str
                )
            }
            FlierError::UnknownDay(day) => {
                format!(
                    "Unknown day: '{}'\n\n\
                    Suggestions:\n\
                    • Use a weekday name as shown in 'flier show' (case-insensitive)\n\
                    • Or use a position from 1 (first day) to 7 (last day)",
                    day
                )
            }
            FlierError::InvalidColor(color) => {
                format!(
                    "Invalid color: '{}'\n\n\
                    Expected a hex color like #1e293b or #FFC107.",
                    color
                )
            }
            FlierError::Config(msg) => {
                if msg.contains("Unknown field") {
                    format!(
                        "{}\n\n\
                        Valid fields: title, subtitle, header-color, background-image,\n\
                        progress-color, width, height\n\
                        Example: flier set title \"WEEKLY SCHEDULE!\"",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using FlierError
pub type Result<T> = std::result::Result<T, FlierError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_flier_directory_suggestion() {
        let err = FlierError::NotFlierDirectory(PathBuf::from("/tmp/test"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("flier init"));
        assert!(msg.contains("FLIER_ROOT"));
        assert!(msg.contains("Suggestions"));
    }

    #[test]
    fn test_invalid_date_examples() {
        let err = FlierError::InvalidDate("baddate".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("YYYY-MM-DD"));
        assert!(msg.contains("flier week 2024-03-03"));
        assert!(msg.contains("Sunday"));
    }

    #[test]
    fn test_unknown_day_suggestions() {
        let err = FlierError::UnknownDay("someday".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("flier show"));
        assert!(msg.contains("1 (first day)"));
    }

    #[test]
    fn test_config_unknown_field_suggestions() {
        let err = FlierError::Config("Unknown field: 'font'".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("Valid fields"));
        assert!(msg.contains("flier set title"));
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = FlierError::Export("renderer failed".to_string());
        let msg = err.display_with_suggestions();
        assert_eq!(msg, "Export error: renderer failed");
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            FlierError::NotFlierDirectory(PathBuf::from(".")).exit_code(),
            2
        );
        assert_eq!(FlierError::InvalidDate("x".to_string()).exit_code(), 3);
        assert_eq!(FlierError::UnknownDay("x".to_string()).exit_code(), 4);
        assert_eq!(FlierError::InvalidColor("x".to_string()).exit_code(), 5);
        assert_eq!(FlierError::Config("x".to_string()).exit_code(), 1);
    }
}

//! flier - Weekly calendar flyer editor
//!
//! A command-line editor for a one-week event flyer. The flyer lives in a
//! flier.toml document; subcommands edit its structured fields, and an
//! export command renders the result to a standalone HTML page.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::FlierError;

//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "flier")]
#[command(about = "Weekly calendar flyer editor", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new flyer document
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Print the current flyer
    Show,

    /// Get a field value (title, subtitle, header-color, ...)
    Get { key: String },

    /// Set a field value
    Set { key: String, value: String },

    /// Select the displayed week by any date inside it (YYYY-MM-DD)
    Week { date: String },

    /// Edit a day block
    Day {
        #[command(subcommand)]
        command: DayCommands,
    },

    /// Edit events within a day
    Event {
        #[command(subcommand)]
        command: EventCommands,
    },

    /// Edit right-panel hashtags
    Hashtag {
        #[command(subcommand)]
        command: HashtagCommands,
    },

    /// Edit right-panel inspirational quotes
    Quote {
        #[command(subcommand)]
        command: QuoteCommands,
    },

    /// Edit a day's special-guest annotation
    Guest {
        #[command(subcommand)]
        command: GuestCommands,
    },

    /// Update progress values; the label follows automatically
    Progress {
        #[arg(long)]
        current: Option<String>,

        #[arg(long)]
        goal: Option<String>,
    },

    /// Restore the built-in default flyer
    Reset,

    /// Render the flyer and write it to an HTML file
    Export {
        /// Destination file
        #[arg(short, long, default_value = "flier.html")]
        output: PathBuf,

        /// Render with the dark theme
        #[arg(long)]
        dark: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum DayCommands {
    /// Override a day's header color, or clear the override
    Color {
        /// Day name or position 1-7
        day: String,

        /// Hex color like #1e293b; omit together with --clear
        color: Option<String>,

        /// Remove the override and fall back to the flyer header color
        #[arg(long)]
        clear: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum EventCommands {
    /// Add an event to a day
    Add {
        /// Day name or position 1-7
        day: String,

        #[arg(long)]
        title: String,

        /// Free-form time, e.g. "8:00PM" or "ALL DAY"
        #[arg(long, default_value = "")]
        time: String,

        /// Mark the event as optional
        #[arg(long)]
        optional: bool,
    },

    /// Remove an event by its position within the day (1-based)
    Remove { day: String, position: usize },

    /// Mark or unmark an event as optional
    Optional {
        day: String,
        position: usize,

        /// Unmark instead of mark
        #[arg(long)]
        off: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum HashtagCommands {
    /// Add a hashtag line; its color alternates by position
    Add { text: String },

    /// Remove a hashtag by position (1-based)
    Remove { position: usize },
}

#[derive(Subcommand, Debug)]
pub enum QuoteCommands {
    /// Add an inspirational quote
    Add { text: String },

    /// Remove a quote by position (1-based)
    Remove { position: usize },
}

#[derive(Subcommand, Debug)]
pub enum GuestCommands {
    /// Enable a special-guest annotation on a day
    Set {
        /// Day name or position 1-7
        day: String,

        #[arg(long)]
        text: String,

        /// Marker shape: circle, square or triangle
        #[arg(long, default_value = "circle")]
        shape: String,

        /// Hex color; keeps the day's previous guest color when omitted
        #[arg(long)]
        color: Option<String>,
    },

    /// Disable a day's special-guest annotation
    Clear { day: String },
}

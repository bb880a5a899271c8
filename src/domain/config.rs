//! Flyer configuration model
//!
//! A `FlierConfig` describes one week's flyer: title block, seven day blocks,
//! the right-hand panel (background image, hashtags, quotes) and a progress
//! bar. Values are replaced wholesale on every edit; nothing mutates a stored
//! configuration in place.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A flyer always covers exactly one week
pub const DAY_COUNT: usize = 7;

/// A scheduled item within a day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayEvent {
    pub title: String,
    /// Free-form time label, e.g. "8:00PM" or "ALL DAY"; may be empty
    pub time: String,
    #[serde(default)]
    pub is_optional: bool,
}

impl DayEvent {
    pub fn new(title: impl Into<String>, time: impl Into<String>) -> Self {
        DayEvent {
            title: title.into(),
            time: time.into(),
            is_optional: false,
        }
    }
}

/// Marker shape for a special-guest annotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GuestShape {
    #[default]
    Circle,
    Square,
    Triangle,
}

impl GuestShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            GuestShape::Circle => "circle",
            GuestShape::Square => "square",
            GuestShape::Triangle => "triangle",
        }
    }
}

impl FromStr for GuestShape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "circle" => Ok(GuestShape::Circle),
            "square" => Ok(GuestShape::Square),
            "triangle" => Ok(GuestShape::Triangle),
            _ => Err(format!(
                "Invalid shape: '{}'. Valid shapes are: circle, square, triangle",
                s
            )),
        }
    }
}

/// Optional per-day guest annotation; only rendered when `enabled`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialGuest {
    pub enabled: bool,
    pub text: String,
    pub shape: GuestShape,
    pub color: String,
}

impl Default for SpecialGuest {
    fn default() -> Self {
        SpecialGuest {
            enabled: false,
            text: String::new(),
            shape: GuestShape::Circle,
            color: "#3b82f6".to_string(),
        }
    }
}

/// One weekday's editable unit: header, events, optional guest annotation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayBlock {
    /// Day-of-week name, e.g. "MONDAY"
    pub day: String,
    /// Short date label without year, e.g. "3/1"
    pub date: String,
    #[serde(default)]
    pub events: Vec<DayEvent>,
    /// Per-day header color; falls back to `FlierConfig::header_color` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default)]
    pub special_guest: SpecialGuest,
}

impl DayBlock {
    /// Header color for rendering, falling back to the flyer-wide default
    pub fn header_color<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.color.as_deref().unwrap_or(fallback)
    }
}

/// A right-panel hashtag line.
///
/// The legacy document shape stored hashtags as bare strings; the untagged
/// representation lets both forms deserialize, and `migration::migrate`
/// upgrades every `Plain` entry before anything else reads the list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Hashtag {
    Styled { text: String, color: String },
    Plain(String),
}

impl Hashtag {
    pub fn styled(text: impl Into<String>, color: impl Into<String>) -> Self {
        Hashtag::Styled {
            text: text.into(),
            color: color.into(),
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Hashtag::Styled { text, .. } => text,
            Hashtag::Plain(text) => text,
        }
    }

    /// Color of a migrated entry; `None` for the legacy form
    pub fn color(&self) -> Option<&str> {
        match self {
            Hashtag::Styled { color, .. } => Some(color),
            Hashtag::Plain(_) => None,
        }
    }

    pub fn is_plain(&self) -> bool {
        matches!(self, Hashtag::Plain(_))
    }
}

/// Right-hand hero panel: background image, hashtags, quotes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RightPanel {
    /// Externally hosted image URL; empty means "no background image"
    pub background_image: String,
    pub hashtags: Vec<Hashtag>,
    #[serde(default)]
    pub inspirational_quotes: Vec<String>,
}

/// Goal-tracking bar shown at the bottom of the right panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressBar {
    pub current: u32,
    pub goal: u32,
    /// Kept equal to "{current}/{goal}" by `progress::sync_label`
    pub label: String,
    pub color: String,
}

/// Physical flyer size as free-form tokens, e.g. "8in" x "10in"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: String,
    pub height: String,
}

/// Root flyer document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlierConfig {
    pub title: String,
    pub subtitle: String,
    /// Default day-header color; individual days may override it
    pub header_color: String,
    pub days: Vec<DayBlock>,
    pub right_panel: RightPanel,
    pub progress: ProgressBar,
    pub dimensions: Dimensions,
}

impl FlierConfig {
    /// The built-in starter flyer.
    ///
    /// Callers that hand this to an editing session should run it through
    /// `migration::migrate` first; `patch::default_config` does both.
    pub fn built_in_default() -> Self {
        FlierConfig {
            title: "WEEKLY SCHEDULE!".to_string(),
            subtitle: "UNITED VISIONARY".to_string(),
            header_color: "#1e293b".to_string(),
            days: vec![
                seed_day(
                    "MONDAY",
                    "2/24",
                    vec![optional_event("POWER HOUR", "8:00PM")],
                    SpecialGuest::default(),
                ),
                seed_day(
                    "TUESDAY",
                    "2/25",
                    vec![
                        DayEvent::new("BRAINSTORM SESH", "7:00PM"),
                        DayEvent::new("GAME NIGHT", "9:00PM"),
                    ],
                    guest("FEATURING @JOHN DOE", GuestShape::Square, "#f97316"),
                ),
                seed_day(
                    "WEDNESDAY",
                    "2/26",
                    vec![DayEvent::new("WISDOM WEDNESDAY", "8:00PM")],
                    guest("WITH @JANE SMITH", GuestShape::Triangle, "#a855f7"),
                ),
                seed_day(
                    "THURSDAY",
                    "2/27",
                    vec![DayEvent::new("DEEP DIVE", "7:30PM")],
                    idle_guest("#ec4899"),
                ),
                seed_day(
                    "FRIDAY",
                    "2/28",
                    vec![DayEvent::new("CELEBRATE WINS", "8:30PM")],
                    idle_guest("#14b8a6"),
                ),
                seed_day(
                    "SATURDAY",
                    "2/29",
                    vec![DayEvent::new("WEEKEND VIBES", "ALL DAY")],
                    idle_guest("#f59e0b"),
                ),
                seed_day(
                    "SUNDAY",
                    "3/1",
                    vec![DayEvent::new("REST & RESET", "ALL DAY")],
                    idle_guest("#3b82f6"),
                ),
            ],
            right_panel: RightPanel {
                background_image:
                    "https://images.unsplash.com/photo-1504851149312-7a075b496cc7?q=80&w=2610"
                        .to_string(),
                hashtags: vec![
                    Hashtag::styled("#MARCH 3", "#FFFFFF"),
                    Hashtag::styled("LAUNCH", "#FFC107"),
                    Hashtag::styled("#BELIEVE", "#FFFFFF"),
                    Hashtag::styled("#RETAIL!", "#FFC107"),
                    Hashtag::styled("#LOVE", "#FFFFFF"),
                    Hashtag::styled("YOU", "#FFC107"),
                    Hashtag::styled("7500", "#FFFFFF"),
                ],
                inspirational_quotes: vec![],
            },
            progress: ProgressBar {
                current: 500,
                goal: 2500,
                label: "500/2500".to_string(),
                color: "#3b82f6".to_string(),
            },
            dimensions: Dimensions {
                width: "8in".to_string(),
                height: "10in".to_string(),
            },
        }
    }
}

fn seed_day(day: &str, date: &str, events: Vec<DayEvent>, special_guest: SpecialGuest) -> DayBlock {
    DayBlock {
        day: day.to_string(),
        date: date.to_string(),
        events,
        color: None,
        special_guest,
    }
}

fn optional_event(title: &str, time: &str) -> DayEvent {
    DayEvent {
        is_optional: true,
        ..DayEvent::new(title, time)
    }
}

fn guest(text: &str, shape: GuestShape, color: &str) -> SpecialGuest {
    SpecialGuest {
        enabled: true,
        text: text.to_string(),
        shape,
        color: color.to_string(),
    }
}

fn idle_guest(color: &str) -> SpecialGuest {
    SpecialGuest {
        color: color.to_string(),
        ..SpecialGuest::default()
    }
}

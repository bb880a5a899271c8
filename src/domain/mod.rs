//! Domain layer - Flyer model and derivation rules

pub mod config;
pub mod migration;
pub mod patch;
pub mod progress;
pub mod week;

pub use config::{
    DayBlock, DayEvent, Dimensions, FlierConfig, GuestShape, Hashtag, ProgressBar, RightPanel,
    SpecialGuest, DAY_COUNT,
};
pub use patch::ConfigPatch;

//! Application layer - Use cases and orchestration

pub mod edit_days;
pub mod edit_fields;
pub mod edit_panel;
pub mod export_flier;
pub mod init;
pub mod select_week;
pub mod session;

pub use edit_days::DayService;
pub use edit_fields::FieldService;
pub use edit_panel::PanelService;
pub use export_flier::{ArtifactExporter, ExportService, FlierRenderer, RenderOptions};
pub use select_week::WeekService;
pub use session::EditorSession;

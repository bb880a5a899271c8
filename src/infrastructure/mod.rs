//! Infrastructure layer - Document persistence and artifact output

pub mod document;
pub mod render;

pub use document::{DocumentRepository, FileSystemRepository, DOCUMENT_NAME};
pub use render::{FileArtifactExporter, HtmlRenderer};

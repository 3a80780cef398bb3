//! Application layer - Use cases and orchestration

pub mod init;
pub mod inject_templates;
pub mod preview;

pub use inject_templates::{apply_templates, ApplyOptions, ApplyReport, FileOutcome, FileReport};
pub use preview::preview;

//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod repository;

pub use config::{Config, UnmappedPolicy, CONFIG_FILE_NAME};
pub use repository::{FileSystemRepository, SiteRepository, TemplateEntry, CONFIG_ENV_VAR};

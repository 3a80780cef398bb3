//! Error types for seoinject

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for seoinject
#[derive(Debug, Error)]
pub enum SeoError {
    #[error("No seoinject.toml found from: {0}")]
    ConfigNotFound(PathBuf),

    #[error("Invalid URL in {field}: '{value}' ({source})")]
    InvalidUrl {
        field: String,
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("No page entry for: {0}")]
    UnknownPage(String),

    #[error("{0} file(s) failed")]
    BatchFailed(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl SeoError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            SeoError::ConfigNotFound(_) => 2,
            SeoError::UnknownPage(_) => 3,
            SeoError::BatchFailed(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            SeoError::ConfigNotFound(path) => {
                format!(
                    "No seoinject.toml found from: {}\n\n\
                    Suggestions:\n\
                    • Run 'seoinject init' in your project directory\n\
                    • Pass the config file explicitly: seoinject --config path/to/seoinject.toml\n\
                    • Set SEOINJECT_CONFIG environment variable to your config file",
                    path.display()
                )
            }
            SeoError::InvalidUrl { field, value, .. } => {
                format!(
                    "{}\n\n\
                    URLs must be absolute (e.g., https://example.com/login).\n\
                    Fix '{}' = \"{}\" in seoinject.toml",
                    self, field, value
                )
            }
            SeoError::UnknownPage(name) => {
                format!(
                    "No page entry for: '{}'\n\n\
                    Suggestions:\n\
                    • Add a [pages.\"{}\"] table to seoinject.toml\n\
                    • Set unmapped = \"default\" to use the default profile",
                    name, name
                )
            }
            SeoError::BatchFailed(count) => {
                format!(
                    "{} file(s) failed\n\n\
                    Run with --verbose for details on each failure",
                    count
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using SeoError
pub type Result<T> = std::result::Result<T, SeoError>;

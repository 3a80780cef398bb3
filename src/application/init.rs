//! Initialize a site config

use crate::error::{Result, SeoError};
use crate::infrastructure::{Config, FileSystemRepository, SiteRepository};
use std::fs;
use std::path::Path;

/// Write a starter seoinject.toml into `path`.
pub fn init(path: &Path) -> Result<FileSystemRepository> {
    // Create the directory if it doesn't exist
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());

    if repo.is_initialized() {
        return Err(SeoError::Config(format!(
            "Already initialized: {}",
            repo.config_path.display()
        )));
    }

    repo.save_config(&Config::starter())?;

    println!("Created {}", repo.config_path.display());
    println!(
        "Edit [defaults] and [pages] there, then run 'seoinject apply --dry-run' to check."
    );

    Ok(repo)
}

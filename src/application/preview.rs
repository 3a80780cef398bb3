//! Preview the tag block a template would receive

use crate::domain::TagSet;
use crate::error::{Result, SeoError};
use crate::infrastructure::{FileSystemRepository, SiteRepository, UnmappedPolicy};

/// Render the block for `file_name` without touching any file.
///
/// Accepts names relative to the templates directory ("login.html") or
/// prefixed with the configured templates directory ("templates/login.html").
pub fn preview(repository: &FileSystemRepository, file_name: &str) -> Result<String> {
    let config = repository.load_config()?;

    let normalized = file_name.replace('\\', "/");
    let mut name = normalized.trim_start_matches("./");
    let templates_prefix = config
        .templates_dir
        .to_str()
        .map(|dir| format!("{}/", dir.trim_end_matches('/')));
    if let Some(prefix) = templates_prefix.as_deref() {
        name = name.strip_prefix(prefix).unwrap_or(name);
    }

    let page = config.page(name);
    if page.is_none() && config.unmapped == UnmappedPolicy::Skip {
        return Err(SeoError::UnknownPage(name.to_string()));
    }

    let profile = config.defaults.resolve(name, page);
    Ok(TagSet::from_profile(&profile).render())
}

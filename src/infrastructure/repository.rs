//! File system repository

use crate::error::{Result, SeoError};
use crate::infrastructure::config::{Config, CONFIG_FILE_NAME};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Environment variable pointing at a config file
pub const CONFIG_ENV_VAR: &str = "SEOINJECT_CONFIG";

/// A template file found under the templates directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateEntry {
    /// Path relative to the templates directory, `/`-separated
    pub name: String,
    pub path: PathBuf,
}

/// Abstract repository for site operations
pub trait SiteRepository {
    fn load_config(&self) -> Result<Config>;

    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if the config file exists
    fn is_initialized(&self) -> bool;
}

/// File system implementation of SiteRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
    pub config_path: PathBuf,
}

impl FileSystemRepository {
    /// Create a repository whose config lives at `<root>/seoinject.toml`
    pub fn new(root: PathBuf) -> Self {
        let config_path = root.join(CONFIG_FILE_NAME);
        FileSystemRepository { root, config_path }
    }

    /// Create a repository from an explicit config file path
    pub fn from_config_path(config_path: PathBuf) -> Self {
        let root = match config_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        FileSystemRepository { root, config_path }
    }

    /// Locate the config file.
    /// First checks SEOINJECT_CONFIG, then walks up from the current directory.
    pub fn discover() -> Result<Self> {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            let path = PathBuf::from(path);
            if path.is_file() {
                return Ok(FileSystemRepository::from_config_path(path));
            } else {
                return Err(SeoError::Config(format!(
                    "{} is set to '{}' but no such file exists. \
                    Fix the path or unset {}.",
                    CONFIG_ENV_VAR,
                    path.display(),
                    CONFIG_ENV_VAR
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Walk up from `start` until a directory containing seoinject.toml is found
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if current.join(CONFIG_FILE_NAME).is_file() {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(SeoError::ConfigNotFound(start.to_path_buf())),
            }
        }
    }

    /// Resolve the configured templates directory against the repository root
    pub fn templates_dir(&self, config: &Config) -> PathBuf {
        if config.templates_dir.is_absolute() {
            config.templates_dir.clone()
        } else {
            self.root.join(&config.templates_dir)
        }
    }
}

impl SiteRepository for FileSystemRepository {
    fn load_config(&self) -> Result<Config> {
        Config::load(&self.config_path)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        config.save(&self.config_path)
    }

    fn is_initialized(&self) -> bool {
        self.config_path.is_file()
    }
}

// Template operations (not part of trait - filesystem-specific)
impl FileSystemRepository {
    /// List templates with `extension` under `dir`, sorted by name.
    /// Recursive listing skips dot-directories.
    pub fn list_templates(
        &self,
        dir: &Path,
        extension: &str,
        recursive: bool,
    ) -> Result<Vec<TemplateEntry>> {
        if !dir.is_dir() {
            return Err(SeoError::Config(format!(
                "Templates directory not found: {}",
                dir.display()
            )));
        }

        let max_depth = if recursive { usize::MAX } else { 1 };
        let walker = WalkDir::new(dir)
            .max_depth(max_depth)
            .into_iter()
            .filter_entry(|entry| {
                if entry.depth() == 0 || !entry.file_type().is_dir() {
                    return true;
                }
                entry
                    .file_name()
                    .to_str()
                    .is_none_or(|name| !name.starts_with('.'))
            });

        let mut templates = Vec::new();
        for entry in walker {
            let Ok(entry) = entry else {
                continue;
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let Ok(rel) = entry.path().strip_prefix(dir) else {
                continue;
            };
            if !has_extension(rel, extension) {
                continue;
            }
            let Some(name) = normalize_relative_path(rel) else {
                continue;
            };
            templates.push(TemplateEntry {
                name,
                path: entry.path().to_path_buf(),
            });
        }

        templates.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(templates)
    }

    pub fn read_template(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(SeoError::Io)
    }

    /// Replace a template using a best-effort atomic write:
    /// write to a temp file in the same directory, copy the original
    /// permissions onto it, then rename into place.
    pub fn write_template_atomic(&self, path: &Path, content: &str) -> Result<()> {
        let tmp_name = format!(
            ".{}.seoinject-tmp-{}",
            path.file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("template"),
            std::process::id()
        );
        let tmp_path = path.with_file_name(tmp_name);

        if let Err(e) = fs::write(&tmp_path, content) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }

        if let Err(e) = replace_with(&tmp_path, path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e);
        }
        Ok(())
    }
}

fn replace_with(tmp_path: &Path, path: &Path) -> Result<()> {
    if let Ok(metadata) = fs::metadata(path) {
        fs::set_permissions(tmp_path, metadata.permissions())?;

        // On Windows, `rename` does not overwrite existing files.
        #[cfg(windows)]
        fs::remove_file(path)?;
    }

    fs::rename(tmp_path, path)?;
    Ok(())
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
}

fn normalize_relative_path(path: &Path) -> Option<String> {
    let parts: Vec<&str> = path
        .iter()
        .map(|part| part.to_str())
        .collect::<Option<_>>()?;
    Some(parts.join("/"))
}

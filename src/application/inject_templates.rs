//! Inject tags into every template of a site

use crate::domain::{inject, InjectError, InjectOptions, PageProfile};
use crate::error::Result;
use crate::infrastructure::{
    Config, FileSystemRepository, SiteRepository, TemplateEntry, UnmappedPolicy,
};
use std::collections::BTreeSet;
use std::path::PathBuf;
use tracing::{debug, warn};

#[derive(Debug, Clone, Default)]
pub struct ApplyOptions {
    /// Overrides the configured templates directory
    pub templates_dir: Option<PathBuf>,
    pub dry_run: bool,
}

/// What happened to a single template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Updated,
    AlreadyTagged,
    NoAnchor,
    Unmapped,
    Error(String),
}

impl FileOutcome {
    pub fn is_skipped(&self) -> bool {
        matches!(
            self,
            FileOutcome::AlreadyTagged | FileOutcome::NoAnchor | FileOutcome::Unmapped
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub name: String,
    pub outcome: FileOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyReport {
    pub dry_run: bool,
    pub files: Vec<FileReport>,
    /// `[pages]` entries with no matching template
    pub missing_pages: Vec<String>,
}

impl ApplyReport {
    pub fn updated(&self) -> usize {
        self.count(|o| *o == FileOutcome::Updated)
    }

    pub fn skipped(&self) -> usize {
        self.count(FileOutcome::is_skipped)
    }

    pub fn errored(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Error(_)))
    }

    fn count(&self, pred: impl Fn(&FileOutcome) -> bool) -> usize {
        self.files.iter().filter(|f| pred(&f.outcome)).count()
    }
}

/// Run the injector over every template. Per-file failures are recorded in
/// the report; only config and directory problems abort the run.
pub fn apply_templates(
    repository: &FileSystemRepository,
    options: ApplyOptions,
) -> Result<ApplyReport> {
    let config = repository.load_config()?;
    let dir = options
        .templates_dir
        .unwrap_or_else(|| repository.templates_dir(&config));
    let templates = repository.list_templates(&dir, config.extension(), config.recursive)?;
    debug!(dir = %dir.display(), count = templates.len(), "scanning templates");

    let found: BTreeSet<&str> = templates.iter().map(|t| t.name.as_str()).collect();
    let missing_pages: Vec<String> = config
        .pages
        .keys()
        .filter(|name| !found.contains(name.as_str()))
        .cloned()
        .collect();
    for name in &missing_pages {
        warn!(page = %name, "configured page not found in templates directory");
    }

    let inject_options = config.inject_options();
    let files = templates
        .iter()
        .map(|template| FileReport {
            name: template.name.clone(),
            outcome: process_template(
                repository,
                &config,
                &inject_options,
                template,
                options.dry_run,
            ),
        })
        .collect();

    Ok(ApplyReport {
        dry_run: options.dry_run,
        files,
        missing_pages,
    })
}

fn process_template(
    repository: &FileSystemRepository,
    config: &Config,
    inject_options: &InjectOptions,
    template: &TemplateEntry,
    dry_run: bool,
) -> FileOutcome {
    let Some(profile) = profile_for(config, &template.name) else {
        return FileOutcome::Unmapped;
    };

    let content = match repository.read_template(&template.path) {
        Ok(content) => content,
        Err(e) => {
            warn!(file = %template.name, error = %e, "failed to read template");
            return FileOutcome::Error(e.to_string());
        }
    };

    match inject(&content, &profile, inject_options) {
        Ok(injection) if !injection.changed => {
            debug!(file = %template.name, "already tagged");
            FileOutcome::AlreadyTagged
        }
        Ok(injection) => {
            if !dry_run {
                if let Err(e) = repository.write_template_atomic(&template.path, &injection.text)
                {
                    warn!(file = %template.name, error = %e, "failed to write template");
                    return FileOutcome::Error(e.to_string());
                }
            }
            debug!(file = %template.name, title = %profile.title, dry_run, "injected");
            FileOutcome::Updated
        }
        Err(InjectError::NoAnchorFound) => {
            warn!(file = %template.name, "no <head> or </head> tag, skipping");
            FileOutcome::NoAnchor
        }
    }
}

/// Profile for a template, or None when it has no page entry and unmapped
/// templates are skipped.
fn profile_for(config: &Config, name: &str) -> Option<PageProfile> {
    let page = config.page(name);
    if page.is_none() {
        match config.unmapped {
            UnmappedPolicy::Default => {
                warn!(file = %name, "no page entry, using default profile");
            }
            UnmappedPolicy::Skip => {
                warn!(file = %name, "no page entry, skipping");
                return None;
            }
        }
    }
    Some(config.defaults.resolve(name, page))
}

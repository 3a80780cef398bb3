//! Configuration management

use crate::domain::{AnchorPolicy, InjectOptions, PageOverride, SiteDefaults};
use crate::error::{Result, SeoError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

/// File name looked up during discovery
pub const CONFIG_FILE_NAME: &str = "seoinject.toml";

/// What to do with templates that have no `[pages]` entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnmappedPolicy {
    /// Inject using the site defaults
    #[default]
    Default,
    /// Leave the file alone
    Skip,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Templates directory, relative to the config file's directory
    #[serde(default = "default_templates_dir")]
    pub templates_dir: PathBuf,
    #[serde(default = "default_extension")]
    pub extension: String,
    #[serde(default)]
    pub recursive: bool,
    #[serde(default)]
    pub anchor: AnchorPolicy,
    #[serde(default)]
    pub unmapped: UnmappedPolicy,
    /// Extra markers of an earlier injection, e.g. "og:title"
    #[serde(default)]
    pub sentinels: Vec<String>,
    #[serde(default)]
    pub defaults: SiteDefaults,
    #[serde(default)]
    pub pages: BTreeMap<String, PageOverride>,
}

fn default_templates_dir() -> PathBuf {
    PathBuf::from("templates")
}

fn default_extension() -> String {
    "html".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            templates_dir: default_templates_dir(),
            extension: default_extension(),
            recursive: false,
            anchor: AnchorPolicy::default(),
            unmapped: UnmappedPolicy::default(),
            sentinels: Vec::new(),
            defaults: SiteDefaults::default(),
            pages: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Config written by `seoinject init`
    pub fn starter() -> Self {
        let mut pages = BTreeMap::new();
        pages.insert(
            "index.html".to_string(),
            PageOverride::new("Home - My Site", "https://example.com/"),
        );

        Config {
            defaults: SiteDefaults {
                site_name: "My Site".to_string(),
                description: "Describe your site in one or two sentences.".to_string(),
                keywords: vec!["keyword one".to_string(), "keyword two".to_string()],
                base_url: Some("https://example.com".to_string()),
                ..SiteDefaults::default()
            },
            pages,
            ..Config::default()
        }
    }

    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SeoError::ConfigNotFound(path.to_path_buf())
            } else {
                SeoError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| {
            SeoError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Save config to the given file path
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| SeoError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, contents)?;
        Ok(())
    }

    /// Extension without a leading dot
    pub fn extension(&self) -> &str {
        self.extension.trim_start_matches('.')
    }

    pub fn inject_options(&self) -> InjectOptions {
        InjectOptions {
            anchor: self.anchor,
            sentinels: self.sentinels.clone(),
        }
    }

    pub fn page(&self, name: &str) -> Option<&PageOverride> {
        self.pages.get(name)
    }

    pub fn validate(&self) -> Result<()> {
        let ext = self.extension();
        if ext.is_empty() || ext.contains(['/', '\\']) {
            return Err(SeoError::Config(format!(
                "Invalid extension: '{}'",
                self.extension
            )));
        }

        // An empty base_url means "no canonical", like an unset one.
        if let Some(base) = self.defaults.base_url.as_deref().filter(|b| !b.is_empty()) {
            Url::parse(base).map_err(|source| SeoError::InvalidUrl {
                field: "defaults.base_url".to_string(),
                value: base.to_string(),
                source,
            })?;
        }
        check_absolute_url("defaults.image", self.defaults.image.as_deref())?;
        check_absolute_url("defaults.favicon", self.defaults.favicon.as_deref())?;

        for (name, page) in &self.pages {
            check_absolute_url(
                &format!("pages.\"{}\".canonical", name),
                page.canonical.as_deref(),
            )?;
            check_absolute_url(
                &format!("pages.\"{}\".image", name),
                page.image.as_deref(),
            )?;
        }

        Ok(())
    }
}

/// Values with a scheme must parse; relative paths and template
/// expressions such as `{{ request.url }}` are left alone.
fn check_absolute_url(field: &str, value: Option<&str>) -> Result<()> {
    let Some(value) = value else {
        return Ok(());
    };
    if !value.contains("://") {
        return Ok(());
    }

    Url::parse(value).map_err(|source| SeoError::InvalidUrl {
        field: field.to_string(),
        value: value.to_string(),
        source,
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE_NAME);
        let config = Config::starter();

        config.save(&path).unwrap();
        let loaded = Config::load(&path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        let result = Config::load(&temp.path().join(CONFIG_FILE_NAME));

        match result.unwrap_err() {
            SeoError::ConfigNotFound(_) => {}
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();

        assert_eq!(config.templates_dir, PathBuf::from("templates"));
        assert_eq!(config.extension(), "html");
        assert!(!config.recursive);
        assert_eq!(config.anchor, AnchorPolicy::HeadClose);
        assert_eq!(config.unmapped, UnmappedPolicy::Default);
        assert_eq!(config.defaults.robots, "index, follow");
        assert!(config.pages.is_empty());
    }

    #[test]
    fn test_parse_full_config() {
        let config: Config = toml::from_str(
            r#"
templates_dir = "web/templates"
extension = ".htm"
recursive = true
anchor = "after-title"
unmapped = "skip"
sentinels = ["og:title"]

[defaults]
site_name = "Price Alerter AI"
keywords = ["price alert", "price tracker"]
base_url = "https://pricealerter.example"

[pages."login.html"]
title = "Login - Price Alerter AI"
canonical = "https://pricealerter.example/login"
"#,
        )
        .unwrap();

        assert_eq!(config.extension(), "htm");
        assert_eq!(config.anchor, AnchorPolicy::AfterTitle);
        assert_eq!(config.unmapped, UnmappedPolicy::Skip);
        assert_eq!(config.inject_options().sentinels, vec!["og:title"]);
        assert_eq!(
            config.page("login.html").unwrap().title.as_deref(),
            Some("Login - Price Alerter AI")
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_anchor_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "anchor = \"body\"\n").unwrap();

        match Config::load(&path).unwrap_err() {
            SeoError::Config(msg) => assert!(msg.contains("Failed to parse")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let mut config = Config::default();
        config.defaults.base_url = Some("example.com".to_string());

        match config.validate().unwrap_err() {
            SeoError::InvalidUrl { field, .. } => assert_eq!(field, "defaults.base_url"),
            other => panic!("Expected InvalidUrl error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_base_url_disables_canonical() {
        let mut config = Config::default();
        config.defaults.base_url = Some(String::new());

        assert!(config.validate().is_ok());
        let profile = config.defaults.resolve("login.html", None);
        assert_eq!(profile.canonical, None);
    }

    #[test]
    fn test_template_expression_canonical_allowed() {
        let mut config = Config::default();
        config.pages.insert(
            "login.html".to_string(),
            PageOverride::new("Login", "{{ request.url }}"),
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_broken_absolute_canonical_rejected() {
        let mut config = Config::default();
        config.pages.insert(
            "login.html".to_string(),
            PageOverride::new("Login", "https://exa mple.com/login"),
        );
        assert!(matches!(
            config.validate(),
            Err(SeoError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_empty_extension_rejected() {
        let config = Config {
            extension: ".".to_string(),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(SeoError::Config(_))));
    }
}

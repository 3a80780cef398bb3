//! Page profiles and their resolution from site defaults

use serde::{Deserialize, Serialize};
use url::Url;

/// Fully resolved metadata values for one document
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageProfile {
    pub title: String,
    pub canonical: Option<String>,
    pub description: String,
    pub keywords: Vec<String>,
    pub author: String,
    pub robots: String,
    pub image: Option<String>,
    pub site_name: String,
    pub locale: String,
    pub og_type: String,
    pub twitter_card: String,
    pub favicon: Option<String>,
}

/// Per-file values layered over the site defaults
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl PageOverride {
    pub fn new(title: &str, canonical: &str) -> Self {
        PageOverride {
            title: Some(title.to_string()),
            canonical: Some(canonical.to_string()),
            ..Default::default()
        }
    }
}

/// Global default profile shared by every page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteDefaults {
    pub site_name: String,
    /// Fallback title; when empty the title is derived from the file name
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub author: String,
    pub robots: String,
    /// Site root used to build canonical URLs for pages without one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
    pub locale: String,
    pub og_type: String,
    pub twitter_card: String,
}

impl Default for SiteDefaults {
    fn default() -> Self {
        SiteDefaults {
            site_name: String::new(),
            title: String::new(),
            description: String::new(),
            keywords: Vec::new(),
            author: String::new(),
            robots: "index, follow".to_string(),
            base_url: None,
            image: None,
            favicon: None,
            locale: "en_US".to_string(),
            og_type: "website".to_string(),
            twitter_card: "summary_large_image".to_string(),
        }
    }
}

impl SiteDefaults {
    /// Resolve the profile for `file_name` (a `/`-separated path relative to
    /// the templates directory), applying `page` over the defaults.
    pub fn resolve(&self, file_name: &str, page: Option<&PageOverride>) -> PageProfile {
        let title = non_empty(page.and_then(|p| p.title.as_ref()))
            .or_else(|| non_empty(Some(&self.title)))
            .unwrap_or_else(|| self.derived_title(file_name));

        let canonical = non_empty(page.and_then(|p| p.canonical.as_ref()))
            .or_else(|| self.canonical_for(file_name));

        PageProfile {
            title,
            canonical,
            description: non_empty(page.and_then(|p| p.description.as_ref()))
                .unwrap_or_else(|| self.description.clone()),
            keywords: page
                .and_then(|p| p.keywords.clone())
                .unwrap_or_else(|| self.keywords.clone()),
            author: self.author.clone(),
            robots: self.robots.clone(),
            image: non_empty(page.and_then(|p| p.image.as_ref())).or_else(|| self.image.clone()),
            site_name: self.site_name.clone(),
            locale: self.locale.clone(),
            og_type: self.og_type.clone(),
            twitter_card: self.twitter_card.clone(),
            favicon: self.favicon.clone(),
        }
    }

    /// "forgot-password.html" becomes "Forgot Password - <site name>"
    fn derived_title(&self, file_name: &str) -> String {
        let stem = file_stem(file_name);
        let words: Vec<String> = stem
            .split(['-', '_', ' '])
            .filter(|w| !w.is_empty())
            .map(capitalize)
            .collect();
        let page = words.join(" ");

        match (page.is_empty(), self.site_name.is_empty()) {
            (true, _) => self.site_name.clone(),
            (false, true) => page,
            (false, false) => format!("{} - {}", page, self.site_name),
        }
    }

    fn canonical_for(&self, file_name: &str) -> Option<String> {
        let base = self.base_url.as_deref().filter(|b| !b.is_empty())?;
        let mut url = Url::parse(base).ok()?;
        url.set_query(None);
        url.set_fragment(None);

        // Route parts are appended as path segments so `:`, `?` and `#` in
        // file names stay inside the path.
        let route = route_for(file_name);
        url.path_segments_mut()
            .ok()?
            .pop_if_empty()
            .extend(route.split('/'));

        Some(url.into())
    }
}

/// Route of a template: its path without extension, with `index` mapping
/// to the enclosing directory.
pub fn route_for(file_name: &str) -> String {
    let (dir, leaf) = match file_name.rsplit_once('/') {
        Some((dir, leaf)) => (Some(dir), leaf),
        None => (None, file_name),
    };
    let stem = file_stem(leaf);

    match (dir, stem) {
        (None, "index") => String::new(),
        (Some(dir), "index") => format!("{}/", dir),
        (None, stem) => stem.to_string(),
        (Some(dir), stem) => format!("{}/{}", dir, stem),
    }
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value.filter(|v| !v.is_empty()).cloned()
}

fn file_stem(file_name: &str) -> &str {
    let leaf = file_name.rsplit('/').next().unwrap_or(file_name);
    match leaf.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => leaf,
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

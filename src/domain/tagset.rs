//! SEO tag block rendering

use crate::domain::profile::PageProfile;

/// Opening marker written at the top of every injected block
pub const BEGIN_MARKER: &str = "<!-- seoinject:begin -->";

/// Closing marker written at the bottom of every injected block
pub const END_MARKER: &str = "<!-- seoinject:end -->";

const INDENT: &str = "    ";

/// A single element of the injected block
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagEntry {
    /// `<meta name="..." content="...">`
    Meta { name: &'static str, content: String },
    /// `<meta property="..." content="...">`
    Property {
        property: &'static str,
        content: String,
    },
    /// `<link rel="..." href="..." ...>`
    Link {
        rel: &'static str,
        href: String,
        attrs: Vec<(&'static str, &'static str)>,
    },
    /// `<!-- ... -->` section heading
    Comment(&'static str),
}

impl TagEntry {
    fn meta(name: &'static str, content: &str) -> Option<Self> {
        (!content.is_empty()).then(|| TagEntry::Meta {
            name,
            content: content.to_string(),
        })
    }

    fn property(property: &'static str, content: &str) -> Option<Self> {
        (!content.is_empty()).then(|| TagEntry::Property {
            property,
            content: content.to_string(),
        })
    }

    fn link(rel: &'static str, href: &str, attrs: Vec<(&'static str, &'static str)>) -> Self {
        TagEntry::Link {
            rel,
            href: href.to_string(),
            attrs,
        }
    }

    /// Render this entry as one line of HTML (without indentation)
    pub fn to_html(&self) -> String {
        match self {
            TagEntry::Meta { name, content } => {
                format!(
                    "<meta name=\"{}\" content=\"{}\">",
                    name,
                    escape_attr(content)
                )
            }
            TagEntry::Property { property, content } => {
                format!(
                    "<meta property=\"{}\" content=\"{}\">",
                    property,
                    escape_attr(content)
                )
            }
            TagEntry::Link { rel, href, attrs } => {
                let mut html = format!("<link rel=\"{}\"", rel);
                for (key, value) in attrs {
                    html.push_str(&format!(" {}=\"{}\"", key, value));
                }
                html.push_str(&format!(" href=\"{}\">", escape_attr(href)));
                html
            }
            TagEntry::Comment(text) => format!("<!-- {} -->", text),
        }
    }
}

/// Ordered collection of tags injected as one block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSet {
    entries: Vec<TagEntry>,
}

impl TagSet {
    /// Build the tag set for a resolved page profile.
    ///
    /// Order is fixed: basic meta, Open Graph, Twitter, favicon, canonical.
    /// Empty text values and unset optional URLs produce no element.
    pub fn from_profile(profile: &PageProfile) -> Self {
        let mut entries = Vec::new();
        let keywords = profile.keywords.join(", ");

        entries.push(TagEntry::Comment("SEO Meta Tags"));
        entries.extend(TagEntry::meta("description", &profile.description));
        entries.extend(TagEntry::meta("keywords", &keywords));
        entries.extend(TagEntry::meta("author", &profile.author));
        entries.extend(TagEntry::meta("robots", &profile.robots));

        entries.push(TagEntry::Comment("Open Graph"));
        entries.extend(TagEntry::property("og:type", &profile.og_type));
        if let Some(url) = &profile.canonical {
            entries.extend(TagEntry::property("og:url", url));
        }
        entries.extend(TagEntry::property("og:title", &profile.title));
        entries.extend(TagEntry::property("og:description", &profile.description));
        if let Some(image) = &profile.image {
            entries.extend(TagEntry::property("og:image", image));
        }
        entries.extend(TagEntry::property("og:site_name", &profile.site_name));
        entries.extend(TagEntry::property("og:locale", &profile.locale));

        entries.push(TagEntry::Comment("Twitter"));
        entries.extend(TagEntry::meta("twitter:card", &profile.twitter_card));
        entries.extend(TagEntry::meta("twitter:title", &profile.title));
        entries.extend(TagEntry::meta("twitter:description", &profile.description));
        if let Some(image) = &profile.image {
            entries.extend(TagEntry::meta("twitter:image", image));
        }

        if let Some(favicon) = profile.favicon.as_deref().filter(|f| !f.is_empty()) {
            let mut icon_attrs = Vec::new();
            if let Some(mime) = icon_mime_type(favicon) {
                icon_attrs.push(("type", mime));
            }
            entries.push(TagEntry::Comment("Favicon"));
            entries.push(TagEntry::link("icon", favicon, icon_attrs.clone()));
            entries.push(TagEntry::link("shortcut icon", favicon, icon_attrs));
            entries.push(TagEntry::link("apple-touch-icon", favicon, Vec::new()));
        }

        if let Some(url) = profile.canonical.as_deref().filter(|u| !u.is_empty()) {
            entries.push(TagEntry::Comment("Canonical URL"));
            entries.push(TagEntry::link("canonical", url, Vec::new()));
        }

        TagSet { entries }
    }

    /// Render the block exactly as it is spliced into a document.
    ///
    /// Starts with a newline and ends with one, every line indented by four spaces.
    pub fn render(&self) -> String {
        let mut out = String::from("\n");
        push_line(&mut out, BEGIN_MARKER);
        for entry in &self.entries {
            push_line(&mut out, &entry.to_html());
        }
        push_line(&mut out, END_MARKER);
        out
    }
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(INDENT);
    out.push_str(line);
    out.push('\n');
}

/// Escape a value for use inside a double-quoted attribute
pub fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn icon_mime_type(href: &str) -> Option<&'static str> {
    let path = href.split(['?', '#']).next().unwrap_or(href);
    let ext = path.rsplit_once('.')?.1.to_ascii_lowercase();
    match ext.as_str() {
        "ico" => Some("image/x-icon"),
        "png" => Some("image/png"),
        "svg" => Some("image/svg+xml"),
        "gif" => Some("image/gif"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        _ => None,
    }
}

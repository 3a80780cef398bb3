//! Sentinel detection, anchor lookup and block splicing

use crate::domain::profile::PageProfile;
use crate::domain::tagset::{TagSet, BEGIN_MARKER};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;

fn head_close_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(?i)</head\s*>").unwrap())
}

fn head_open_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(?i)<head(?:\s[^>]*)?>").unwrap())
}

fn title_close_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(?i)</title\s*>").unwrap())
}

fn body_open_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(?i)<body[\s>]").unwrap())
}

/// Where the tag block is spliced into a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum AnchorPolicy {
    /// Before `</head>`, else right after the `<head>` open tag
    #[default]
    HeadClose,
    /// Right after `</title>`, else the `HeadClose` chain
    AfterTitle,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InjectError {
    #[error("no <head> or </head> tag found")]
    NoAnchorFound,
}

/// Settings that shape an injection, independent of the page profile
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InjectOptions {
    pub anchor: AnchorPolicy,
    /// Extra substrings that mark a document as already tagged
    pub sentinels: Vec<String>,
}

/// Result of a successful injection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Injection {
    pub text: String,
    pub changed: bool,
}

/// Read-only view over one HTML document
#[derive(Debug, Clone, Copy)]
pub struct Document<'a> {
    text: &'a str,
}

impl<'a> Document<'a> {
    pub fn new(text: &'a str) -> Self {
        Document { text }
    }

    /// True when the block marker or any of `sentinels` is present
    pub fn is_tagged(&self, sentinels: &[String]) -> bool {
        self.text.contains(BEGIN_MARKER)
            || sentinels
                .iter()
                .any(|s| !s.is_empty() && self.text.contains(s.as_str()))
    }

    /// Byte offset at which the block is inserted, if the document has one
    pub fn anchor(&self, policy: AnchorPolicy) -> Option<usize> {
        let head_close = head_close_regex().find(self.text).map(|m| m.start());

        let after_title = match policy {
            AnchorPolicy::AfterTitle => {
                let head = &self.text[..self.head_end(head_close)];
                title_close_regex().find(head).map(|m| m.end())
            }
            AnchorPolicy::HeadClose => None,
        };

        after_title
            .or(head_close)
            .or_else(|| head_open_regex().find(self.text).map(|m| m.end()))
    }

    /// End of the head region: `</head>`, else `<body`, else the whole text.
    /// A `<title>` past this point belongs to the body (e.g. inside `<svg>`).
    fn head_end(&self, head_close: Option<usize>) -> usize {
        head_close
            .or_else(|| body_open_regex().find(self.text).map(|m| m.start()))
            .unwrap_or(self.text.len())
    }
}

/// Insert the tag block for `profile` into `text`.
///
/// Already tagged documents come back unchanged. The input is never modified
/// in place; on `NoAnchorFound` the caller still holds the original text.
pub fn inject(
    text: &str,
    profile: &PageProfile,
    options: &InjectOptions,
) -> Result<Injection, InjectError> {
    let document = Document::new(text);

    if document.is_tagged(&options.sentinels) {
        return Ok(Injection {
            text: text.to_string(),
            changed: false,
        });
    }

    let offset = document
        .anchor(options.anchor)
        .ok_or(InjectError::NoAnchorFound)?;
    let block = TagSet::from_profile(profile).render();

    let mut out = String::with_capacity(text.len() + block.len());
    out.push_str(&text[..offset]);
    out.push_str(&block);
    out.push_str(&text[offset..]);

    Ok(Injection {
        text: out,
        changed: true,
    })
}

//! Domain layer - Pure document transformation

pub mod document;
pub mod profile;
pub mod tagset;

pub use document::{inject, AnchorPolicy, Document, InjectError, InjectOptions, Injection};
pub use profile::{PageOverride, PageProfile, SiteDefaults};
pub use tagset::{TagEntry, TagSet, BEGIN_MARKER, END_MARKER};

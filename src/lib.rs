//! seoinject - SEO meta tag injector for HTML templates
//!
//! Inserts one block of description, Open Graph, Twitter card, favicon and
//! canonical tags into each template of a site, driven by a per-page
//! profile in `seoinject.toml`. Running it again leaves tagged files alone.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::SeoError;

//! Sitemap building, rendering and transformation.
//!
//! This module contains the main sitemap operations:
//! - Collecting and deduplicating entries
//! - Rendering entries to sitemaps.org XML
//! - Applying an optional XSL stylesheet

pub mod builder;
pub mod renderer;
pub mod transformer;

pub use builder::{SitemapBuilder, SitemapResponse, DEFAULT_DATE_FORMAT};
pub use renderer::{escape_xml, format_timestamp, render_entry, render_sitemap};
#[cfg(feature = "xslt")]
pub use transformer::LibXsltTransformer;
pub use transformer::{DefaultTransformer, UnavailableTransformer, XslTransformer};

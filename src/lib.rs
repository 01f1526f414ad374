//! sitemapxml - XML sitemap generator
//!
//! This crate builds sitemap documents following the
//! [sitemaps.org](https://www.sitemaps.org/protocol.html) protocol from a set of
//! page URLs, with an optional XSL stylesheet for human-readable rendering.
//!
//! # Features
//!
//! - **Relative URLs**: `page.html` resolves against the base URL, `/page.html` against the site root
//! - **Deduplication**: adding a URL twice replaces the first entry in place
//! - **Depth defaults**: priority and change frequency are inferred from path depth when not given
//! - **Escaping**: every value is XML-escaped before it is written
//! - **XSLT**: with the `xslt` feature, the sitemap can be transformed through libxslt
//!
//! # Quick Start
//!
//! ```
//! use sitemapxml::{LastModified, Priority, SitemapBuilder, SitemapUrl};
//!
//! let mut sitemap = SitemapBuilder::new("http://example.com/blog")?;
//!
//! sitemap.add_url("/", LastModified::Omit, None, None);
//! sitemap.add_url("post.html", LastModified::Now, None, Some(Priority::new(0.5)?));
//! sitemap.add_urls(vec![SitemapUrl::new("/news/").last_modified(LastModified::Omit)]);
//!
//! let xml = sitemap.build(false)?;
//! assert!(xml.contains("<loc>http://example.com/blog/post.html</loc>"));
//! assert!(xml.contains("<priority>0.5</priority>"));
//! # Ok::<(), sitemapxml::SitemapError>(())
//! ```
//!
//! # Depth buckets
//!
//! | Path | Bucket | Default priority | Default frequency |
//! |------|--------|------------------|-------------------|
//! | `/` | 0 | 1.0 | daily |
//! | `/news/`, `/about.html` | 1 | 0.8 | weekly |
//! | `/news/2009/06/` and deeper | 2 | 0.4 | monthly |
//!
//! # Error Handling
//!
//! All fallible functions return `Result<T, SitemapError>`. Common error cases:
//!
//! - Base URL that does not start with `http://host` or `https://host`
//! - Applying a stylesheet when none was set
//! - Priorities outside `[0.0, 1.0]` or unknown change frequency tokens
//! - Failing to write the output file

// Re-export the builder and output types
pub use crate::core::{SitemapBuilder, SitemapResponse, DEFAULT_DATE_FORMAT};

// Re-export rendering and transformation
pub use crate::core::{escape_xml, render_sitemap, DefaultTransformer, UnavailableTransformer, XslTransformer};
#[cfg(feature = "xslt")]
pub use crate::core::LibXsltTransformer;

// Re-export URL utilities
pub use crate::url::{depth_bucket, parse_base_url, resolve_url, url_depth, url_path};

// Re-export public types
pub use config::{SitemapConfig, UrlConfig};
pub use error::{ErrorKind, Result, SitemapError};
pub use types::{ChangeFrequency, LastModified, Priority, RequestContext, SitemapEntry, SitemapUrl};

/// Library version string.
pub const VERSION: &str = concat!("sitemapxml ", env!("CARGO_PKG_VERSION"));

// Module declarations
pub mod config;
pub mod core;
pub mod error;
pub mod types;
pub mod url;

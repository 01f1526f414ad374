//! The sitemap builder.
//!
//! A [`SitemapBuilder`] is created once per sitemap, collects entries keyed
//! by their absolute URL and renders them to sitemaps.org XML.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::format::{Item, StrftimeItems};
use chrono::Utc;
use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::config::SitemapConfig;
use crate::core::renderer::render_sitemap;
use crate::core::transformer::{DefaultTransformer, XslTransformer};
use crate::error::{Result, SitemapError};
use crate::types::{ChangeFrequency, LastModified, Priority, RequestContext, SitemapEntry, SitemapUrl};
use crate::url::normalizer::{base_url_from_request, parse_base_url, resolve_url};
use crate::url::utils::{url_depth, DEPTH_BUCKETS};

/// strftime equivalent of ISO-8601 (`2009-06-15T12:30:00+03:00`).
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

const DEFAULT_FREQUENCIES: [ChangeFrequency; DEPTH_BUCKETS] = [
    ChangeFrequency::Daily,
    ChangeFrequency::Weekly,
    ChangeFrequency::Monthly,
];

const DEFAULT_PRIORITIES: [Priority; DEPTH_BUCKETS] = [Priority(1.0), Priority(0.8), Priority(0.4)];

/// Content type used when the raw sitemap XML is served.
pub const XML_CONTENT_TYPE: &str = "text/xml";

/// A rendered sitemap ready to be sent as an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapResponse {
    /// `Some("text/xml")` for raw XML, `None` when a stylesheet was applied
    pub content_type: Option<&'static str>,
    /// Full response body
    pub body: String,
}

/// Collects URLs and renders them as a sitemap.
#[derive(Debug, Clone)]
pub struct SitemapBuilder {
    base_url: String,
    root_url: String,
    date_format: String,
    priorities: [Priority; DEPTH_BUCKETS],
    frequencies: [ChangeFrequency; DEPTH_BUCKETS],
    stylesheet: Option<PathBuf>,
    entries: IndexMap<String, SitemapEntry>,
}

impl SitemapBuilder {
    /// Create a builder for an explicit base URL.
    ///
    /// # Examples
    ///
    /// ```
    /// use sitemapxml::SitemapBuilder;
    ///
    /// let builder = SitemapBuilder::new("http://example.com/blog/")?;
    /// assert_eq!(builder.root_url(), "http://example.com");
    /// assert_eq!(builder.base_url(), "http://example.com/blog");
    ///
    /// assert!(SitemapBuilder::new("not-a-url").is_err());
    /// # Ok::<(), sitemapxml::SitemapError>(())
    /// ```
    pub fn new(base_url: &str) -> Result<Self> {
        let (root_url, base_url) = parse_base_url(base_url)?;
        Ok(Self::with_urls(root_url, base_url))
    }

    /// Create a builder whose base URL is inferred from the current request.
    pub fn from_request(ctx: &RequestContext) -> Self {
        let (root_url, base_url) = base_url_from_request(ctx);
        Self::with_urls(root_url, base_url)
    }

    /// Create a builder from a loaded configuration, adding its URLs in order.
    pub fn from_config(config: &SitemapConfig) -> Result<Self> {
        let mut builder = Self::new(&config.base_url)?;

        if let Some(date_format) = &config.date_format {
            builder.set_date_format(date_format)?;
        }
        if let Some([d0, d1, d2]) = config.priorities {
            builder.set_priorities(d0, d1, d2);
        }
        if let Some([d0, d1, d2]) = config.frequencies {
            builder.set_frequencies(d0, d1, d2);
        }
        if let Some(stylesheet) = &config.stylesheet {
            builder.set_stylesheet(stylesheet);
        }

        builder.add_urls(config.urls.iter().map(|u| u.to_sitemap_url()));
        Ok(builder)
    }

    fn with_urls(root_url: String, base_url: String) -> Self {
        debug!(root_url = %root_url, base_url = %base_url, "created sitemap builder");

        Self {
            base_url,
            root_url,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            priorities: DEFAULT_PRIORITIES,
            frequencies: DEFAULT_FREQUENCIES,
            stylesheet: None,
            entries: IndexMap::new(),
        }
    }

    /// Prefix for base-relative URLs, without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `scheme://host[:port]`, prefix for root-relative URLs.
    pub fn root_url(&self) -> &str {
        &self.root_url
    }

    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    pub fn stylesheet(&self) -> Option<&Path> {
        self.stylesheet.as_deref()
    }

    pub fn priorities(&self) -> [Priority; DEPTH_BUCKETS] {
        self.priorities
    }

    pub fn frequencies(&self) -> [ChangeFrequency; DEPTH_BUCKETS] {
        self.frequencies
    }

    /// Entries in output order.
    pub fn entries(&self) -> impl Iterator<Item = &SitemapEntry> {
        self.entries.values()
    }

    /// Look up an entry by its absolute URL.
    pub fn get(&self, url: &str) -> Option<&SitemapEntry> {
        self.entries.get(url)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Set the default change frequencies for depth buckets 0, 1 and 2.
    ///
    /// Only affects URLs added afterwards.
    pub fn set_frequencies(&mut self, d0: ChangeFrequency, d1: ChangeFrequency, d2: ChangeFrequency) {
        self.frequencies = [d0, d1, d2];
    }

    /// Set the default priorities for depth buckets 0, 1 and 2.
    ///
    /// Only affects URLs added afterwards.
    pub fn set_priorities(&mut self, d0: Priority, d1: Priority, d2: Priority) {
        self.priorities = [d0, d1, d2];
    }

    /// Set the XSL stylesheet referenced by the output and used for transforms.
    pub fn set_stylesheet(&mut self, path: impl Into<PathBuf>) {
        self.stylesheet = Some(path.into());
    }

    /// Set the strftime pattern used for `<lastmod>`.
    pub fn set_date_format(&mut self, date_format: &str) -> Result<()> {
        if StrftimeItems::new(date_format).any(|item| matches!(item, Item::Error)) {
            return Err(SitemapError::InvalidDateFormat(date_format.to_string()));
        }
        self.date_format = date_format.to_string();
        Ok(())
    }

    /// Add a URL, replacing any existing entry for the same absolute URL.
    ///
    /// Missing frequency or priority is taken from the defaults of the URL's
    /// depth bucket. A replaced entry keeps its original position.
    ///
    /// # Examples
    ///
    /// ```
    /// use sitemapxml::{ChangeFrequency, LastModified, SitemapBuilder};
    ///
    /// let mut builder = SitemapBuilder::new("http://example.com")?;
    /// builder.add_url("/news/", LastModified::Omit, None, None);
    ///
    /// let entry = builder.get("http://example.com/news/").unwrap();
    /// assert_eq!(entry.change_frequency, ChangeFrequency::Weekly);
    /// assert_eq!(entry.priority.to_string(), "0.8");
    /// # Ok::<(), sitemapxml::SitemapError>(())
    /// ```
    pub fn add_url(
        &mut self,
        url: &str,
        last_modified: impl Into<LastModified>,
        frequency: Option<ChangeFrequency>,
        priority: Option<Priority>,
    ) {
        let url = resolve_url(url, &self.root_url, &self.base_url);

        let (change_frequency, priority) = match (frequency, priority) {
            (Some(frequency), Some(priority)) => (frequency, priority),
            (frequency, priority) => {
                let depth = url_depth(&url);
                trace!(url = %url, depth, "inferred depth bucket");
                (
                    frequency.unwrap_or(self.frequencies[depth]),
                    priority.unwrap_or(self.priorities[depth]),
                )
            }
        };

        let last_modified = match last_modified.into() {
            LastModified::Now => Some(Utc::now().fixed_offset()),
            LastModified::At(timestamp) => Some(timestamp),
            LastModified::Omit => None,
        };

        let entry = SitemapEntry {
            url: url.clone(),
            last_modified,
            change_frequency,
            priority,
        };

        let replaced = self.entries.contains_key(&url);
        debug!(url = %url, %change_frequency, %priority, replaced, "added sitemap entry");
        self.entries.insert(url, entry);
    }

    /// Add several URLs in order; later duplicates replace earlier ones.
    pub fn add_urls<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = SitemapUrl>,
    {
        for item in items {
            self.add_url(&item.url, item.last_modified, item.frequency, item.priority);
        }
    }

    /// Render the sitemap, optionally transformed by the configured stylesheet.
    pub fn build(&self, apply_stylesheet: bool) -> Result<String> {
        self.build_with(apply_stylesheet, &DefaultTransformer::default())
    }

    /// Like [`build`](Self::build) but with a caller-supplied XSLT engine.
    pub fn build_with(&self, apply_stylesheet: bool, transformer: &dyn XslTransformer) -> Result<String> {
        debug!(entries = self.entries.len(), apply_stylesheet, "building sitemap");

        let xml = render_sitemap(self.entries.values(), &self.date_format, self.stylesheet())?;
        if !apply_stylesheet {
            return Ok(xml);
        }

        let stylesheet = self.stylesheet().ok_or(SitemapError::MissingStylesheet)?;
        transformer.transform(&xml, stylesheet)
    }

    /// Render the sitemap as an HTTP response body.
    pub fn show(&self, apply_stylesheet: bool) -> Result<SitemapResponse> {
        let body = self.build(apply_stylesheet)?;
        let content_type = (!apply_stylesheet).then_some(XML_CONTENT_TYPE);

        Ok(SitemapResponse { content_type, body })
    }

    /// Render the sitemap into a writer.
    pub fn write_to<W: Write>(&self, mut writer: W, apply_stylesheet: bool) -> Result<()> {
        let output = self.build(apply_stylesheet)?;
        writer.write_all(output.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Render the sitemap into a file, creating or truncating it.
    pub fn write_to_file(&self, path: impl AsRef<Path>, apply_stylesheet: bool) -> Result<()> {
        let path = path.as_ref();
        let output = self.build(apply_stylesheet)?;

        fs::write(path, output).map_err(|source| SitemapError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), entries = self.entries.len(), "wrote sitemap");
        Ok(())
    }
}

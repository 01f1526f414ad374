//! Sitemap configuration loaded from TOML.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, SitemapError};
use crate::types::{ChangeFrequency, LastModified, Priority, SitemapUrl};

/// Builder settings and an optional list of URLs.
///
/// ```toml
/// base_url = "http://example.com/blog"
/// priorities = [1.0, 0.8, 0.4]
/// frequencies = ["daily", "weekly", "monthly"]
///
/// [[urls]]
/// loc = "/news/"
/// changefreq = "hourly"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SitemapConfig {
    pub base_url: String,

    /// strftime pattern for `<lastmod>`
    #[serde(default)]
    pub date_format: Option<String>,

    /// Default priorities for depth buckets 0, 1 and 2
    #[serde(default)]
    pub priorities: Option<[Priority; 3]>,

    /// Default change frequencies for depth buckets 0, 1 and 2
    #[serde(default)]
    pub frequencies: Option<[ChangeFrequency; 3]>,

    #[serde(default)]
    pub stylesheet: Option<PathBuf>,

    #[serde(default)]
    pub urls: Vec<UrlConfig>,
}

/// One `[[urls]]` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrlConfig {
    pub loc: String,

    /// RFC 3339 timestamp; the load time is used when absent
    #[serde(default)]
    pub lastmod: Option<DateTime<FixedOffset>>,

    /// Set to false to leave out `<lastmod>`
    #[serde(default = "default_true")]
    pub include_lastmod: bool,

    #[serde(default)]
    pub changefreq: Option<ChangeFrequency>,

    #[serde(default)]
    pub priority: Option<Priority>,
}

fn default_true() -> bool {
    true
}

impl UrlConfig {
    pub fn to_sitemap_url(&self) -> SitemapUrl {
        let last_modified = if self.include_lastmod {
            LastModified::from(self.lastmod)
        } else {
            LastModified::Omit
        };

        SitemapUrl {
            url: self.loc.clone(),
            last_modified,
            frequency: self.changefreq,
            priority: self.priority,
        }
    }
}

impl SitemapConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            date_format: None,
            priorities: None,
            frequencies: None,
            stylesheet: None,
            urls: Vec::new(),
        }
    }

    /// Parse a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SitemapConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Load a configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| SitemapError::Config(format!("cannot read {}: {}", path.display(), e)))?;

        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), urls = config.urls.len(), "loaded sitemap config");
        Ok(config)
    }
}

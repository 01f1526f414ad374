//! Value types for sitemap entries and request context.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::error::SitemapError;

/// How often a page is expected to change (`<changefreq>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFrequency {
    /// All protocol values, most to least frequent.
    pub const ALL: [ChangeFrequency; 7] = [
        ChangeFrequency::Always,
        ChangeFrequency::Hourly,
        ChangeFrequency::Daily,
        ChangeFrequency::Weekly,
        ChangeFrequency::Monthly,
        ChangeFrequency::Yearly,
        ChangeFrequency::Never,
    ];

    /// The sitemaps.org token for this frequency.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFrequency::Always => "always",
            ChangeFrequency::Hourly => "hourly",
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
            ChangeFrequency::Yearly => "yearly",
            ChangeFrequency::Never => "never",
        }
    }
}

impl fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChangeFrequency {
    type Err = SitemapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        ChangeFrequency::ALL
            .into_iter()
            .find(|freq| freq.as_str().eq_ignore_ascii_case(token))
            .ok_or_else(|| SitemapError::InvalidFrequency(s.to_string()))
    }
}

impl TryFrom<String> for ChangeFrequency {
    type Error = SitemapError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Crawl priority (`<priority>`), guaranteed to lie in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Priority(pub(crate) f64);

impl Priority {
    pub const MIN: Priority = Priority(0.0);
    pub const MAX: Priority = Priority(1.0);

    /// Validate and wrap a priority value.
    pub fn new(value: f64) -> Result<Self, SitemapError> {
        if (0.0..=1.0).contains(&value) {
            Ok(Priority(value))
        } else {
            Err(SitemapError::InvalidPriority(value))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Priority {
    type Error = SitemapError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Priority::new(value)
    }
}

impl From<Priority> for f64 {
    fn from(priority: Priority) -> Self {
        priority.0
    }
}

impl fmt::Display for Priority {
    // Shortest decimal form: 1.0 renders as "1", 0.8 as "0.8".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Timestamp handling for a newly added URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LastModified {
    /// Use the time at which the URL is added.
    #[default]
    Now,
    /// Use the given timestamp.
    At(DateTime<FixedOffset>),
    /// Emit no `<lastmod>` element at all.
    Omit,
}

impl From<DateTime<FixedOffset>> for LastModified {
    fn from(timestamp: DateTime<FixedOffset>) -> Self {
        LastModified::At(timestamp)
    }
}

impl From<Option<DateTime<FixedOffset>>> for LastModified {
    fn from(timestamp: Option<DateTime<FixedOffset>>) -> Self {
        timestamp.map_or(LastModified::Now, LastModified::At)
    }
}

/// A resolved entry as stored in a sitemap.
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    /// Fully qualified URL
    pub url: String,
    /// Modification time, `None` when `<lastmod>` is omitted
    pub last_modified: Option<DateTime<FixedOffset>>,
    /// Change frequency hint
    pub change_frequency: ChangeFrequency,
    /// Crawl priority
    pub priority: Priority,
}

/// Description of a URL to add, used for bulk insertion.
///
/// Frequency and priority left unset are inferred from the URL's path depth.
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapUrl {
    /// Absolute, root-relative (`/page`) or base-relative (`page`) URL
    pub url: String,
    pub last_modified: LastModified,
    pub frequency: Option<ChangeFrequency>,
    pub priority: Option<Priority>,
}

impl SitemapUrl {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            last_modified: LastModified::Now,
            frequency: None,
            priority: None,
        }
    }

    pub fn last_modified(mut self, last_modified: impl Into<LastModified>) -> Self {
        self.last_modified = last_modified.into();
        self
    }

    pub fn frequency(mut self, frequency: ChangeFrequency) -> Self {
        self.frequency = Some(frequency);
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }
}

/// The parts of an incoming HTTP request needed to infer the site's base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    /// Whether the request arrived over TLS
    pub is_secure: bool,
    /// Server host name (example.com)
    pub host: String,
    /// Server port
    pub port: u16,
    /// Path of the script or handler serving the request (/blog/sitemap.php)
    pub script_path: String,
}

impl RequestContext {
    pub fn new(is_secure: bool, host: impl Into<String>, port: u16, script_path: impl Into<String>) -> Self {
        Self {
            is_secure,
            host: host.into(),
            port,
            script_path: script_path.into(),
        }
    }

    /// `https` for secure requests, `http` otherwise.
    pub fn scheme(&self) -> &'static str {
        if self.is_secure {
            "https"
        } else {
            "http"
        }
    }

    /// The port when it differs from the scheme's default.
    pub fn explicit_port(&self) -> Option<u16> {
        let default_port = if self.is_secure { 443 } else { 80 };
        (self.port != default_port).then_some(self.port)
    }
}

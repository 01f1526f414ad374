//! Path extraction and depth-bucket inference.

use url::Url;

/// Number of depth buckets used for default priority and frequency.
pub const DEPTH_BUCKETS: usize = 3;

/// Return the path component of an absolute URL.
///
/// Falls back to the text after `scheme://host` when the URL cannot be
/// parsed, and to `/` when there is nothing after the host.
///
/// # Examples
///
/// ```
/// use sitemapxml::url_path;
///
/// assert_eq!(url_path("http://example.com/news/"), "/news/");
/// assert_eq!(url_path("http://example.com"), "/");
/// ```
pub fn url_path(url: &str) -> String {
    if let Ok(parsed) = Url::parse(url) {
        if parsed.has_host() {
            return parsed.path().to_string();
        }
    }

    let after_scheme = url.split_once("://").map_or(url, |(_, rest)| rest);
    match after_scheme.find('/') {
        Some(idx) => after_scheme[idx..].to_string(),
        None => "/".to_string(),
    }
}

/// Classify a URL path into depth bucket 0, 1 or 2.
///
/// The depth is the number of `/` characters minus one, clamped to the last
/// bucket. A single-segment path that is not the root itself (`/news/`,
/// `/about`) is always bucket 1; only `/` lands in bucket 0.
///
/// # Examples
///
/// ```
/// use sitemapxml::depth_bucket;
///
/// assert_eq!(depth_bucket("/"), 0);
/// assert_eq!(depth_bucket("/news/"), 1);
/// assert_eq!(depth_bucket("/a/b/c/d"), 2);
/// ```
pub fn depth_bucket(path: &str) -> usize {
    let slashes = path.matches('/').count();

    let depth = match slashes.checked_sub(1) {
        Some(depth) if depth < DEPTH_BUCKETS => depth,
        _ => DEPTH_BUCKETS - 1,
    };

    if depth == 0 && path.len() > 1 {
        1
    } else {
        depth
    }
}

/// Depth bucket of an absolute URL.
pub fn url_depth(url: &str) -> usize {
    depth_bucket(&url_path(url))
}

//! Base URL parsing and entry URL resolution.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::SitemapError;
use crate::types::RequestContext;

static ROOT_URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(https?://[^/]+)").expect("root URL pattern is a valid regex")
});

/// Split a caller-supplied base URL into `(root_url, base_url)`.
///
/// The input is trimmed and must start with `http://host` or `https://host`
/// (optionally with a port). The root URL is that prefix, the base URL is the
/// whole input without trailing slashes.
///
/// # Examples
///
/// ```
/// use sitemapxml::parse_base_url;
///
/// let (root, base) = parse_base_url(" http://example.com/blog/ ").unwrap();
/// assert_eq!(root, "http://example.com");
/// assert_eq!(base, "http://example.com/blog");
/// ```
pub fn parse_base_url(base_url: &str) -> Result<(String, String), SitemapError> {
    let trimmed = base_url.trim();

    let captures = ROOT_URL_RE
        .captures(trimmed)
        .ok_or_else(|| SitemapError::InvalidBaseUrl(base_url.to_string()))?;
    let root = captures
        .get(1)
        .ok_or_else(|| SitemapError::InvalidBaseUrl(base_url.to_string()))?
        .as_str()
        .to_string();

    Ok((root, trimmed.trim_end_matches('/').to_string()))
}

/// Build `scheme://host[:port]` from a request context.
///
/// The port is left out when it is the scheme's default (80 or 443).
pub fn root_url_from_request(ctx: &RequestContext) -> String {
    match ctx.explicit_port() {
        Some(port) => format!("{}://{}:{}", ctx.scheme(), ctx.host, port),
        None => format!("{}://{}", ctx.scheme(), ctx.host),
    }
}

/// Build `(root_url, base_url)` from a request context.
///
/// The base URL is the root URL followed by the directory of the script
/// path, without trailing slashes.
pub fn base_url_from_request(ctx: &RequestContext) -> (String, String) {
    let root = root_url_from_request(ctx);
    let directory = script_directory(&ctx.script_path);
    let base = format!("{}{}", root, directory).trim_end_matches('/').to_string();

    (root, base)
}

/// Directory part of a script path (`/blog/sitemap.php` -> `/blog`).
fn script_directory(script_path: &str) -> &str {
    let path = script_path.trim_end_matches('/');
    match path.rfind('/') {
        Some(0) => "/",
        Some(idx) => &path[..idx],
        None => "",
    }
}

/// Whether the URL already carries an `http://` or `https://` scheme.
pub fn is_absolute(url: &str) -> bool {
    let lower = url.get(..8).unwrap_or(url).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Resolve an entry URL against the root and base URLs.
///
/// - Absolute URLs are returned unchanged.
/// - Root-relative URLs (`/page`) are prefixed with the root URL.
/// - Anything else is appended to the base URL after a `/`.
pub fn resolve_url(url: &str, root_url: &str, base_url: &str) -> String {
    if is_absolute(url) {
        url.to_string()
    } else if url.starts_with('/') {
        format!("{}{}", root_url, url)
    } else {
        format!("{}/{}", base_url, url)
    }
}

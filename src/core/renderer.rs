//! Sitemap XML rendering and escaping.

use std::fmt::Write;
use std::path::Path;

use chrono::{DateTime, FixedOffset};

use crate::error::SitemapError;
use crate::types::SitemapEntry;

/// XML declaration emitted at the top of every sitemap.
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Opening `<urlset>` tag with the sitemap 0.9 namespace and schema location.
pub const URLSET_OPEN: &str = concat!(
    r#"<urlset xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance""#,
    r#" xsi:schemaLocation="http://www.sitemaps.org/schemas/sitemap/0.9 http://www.sitemaps.org/schemas/sitemap/0.9/sitemap.xsd""#,
    r#" xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#
);

pub const URLSET_CLOSE: &str = "</urlset>";

/// Escape `&`, `<`, `>`, `"` and `'` for use in XML text or attributes.
///
/// # Examples
///
/// ```
/// use sitemapxml::escape_xml;
///
/// assert_eq!(escape_xml("a&b<c>\"d'"), "a&amp;b&lt;c&gt;&quot;d&#039;");
/// ```
pub fn escape_xml(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Format a timestamp with a strftime pattern.
pub fn format_timestamp(
    timestamp: &DateTime<FixedOffset>,
    date_format: &str,
) -> Result<String, SitemapError> {
    let mut out = String::new();
    write!(out, "{}", timestamp.format(date_format))
        .map_err(|_| SitemapError::InvalidDateFormat(date_format.to_string()))?;
    Ok(out)
}

/// Render one `<url>` block, including its trailing newline.
pub fn render_entry(entry: &SitemapEntry, date_format: &str) -> Result<String, SitemapError> {
    let mut block = String::from("\t<url>\n");
    block.push_str(&format!("\t\t<loc>{}</loc>\n", escape_xml(&entry.url)));

    if let Some(timestamp) = &entry.last_modified {
        let date = format_timestamp(timestamp, date_format)?;
        block.push_str(&format!("\t\t<lastmod>{}</lastmod>\n", escape_xml(&date)));
    }

    block.push_str(&format!(
        "\t\t<changefreq>{}</changefreq>\n",
        escape_xml(entry.change_frequency.as_str())
    ));
    block.push_str(&format!(
        "\t\t<priority>{}</priority>\n",
        escape_xml(&entry.priority.to_string())
    ));
    block.push_str("\t</url>\n");

    Ok(block)
}

/// Render a complete sitemap document.
///
/// The stylesheet processing instruction is included whenever a stylesheet
/// is given, whether or not the caller goes on to apply it.
pub fn render_sitemap<'a, I>(
    entries: I,
    date_format: &str,
    stylesheet: Option<&Path>,
) -> Result<String, SitemapError>
where
    I: IntoIterator<Item = &'a SitemapEntry>,
{
    let mut xml = String::from(XML_DECLARATION);
    xml.push('\n');

    if let Some(path) = stylesheet {
        xml.push_str(&format!(
            "<?xml-stylesheet type=\"text/xsl\" href=\"{}\"?>\n",
            escape_xml(&path.to_string_lossy())
        ));
    }

    xml.push_str(URLSET_OPEN);
    xml.push('\n');

    for entry in entries {
        xml.push_str(&render_entry(entry, date_format)?);
    }

    xml.push_str(URLSET_CLOSE);
    Ok(xml)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ChangeFrequency, Priority};
    use chrono::TimeZone;

    fn entry(url: &str, last_modified: Option<DateTime<FixedOffset>>) -> SitemapEntry {
        SitemapEntry {
            url: url.to_string(),
            last_modified,
            change_frequency: ChangeFrequency::Weekly,
            priority: Priority::new(0.8).unwrap(),
        }
    }

    fn timestamp() -> DateTime<FixedOffset> {
        FixedOffset::east_opt(3 * 3600)
            .unwrap()
            .with_ymd_and_hms(2009, 6, 15, 12, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_escape_leaves_plain_text() {
        assert_eq!(escape_xml("http://example.com/a/b?c=d"), "http://example.com/a/b?c=d");
        assert_eq!(escape_xml("пример"), "пример");
    }

    #[test]
    fn test_escape_special_characters() {
        assert_eq!(
            escape_xml("http://e.com/?a=1&b=<2>\"x\""),
            "http://e.com/?a=1&amp;b=&lt;2&gt;&quot;x&quot;"
        );
        assert_eq!(escape_xml("&amp;"), "&amp;amp;");
    }

    #[test]
    fn test_format_timestamp_iso() {
        let formatted = format_timestamp(&timestamp(), "%Y-%m-%dT%H:%M:%S%:z").unwrap();
        assert_eq!(formatted, "2009-06-15T12:30:00+03:00");
    }

    #[test]
    fn test_render_entry_with_lastmod() {
        let block = render_entry(&entry("http://e.com/news/", Some(timestamp())), "%Y-%m-%d").unwrap();
        assert_eq!(
            block,
            "\t<url>\n\
             \t\t<loc>http://e.com/news/</loc>\n\
             \t\t<lastmod>2009-06-15</lastmod>\n\
             \t\t<changefreq>weekly</changefreq>\n\
             \t\t<priority>0.8</priority>\n\
             \t</url>\n"
        );
    }

    #[test]
    fn test_render_entry_without_lastmod() {
        let block = render_entry(&entry("http://e.com/news/", None), "%Y-%m-%d").unwrap();
        assert!(!block.contains("lastmod"));
        assert!(block.contains("<changefreq>weekly</changefreq>"));
    }

    #[test]
    fn test_render_empty_sitemap() {
        let xml = render_sitemap(std::iter::empty::<&SitemapEntry>(), "%Y", None).unwrap();
        assert_eq!(
            xml,
            format!("{}\n{}\n{}", XML_DECLARATION, URLSET_OPEN, URLSET_CLOSE)
        );
    }

    #[test]
    fn test_render_stylesheet_instruction() {
        let xml = render_sitemap(std::iter::empty::<&SitemapEntry>(), "%Y", Some(Path::new("/xsl/sitemap.xsl"))).unwrap();
        let lines: Vec<&str> = xml.lines().collect();
        assert_eq!(lines[0], XML_DECLARATION);
        assert_eq!(
            lines[1],
            r#"<?xml-stylesheet type="text/xsl" href="/xsl/sitemap.xsl"?>"#
        );
        assert_eq!(lines[2], URLSET_OPEN);
    }
}

//! Tests for base URL parsing, URL resolution and depth buckets.

use sitemapxml::*;

#[test]
fn test_base_url_parsing() {
    let test_cases = vec![
        ("http://example.com", "http://example.com", "http://example.com"),
        ("http://example.com/", "http://example.com", "http://example.com"),
        ("  https://example.com/blog/  ", "https://example.com", "https://example.com/blog"),
        ("http://localhost:8080/app", "http://localhost:8080", "http://localhost:8080/app"),
        ("HTTP://EXAMPLE.COM/Docs", "HTTP://EXAMPLE.COM", "HTTP://EXAMPLE.COM/Docs"),
    ];

    for (input, expected_root, expected_base) in test_cases {
        let (root, base) = parse_base_url(input).unwrap();
        assert_eq!(root, expected_root, "root URL mismatch for: {}", input);
        assert_eq!(base, expected_base, "base URL mismatch for: {}", input);
    }
}

#[test]
fn test_base_url_rejection() {
    let invalid = vec!["not-a-url", "example.com", "ftp://example.com", "//example.com", "http://"];

    for input in invalid {
        let result = SitemapBuilder::new(input);
        assert!(result.is_err(), "Should reject base URL: {}", input);
    }
}

#[test]
fn test_url_resolution() {
    let root = "http://example.com";
    let base = "http://example.com/blog";

    let test_cases = vec![
        ("post.html", "http://example.com/blog/post.html"),
        ("2009/06/post.html", "http://example.com/blog/2009/06/post.html"),
        ("/post.html", "http://example.com/post.html"),
        ("/", "http://example.com/"),
        ("http://other.org/", "http://other.org/"),
        ("Http://other.org/", "Http://other.org/"),
        ("https://other.org/", "https://other.org/"),
    ];

    for (input, expected) in test_cases {
        assert_eq!(resolve_url(input, root, base), expected, "Resolution failed for: {}", input);
    }
}

#[test]
fn test_depth_buckets() {
    let test_cases = vec![
        ("http://example.com/", 0),
        ("http://example.com/news/", 1),
        ("http://example.com/news", 1),
        ("http://example.com/news/1", 1),
        ("http://example.com/news/1/", 2),
        ("http://example.com/news/3/view.html", 2),
        ("http://example.com/a/b/c/d", 2),
        ("https://a.io/x/", 1),
    ];

    for (url, expected) in test_cases {
        assert_eq!(url_depth(url), expected, "Depth mismatch for: {}", url);
    }
}

#[test]
fn test_depth_ignores_query_slashes() {
    assert_eq!(url_path("http://example.com/page?next=/a/b/c"), "/page");
    assert_eq!(url_depth("http://example.com/page?next=/a/b/c"), 1);
}

#[test]
fn test_depth_uses_resolved_dot_segments() {
    assert_eq!(url_path("http://example.com/a/b/../"), "/a/");
    assert_eq!(url_depth("http://example.com/a/b/../"), 1);
    assert_eq!(url_depth("http://example.com/a/./b/"), 2);

    let mut sitemap = SitemapBuilder::new("http://example.com").unwrap();
    sitemap.add_url("/a/b/../", LastModified::Omit, None, None);

    // The stored URL keeps the caller's spelling
    let entry = sitemap.get("http://example.com/a/b/../").unwrap();
    assert_eq!(entry.change_frequency, ChangeFrequency::Weekly);
    assert_eq!(entry.priority.to_string(), "0.8");
}

#[test]
fn test_short_host_depth() {
    // One-letter hosts used to break fixed-offset path extraction
    assert_eq!(url_path("http://a/"), "/");
    assert_eq!(url_depth("http://a/"), 0);
    assert_eq!(url_depth("http://a/b/"), 1);
}

#[test]
fn test_custom_depth_defaults() {
    let mut sitemap = SitemapBuilder::new("http://example.com").unwrap();
    sitemap.set_frequencies(ChangeFrequency::Always, ChangeFrequency::Hourly, ChangeFrequency::Never);
    sitemap.set_priorities(
        Priority::new(0.9).unwrap(),
        Priority::new(0.6).unwrap(),
        Priority::new(0.3).unwrap(),
    );

    sitemap.add_url("/", LastModified::Omit, None, None);
    sitemap.add_url("/a/", LastModified::Omit, None, None);
    sitemap.add_url("/a/b/", LastModified::Omit, None, None);

    let got: Vec<(ChangeFrequency, String)> = sitemap
        .entries()
        .map(|e| (e.change_frequency, e.priority.to_string()))
        .collect();

    assert_eq!(
        got,
        vec![
            (ChangeFrequency::Always, "0.9".to_string()),
            (ChangeFrequency::Hourly, "0.6".to_string()),
            (ChangeFrequency::Never, "0.3".to_string()),
        ]
    );
}

use sitemapxml::{
    ChangeFrequency, LastModified, Priority, RequestContext, SitemapBuilder, SitemapConfig, SitemapUrl,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    eprintln!("{}", sitemapxml::VERSION);

    // A config file given on the command line takes over the demo entries
    if let Some(path) = std::env::args().nth(1) {
        let result = SitemapConfig::from_file(&path)
            .and_then(|config| SitemapBuilder::from_config(&config))
            .and_then(|builder| builder.write_to(std::io::stdout().lock(), false));

        if let Err(e) = result {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        return;
    }

    let ctx = RequestContext::new(false, "example.com", 80, "/blog/sitemap.php");
    let mut sitemap = SitemapBuilder::from_request(&ctx);
    eprintln!("Base URL: {}  Root URL: {}", sitemap.base_url(), sitemap.root_url());

    sitemap.add_url("/", LastModified::Now, None, None);

    let mut items = vec![SitemapUrl::new("/news/"), SitemapUrl::new("post.html?id=1&view=full")];
    match Priority::new(0.4) {
        Ok(priority) => items.push(SitemapUrl::new("/news/1").priority(priority)),
        Err(e) => eprintln!("Error: {}", e),
    }
    match "lal".parse::<ChangeFrequency>() {
        Ok(frequency) => items.push(SitemapUrl::new("/news/3/view.html").frequency(frequency)),
        Err(e) => eprintln!("Skipping /news/3/view.html: {}", e),
    }
    sitemap.add_urls(items);

    if let Err(e) = sitemap.write_to(std::io::stdout().lock(), false) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
    println!();
}

//! Breadth-limited same-host crawling.
//!
//! A FIFO frontier seeded with the homepage, bounded by a page budget and a
//! link depth. Link extraction uses a tolerant anchor-tag regex rather than
//! a full HTML parser, and linked pages are fetched when they are enqueued,
//! so the frontier only ever holds pages that actually answered. The crawl
//! is intentionally sequential: each page's links determine the next fetch,
//! and sequential traversal keeps the page-budget accounting exact.
//!
//! Every call builds fresh state; nothing is shared between crawls.

use std::collections::{HashSet, VecDeque};
use std::sync::LazyLock;

use log::debug;
use regex::Regex;
use url::Url;

use crate::fetch::{fetch_page, fetch_text_with_fallback, host_matches};
use crate::paths::normalize_path;

/// Tolerant anchor-tag href scanner.
static HREF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<a\b[^>]*?href\s*=\s*["']([^"']+)["']"#).expect("href regex is valid")
});

/// A page pulled off the crawl frontier.
///
/// The HTML is held only until its links are extracted; nodes are not
/// retained in any final result.
struct CrawlNode {
    url: Url,
    depth: usize,
    html: String,
}

/// Crawls the target and returns the distinct same-host paths discovered.
///
/// The homepage is fetched over https-then-http; if neither protocol
/// answers, the crawl returns an empty list (a recoverable condition, not an
/// error). Links are followed breadth-first up to `depth` hops from the
/// seed, and at most `page_limit` distinct pages are fetched in total. A
/// link's path is recorded even when the link itself is beyond the depth or
/// page budget.
pub async fn crawl(
    client: &reqwest::Client,
    domain: &str,
    page_limit: usize,
    depth: usize,
) -> Vec<String> {
    let Some((seed_url, seed_html)) = fetch_text_with_fallback(client, domain, "/").await else {
        debug!("crawl seed unreachable for {domain} over both protocols");
        return Vec::new();
    };
    if page_limit == 0 {
        return Vec::new();
    }

    let mut seed = seed_url;
    seed.set_fragment(None);

    let mut frontier: VecDeque<CrawlNode> = VecDeque::new();
    let mut visited: HashSet<String> = HashSet::new();
    // URLs a fetch was ever attempted for, so dead links are not re-probed.
    let mut attempted: HashSet<String> = HashSet::new();
    let mut paths: Vec<String> = Vec::new();
    let mut seen_paths: HashSet<String> = HashSet::new();

    attempted.insert(seed.to_string());
    frontier.push_back(CrawlNode {
        url: seed,
        depth: 0,
        html: seed_html,
    });

    while let Some(node) = frontier.pop_front() {
        if visited.len() >= page_limit {
            break;
        }
        if !visited.insert(node.url.to_string()) {
            continue;
        }

        for href in extract_hrefs(&node.html) {
            if is_non_navigational(href) {
                continue;
            }
            let Ok(mut resolved) = node.url.join(href) else {
                // Unparseable links are a skip, not a crash.
                continue;
            };
            resolved.set_fragment(None);
            if !host_matches(&resolved, domain) {
                continue;
            }

            let path = normalize_path(resolved.path());
            if seen_paths.insert(path.clone()) {
                paths.push(path);
            }

            if node.depth + 1 <= depth
                && visited.len() + frontier.len() < page_limit
                && !attempted.contains(resolved.as_str())
            {
                attempted.insert(resolved.to_string());
                if let Some(html) = fetch_page(client, &resolved).await {
                    frontier.push_back(CrawlNode {
                        url: resolved,
                        depth: node.depth + 1,
                        html,
                    });
                }
            }
        }
    }

    debug!(
        "crawl of {domain} visited {} pages, discovered {} paths",
        visited.len(),
        paths.len()
    );
    paths
}

/// Extracts raw href attribute values from anchor tags.
pub(crate) fn extract_hrefs<'a>(html: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    HREF_RE
        .captures_iter(html)
        .filter_map(|cap| cap.get(1).map(|m| m.as_str()))
}

/// Filters out link schemes that never lead to a page.
pub(crate) fn is_non_navigational(href: &str) -> bool {
    let lower = href.trim_start().to_ascii_lowercase();
    lower.starts_with("mailto:") || lower.starts_with("tel:") || lower.starts_with("javascript:")
}

//! Sitemap harvesting.
//!
//! Discovers sitemap documents through robots.txt `Sitemap:` directives and
//! the conventional default locations, then pulls same-host paths out of
//! them. Sitemaps are treated as text and scanned with a tolerant `<loc>`
//! regex rather than parsed as strict XML -- real-world sitemaps are
//! frequently malformed and a best-effort scan extracts more than a
//! validating parser would. Any failure to fetch or scan an individual
//! sitemap is swallowed; the harvest continues with the rest.

use std::collections::HashSet;
use std::sync::LazyLock;

use log::debug;
use regex::Regex;
use url::Url;

use crate::config::Config;
use crate::fetch::{fetch_page, fetch_text_with_fallback, host_matches};
use crate::paths::normalize_path;

/// Conventional sitemap locations probed even without a robots.txt pointer.
const DEFAULT_SITEMAP_LOCATIONS: [&str; 3] =
    ["/sitemap.xml", "/sitemap_index.xml", "/sitemap-index.xml"];

/// Tolerant `<loc>` scanner; matches across lines and ignores tag case.
static LOC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<loc>\s*([^<]+?)\s*</loc>").expect("loc regex is valid"));

/// Harvests same-host paths from the target's sitemaps.
///
/// Fetches `/robots.txt` over https-then-http, registers every `Sitemap:`
/// directive plus the default locations, fetches at most
/// `config.max_sitemap_fetches` sitemaps in discovery order, and collects up
/// to `config.max_sitemap_paths` distinct paths whose hostname exactly
/// equals the target.
pub async fn harvest_sitemap_paths(
    client: &reqwest::Client,
    config: &Config,
    domain: &str,
) -> Vec<String> {
    let robots = fetch_text_with_fallback(client, domain, "/robots.txt").await;

    // Default locations follow the protocol that robots.txt answered on;
    // when robots was unreachable both protocols are candidates, https first.
    let default_bases: Vec<String> = match &robots {
        Some((url, _)) => vec![format!("{}://{}", url.scheme(), url.authority())],
        None => vec![format!("https://{domain}"), format!("http://{domain}")],
    };

    let mut refs: Vec<String> = Vec::new();
    let mut seen_refs: HashSet<String> = HashSet::new();
    if let Some((_, body)) = &robots {
        for sitemap_url in sitemap_refs_from_robots(body, domain) {
            if seen_refs.insert(sitemap_url.clone()) {
                refs.push(sitemap_url);
            }
        }
    }
    for location in DEFAULT_SITEMAP_LOCATIONS {
        for base in &default_bases {
            let url = format!("{base}{location}");
            if seen_refs.insert(url.clone()) {
                refs.push(url);
            }
        }
    }

    let mut paths: Vec<String> = Vec::new();
    let mut seen_paths: HashSet<String> = HashSet::new();
    for sitemap_url in refs.iter().take(config.max_sitemap_fetches) {
        let Ok(url) = Url::parse(sitemap_url) else {
            debug!("skipping unparseable sitemap URL: {sitemap_url}");
            continue;
        };
        let Some(body) = fetch_page(client, &url).await else {
            continue;
        };
        for path in extract_loc_paths(&body, domain) {
            if paths.len() >= config.max_sitemap_paths {
                debug!(
                    "sitemap harvest for {domain} hit the {} path cap",
                    config.max_sitemap_paths
                );
                return paths;
            }
            if seen_paths.insert(path.clone()) {
                paths.push(path);
            }
        }
    }

    debug!("harvested {} sitemap paths for {domain}", paths.len());
    paths
}

/// Extracts sitemap URLs from robots.txt `Sitemap:` directives.
///
/// Directive matching is case-insensitive. Absolute URLs are kept as-is;
/// relative ones are registered against both protocol candidates, https
/// first.
pub(crate) fn sitemap_refs_from_robots(robots: &str, authority: &str) -> Vec<String> {
    let mut refs = Vec::new();
    for line in robots.lines() {
        let trimmed = line.trim();
        let Some(rest) = strip_directive(trimmed, "sitemap:") else {
            continue;
        };
        let value = rest.trim();
        if value.is_empty() {
            continue;
        }
        if value.starts_with("http://") || value.starts_with("https://") {
            refs.push(value.to_string());
        } else {
            let path = if value.starts_with('/') {
                value.to_string()
            } else {
                format!("/{value}")
            };
            refs.push(format!("https://{authority}{path}"));
            refs.push(format!("http://{authority}{path}"));
        }
    }
    refs
}

/// Case-insensitive directive prefix strip.
fn strip_directive<'a>(line: &'a str, directive: &str) -> Option<&'a str> {
    match line.get(..directive.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(directive) => {
            Some(&line[directive.len()..])
        }
        _ => None,
    }
}

/// Extracts same-host paths from a sitemap body.
///
/// Scans for `<loc>` values, keeps those whose hostname exactly equals the
/// target domain, and normalizes each to a single leading slash. Values
/// that do not parse as URLs are skipped.
pub(crate) fn extract_loc_paths(body: &str, domain: &str) -> Vec<String> {
    LOC_RE
        .captures_iter(body)
        .filter_map(|cap| {
            let loc = cap.get(1)?.as_str().trim();
            let url = Url::parse(loc).ok()?;
            if host_matches(&url, domain) {
                Some(normalize_path(url.path()))
            } else {
                None
            }
        })
        .collect()
}

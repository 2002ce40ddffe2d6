//! Path candidate discovery and verification.
//!
//! Unions three discovery channels -- sitemap harvesting, crawling, and the
//! static common-path list -- and probes the merged candidates with
//! concurrent HEAD requests. Sitemap and crawler results are merged first,
//! so when the candidate cap truncates the set, organically discovered paths
//! take priority over the static guesses.

mod common;

pub use common::COMMON_PATHS;

use std::collections::HashSet;

use futures::future::join_all;
use log::{debug, warn};

use crate::config::Config;
use crate::crawl::crawl;
use crate::error_handling::ReconError;
use crate::models::{PathVerification, ServiceError};
use crate::sitemap::harvest_sitemap_paths;

/// Service label used in error entries.
const SERVICE: &str = "path_discovery";

/// Outcome of a path-discovery run.
#[derive(Debug, Clone)]
pub struct PathDiscovery {
    /// Candidates that verified positively
    pub paths: Vec<PathVerification>,
    /// True iff at least one candidate verified positively
    pub success: bool,
    /// Systemic failures only; individual probe failures are not errors
    pub errors: Vec<ServiceError>,
}

/// Per-candidate probe outcome, before filtering.
enum ProbeOutcome {
    Kept(PathVerification),
    Absent,
    Unreachable,
}

/// Discovers and verifies interesting paths on the target.
///
/// Sitemap harvesting and crawling run concurrently; their paths are merged
/// with [`COMMON_PATHS`], normalized, deduplicated, and capped at
/// `config.max_path_candidates`. Every candidate is then probed with a HEAD
/// request over `https://` (bounded redirects, per-request timeout), all
/// probes in flight at once.
pub async fn discover_paths(
    client: &reqwest::Client,
    head_client: &reqwest::Client,
    config: &Config,
    domain: &str,
) -> PathDiscovery {
    let (sitemap_paths, crawl_paths) = tokio::join!(
        harvest_sitemap_paths(client, config, domain),
        crawl(client, domain, config.crawl_page_limit, config.crawl_depth),
    );
    debug!(
        "path sources for {domain}: {} from sitemaps, {} from crawl, {} static",
        sitemap_paths.len(),
        crawl_paths.len(),
        COMMON_PATHS.len()
    );

    let candidates = merge_candidates(
        &sitemap_paths,
        &crawl_paths,
        COMMON_PATHS,
        config.max_path_candidates,
    );

    let base = format!("https://{domain}");
    verify_candidates(head_client, &base, candidates, domain).await
}

/// Probes a candidate set against a base URL and classifies the outcomes.
///
/// Split out from [`discover_paths`] so the verification logic can be
/// exercised against an arbitrary base.
pub async fn verify_candidates(
    head_client: &reqwest::Client,
    base_url: &str,
    candidates: Vec<String>,
    domain: &str,
) -> PathDiscovery {
    let base = base_url.trim_end_matches('/');
    let total = candidates.len();

    let probes = candidates.into_iter().map(|path| {
        let url = format!("{base}{path}");
        async move {
            match head_client.head(&url).send().await {
                Ok(resp) => {
                    let status = resp.status().as_u16();
                    if keep_status(status) {
                        ProbeOutcome::Kept(PathVerification {
                            path,
                            status: Some(status),
                            size: resp.content_length(),
                            error: None,
                        })
                    } else {
                        ProbeOutcome::Absent
                    }
                }
                Err(e) if e.is_redirect() => {
                    // Redirect chain exceeded the hop bound; the resource
                    // never settled on a final status.
                    ProbeOutcome::Absent
                }
                Err(e) => {
                    debug!("probe failed for {url}: {e}");
                    ProbeOutcome::Unreachable
                }
            }
        }
    });

    let mut paths = Vec::new();
    let mut unreachable = 0usize;
    for outcome in join_all(probes).await {
        match outcome {
            ProbeOutcome::Kept(verification) => paths.push(verification),
            ProbeOutcome::Absent => {}
            ProbeOutcome::Unreachable => unreachable += 1,
        }
    }

    let mut errors = Vec::new();
    if total > 0 && unreachable == total {
        // Every single probe failed at the network level: the target itself
        // is unreachable, which is systemic rather than per-candidate.
        warn!("no path candidate reachable for {domain} ({total} probes failed)");
        errors.push(ServiceError::new(
            SERVICE,
            ReconError::Systemic(format!(
                "none of {total} candidates reachable over {base}"
            )),
        ));
    }

    let success = !paths.is_empty();
    PathDiscovery {
        paths,
        success,
        errors,
    }
}

/// Merges the three candidate sources in priority order.
///
/// Paths are normalized to a single leading slash and deduplicated in
/// insertion order before the merged set is truncated to `cap` entries.
pub(crate) fn merge_candidates(
    sitemap_paths: &[String],
    crawl_paths: &[String],
    common_paths: &[&str],
    cap: usize,
) -> Vec<String> {
    let mut merged: Vec<String> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    let sources = sitemap_paths
        .iter()
        .map(String::as_str)
        .chain(crawl_paths.iter().map(String::as_str))
        .chain(common_paths.iter().copied());

    for raw in sources {
        if merged.len() >= cap {
            break;
        }
        let path = normalize_path(raw);
        if seen.insert(path.clone()) {
            merged.push(path);
        }
    }

    merged
}

/// Normalizes a path to exactly one leading slash.
pub(crate) fn normalize_path(path: &str) -> String {
    format!("/{}", path.trim_start_matches('/'))
}

/// Classification rule for probe statuses.
///
/// Success and redirect statuses are kept. Client errors other than 404 are
/// kept too -- a 401/403 marks an access-restricted resource, which is a
/// finding in itself. 404 and server errors are discarded.
pub(crate) fn keep_status(status: u16) -> bool {
    match status {
        200..=399 => true,
        404 => false,
        400..=499 => true,
        _ => false,
    }
}

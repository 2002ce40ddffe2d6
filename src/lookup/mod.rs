//! Domain lookup orchestration.
//!
//! Sequences the engine's sub-operations -- certificate-transparency
//! enumeration, path discovery (sitemaps + crawl + verification), and RDAP
//! normalization -- and folds their outcomes into one aggregate result.
//! The three top-level operations run concurrently with full error
//! isolation: a failure in one never cancels another, it just lands in the
//! aggregate's error list.

use std::sync::Arc;

use anyhow::{Context, Result};
use futures::stream::{FuturesUnordered, StreamExt};
use log::info;

use crate::config::Config;
use crate::domain::basic_info;
use crate::initialization::{init_client, init_head_client};
use crate::models::{DomainLookupResult, ServiceError};
use crate::paths::discover_paths;
use crate::subdomains::find_subdomains;
use crate::whois::lookup_whois;

/// Shared, read-only resources for one or more lookups.
///
/// Holds the configured HTTP clients; safe to share across concurrent
/// lookups since nothing here is mutable.
pub struct LookupContext {
    client: Arc<reqwest::Client>,
    head_client: Arc<reqwest::Client>,
    config: Config,
}

impl LookupContext {
    /// Builds a context from a configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if either HTTP client fails to construct.
    pub fn new(config: Config) -> Result<Self> {
        let client = init_client(&config).context("Failed to initialize HTTP client")?;
        let head_client =
            init_head_client(&config).context("Failed to initialize HEAD client")?;
        Ok(Self {
            client,
            head_client,
            config,
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// Runs a full reconnaissance lookup for one domain.
///
/// The caller is expected to have validated `domain` as a syntactically
/// plausible hostname already; this function does not re-validate.
///
/// The returned aggregate is best-effort: `success` is true iff at least
/// one sub-operation produced usable data, and every isolated failure is
/// appended to `errors`. This function never returns an error itself.
pub async fn lookup_domain(ctx: &LookupContext, domain: &str) -> DomainLookupResult {
    info!("starting domain lookup for {domain}");
    let mut result = DomainLookupResult::new(domain);
    result.basic_info = Some(basic_info(domain));

    let (scan, discovery, whois) = tokio::join!(
        find_subdomains(&ctx.client, &ctx.config, domain),
        discover_paths(&ctx.client, &ctx.head_client, &ctx.config, domain),
        lookup_whois(&ctx.client, &ctx.config, domain),
    );

    result.subdomains = scan.subdomains;
    result.errors.extend(scan.errors);

    result.discovered_paths = discovery.paths;
    result.errors.extend(discovery.errors);

    match whois {
        Ok(record) if !record.is_empty() => result.whois = Some(record),
        // A document with nothing mappable is "no data", not a failure.
        Ok(_) => {}
        Err(e) => {
            result
                .errors
                .push(ServiceError::new("rdap_whois", format!("{e:#}")));
        }
    }

    result.success = result.basic_info.is_some()
        || !result.subdomains.is_empty()
        || !result.discovered_paths.is_empty()
        || result.whois.is_some();

    info!(
        "lookup finished for {domain}: {} subdomains, {} paths, whois {}, {} errors",
        result.subdomains.len(),
        result.discovered_paths.len(),
        if result.whois.is_some() { "yes" } else { "no" },
        result.errors.len()
    );
    result
}

/// Runs lookups for several domains, fanned out in parallel.
///
/// Lookups complete in whatever order the network dictates; the returned
/// vector is re-ordered to match the input, one result per requested
/// domain.
pub async fn lookup_domains(ctx: &LookupContext, domains: &[String]) -> Vec<DomainLookupResult> {
    let mut tasks: FuturesUnordered<_> = domains
        .iter()
        .enumerate()
        .map(|(index, domain)| async move { (index, lookup_domain(ctx, domain).await) })
        .collect();

    let mut slots: Vec<Option<DomainLookupResult>> = (0..domains.len()).map(|_| None).collect();
    while let Some((index, result)) = tasks.next().await {
        slots[index] = Some(result);
    }
    slots.into_iter().flatten().collect()
}

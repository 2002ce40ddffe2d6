//! Subdomain enumeration via certificate transparency.
//!
//! A single read-only query against a CT log aggregator. Certificates issued
//! for a domain reveal the hostnames they covered, so searching the log by
//! suffix surfaces historically issued subdomains without touching the
//! target. Each record's `name_value` can hold multiple newline-separated
//! hostnames (SAN and wildcard entries).

use std::collections::BTreeSet;
use std::time::Duration;

use log::{debug, warn};
use serde::Deserialize;

use crate::config::Config;
use crate::error_handling::{categorize_reqwest_error, ReconError};
use crate::models::ServiceError;

/// Service label used in error entries.
const SERVICE: &str = "certificate_transparency";

/// One certificate record from the CT search endpoint.
#[derive(Debug, Deserialize)]
struct CtRecord {
    #[serde(default)]
    name_value: String,
}

/// Outcome of a certificate-transparency enumeration.
#[derive(Debug, Clone)]
pub struct SubdomainScan {
    /// Discovered hostnames, lowercase, sorted, without duplicates
    pub subdomains: Vec<String>,
    /// True iff at least one subdomain was found
    pub success: bool,
    /// Isolated failures (non-success status, malformed response, transport)
    pub errors: Vec<ServiceError>,
}

impl SubdomainScan {
    fn failed(error: ReconError) -> Self {
        Self {
            subdomains: Vec::new(),
            success: false,
            errors: vec![ServiceError::new(SERVICE, error)],
        }
    }
}

/// Enumerates subdomains of `domain` through the CT search endpoint.
///
/// Queries `<ct_base>/?q=%25.<domain>&output=json` and keeps every
/// lowercase hostname that ends with `.<domain>` and is not the bare domain
/// itself. Wildcard labels (`*.`) are stripped before filtering. Failures
/// never propagate as errors to the caller; they are folded into the
/// returned scan.
pub async fn find_subdomains(
    client: &reqwest::Client,
    config: &Config,
    domain: &str,
) -> SubdomainScan {
    let query_url = format!("{}/?q=%25.{}&output=json", config.ct_base_url, domain);

    let response = match client
        .get(&query_url)
        .timeout(Duration::from_secs(config.ct_timeout_secs))
        .send()
        .await
    {
        Ok(resp) => resp,
        Err(e) => {
            warn!("certificate-transparency query failed for {domain}: {e}");
            return SubdomainScan::failed(categorize_reqwest_error(&e));
        }
    };

    if !response.status().is_success() {
        warn!(
            "certificate-transparency query for {domain} returned HTTP {}",
            response.status()
        );
        return SubdomainScan::failed(ReconError::Status(response.status().as_u16()));
    }

    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            return SubdomainScan::failed(categorize_reqwest_error(&e));
        }
    };

    let records: Vec<CtRecord> = match serde_json::from_str(&body) {
        Ok(records) => records,
        Err(e) => {
            warn!("malformed certificate-transparency response for {domain}: {e}");
            return SubdomainScan::failed(ReconError::Parse(format!(
                "certificate-transparency response was not a JSON record array: {e}"
            )));
        }
    };

    let subdomains = subdomains_from_records(&records, domain);
    debug!(
        "certificate transparency yielded {} subdomains for {domain}",
        subdomains.len()
    );
    let success = !subdomains.is_empty();
    SubdomainScan {
        subdomains,
        success,
        errors: Vec::new(),
    }
}

/// Filters and deduplicates the hostnames in a batch of CT records.
fn subdomains_from_records(records: &[CtRecord], domain: &str) -> Vec<String> {
    let domain_lower = domain.to_lowercase();
    let suffix = format!(".{domain_lower}");
    let mut found: BTreeSet<String> = BTreeSet::new();

    for record in records {
        for raw in record.name_value.split('\n') {
            let mut name = raw.trim().to_lowercase();
            if let Some(stripped) = name.strip_prefix("*.") {
                name = stripped.to_string();
            }
            if name.ends_with(&suffix) && name != domain_lower {
                found.insert(name);
            }
        }
    }

    found.into_iter().collect()
}

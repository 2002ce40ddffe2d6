//! WHOIS registration data via RDAP.
//!
//! A single read-only query against an RDAP service, normalized into the
//! flat [`WhoisRecord`] shape by the pure mapping in [`parse`]. RDAP is the
//! JSON-based successor to WHOIS; no legacy WHOIS fallback is attempted.

mod parse;
mod types;

pub use parse::map_rdap_to_whois;
pub use types::{
    RdapEntity, RdapEvent, RdapNameserver, RdapPublicId, RdapResponse, SecureDns, WhoisRecord,
};

use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use log::debug;

use crate::config::Config;

/// Fetches and normalizes the RDAP registration data for a domain.
///
/// Queries `<rdap_base>/domain/<domain>` with the configured timeout.
///
/// # Errors
///
/// Returns an error on transport failure, a non-success status, or a body
/// that does not decode as an RDAP document. The caller records the error
/// and continues; a failed WHOIS lookup never aborts the wider lookup.
pub async fn lookup_whois(
    client: &reqwest::Client,
    config: &Config,
    domain: &str,
) -> Result<WhoisRecord> {
    let url = format!("{}/domain/{}", config.rdap_base_url, domain);
    debug!("RDAP lookup for {domain} via {url}");

    let response = client
        .get(&url)
        .timeout(Duration::from_secs(config.rdap_timeout_secs))
        .send()
        .await
        .with_context(|| format!("RDAP request failed for {domain}"))?;

    if !response.status().is_success() {
        return Err(anyhow!(
            "RDAP service returned HTTP {} for {domain}",
            response.status()
        ));
    }

    let rdap: RdapResponse = response
        .json()
        .await
        .with_context(|| format!("RDAP response for {domain} was not a valid RDAP document"))?;

    Ok(map_rdap_to_whois(&rdap))
}

//! HTTP client initialization.
//!
//! This module provides functions to initialize the HTTP clients used by the
//! engine: a general-purpose fetch client and a redirect-bounded client for
//! HEAD verification.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::Config;

/// Initializes the general fetch client.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the config
/// - The short target-site timeout (longer per-request timeouts for the
///   certificate-transparency and RDAP endpoints are applied at the call
///   site)
/// - Default redirect following
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.fetch_timeout_secs))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(Arc::new(client))
}

/// Initializes the HEAD verification client.
///
/// Creates a `reqwest::Client` with the redirect policy capped at
/// `config.max_head_redirects` hops, so a probe settles on a final status
/// within a bounded chain.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_head_client(config: &Config) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::limited(config.max_head_redirects))
        .timeout(Duration::from_secs(config.fetch_timeout_secs))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(Arc::new(client))
}

//! Domain name validation and label decomposition.
//!
//! The engine itself assumes its caller already validated the target, so
//! `is_valid_domain` is exposed for the CLI (and any other entry point) to
//! reject garbage before a lookup starts. `basic_info` performs the simple
//! label split (TLD / second-level domain / optional subdomain prefix) that
//! seeds the aggregate result.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Hostname syntax: labels of alphanumerics with interior hyphens, ending in
/// an alphabetic TLD of at least two characters.
static DOMAIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9]([a-zA-Z0-9-]*[a-zA-Z0-9])?(\.[a-zA-Z0-9]([a-zA-Z0-9-]*[a-zA-Z0-9])?)*\.[a-zA-Z]{2,}$")
        .expect("domain regex is valid")
});

/// Structural facts about the target derived from its labels alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicInfo {
    /// The full domain as supplied
    pub domain: String,
    /// The final label (e.g. "com")
    pub tld: String,
    /// The second-level domain label (e.g. "example")
    pub sld: String,
    /// Everything left of the registrable part, if any (e.g. "api.dev")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subdomain: Option<String>,
}

/// Checks whether a string is a syntactically plausible hostname.
///
/// This is a syntax check only; no DNS resolution, no public-suffix
/// awareness. Surrounding whitespace is ignored.
pub fn is_valid_domain(domain: &str) -> bool {
    DOMAIN_RE.is_match(domain.trim())
}

/// Splits a domain into its basic components.
///
/// The split is purely positional: the last label is the TLD, the
/// second-to-last the SLD, anything before those a subdomain prefix.
/// Callers wanting multi-part public suffixes handled correctly should
/// treat the output as display data, not as a registrable-domain oracle.
pub fn basic_info(domain: &str) -> BasicInfo {
    let labels: Vec<&str> = domain.split('.').collect();
    let tld = labels.last().copied().unwrap_or_default().to_string();
    let sld = if labels.len() >= 2 {
        labels[labels.len() - 2].to_string()
    } else {
        labels.first().copied().unwrap_or_default().to_string()
    };
    let subdomain = if labels.len() > 2 {
        Some(labels[..labels.len() - 2].join("."))
    } else {
        None
    };

    BasicInfo {
        domain: domain.to_string(),
        tld,
        sld,
        subdomain,
    }
}

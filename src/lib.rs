//! domain_recon library: free-source domain reconnaissance
//!
//! Given a domain name, this library discovers its attack surface without
//! relying on any paid API: subdomain enumeration through certificate
//! transparency, sitemap-driven path harvesting, a depth-bounded same-host
//! crawler, concurrent HEAD verification of path candidates, and a WHOIS
//! normalizer over RDAP. Results are aggregated into a single best-effort
//! [`DomainLookupResult`] and can be flattened into typed, confidence-scored
//! entities for display.
//!
//! # Example
//!
//! ```no_run
//! use domain_recon::{extract_entities, lookup_domain, Config, LookupContext};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let ctx = LookupContext::new(Config::default())?;
//! let result = lookup_domain(&ctx, "example.com").await;
//! for entity in extract_entities(&result) {
//!     println!("{} = {} ({:.2})", entity.entity_type, entity.value, entity.confidence);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

pub mod config;
mod crawl;
mod domain;
mod entities;
mod error_handling;
mod fetch;
pub mod initialization;
mod lookup;
mod models;
mod paths;
mod sitemap;
mod subdomains;
mod whois;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use crawl::crawl;
pub use domain::{basic_info, is_valid_domain, BasicInfo};
pub use entities::{extract_entities, Entity};
pub use error_handling::ReconError;
pub use lookup::{lookup_domain, lookup_domains, LookupContext};
pub use models::{
    DnsRecordSet, DnsRecords, DomainLookupResult, LookupReport, MxRecord, NameInfo,
    PathVerification, ServiceError, SslCertificate,
};
pub use paths::{discover_paths, verify_candidates, PathDiscovery, COMMON_PATHS};
pub use sitemap::harvest_sitemap_paths;
pub use subdomains::{find_subdomains, SubdomainScan};
pub use whois::{lookup_whois, map_rdap_to_whois, RdapResponse, WhoisRecord};

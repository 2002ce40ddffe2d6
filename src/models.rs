//! Aggregate result types.
//!
//! This module defines the shapes that cross the engine's boundary: the
//! per-service error entry, the path-verification outcome, the aggregate
//! `DomainLookupResult`, and the externally-populated inputs the entity
//! extractor understands (`DnsRecords`, `SslCertificate`). The DNS and SSL
//! fields are never fetched by this engine -- they exist so that a caller
//! which obtained them elsewhere can feed them through the same aggregate
//! and have entities extracted from them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::BasicInfo;
use crate::entities::Entity;
use crate::whois::WhoisRecord;

/// One isolated sub-operation failure.
///
/// Failures never abort a lookup; each is recorded against the service that
/// produced it and the lookup continues.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceError {
    /// Short identifier of the failing sub-operation
    pub service: String,
    /// Human-readable failure description
    pub error: String,
}

impl ServiceError {
    /// Creates an error entry for a named service.
    pub fn new(service: &str, error: impl ToString) -> Self {
        Self {
            service: service.to_string(),
            error: error.to_string(),
        }
    }
}

/// Outcome of probing one path candidate that was classified as present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathVerification {
    /// The probed path, always with exactly one leading slash
    pub path: String,
    /// Final HTTP status after bounded redirect following
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    /// Content-Length of the response, when the server sent one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// Failure note, populated only for anomalous keep-worthy outcomes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// DNS record data supplied by an external resolver integration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DnsRecords {
    /// The record sets keyed by type
    #[serde(default)]
    pub records: DnsRecordSet,
}

/// The per-type DNS record sets the entity extractor understands.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DnsRecordSet {
    /// IPv4 addresses
    #[serde(rename = "A", default, skip_serializing_if = "Vec::is_empty")]
    pub a: Vec<String>,
    /// IPv6 addresses
    #[serde(rename = "AAAA", default, skip_serializing_if = "Vec::is_empty")]
    pub aaaa: Vec<String>,
    /// Nameserver hostnames
    #[serde(rename = "NS", default, skip_serializing_if = "Vec::is_empty")]
    pub ns: Vec<String>,
    /// Mail exchangers
    #[serde(rename = "MX", default, skip_serializing_if = "Vec::is_empty")]
    pub mx: Vec<MxRecord>,
    /// Text records
    #[serde(rename = "TXT", default, skip_serializing_if = "Vec::is_empty")]
    pub txt: Vec<String>,
}

/// A mail-exchanger record, which upstream sources encode either as a
/// structured object or as a bare hostname string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MxRecord {
    /// Structured form with the exchange host and optional priority
    Detailed {
        /// Exchange hostname
        exchange: String,
        /// MX priority, when present
        #[serde(default, skip_serializing_if = "Option::is_none")]
        priority: Option<u16>,
    },
    /// Bare hostname form
    Host(String),
}

impl MxRecord {
    /// Returns the exchange hostname regardless of encoding.
    pub fn exchange(&self) -> &str {
        match self {
            MxRecord::Detailed { exchange, .. } => exchange,
            MxRecord::Host(host) => host,
        }
    }
}

/// A certificate distinguished name, which upstream sources encode as a
/// formatted string, a list of components, or an attribute map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NameInfo {
    /// Already-formatted text
    Text(String),
    /// List of name components
    List(Vec<String>),
    /// Attribute map (CN, O, OU, L, ST, C)
    Attributes(BTreeMap<String, String>),
}

impl NameInfo {
    /// Formats the name for display.
    ///
    /// Attribute maps are rendered as `CN=..., O=..., OU=..., L=..., ST=...,
    /// C=...` in that fixed order, lists are comma-joined, and strings pass
    /// through unchanged.
    pub fn display(&self) -> String {
        match self {
            NameInfo::Text(s) => s.clone(),
            NameInfo::List(parts) => parts.join(", "),
            NameInfo::Attributes(attrs) => ["CN", "O", "OU", "L", "ST", "C"]
                .iter()
                .filter_map(|key| attrs.get(*key).map(|value| format!("{key}={value}")))
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

/// TLS certificate data supplied by an external certificate integration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SslCertificate {
    /// Certificate issuer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer: Option<NameInfo>,
    /// Certificate subject
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<NameInfo>,
    /// Start of the validity window
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<String>,
    /// End of the validity window
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_to: Option<String>,
    /// Certificate fingerprint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
    /// Subject alternative names
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subject_alt_names: Vec<String>,
}

/// The full aggregate produced by one domain lookup.
///
/// Built fresh per request. `success` is true iff at least one sub-operation
/// produced usable data -- this is a best-effort contract, not an
/// all-or-nothing transaction, and the `errors` list carries whatever went
/// wrong along the way.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainLookupResult {
    /// The domain under investigation
    pub domain: String,
    /// Label-split facts about the domain
    #[serde(skip_serializing_if = "Option::is_none")]
    pub basic_info: Option<BasicInfo>,
    /// DNS record data, populated by external integrations only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns_records: Option<DnsRecords>,
    /// Normalized registration data from RDAP
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whois: Option<WhoisRecord>,
    /// TLS certificate data, populated by external integrations only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_certificate: Option<SslCertificate>,
    /// Hostnames discovered through certificate transparency, sorted
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subdomains: Vec<String>,
    /// Positively verified paths on the target
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub discovered_paths: Vec<PathVerification>,
    /// Isolated sub-operation failures
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ServiceError>,
    /// Whether any sub-operation produced usable data
    pub success: bool,
}

impl DomainLookupResult {
    /// Creates an empty result shell for a domain.
    pub fn new(domain: &str) -> Self {
        Self {
            domain: domain.to_string(),
            basic_info: None,
            dns_records: None,
            whois: None,
            ssl_certificate: None,
            subdomains: Vec::new(),
            discovered_paths: Vec::new(),
            errors: Vec::new(),
            success: false,
        }
    }
}

/// The envelope handed to downstream consumers (CLI output, API responses).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupReport {
    /// Whether the lookup produced usable data
    pub success: bool,
    /// Top-level failure, set only when the lookup could not run at all
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// The aggregate result, absent on top-level failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<DomainLookupResult>,
    /// Flat list of extracted findings
    pub entities: Vec<Entity>,
    /// RFC 3339 timestamp of report creation
    pub timestamp: String,
}

impl LookupReport {
    /// Wraps a lookup result and its extracted entities.
    pub fn from_result(result: DomainLookupResult, entities: Vec<Entity>) -> Self {
        Self {
            success: result.success,
            error: None,
            data: Some(result),
            entities,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Creates a failure envelope for a lookup that could not run.
    pub fn failure(error: impl ToString) -> Self {
        Self {
            success: false,
            error: Some(error.to_string()),
            data: None,
            entities: Vec::new(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

//! RDAP document shapes and the normalized WHOIS record.
//!
//! The RDAP structs cover only the portions of an RFC 9083 domain object
//! this engine consumes; unknown members are ignored during deserialization.
//! vCard property values are left as raw JSON values because RDAP allows
//! three encodings there (bare string, array, nested object) -- the decoder
//! in `parse` handles all three.

use serde::{Deserialize, Serialize};

/// An RDAP domain lookup response, reduced to the members we map.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RdapResponse {
    /// Status values, copied verbatim into the normalized record
    pub status: Option<Vec<String>>,
    /// Lifecycle events (registration, expiration, last changed)
    pub events: Option<Vec<RdapEvent>>,
    /// Delegated nameservers
    pub nameservers: Option<Vec<RdapNameserver>>,
    /// Registrar / registrant entities
    pub entities: Option<Vec<RdapEntity>>,
    /// DNSSEC delegation data
    #[serde(rename = "secureDNS")]
    pub secure_dns: Option<SecureDns>,
}

/// One RDAP lifecycle event.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RdapEvent {
    /// Event kind, e.g. "registration"
    #[serde(rename = "eventAction")]
    pub event_action: Option<String>,
    /// Event timestamp as supplied by the registry
    #[serde(rename = "eventDate")]
    pub event_date: Option<String>,
}

/// One RDAP nameserver object.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RdapNameserver {
    /// LDH (ASCII) hostname
    #[serde(rename = "ldhName")]
    pub ldh_name: Option<String>,
    /// Unicode hostname, used when no LDH name is present
    #[serde(rename = "unicodeName")]
    pub unicode_name: Option<String>,
}

/// One RDAP entity (registrar, registrant, ...).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RdapEntity {
    /// Roles this entity plays for the domain
    #[serde(default)]
    pub roles: Vec<String>,
    /// Registry handle, the display-name fallback of last resort
    pub handle: Option<String>,
    /// jCard payload: `["vcard", [[name, params, type, value], ...]]`
    #[serde(rename = "vcardArray")]
    pub vcard_array: Option<serde_json::Value>,
    /// Public identifiers (e.g. the IANA registrar ID)
    #[serde(rename = "publicIds", default)]
    pub public_ids: Vec<RdapPublicId>,
}

/// One RDAP public identifier.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RdapPublicId {
    /// Identifier kind, e.g. "IANA Registrar ID"
    #[serde(rename = "type")]
    pub id_type: Option<String>,
    /// The identifier itself
    pub identifier: Option<String>,
}

/// RDAP DNSSEC data.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SecureDns {
    /// Whether the delegation is signed
    #[serde(rename = "delegationSigned")]
    pub delegation_signed: Option<bool>,
}

/// Flat, display-friendly registration record mapped from RDAP.
///
/// Every field is optional: whatever the source document lacks stays absent
/// here -- no fabricated defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WhoisRecord {
    /// Registrar display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registrar_name: Option<String>,
    /// IANA registrar ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registrar_iana_id: Option<String>,
    /// Registrant name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registrant_name: Option<String>,
    /// Registrant organization
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registrant_organization: Option<String>,
    /// Registrant email address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registrant_email: Option<String>,
    /// Domain registration date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<String>,
    /// Domain expiration date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
    /// Last update date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_date: Option<String>,
    /// Delegated nameserver hostnames
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_servers: Option<Vec<String>>,
    /// Domain status values, verbatim from the registry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_status: Option<Vec<String>>,
    /// "signed" or "unsigned"; absent when the source omits DNSSEC data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dnssec: Option<String>,
}

impl WhoisRecord {
    /// Whether the record carries any data at all.
    pub fn is_empty(&self) -> bool {
        *self == WhoisRecord::default()
    }
}

//! Entity extraction.
//!
//! Walks a [`DomainLookupResult`] and emits a flat list of typed, sourced,
//! confidence-scored findings. The `{type, value, source, confidence}` tuple
//! is the wire contract with the presentation layer; types and confidence
//! values are stable across runs, and extraction is pure and deterministic
//! -- the same aggregate always yields the same entity list in the same
//! order (basic info, DNS, WHOIS, SSL, subdomains, paths).

use serde::{Deserialize, Serialize};

use crate::models::DomainLookupResult;

/// A normalized OSINT finding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Finding kind, e.g. "ip_address", "spf_record", "subdomain"
    #[serde(rename = "type")]
    pub entity_type: String,
    /// The finding itself
    pub value: String,
    /// Which sub-operation produced it
    pub source: String,
    /// Reliability score in [0, 1]
    pub confidence: f64,
}

/// Extracts the flat entity list from an aggregate lookup result.
///
/// Each extraction block is conditional on its aggregate field being
/// present; an unsuccessful lookup yields no entities at all.
pub fn extract_entities(result: &DomainLookupResult) -> Vec<Entity> {
    let mut entities = Vec::new();

    if !result.success {
        return entities;
    }

    if let Some(info) = &result.basic_info {
        push(&mut entities, "domain", &info.domain, "domain_analysis", 1.0);
        push(&mut entities, "tld", &info.tld, "domain_analysis", 1.0);
        if let Some(subdomain) = &info.subdomain {
            push(&mut entities, "subdomain", subdomain, "domain_analysis", 0.9);
        }
    }

    if let Some(dns) = &result.dns_records {
        let records = &dns.records;
        for ip in &records.a {
            push(&mut entities, "ip_address", ip, "dns_a_record", 1.0);
        }
        for ip in &records.aaaa {
            push(&mut entities, "ipv6_address", ip, "dns_aaaa_record", 1.0);
        }
        for ns in &records.ns {
            push(
                &mut entities,
                "nameserver",
                strip_trailing_dot(ns),
                "dns_ns_record",
                1.0,
            );
        }
        for mx in &records.mx {
            push(
                &mut entities,
                "mail_server",
                strip_trailing_dot(mx.exchange()),
                "dns_mx_record",
                1.0,
            );
        }
        for txt in &records.txt {
            let clean = txt.replace('"', "");
            // Classify by content: SPF policies and verification tokens are
            // more telling than a generic text record.
            if clean.contains("v=spf1") {
                push(&mut entities, "spf_record", &clean, "dns_txt_record", 1.0);
            } else if clean.contains("verification") {
                push(
                    &mut entities,
                    "domain_verification",
                    &clean,
                    "dns_txt_record",
                    0.8,
                );
            } else {
                push(&mut entities, "txt_record", &clean, "dns_txt_record", 0.7);
            }
        }
    }

    if let Some(whois) = &result.whois {
        if let Some(registrar) = &whois.registrar_name {
            push(&mut entities, "registrar", registrar, "rdap_whois", 1.0);
        }
        if let Some(name) = &whois.registrant_name {
            push(&mut entities, "registrant_name", name, "rdap_whois", 0.9);
        }
        if let Some(org) = &whois.registrant_organization {
            push(
                &mut entities,
                "registrant_organization",
                org,
                "rdap_whois",
                0.9,
            );
        }
        if let Some(email) = &whois.registrant_email {
            push(&mut entities, "registrant_email", email, "rdap_whois", 0.8);
        }
        if let Some(date) = &whois.creation_date {
            push(&mut entities, "creation_date", date, "rdap_whois", 1.0);
        }
        if let Some(date) = &whois.expiration_date {
            push(&mut entities, "expiration_date", date, "rdap_whois", 1.0);
        }
        if let Some(date) = &whois.updated_date {
            push(&mut entities, "updated_date", date, "rdap_whois", 1.0);
        }
        if let Some(nameservers) = &whois.name_servers {
            for ns in nameservers {
                push(
                    &mut entities,
                    "nameserver",
                    strip_trailing_dot(ns),
                    "rdap_whois",
                    1.0,
                );
            }
        }
        if let Some(statuses) = &whois.domain_status {
            for status in statuses {
                push(&mut entities, "domain_status", status, "rdap_whois", 1.0);
            }
        }
    }

    if let Some(ssl) = &result.ssl_certificate {
        if let Some(issuer) = &ssl.issuer {
            push(
                &mut entities,
                "ssl_issuer",
                &issuer.display(),
                "ssl_certificate",
                1.0,
            );
        }
        if let Some(subject) = &ssl.subject {
            push(
                &mut entities,
                "ssl_subject",
                &subject.display(),
                "ssl_certificate",
                1.0,
            );
        }
        if let Some(valid_from) = &ssl.valid_from {
            push(
                &mut entities,
                "ssl_valid_from",
                valid_from,
                "ssl_certificate",
                1.0,
            );
        }
        if let Some(valid_to) = &ssl.valid_to {
            push(
                &mut entities,
                "ssl_valid_to",
                valid_to,
                "ssl_certificate",
                1.0,
            );
        }
        if let Some(fingerprint) = &ssl.fingerprint {
            push(
                &mut entities,
                "ssl_fingerprint",
                fingerprint,
                "ssl_certificate",
                1.0,
            );
        }
        for alt_name in &ssl.subject_alt_names {
            push(
                &mut entities,
                "ssl_alt_name",
                alt_name,
                "ssl_certificate",
                0.9,
            );
        }
    }

    for subdomain in &result.subdomains {
        push(
            &mut entities,
            "subdomain",
            subdomain,
            "certificate_transparency",
            0.95,
        );
    }

    for verification in &result.discovered_paths {
        push(
            &mut entities,
            "url",
            &format!("https://{}{}", result.domain, verification.path),
            "path_discovery",
            0.85,
        );
    }

    entities
}

fn push(entities: &mut Vec<Entity>, entity_type: &str, value: &str, source: &str, confidence: f64) {
    entities.push(Entity {
        entity_type: entity_type.to_string(),
        value: value.to_string(),
        source: source.to_string(),
        confidence,
    });
}

fn strip_trailing_dot(name: &str) -> &str {
    name.strip_suffix('.').unwrap_or(name)
}

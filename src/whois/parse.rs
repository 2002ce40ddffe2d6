//! RDAP-to-WHOIS mapping.
//!
//! Pure functions, no I/O. The mapping rules mirror what registries actually
//! emit rather than the full RFC: event actions are matched by their
//! well-known names, vCard properties are tried in a fixed fallback order,
//! and all three value encodings RDAP allows (string, array, object) are
//! accepted.

use serde_json::Value;

use super::types::{RdapEntity, RdapResponse, WhoisRecord};

/// Maps a raw RDAP response into a flat, display-friendly record.
///
/// Fields absent from the input stay absent in the output. Duplicate events
/// resolve to the last occurrence.
pub fn map_rdap_to_whois(rdap: &RdapResponse) -> WhoisRecord {
    let mut record = WhoisRecord {
        domain_status: rdap.status.clone(),
        ..Default::default()
    };

    if let Some(nameservers) = &rdap.nameservers {
        let names: Vec<String> = nameservers
            .iter()
            .filter_map(|ns| {
                ns.ldh_name
                    .clone()
                    .or_else(|| ns.unicode_name.clone())
                    .filter(|name| !name.is_empty())
            })
            .collect();
        if !names.is_empty() {
            record.name_servers = Some(names);
        }
    }

    if let Some(events) = &rdap.events {
        for event in events {
            let Some(date) = event.event_date.clone() else {
                continue;
            };
            match event.event_action.as_deref().map(str::trim) {
                Some(action) if action.eq_ignore_ascii_case("registration") => {
                    record.creation_date = Some(date);
                }
                Some(action) if action.eq_ignore_ascii_case("expiration") => {
                    record.expiration_date = Some(date);
                }
                Some(action) if action.eq_ignore_ascii_case("last changed") => {
                    record.updated_date = Some(date);
                }
                _ => {}
            }
        }
    }

    if let Some(entities) = &rdap.entities {
        if let Some(registrar) = entity_with_role(entities, "registrar") {
            record.registrar_name = vcard_property(registrar, &["fn", "org"])
                .or_else(|| registrar.handle.clone());
            record.registrar_iana_id = registrar
                .public_ids
                .iter()
                .find(|id| {
                    id.id_type
                        .as_deref()
                        .is_some_and(|t| t.to_ascii_lowercase().contains("iana"))
                })
                .and_then(|id| id.identifier.clone());
        }

        if let Some(registrant) = entity_with_role(entities, "registrant") {
            record.registrant_name = vcard_property(registrant, &["fn", "n"]);
            record.registrant_organization = vcard_property(registrant, &["org"]);
            record.registrant_email = vcard_property(registrant, &["email"]);
        }
    }

    if let Some(secure_dns) = &rdap.secure_dns {
        record.dnssec = Some(if secure_dns.delegation_signed == Some(true) {
            "signed".to_string()
        } else {
            "unsigned".to_string()
        });
    }

    record
}

/// Finds the first entity carrying a role, case-insensitively.
fn entity_with_role<'a>(entities: &'a [RdapEntity], role: &str) -> Option<&'a RdapEntity> {
    entities
        .iter()
        .find(|e| e.roles.iter().any(|r| r.eq_ignore_ascii_case(role)))
}

/// Extracts the first non-empty vCard property value, trying property names
/// in order.
///
/// A jCard payload is `["vcard", [[name, params, type, value], ...]]`; the
/// value sits at index 3 of each property entry.
fn vcard_property(entity: &RdapEntity, names: &[&str]) -> Option<String> {
    let properties = entity
        .vcard_array
        .as_ref()?
        .as_array()?
        .get(1)?
        .as_array()?;

    for wanted in names {
        for property in properties {
            let Some(entry) = property.as_array() else {
                continue;
            };
            let name_matches = entry
                .first()
                .and_then(Value::as_str)
                .is_some_and(|name| name.eq_ignore_ascii_case(wanted));
            if !name_matches {
                continue;
            }
            if let Some(text) = entry.get(3).and_then(vcard_text) {
                return Some(text);
            }
        }
    }
    None
}

/// Renders a vCard property value from any of its three RDAP encodings.
///
/// Strings pass through, arrays join their stringified elements with
/// spaces, and nested objects are serialized. Empty renderings collapse
/// to `None`.
fn vcard_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => s.trim().to_string(),
                other => other.to_string(),
            })
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" "),
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
        _ => String::new(),
    };

    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

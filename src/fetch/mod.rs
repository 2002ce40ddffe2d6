//! Protocol-fallback fetch helpers.
//!
//! Target-site resources (robots.txt, sitemaps, the crawl seed) are fetched
//! by trying `https://` first and falling back to `http://`. The first
//! candidate that answers with a success status wins; trying the candidates
//! in order makes the tie-break deterministic (https always preferred).
//! Individual fetch failures are logged at debug level and swallowed -- the
//! callers treat a missing resource as "no data", never as a fatal error.

use log::debug;
use url::Url;

/// Returns the fetch candidates for a path on the target, https first.
pub(crate) fn protocol_candidates(authority: &str, path: &str) -> [String; 2] {
    [
        format!("https://{authority}{path}"),
        format!("http://{authority}{path}"),
    ]
}

/// Fetches a target-site resource over https, then http.
///
/// Returns the URL that answered plus the response body, or `None` when
/// neither protocol produced a success status.
pub(crate) async fn fetch_text_with_fallback(
    client: &reqwest::Client,
    authority: &str,
    path: &str,
) -> Option<(Url, String)> {
    for candidate in protocol_candidates(authority, path) {
        let Ok(url) = Url::parse(&candidate) else {
            debug!("skipping unparseable fetch candidate: {candidate}");
            continue;
        };
        match fetch_page(client, &url).await {
            Some(body) => return Some((url, body)),
            None => continue,
        }
    }
    None
}

/// Fetches a single page body, swallowing any failure.
///
/// Returns `None` on transport errors and on non-success statuses.
pub(crate) async fn fetch_page(client: &reqwest::Client, url: &Url) -> Option<String> {
    match client.get(url.clone()).send().await {
        Ok(resp) if resp.status().is_success() => match resp.text().await {
            Ok(body) => Some(body),
            Err(e) => {
                debug!("failed to read body from {url}: {e}");
                None
            }
        },
        Ok(resp) => {
            debug!("non-success status {} from {url}", resp.status());
            None
        }
        Err(e) => {
            debug!("fetch failed for {url}: {e}");
            None
        }
    }
}

/// Checks whether a URL points at the target host, exact match only.
///
/// The comparison covers the authority (host plus any explicit port) so a
/// target like `127.0.0.1:8080` matches; subdomains of the target never do.
pub(crate) fn host_matches(url: &Url, domain: &str) -> bool {
    let Some(host) = url.host_str() else {
        return false;
    };
    let authority = match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    };
    authority.eq_ignore_ascii_case(domain)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protocol_candidates_order() {
        let candidates = protocol_candidates("example.com", "/robots.txt");
        assert_eq!(candidates[0], "https://example.com/robots.txt");
        assert_eq!(candidates[1], "http://example.com/robots.txt");
    }

    #[test]
    fn test_host_matches_exact() {
        let url = Url::parse("https://example.com/about").unwrap();
        assert!(host_matches(&url, "example.com"));
        assert!(host_matches(&url, "EXAMPLE.COM"));
    }

    #[test]
    fn test_host_matches_rejects_subdomains() {
        let url = Url::parse("https://www.example.com/").unwrap();
        assert!(!host_matches(&url, "example.com"));

        let url = Url::parse("https://example.com.evil.net/").unwrap();
        assert!(!host_matches(&url, "example.com"));
    }

    #[test]
    fn test_host_matches_with_port() {
        let url = Url::parse("http://127.0.0.1:8080/path").unwrap();
        assert!(host_matches(&url, "127.0.0.1:8080"));
        assert!(!host_matches(&url, "127.0.0.1"));
    }

    #[test]
    fn test_host_matches_default_port_elided() {
        // Default ports are not part of the authority comparison.
        let url = Url::parse("https://example.com:443/").unwrap();
        assert!(host_matches(&url, "example.com"));
    }
}

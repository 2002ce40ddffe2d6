//! Integration tests for certificate-transparency subdomain enumeration.
//!
//! The CT endpoint is redirected at a mock server through the
//! `ct_base_url` config field.

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use domain_recon::{find_subdomains, Config};

fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(5))
        .build()
        .expect("client builds")
}

fn config_for(server: &MockServer) -> Config {
    Config {
        ct_base_url: server.uri(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_find_subdomains_happy_path() {
    let server = MockServer::start().await;
    let body = r#"[
        {"name_value": "www.example.com\napi.example.com", "issuer_name": "Let's Encrypt"},
        {"name_value": "*.example.com"},
        {"name_value": "mail.example.com"},
        {"name_value": "example.com"},
        {"name_value": "www.other.org"}
    ]"#;
    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("q", "%.example.com"))
        .and(query_param("output", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    let scan = find_subdomains(&client(), &config_for(&server), "example.com").await;

    assert!(scan.success);
    assert!(scan.errors.is_empty());
    assert_eq!(
        scan.subdomains,
        vec!["api.example.com", "mail.example.com", "www.example.com"]
    );
}

#[tokio::test]
async fn test_find_subdomains_invariants() {
    let server = MockServer::start().await;
    let body = r#"[
        {"name_value": "B.EXAMPLE.COM\na.example.com\nb.example.com"},
        {"name_value": "example.com\nnotexample.com"}
    ]"#;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    let scan = find_subdomains(&client(), &config_for(&server), "example.com").await;

    // Sorted, deduplicated, lowercase, suffix-anchored, never the bare domain.
    let mut sorted = scan.subdomains.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(scan.subdomains, sorted);
    assert!(scan
        .subdomains
        .iter()
        .all(|s| s.ends_with(".example.com") && s != "example.com"));
    assert_eq!(scan.subdomains, vec!["a.example.com", "b.example.com"]);
}

#[tokio::test]
async fn test_find_subdomains_empty_result_is_unsuccessful() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .mount(&server)
        .await;

    let scan = find_subdomains(&client(), &config_for(&server), "example.com").await;
    assert!(!scan.success);
    assert!(scan.subdomains.is_empty());
    assert!(scan.errors.is_empty());
}

#[tokio::test]
async fn test_find_subdomains_http_error_is_isolated() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let scan = find_subdomains(&client(), &config_for(&server), "example.com").await;
    assert!(!scan.success);
    assert_eq!(scan.errors.len(), 1);
    assert_eq!(scan.errors[0].service, "certificate_transparency");
    assert!(scan.errors[0].error.contains("502"));
}

#[tokio::test]
async fn test_find_subdomains_malformed_body_is_isolated() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>rate limited</html>"))
        .mount(&server)
        .await;

    let scan = find_subdomains(&client(), &config_for(&server), "example.com").await;
    assert!(!scan.success);
    assert_eq!(scan.errors.len(), 1);
    assert!(scan.errors[0].error.contains("parse error"));
}

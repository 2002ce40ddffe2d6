//! Integration tests for path candidate verification.
//!
//! Exercises the HEAD classification rules against a mock server: success
//! and redirect statuses are kept, non-404 client errors are kept as
//! access-restriction signals, 404 and server errors are dropped, and
//! network failures downgrade to "not present".

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use domain_recon::verify_candidates;

fn head_client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(3))
        .timeout(std::time::Duration::from_secs(5))
        .build()
        .expect("client builds")
}

async fn mount_status(server: &MockServer, probe_path: &str, status: u16) {
    Mock::given(method("HEAD"))
        .and(path(probe_path.to_string()))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

fn candidates(paths: &[&str]) -> Vec<String> {
    paths.iter().map(|p| p.to_string()).collect()
}

#[tokio::test]
async fn test_verifier_classification() {
    let server = MockServer::start().await;
    mount_status(&server, "/ok", 200).await;
    mount_status(&server, "/forbidden", 403).await;
    mount_status(&server, "/missing", 404).await;
    mount_status(&server, "/broken", 500).await;

    let discovery = verify_candidates(
        &head_client(),
        &server.uri(),
        candidates(&["/ok", "/forbidden", "/missing", "/broken"]),
        "example.com",
    )
    .await;

    assert!(discovery.success);
    assert!(discovery.errors.is_empty());

    let kept: Vec<(&str, Option<u16>)> = discovery
        .paths
        .iter()
        .map(|p| (p.path.as_str(), p.status))
        .collect();
    assert_eq!(kept, vec![("/ok", Some(200)), ("/forbidden", Some(403))]);
}

#[tokio::test]
async fn test_verifier_keeps_unauthorized_and_redirects() {
    let server = MockServer::start().await;
    mount_status(&server, "/auth", 401).await;
    // A redirect without a Location header settles as its own status.
    mount_status(&server, "/moved", 301).await;

    let discovery = verify_candidates(
        &head_client(),
        &server.uri(),
        candidates(&["/auth", "/moved"]),
        "example.com",
    )
    .await;

    let statuses: Vec<Option<u16>> = discovery.paths.iter().map(|p| p.status).collect();
    assert_eq!(statuses, vec![Some(401), Some(301)]);
}

#[tokio::test]
async fn test_verifier_paths_have_single_leading_slash() {
    let server = MockServer::start().await;
    mount_status(&server, "/admin", 200).await;

    let discovery = verify_candidates(
        &head_client(),
        &server.uri(),
        candidates(&["/admin"]),
        "example.com",
    )
    .await;

    for verification in &discovery.paths {
        assert!(verification.path.starts_with('/'));
        assert!(!verification.path.starts_with("//"));
    }
}

#[tokio::test]
async fn test_verifier_no_positive_results_is_unsuccessful() {
    let server = MockServer::start().await;
    mount_status(&server, "/a", 404).await;
    mount_status(&server, "/b", 503).await;

    let discovery = verify_candidates(
        &head_client(),
        &server.uri(),
        candidates(&["/a", "/b"]),
        "example.com",
    )
    .await;

    assert!(!discovery.success);
    assert!(discovery.paths.is_empty());
    // The probes reached the server; nothing systemic happened.
    assert!(discovery.errors.is_empty());
}

#[tokio::test]
async fn test_verifier_unreachable_target_is_systemic() {
    let server = MockServer::start().await;
    let base = server.uri();
    drop(server);

    let discovery = verify_candidates(
        &head_client(),
        &base,
        candidates(&["/a", "/b", "/c"]),
        "example.com",
    )
    .await;

    assert!(!discovery.success);
    assert!(discovery.paths.is_empty());
    assert_eq!(discovery.errors.len(), 1);
    assert_eq!(discovery.errors[0].service, "path_discovery");
}

#[tokio::test]
async fn test_verifier_empty_candidate_set() {
    let server = MockServer::start().await;

    let discovery =
        verify_candidates(&head_client(), &server.uri(), Vec::new(), "example.com").await;

    assert!(!discovery.success);
    assert!(discovery.paths.is_empty());
    assert!(discovery.errors.is_empty());
}

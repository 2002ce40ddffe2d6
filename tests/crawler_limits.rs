//! Integration tests for the breadth-limited crawler.
//!
//! Verifies the two hard bounds (page budget, link depth), same-host
//! filtering, and the recoverable empty result when the seed is
//! unreachable.

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use domain_recon::crawl;

fn authority(server: &MockServer) -> String {
    server.uri().trim_start_matches("http://").to_string()
}

fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(5))
        .build()
        .expect("client builds")
}

async fn mount_page(server: &MockServer, page_path: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(page_path.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_crawl_collects_same_host_paths() {
    let server = MockServer::start().await;
    let target = authority(&server);

    let home = format!(
        r#"<html><body>
            <a href="/about">About</a>
            <a href="{uri}/pricing">Pricing</a>
            <a href="https://external.example.net/elsewhere">External</a>
            <a href="mailto:sales@example.com">Mail</a>
            <a href="javascript:void(0)">JS</a>
        </body></html>"#,
        uri = server.uri()
    );
    mount_page(&server, "/", home).await;
    mount_page(&server, "/about", "<html></html>".to_string()).await;
    mount_page(&server, "/pricing", "<html></html>".to_string()).await;

    let paths = crawl(&client(), &target, 15, 1).await;
    assert_eq!(paths, vec!["/about", "/pricing"]);
}

#[tokio::test]
async fn test_crawl_respects_page_limit() {
    let server = MockServer::start().await;
    let target = authority(&server);

    let home: String = (1..=10)
        .map(|i| format!(r#"<a href="/p{i}">p{i}</a>"#))
        .collect();
    mount_page(&server, "/", format!("<html>{home}</html>")).await;
    for i in 1..=10 {
        mount_page(&server, &format!("/p{i}"), "<html></html>".to_string()).await;
    }

    let page_limit = 3;
    let paths = crawl(&client(), &target, page_limit, 1).await;

    // Every link's path is recorded even though only two could be fetched.
    assert_eq!(paths.len(), 10);

    let requests = server.received_requests().await.expect("recording enabled");
    let fetched: Vec<&str> = requests
        .iter()
        .filter(|r| r.method.to_string() == "GET")
        .map(|r| r.url.path())
        .collect();
    assert!(fetched.len() <= page_limit);
    assert_eq!(fetched, vec!["/", "/p1", "/p2"]);
}

#[tokio::test]
async fn test_crawl_respects_depth() {
    let server = MockServer::start().await;
    let target = authority(&server);

    mount_page(&server, "/", r#"<a href="/level1">l1</a>"#.to_string()).await;
    mount_page(
        &server,
        "/level1",
        r#"<a href="/level2">l2</a>"#.to_string(),
    )
    .await;
    mount_page(&server, "/level2", "<html></html>".to_string()).await;

    let paths = crawl(&client(), &target, 15, 1).await;

    // /level2 is discovered (recorded from /level1's links) but never fetched.
    assert_eq!(paths, vec!["/level1", "/level2"]);
    let requests = server.received_requests().await.expect("recording enabled");
    assert!(requests.iter().all(|r| r.url.path() != "/level2"));
}

#[tokio::test]
async fn test_crawl_does_not_refetch_visited_pages() {
    let server = MockServer::start().await;
    let target = authority(&server);

    // Two pages linking at each other; the crawl must not loop.
    mount_page(
        &server,
        "/",
        r#"<a href="/a">a</a><a href="/a">a again</a>"#.to_string(),
    )
    .await;
    mount_page(&server, "/a", r#"<a href="/">home</a>"#.to_string()).await;

    let paths = crawl(&client(), &target, 15, 3).await;
    assert_eq!(paths, vec!["/a", "/"]);

    let requests = server.received_requests().await.expect("recording enabled");
    let a_fetches = requests.iter().filter(|r| r.url.path() == "/a").count();
    assert_eq!(a_fetches, 1);
}

#[tokio::test]
async fn test_crawl_unreachable_seed_is_recoverable() {
    let server = MockServer::start().await;
    let target = authority(&server);
    drop(server);

    // Neither protocol can fetch the homepage: empty list, no panic.
    let paths = crawl(&client(), &target, 15, 1).await;
    assert!(paths.is_empty());
}

#[tokio::test]
async fn test_crawl_swallows_broken_links() {
    let server = MockServer::start().await;
    let target = authority(&server);

    mount_page(
        &server,
        "/",
        r#"<a href="/dead">dead</a><a href="/alive">alive</a>"#.to_string(),
    )
    .await;
    // /dead is not mounted and answers 404; /alive works.
    mount_page(&server, "/alive", "<html></html>".to_string()).await;

    let paths = crawl(&client(), &target, 15, 1).await;
    assert_eq!(paths, vec!["/dead", "/alive"]);
}

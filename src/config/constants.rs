//! Configuration constants.
//!
//! This module defines the default operational parameters for the
//! reconnaissance engine: timeouts, discovery caps, and the endpoints of the
//! free intelligence sources. The caps are tuning values; callers that need
//! different limits override them through `Config` rather than editing these.

/// Default User-Agent string for all outbound HTTP requests.
///
/// Identifies the tool to target servers. Users can override this via the
/// `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str = "domain-recon/0.1";

/// Per-request timeout in seconds for target-site fetches
/// (robots.txt, sitemaps, crawled pages, HEAD probes).
pub const FETCH_TIMEOUT_SECS: u64 = 5;

/// Timeout in seconds for the certificate-transparency query.
/// crt.sh aggregates large result sets and can be slow to respond.
pub const CT_TIMEOUT_SECS: u64 = 15;

/// Timeout in seconds for the RDAP registration-data query.
pub const RDAP_TIMEOUT_SECS: u64 = 15;

/// Maximum number of path candidates submitted for HEAD verification.
pub const MAX_PATH_CANDIDATES: usize = 75;

/// Maximum number of distinct pages the crawler will fetch per call.
pub const CRAWL_PAGE_LIMIT: usize = 15;

/// Maximum link depth the crawler follows from the seed page.
pub const CRAWL_DEPTH: usize = 1;

/// Maximum number of sitemap documents fetched per harvest.
pub const MAX_SITEMAP_FETCHES: usize = 5;

/// Maximum number of paths collected from sitemaps per harvest.
pub const MAX_SITEMAP_PATHS: usize = 200;

/// Maximum number of redirect hops followed during HEAD verification.
pub const MAX_HEAD_REDIRECTS: usize = 3;

/// Base URL of the certificate-transparency search endpoint.
pub const CT_BASE_URL: &str = "https://crt.sh";

/// Base URL of the RDAP registration-data service.
pub const RDAP_BASE_URL: &str = "https://rdap.org";

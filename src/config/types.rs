//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument
//! parsing and engine configuration.

use clap::ValueEnum;

use crate::config::constants::*;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Engine configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically without any CLI dependencies. The discovery
/// caps ship with the engine's stock values; they bound work per lookup and
/// can be raised or lowered per call site.
///
/// # Examples
///
/// ```no_run
/// use domain_recon::Config;
///
/// let config = Config {
///     crawl_page_limit: 30,
///     crawl_depth: 2,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Per-request timeout in seconds for target-site fetches
    pub fetch_timeout_secs: u64,

    /// Timeout in seconds for the certificate-transparency query
    pub ct_timeout_secs: u64,

    /// Timeout in seconds for the RDAP query
    pub rdap_timeout_secs: u64,

    /// Maximum path candidates submitted for HEAD verification
    pub max_path_candidates: usize,

    /// Maximum distinct pages fetched per crawl
    pub crawl_page_limit: usize,

    /// Maximum link depth followed from the crawl seed
    pub crawl_depth: usize,

    /// Maximum sitemap documents fetched per harvest
    pub max_sitemap_fetches: usize,

    /// Maximum paths collected from sitemaps per harvest
    pub max_sitemap_paths: usize,

    /// Maximum redirect hops followed during HEAD verification
    pub max_head_redirects: usize,

    /// Base URL of the certificate-transparency search endpoint
    pub ct_base_url: String,

    /// Base URL of the RDAP registration-data service
    pub rdap_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            fetch_timeout_secs: FETCH_TIMEOUT_SECS,
            ct_timeout_secs: CT_TIMEOUT_SECS,
            rdap_timeout_secs: RDAP_TIMEOUT_SECS,
            max_path_candidates: MAX_PATH_CANDIDATES,
            crawl_page_limit: CRAWL_PAGE_LIMIT,
            crawl_depth: CRAWL_DEPTH,
            max_sitemap_fetches: MAX_SITEMAP_FETCHES,
            max_sitemap_paths: MAX_SITEMAP_PATHS,
            max_head_redirects: MAX_HEAD_REDIRECTS,
            ct_base_url: CT_BASE_URL.to_string(),
            rdap_base_url: RDAP_BASE_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default_caps() {
        // The stock discovery caps are part of the engine's contract.
        let config = Config::default();
        assert_eq!(config.max_path_candidates, 75);
        assert_eq!(config.crawl_page_limit, 15);
        assert_eq!(config.crawl_depth, 1);
        assert_eq!(config.max_sitemap_fetches, 5);
        assert_eq!(config.max_sitemap_paths, 200);
        assert_eq!(config.max_head_redirects, 3);
    }

    #[test]
    fn test_config_default_endpoints() {
        let config = Config::default();
        assert_eq!(config.ct_base_url, "https://crt.sh");
        assert_eq!(config.rdap_base_url, "https://rdap.org");
    }

    #[test]
    fn test_config_default_timeouts() {
        let config = Config::default();
        assert_eq!(config.fetch_timeout_secs, 5);
        assert_eq!(config.ct_timeout_secs, 15);
        assert_eq!(config.rdap_timeout_secs, 15);
    }
}

//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `domain_recon` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Domain syntax validation (the engine itself assumes validated input)
//! - JSON report output
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use domain_recon::initialization::init_logger_with;
use domain_recon::{
    extract_entities, is_valid_domain, lookup_domains, Config, LogFormat, LogLevel, LookupContext,
    LookupReport,
};

#[derive(Parser, Debug)]
#[command(
    name = "domain_recon",
    version,
    about = "Free-source domain reconnaissance: subdomains, paths, and WHOIS"
)]
struct Cli {
    /// Domains to investigate
    #[arg(required = true)]
    domains: Vec<String>,

    /// Log level
    #[arg(long, value_enum, default_value = "warn")]
    log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    log_format: LogFormat,

    /// HTTP User-Agent header value
    #[arg(long)]
    user_agent: Option<String>,

    /// Maximum distinct pages fetched per crawl
    #[arg(long)]
    crawl_pages: Option<usize>,

    /// Maximum link depth followed from the crawl seed
    #[arg(long)]
    crawl_depth: Option<usize>,

    /// Maximum path candidates submitted for HEAD verification
    #[arg(long)]
    max_candidates: Option<usize>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

impl Cli {
    fn to_config(&self) -> Config {
        let mut config = Config::default();
        if let Some(user_agent) = &self.user_agent {
            config.user_agent = user_agent.clone();
        }
        if let Some(pages) = self.crawl_pages {
            config.crawl_page_limit = pages;
        }
        if let Some(depth) = self.crawl_depth {
            config.crawl_depth = depth;
        }
        if let Some(cap) = self.max_candidates {
            config.max_path_candidates = cap;
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logger_with(cli.log_level.clone().into(), cli.log_format.clone())
        .context("Failed to initialize logger")?;

    let ctx = LookupContext::new(cli.to_config())?;

    // Reject syntactically implausible targets up front; the engine itself
    // assumes its input was validated.
    let valid: Vec<String> = cli
        .domains
        .iter()
        .filter(|d| is_valid_domain(d))
        .map(|d| d.trim().to_string())
        .collect();

    let mut results = lookup_domains(&ctx, &valid).await.into_iter();

    let reports: Vec<LookupReport> = cli
        .domains
        .iter()
        .map(|domain| {
            if is_valid_domain(domain) {
                let result = results
                    .next()
                    .expect("one lookup result per validated domain");
                let entities = extract_entities(&result);
                LookupReport::from_result(result, entities)
            } else {
                LookupReport::failure(format!("Invalid domain format: {domain}"))
            }
        })
        .collect();

    let json = if cli.pretty {
        if reports.len() == 1 {
            serde_json::to_string_pretty(&reports[0])
        } else {
            serde_json::to_string_pretty(&reports)
        }
    } else if reports.len() == 1 {
        serde_json::to_string(&reports[0])
    } else {
        serde_json::to_string(&reports)
    }
    .context("Failed to serialize lookup reports")?;

    println!("{json}");

    if reports.iter().all(|r| !r.success) {
        process::exit(1);
    }
    Ok(())
}

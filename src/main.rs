//! linkharvest main entry point
//!
//! This is the command-line interface for the bounded-time link discovery
//! crawler.

use anyhow::Context;
use clap::Parser;
use linkharvest::config::{load_config, FileConfig};
use linkharvest::crawler::run_crawl;
use linkharvest::output::{print_summary, write_json_report};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// linkharvest: bounded-time link discovery
///
/// Starting from a single seed page, linkharvest follows anchor hrefs for a
/// fixed wall-clock budget and reports every unique link it saw, as a JSON
/// file and a short summary on stdout.
#[derive(Parser, Debug)]
#[command(name = "linkharvest")]
#[command(version)]
#[command(about = "Collect the unique links reachable from a seed URL", long_about = None)]
struct Cli {
    /// Seed URL the crawl starts from (overrides the config file)
    #[arg(value_name = "SEED")]
    seed: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Crawl duration in seconds
    #[arg(short, long, value_name = "SECONDS")]
    duration: Option<u64>,

    /// Number of concurrent workers
    #[arg(short, long, value_name = "N")]
    workers: Option<usize>,

    /// Maximum simultaneous HTTP requests
    #[arg(long, value_name = "N")]
    max_connections: Option<usize>,

    /// Per-request fetch timeout in seconds
    #[arg(long, value_name = "SECONDS")]
    fetch_timeout: Option<u64>,

    /// Extra seconds granted to in-flight fetches at the deadline
    #[arg(long, value_name = "SECONDS")]
    grace: Option<u64>,

    /// Restrict discovery to this host and its subdomains
    #[arg(long, value_name = "HOST")]
    scope: Option<String>,

    /// Path the JSON report is written to
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load configuration, then let command-line flags override it
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)?
        }
        None => FileConfig::default(),
    };
    apply_overrides(&mut config, &cli);

    let report_path = cli
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.output.report_path));

    // Run the crawl
    let report = match run_crawl(config.crawl).await {
        Ok(report) => report,
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            return Err(e.into());
        }
    };

    write_json_report(&report, &report_path)
        .with_context(|| format!("failed to write report to {}", report_path.display()))?;
    tracing::info!("Report written to: {}", report_path.display());

    if !cli.quiet {
        print_summary(&report);
    }

    Ok(())
}

/// Folds command-line flags over the file configuration
fn apply_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(seed) = &cli.seed {
        config.crawl.seed = seed.clone();
    }
    if let Some(duration) = cli.duration {
        config.crawl.duration_ms = duration * 1000;
    }
    if let Some(workers) = cli.workers {
        config.crawl.max_workers = workers;
    }
    if let Some(max_connections) = cli.max_connections {
        config.crawl.max_connections = max_connections;
    }
    if let Some(fetch_timeout) = cli.fetch_timeout {
        config.crawl.fetch_timeout_ms = fetch_timeout * 1000;
    }
    if let Some(grace) = cli.grace {
        config.crawl.grace_ms = grace * 1000;
    }
    if let Some(scope) = &cli.scope {
        config.crawl.scope = Some(scope.clone());
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("linkharvest=info,warn"),
            1 => EnvFilter::new("linkharvest=debug,info"),
            2 => EnvFilter::new("linkharvest=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

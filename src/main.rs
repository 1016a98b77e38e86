//! Command-line front end for the linkhound reconnaissance pipeline.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use console::style;
use tracing_subscriber::EnvFilter;

use linkhound::{export, ReconConfig, ReconError};

#[derive(Debug, Parser)]
#[command(
    name = "linkhound",
    version,
    about = "Query-driven web reconnaissance across DuckDuckGo and Bing"
)]
struct Args {
    /// Search query; prompted for interactively when omitted
    query: Option<String>,

    /// Maximum total candidate URLs to collect
    #[arg(short = 'm', long, default_value_t = linkhound::config::DEFAULT_MAX_RESULTS)]
    max_results: usize,

    /// Number of concurrent page-analysis workers
    #[arg(short = 't', long, default_value_t = linkhound::config::DEFAULT_WORKERS)]
    workers: usize,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = linkhound::config::DEFAULT_TIMEOUT_SECONDS)]
    timeout: u64,

    /// HTTP/HTTPS/SOCKS proxy, e.g. http://127.0.0.1:8080
    #[arg(long)]
    proxy: Option<String>,

    /// Output file; the extension picks the format (.json or .csv)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let query = match args.query {
        Some(query) => query,
        None => prompt_query()?,
    };

    let config = ReconConfig {
        max_results: args.max_results,
        workers: args.workers,
        timeout_seconds: args.timeout,
        proxy: args.proxy,
        ..Default::default()
    };

    let records = tokio::select! {
        result = linkhound::recon(&query, &config) => match result {
            Ok(records) => records,
            Err(ReconError::NoUrls) => {
                tracing::warn!("no URLs found, nothing to analyse");
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        },
        _ = tokio::signal::ctrl_c() => {
            eprintln!();
            tracing::info!("interrupted, shutting down");
            return Ok(());
        }
    };

    print_summary(&records);

    if let Some(path) = args.output {
        export::export_records(&records, &path)
            .with_context(|| format!("could not export results to {}", path.display()))?;
        println!(
            "{} results written to {}",
            style("[+]").green().bold(),
            path.display()
        );
    }

    Ok(())
}

/// Read the query from stdin when it was not given on the command line.
fn prompt_query() -> anyhow::Result<String> {
    print!("{} ", style("find >").yellow().bold());
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    let query = line.trim().to_owned();
    anyhow::ensure!(!query.is_empty(), "no query given");
    Ok(query)
}

/// Print the run summary to stdout.
fn print_summary(records: &[linkhound::PageRecord]) {
    let pages_with_matches = records.iter().filter(|r| !r.links.is_empty()).count();
    let total_matches: usize = records.iter().map(|r| r.links.len()).sum();

    println!(
        "{} analysed {} pages, {} with relevant links, {} matches total",
        style("[+]").green().bold(),
        records.len(),
        pages_with_matches,
        total_matches,
    );
}

// src/main.rs
// =============================================================================
// Entry point of the sitemap-crawler CLI.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging
// 3. Build the crawl config (defaults < config file < flags)
// 4. Dispatch to the subcommand handler
// 5. Exit with 0 on success, 2 on error
// =============================================================================

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use serde::Serialize;
use sitemap_crawler::{logging, server, CrawlConfig, CrawlReport, SitemapGenerator};
use std::path::PathBuf;
use tracing::info;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.verbose, cli.log_file.as_deref())?;

    let file_config = CrawlConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Crawl {
            url,
            settings,
            json,
        } => handle_crawl(&url, settings.apply(file_config), json).await,
        Commands::Serve { addr, settings } => server::serve(&addr, settings.apply(file_config)).await,
    }
}

// What --json prints
#[derive(Serialize)]
struct CrawlSummary<'a> {
    sitemap: PathBuf,
    pages: usize,
    failures: usize,
    unexplored: usize,
    urls: Vec<&'a str>,
}

// Handles the 'crawl' subcommand
//
// Parameters:
//   url: the seed URL from the command line
//   config: fully merged settings
//   json: print a JSON summary instead of the plain path
async fn handle_crawl(url: &str, config: CrawlConfig, json: bool) -> Result<()> {
    let mut generator = SitemapGenerator::new(url, &config)?;

    info!(seed = %generator.seed(), max_pages = config.max_pages, "crawling website");

    let report: CrawlReport = generator.crawl_website(config.max_pages).await.clone();

    let path = generator
        .generate_xml_sitemap(&config.filename)
        .with_context(|| {
            format!("Could not write sitemap to {}", generator.output_dir().display())
        })?;

    println!("{}", crawl_output(path, &report, json)?);
    Ok(())
}

// The only thing 'crawl' writes to stdout: the sitemap path, or the JSON
// summary with --json. Progress and the crawl summary go through tracing.
fn crawl_output(path: PathBuf, report: &CrawlReport, json: bool) -> Result<String> {
    if !json {
        return Ok(path.display().to_string());
    }

    let summary = CrawlSummary {
        sitemap: path,
        pages: report.visited.len(),
        failures: report.failures,
        unexplored: report.unexplored,
        urls: report.visited.iter().map(String::as_str).collect(),
    };
    Ok(serde_json::to_string_pretty(&summary)?)
}

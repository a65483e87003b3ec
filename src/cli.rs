// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
//   sitemap-crawler crawl https://example.com --max-pages 50
//   sitemap-crawler serve --addr 0.0.0.0:8080
//
// Settings that also live in the config file are Option<...> here, so we can
// tell "not given on the command line" apart from "given" and only override
// the file when the user actually typed something.
// =============================================================================

use sitemap_crawler::config::CrawlConfig;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "sitemap-crawler",
    version,
    about = "Crawl a website and generate an XML sitemap",
    long_about = "sitemap-crawler follows same-site links breadth-first from a starting URL \
                  and writes every page it reaches into a sitemaps.org XML sitemap."
)]
pub struct Cli {
    /// Show per-page debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Also write logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// JSON config file with crawl defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Crawl a website and write its sitemap
    ///
    /// Example: sitemap-crawler crawl https://example.com --max-pages 50
    Crawl {
        /// Where to start crawling (must begin with http:// or https://)
        url: String,

        #[command(flatten)]
        settings: CrawlSettings,

        /// Print a JSON summary instead of just the sitemap path
        #[arg(long)]
        json: bool,
    },

    /// Run the web form front-end
    ///
    /// Example: sitemap-crawler serve --addr 127.0.0.1:5000
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:5000")]
        addr: String,

        #[command(flatten)]
        settings: CrawlSettings,
    },
}

/// Crawl settings that can override the config file
#[derive(Args, Debug, Default)]
pub struct CrawlSettings {
    /// Maximum number of pages to visit [default: 100]
    #[arg(long)]
    pub max_pages: Option<usize>,

    /// Per-request timeout in seconds [default: 10]
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Directory the sitemap is written to [default: sitemaps]
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Sitemap file name [default: sitemap.xml]
    #[arg(long)]
    pub filename: Option<String>,

    /// User-Agent header for requests
    #[arg(long)]
    pub user_agent: Option<String>,
}

impl CrawlSettings {
    /// Layers the command-line values over `config`
    pub fn apply(self, mut config: CrawlConfig) -> CrawlConfig {
        if let Some(max_pages) = self.max_pages {
            config.max_pages = max_pages;
        }
        if let Some(timeout) = self.timeout {
            config.timeout_secs = timeout;
        }
        if let Some(output_dir) = self.output_dir {
            config.output_dir = output_dir;
        }
        if let Some(filename) = self.filename {
            config.filename = filename;
        }
        if let Some(user_agent) = self.user_agent {
            config.user_agent = user_agent;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_crawl_flags_parse() {
        let cli = Cli::parse_from([
            "sitemap-crawler",
            "crawl",
            "https://example.com",
            "--max-pages",
            "5",
            "--output-dir",
            "out",
            "--json",
        ]);

        match cli.command {
            Commands::Crawl { url, settings, json } => {
                assert_eq!(url, "https://example.com");
                assert_eq!(settings.max_pages, Some(5));
                assert_eq!(settings.output_dir, Some(PathBuf::from("out")));
                assert!(json);
            }
            other => panic!("expected crawl, got {:?}", other),
        }
    }

    #[test]
    fn test_flags_override_only_what_was_given() {
        let base = CrawlConfig {
            max_pages: 7,
            timeout_secs: 3,
            ..CrawlConfig::default()
        };
        let settings = CrawlSettings {
            max_pages: Some(20),
            ..CrawlSettings::default()
        };

        let config = settings.apply(base);
        assert_eq!(config.max_pages, 20);
        assert_eq!(config.timeout_secs, 3);
    }

    #[test]
    fn test_serve_has_default_addr() {
        let cli = Cli::parse_from(["sitemap-crawler", "serve"]);
        match cli.command {
            Commands::Serve { addr, .. } => assert_eq!(addr, "127.0.0.1:5000"),
            other => panic!("expected serve, got {:?}", other),
        }
    }
}

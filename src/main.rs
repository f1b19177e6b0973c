//! Sitemap route CLI.
//!
//! # Architecture Overview
//!
//! ```text
//!   sitemap document ──▶ FileSitemapProvider ──▶ SitemapRoute ──▶ resolve / match
//!          │                                           ▲
//!          └──▶ SitemapWatcher ──(fresh sets)──▶ run_rebuilds
//! ```
//!
//! `resolve`, `match` and `routes` answer from a lazily built index and exit.
//! `watch` keeps the index hot and rebuilds it whenever the document changes.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};

use sitemap_route::config::loader::load_config;
use sitemap_route::config::watcher::SitemapWatcher;
use sitemap_route::config::AppConfig;
use sitemap_route::lifecycle::{signals, Shutdown};
use sitemap_route::observability::{logging, metrics};
use sitemap_route::sitemap::FileSitemapProvider;
use sitemap_route::SitemapRoute;

#[derive(Parser)]
#[command(name = "sitemap-route")]
#[command(about = "Resolve request paths to sitemap nodes", long_about = None)]
struct Cli {
    /// Service configuration file (TOML).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Sitemap set document, overrides `sitemaps.path`.
    #[arg(short, long)]
    sitemaps: Option<PathBuf>,

    /// Tenant request URL prefix, overrides `tenant.request_url_prefix`.
    #[arg(short, long)]
    prefix: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the node id each path resolves to
    Resolve { paths: Vec<String> },
    /// Print whether each path is a sitemap route
    Match { paths: Vec<String> },
    /// Print the full route index
    Routes,
    /// Keep routes hot, rebuilding on sitemap document changes until Ctrl+C
    Watch,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };
    if let Some(path) = &cli.sitemaps {
        config.sitemaps.path = path.display().to_string();
    }
    if let Some(prefix) = cli.prefix {
        config.tenant.request_url_prefix = Some(prefix);
    }

    logging::init_logging(&config.observability.log_level);

    let provider = Arc::new(FileSitemapProvider::new(&config.sitemaps.path));

    tracing::info!(
        sitemaps = %provider.path().display(),
        tenant = ?config.tenant.request_url_prefix,
        "Configuration loaded"
    );

    let route = Arc::new(SitemapRoute::new(provider, &config.tenant));

    match cli.command {
        Commands::Resolve { paths } => {
            for path in paths {
                match route.resolve(&path).await? {
                    Some(node) => println!("{path}\t{node}"),
                    None => println!("{path}\tnot found"),
                }
            }
        }
        Commands::Match { paths } => {
            for path in paths {
                println!("{path}\t{}", route.matches(&path).await?);
            }
        }
        Commands::Routes => {
            let index = route.build(None).await?;
            let routes: serde_json::Map<String, serde_json::Value> = index
                .paths()
                .into_iter()
                .filter_map(|path| index.get(path).map(|node| (path.to_string(), node.as_str().into())))
                .collect();
            println!("{}", serde_json::to_string_pretty(&routes)?);
        }
        Commands::Watch => watch(config, route).await?,
    }

    Ok(())
}

async fn watch(config: AppConfig, route: Arc<SitemapRoute>) -> Result<(), Box<dyn std::error::Error>> {
    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    // Warm the index so configuration errors surface at startup
    route.build(None).await?;

    let shutdown = Shutdown::new();
    let (watcher, updates) = SitemapWatcher::new(
        config.sitemaps.path.as_ref(),
        Duration::from_secs(config.sitemaps.poll_interval_secs),
    );
    let _watcher = if config.sitemaps.watch {
        Some(watcher.run()?)
    } else {
        tracing::info!("Sitemap watching disabled");
        None
    };

    let rebuilds = tokio::spawn(route.clone().run_rebuilds(updates, shutdown.subscribe()));

    signals::shutdown_on_ctrl_c(&shutdown).await?;
    tracing::info!(tasks = shutdown.receiver_count(), "Waiting for background tasks to drain");
    rebuilds.await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

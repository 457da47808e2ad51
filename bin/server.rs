// Character Catalog - Web Server
// Serves the catalog page and its HTML fragment API with Axum

use anyhow::{Context, Result};
use character_catalog::server::{router, AppState};
use character_catalog::{logging, CatalogStore, Config, LoadError};
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

/// Character Catalog - Web Server
#[derive(Parser, Debug)]
#[command(name = "catalog-server")]
#[command(version)]
#[command(about = "Serve the character catalog in the browser")]
struct Args {
    /// Catalog JSON document
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Address to listen on
    #[arg(short, long)]
    bind: Option<SocketAddr>,

    /// Directory served under /static
    #[arg(long)]
    static_dir: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// The one suspension point: fetch, then parse into the store
async fn load_catalog(store: &CatalogStore, config: &Config) -> Result<usize, LoadError> {
    let json = tokio::fs::read_to_string(&config.data_path)
        .await
        .map_err(|source| LoadError::Io {
            path: config.data_path.clone(),
            source,
        })?;
    store.load_str(&json).map(|records| records.len())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::default()
        .with_data_path(args.data)
        .with_bind_addr(args.bind)
        .with_static_dir(args.static_dir)
        .with_log_file(args.log_file);

    logging::init("info,tower_http=warn", config.log_file.as_deref())?;

    let store = Arc::new(CatalogStore::new());
    let load_failed = match load_catalog(&store, &config).await {
        Ok(count) => {
            info!(count, path = ?config.data_path, "catalog ready");
            false
        }
        Err(e) => {
            // Keep serving: every page shows the failure message
            error!("failed to load catalog: {}", e);
            true
        }
    };

    let app = router(AppState::new(store, load_failed), config.static_dir.clone());

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_addr))?;

    info!("server running on http://{}", config.bind_addr);

    axum::serve(listener, app)
        .await
        .context("Failed to start server")?;

    Ok(())
}

mod catalog;
mod config;
mod errors;
mod routes;
mod state;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::routes::build_app;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={},tower_http={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log,
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Portfolio API v{}", env!("CARGO_PKG_VERSION"));

    let catalog = load_catalog(&config)?;
    info!(
        "Catalog ready: {} menu items, {} technologies, {} design focuses, {} reviews, {} contacts",
        catalog.menu().len(),
        catalog.tech_stack().len(),
        catalog.design_focus().len(),
        catalog.reviews().len(),
        catalog.contacts().len()
    );

    let app = build_app(AppState::new(catalog));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Built-in content unless CATALOG_PATH names a replacement document.
fn load_catalog(config: &Config) -> Result<Catalog> {
    match &config.catalog_path {
        Some(path) => {
            info!("Loading catalog from {}", path.display());
            Catalog::from_json_file(path)
                .with_context(|| format!("Failed to load catalog from {}", path.display()))
        }
        None => {
            info!("Using built-in catalog");
            Ok(Catalog::builtin())
        }
    }
}

//! not_woo shop settings server
//!
//! Loads configuration, sets up logging, migrates the database and serves the
//! shop settings REST API until Ctrl-C or SIGTERM.

mod cli;
mod config;
mod logging;

use anyhow::{Context, Result};
use axum::{routing::get, Router};
use clap::Parser;
use cli::Cli;
use config::AppConfig;
use sea_orm::{ConnectOptions, Database};
use shop_settings::ShopSettingsModule;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load(&cli)?;
    logging::init(&config.logging)?;

    tracing::info!(
        bind_addr = %config.server.bind_addr,
        plugin = %config.shop_settings.plugin,
        log_format = ?config.logging.format,
        "Server initialized"
    );

    let mut opts = ConnectOptions::new(config.database.url.clone());
    opts.max_connections(config.database.max_connections)
        .sqlx_logging(false);
    let db = Database::connect(opts)
        .await
        .context("failed to connect to database")?;

    let module = ShopSettingsModule::new(config.shop_settings.clone());
    module.migrate(&db).await.context("failed to run migrations")?;
    module.init(db)?;

    let app = build_router(&module)?;

    let listener = TcpListener::bind(config.server.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.server.bind_addr))?;
    tracing::info!(addr = %config.server.bind_addr, "Listening");

    let cancel = CancellationToken::new();
    tokio::spawn(shutdown_signal(cancel.clone()));

    axum::serve(listener, app)
        .with_graceful_shutdown(cancel.cancelled_owned())
        .await
        .context("server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

fn build_router(module: &ShopSettingsModule) -> Result<Router> {
    let router = Router::new().route("/health", get(health));
    let router = module.register_rest(router)?;
    Ok(router.layer(TraceLayer::new_for_http()))
}

async fn health() -> &'static str {
    "ok"
}

async fn shutdown_signal(cancel: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
    cancel.cancel();
}

use std::net::SocketAddr;
use std::path::Path;

use axum::Router;
use common::utils::logging::{init_logging, LogFormat};
use configs::{AppConfig, LoggingConfig};
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::routes;
use crate::state::ServerState;

/// Config file when one exists at `CONFIG_PATH` (default `config.toml`),
/// otherwise environment variables only.
pub fn load_config() -> anyhow::Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    if Path::new(&path).exists() {
        AppConfig::load_and_validate()
    } else {
        AppConfig::from_env()
    }
}

/// Install the tracing subscriber described by `[logging]`.
pub fn init_logging_from(cfg: &LoggingConfig) {
    let format = match cfg.format.as_deref().map(str::parse::<LogFormat>) {
        Some(Ok(format)) => format,
        Some(Err(e)) => {
            init_logging(LogFormat::Compact, cfg.filter.as_deref());
            warn!(error = %e, "falling back to compact logs");
            return;
        }
        None => LogFormat::Compact,
    };
    init_logging(format, cfg.filter.as_deref());
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", cfg.server.host, cfg.server.port).parse()?)
}

/// Connect, migrate and build the router without binding a socket.
pub async fn build_app(cfg: &AppConfig) -> anyhow::Result<Router> {
    let db = models::db::connect_with_config(&cfg.database).await?;
    if cfg.database.run_migrations {
        migration::Migrator::up(&db, None).await?;
        info!("migrations applied");
    }
    Ok(routes::build_router(ServerState::new(db), build_cors()))
}

/// Public entry: build the app and run the HTTP server
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg).await?;
    let addr = bind_addr(&cfg)?;
    info!(%addr, "starting marketplace server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

use std::{env, future::Future, net::SocketAddr, path::Path};

use axum::Router;
use configs::AppConfig;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load the application config.
///
/// An existing config file must parse and validate. Without one, host/port/threads
/// come from `SERVER_HOST`, `SERVER_PORT` and `TOKIO_WORKER_THREADS`, then defaults.
pub fn load_config() -> Result<AppConfig, StartupError> {
    let path = configs::config_path();
    if Path::new(&path).exists() {
        let mut cfg = configs::load_from_file(&path)
            .map_err(|e| StartupError::InvalidConfig(format!("{path}: {e}")))?;
        cfg.normalize_and_validate()
            .map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
        return Ok(cfg);
    }

    warn!(%path, "config file not found; using environment and defaults");
    let mut cfg = AppConfig::default();
    if let Ok(host) = env::var("SERVER_HOST") {
        cfg.server.host = host;
    }
    if let Some(port) = env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
        cfg.server.port = port;
    }
    if let Some(w) = env::var("TOKIO_WORKER_THREADS").ok().and_then(|v| v.parse::<usize>().ok()) {
        cfg.server.worker_threads = Some(w);
    }
    cfg.normalize_and_validate()
        .map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    Ok(cfg)
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    let raw = format!("{}:{}", cfg.server.host, cfg.server.port);
    raw.parse().map_err(|_| StartupError::BindAddr(raw))
}

/// Build the router with fresh in-memory stores.
pub fn build_app(cfg: &AppConfig) -> Router {
    let state = ServerState::in_memory(&cfg.store);
    routes::build_router(state, build_cors())
}

/// Public entry: build the app and serve until `shutdown` resolves.
pub async fn run_until<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_app(&cfg);
    let addr = bind_addr(&cfg)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "starting server");
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    info!("server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_from_config() -> anyhow::Result<()> {
        let mut cfg = AppConfig::default();
        cfg.server.port = 9090;
        assert_eq!(bind_addr(&cfg)?, "127.0.0.1:9090".parse::<SocketAddr>()?);
        Ok(())
    }

    #[test]
    fn bind_addr_rejects_hostnames() {
        let mut cfg = AppConfig::default();
        cfg.server.host = "not a host".into();
        assert!(matches!(bind_addr(&cfg), Err(StartupError::BindAddr(_))));
    }
}

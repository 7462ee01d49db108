use std::net::SocketAddr;

use common::utils::logging::{init_logging_default, init_logging_json};
use configs::{AppConfig, LogConfig, LogFormat};
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::info;

use service::{Repositories, Services};

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

/// Install the tracing subscriber selected by `log.format`.
pub fn init_logging(log: &LogConfig) {
    match log.format {
        LogFormat::Json => init_logging_json(),
        LogFormat::Compact => init_logging_default(),
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Connect the pool, migrate if configured and wire the services.
pub async fn build_state(cfg: &AppConfig) -> Result<ServerState, StartupError> {
    let db = models::db::connect_with_config(&cfg.database)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;
    if cfg.database.run_migrations {
        migration::Migrator::up(&db, None)
            .await
            .map_err(|e| StartupError::Database(format!("migrate up: {e}")))?;
        info!("migrations applied");
    }
    Ok(ServerState::new(Services::new(Repositories::seaorm(&db))))
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("received Ctrl+C, draining connections");
    }
}

/// Serve the API with an already loaded config until Ctrl+C.
pub async fn serve(cfg: AppConfig) -> anyhow::Result<()> {
    let addr: SocketAddr = cfg
        .server
        .bind_addr()
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("server address: {e}")))?;
    let state = build_state(&cfg).await?;
    let app = routes::build_router(state, build_cors());

    info!(%addr, "starting bankorg server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
    info!("server stopped");
    Ok(())
}

use axum_helpers::server::{create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_users::SqlUserRepository;
use std::time::Duration;
use tracing::{info, warn};

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Before anything fallible, so startup errors get colored reports
    install_color_eyre();

    let config = Config::from_env()?;

    init_tracing(&config.environment);
    observability::init_metrics()
        .map_err(|e| eyre::eyre!("Failed to install metrics recorder: {}", e))?;

    let db = match config.database.clone() {
        Some(sql) => {
            let db = database::sql::connect_from_config_with_retry(sql, None)
                .await
                .map_err(|e| eyre::eyre!("Database connection failed: {}", e))?;
            SqlUserRepository::new(db.clone())
                .ensure_schema()
                .await
                .map_err(|e| eyre::eyre!("Failed to prepare users table: {}", e))?;
            Some(db)
        }
        None => {
            warn!("DATABASE_URL not set, users are kept in memory and lost on restart");
            None
        }
    };

    let state = AppState { config, db };

    let api_routes = api::routes(&state);
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes, &state.config.server)?;

    // - /health: liveness with app name/version
    // - /ready: storage ping
    let app = router
        .merge(health_router(state.config.app))
        .merge(api::ready_router(state.clone()));

    info!("Starting user API with graceful shutdown (30s timeout)");

    let server = state.config.server.clone();
    create_production_app(app, &server, Duration::from_secs(30), async move {
        if let Some(db) = state.db {
            info!("Shutting down: closing database connections");
            match db.close().await {
                Ok(()) => info!("Database connection closed successfully"),
                Err(e) => tracing::error!("Error closing database: {}", e),
            }
        }
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("User API shutdown complete");
    Ok(())
}

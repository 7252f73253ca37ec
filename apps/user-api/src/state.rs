//! Shared application state.

use database::sql::DatabaseConnection;

/// Cloned into the readiness handler; cloning shares the pool.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    /// SQL pool when `DATABASE_URL` is configured
    pub db: Option<DatabaseConnection>,
}

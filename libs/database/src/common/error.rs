use core_config::ConfigError;

/// Errors raised while configuring, connecting to or probing the database
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// Driver or ORM failure
    #[error("SQL error: {0}")]
    Sql(#[from] sea_orm::DbErr),

    /// Invalid or missing connection settings
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),
}

/// Result type alias for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;

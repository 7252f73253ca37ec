//! SeaORM connector for SQL backends
//!
//! Provides pool configuration, connect-with-retry and a readiness check.

mod config;
mod connector;
mod health;

pub use config::SqlConfig;
pub use connector::{connect, connect_from_config, connect_from_config_with_retry};
pub use health::check_health;

pub use sea_orm::{ConnectOptions, DatabaseConnection, DbErr};

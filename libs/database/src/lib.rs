//! SQL connection management for the workspace services.
//!
//! A single backend-agnostic module built on SeaORM: the concrete driver is
//! chosen by the URL scheme (`postgres://` in deployments, `sqlite::memory:`
//! in tests).
//!
//! ```ignore
//! use core_config::FromEnv;
//! use database::{sql, RetryConfig};
//!
//! let config = sql::SqlConfig::from_env()?;
//! let db = sql::connect_from_config_with_retry(config, Some(RetryConfig::new())).await?;
//! sql::check_health(&db).await?;
//! ```

pub mod common;
pub mod sql;

pub use common::{DatabaseError, DatabaseResult, RetryConfig};

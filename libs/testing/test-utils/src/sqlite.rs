//! SQLite test infrastructure
//!
//! Provides a `TestDatabase` backed by an in-memory SQLite database. Every
//! instance is a fresh, empty database that disappears with its pool.

use database::sql::{SqlConfig, connect_from_config};
use sea_orm::DatabaseConnection;

/// Test database wrapper
///
/// Schema creation is left to the caller so each domain owns its tables.
pub struct TestDatabase {
    pub connection: DatabaseConnection,
    pub connection_string: String,
}

impl TestDatabase {
    /// Open a new, isolated in-memory database
    ///
    /// # Example
    ///
    /// ```no_run
    /// use test_utils::TestDatabase;
    ///
    /// # async fn example() {
    /// let db = TestDatabase::new().await;
    /// // Use db.connection() to create your repository
    /// # }
    /// ```
    pub async fn new() -> Self {
        let connection_string = "sqlite::memory:".to_string();

        let connection = connect_from_config(SqlConfig::new(connection_string.clone()))
            .await
            .expect("Failed to open in-memory SQLite database");

        tracing::info!("Test database ready (SQLite in-memory)");

        Self {
            connection,
            connection_string,
        }
    }

    /// Get a clone of the database connection
    pub fn connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }
}

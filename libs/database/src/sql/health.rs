use sea_orm::DatabaseConnection;
use tracing::debug;

use crate::common::DatabaseError;

/// Readiness check: verifies a pooled connection answers a ping.
pub async fn check_health(db: &DatabaseConnection) -> Result<(), DatabaseError> {
    db.ping()
        .await
        .map_err(|e| DatabaseError::HealthCheckFailed(e.to_string()))?;

    debug!("Database health check passed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::connect;

    #[tokio::test]
    async fn test_check_health_on_live_connection() {
        let db = connect("sqlite::memory:").await.unwrap();
        assert!(check_health(&db).await.is_ok());
    }
}

use axum::{Router, middleware, routing::get};
use domain_users::{InMemoryUserRepository, SqlUserRepository, UserService, handlers};
use observability::{metrics_handler, middleware::metrics_middleware};

use crate::state::AppState;

pub mod health;

/// Mount point of the user directory
pub const USERS_PATH: &str = "/user";

/// API routes, each with its state already applied.
///
/// Users live in SQL when a pool is configured (the schema must already
/// exist) and in process memory otherwise.
pub fn routes(state: &AppState) -> Router {
    let users = match &state.db {
        Some(db) => handlers::router(UserService::new(SqlUserRepository::new(db.clone()))),
        None => handlers::router(UserService::new(InMemoryUserRepository::new())),
    };

    Router::new()
        .nest(USERS_PATH, users)
        .route("/metrics", get(metrics_handler))
        .layer(middleware::from_fn(metrics_middleware))
}

/// `/ready`, backed by real storage checks
pub fn ready_router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Environment};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use core_config::{app_info, server::ServerConfig};
    use http_body_util::BodyExt;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn state(db: Option<database::sql::DatabaseConnection>) -> AppState {
        AppState {
            config: Config {
                app: app_info!(),
                database: None,
                server: ServerConfig::default(),
                environment: Environment::Development,
            },
            db,
        }
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn test_users_mounted_at_user_path() {
        let app = routes(&state(None));

        let (status, body) = send(
            app.clone(),
            Request::builder()
                .method("POST")
                .uri("/user")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"login":"alice"}"#))
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, json!({"id": 1, "login": "alice"}));

        let (status, body) = send(
            app,
            Request::builder().uri("/user").body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([{"id": 1, "login": "alice"}]));
    }

    #[tokio::test]
    async fn test_ready_without_database() {
        let (status, body) = send(
            ready_router(state(None)),
            Request::builder().uri("/ready").body(Body::empty()).unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "ready"}));
    }

    #[tokio::test]
    async fn test_ready_with_reachable_database() {
        let db = database::sql::connect("sqlite::memory:").await.unwrap();

        let (status, body) = send(
            ready_router(state(Some(db))),
            Request::builder().uri("/ready").body(Body::empty()).unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["database"], "connected");
    }

    #[tokio::test]
    async fn test_users_backed_by_sql_when_configured() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([sea_orm::DbErr::Custom("no such table".into())])
            .into_connection();
        let app = routes(&state(Some(db)));

        let (status, body) = send(
            app,
            Request::builder().uri("/user").body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "DATABASE_ERROR");
    }

    #[tokio::test]
    async fn test_unsupported_method_on_user_is_json_405() {
        let app = axum_helpers::create_router::<crate::openapi::ApiDoc>(
            routes(&state(None)),
            &ServerConfig::default(),
        )
        .unwrap();

        let (status, body) = send(
            app,
            Request::builder()
                .method("PUT")
                .uri("/user")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body["error"], "METHOD_NOT_ALLOWED");
    }
}

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};
use axum_helpers::{
    AppError, ValidatedJson,
    errors::responses::{
        BadRequestJsonResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        ServiceUnavailableResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::entity;
use crate::error::UserResult;
use crate::models::{CreateUser, User};
use crate::repository::UserRepository;
use crate::service::{UserService, record_rejected_fields};

/// OpenAPI documentation for Users API
#[derive(OpenApi)]
#[openapi(
    paths(list_users, create_user),
    components(
        schemas(User, CreateUser),
        responses(
            BadRequestValidationResponse,
            BadRequestJsonResponse,
            InternalServerErrorResponse,
            ServiceUnavailableResponse
        )
    ),
    tags(
        (name = entity::Model::TAG, description = "User directory endpoints")
    )
)]
pub struct ApiDoc;

/// Create the user router; mount it at `/user`
pub fn router<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_users::<R>).post(create_user::<R>))
        .with_state(shared_service)
}

/// List all users
#[utoipa::path(
    get,
    path = "",
    tag = entity::Model::TAG,
    responses(
        (status = 200, description = "All users, ascending by id", body = Vec<User>),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn list_users<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
) -> UserResult<Json<Vec<User>>> {
    tracing::debug!("Received request to list all users");
    let users = service.list_users().await?;
    Ok(Json(users))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "",
    tag = entity::Model::TAG,
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn create_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    payload: Result<ValidatedJson<CreateUser>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let ValidatedJson(input) = payload.inspect_err(|err| {
        if let AppError::ValidationError(errors) = err {
            record_rejected_fields(errors);
        }
    })?;

    tracing::debug!(login = ?input.login, "Received request to create user");
    let user = service.create_user(input).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

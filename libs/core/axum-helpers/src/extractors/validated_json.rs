//! JSON extractor with automatic validation using the validator crate.

use crate::errors::AppError;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON extractor that runs `Validate` on the decoded body.
///
/// Both failure modes reject with [`AppError`]: a body that cannot be decoded
/// becomes `INVALID_JSON`, a decoded body with bad fields becomes
/// `VALIDATION_ERROR` with per-field details. Both are HTTP 400.
///
/// ```ignore
/// async fn create_user(ValidatedJson(input): ValidatedJson<CreateUser>) -> impl IntoResponse {
///     // input.validate() already passed
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await?;
        data.validate()?;
        Ok(ValidatedJson(data))
    }
}

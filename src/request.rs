use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::error::ApiError;

/// JSON body whose rejections (bad syntax, wrong field types, missing
/// content type) surface as a 400 `ApiError::Validation`.
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => {
                warn!(status = %rejection.status(), "rejected request body");
                Err(body_error(rejection))
            }
        }
    }
}

fn body_error(rejection: JsonRejection) -> ApiError {
    ApiError::Validation(format!("Invalid request body: {}", rejection.body_text()))
}

/// Treats absent and blank values alike.
pub fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

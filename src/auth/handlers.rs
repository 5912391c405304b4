use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use tracing::{instrument, warn};

use crate::{
    auth::{
        dto::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse},
        jwt::JwtKeys,
        services,
    },
    error::ApiError,
    request::{present, JsonBody},
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/api/register", post(register))
        .route("/api/login", post(login))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    let (Some(email), Some(password), Some(full_name)) = (
        present(payload.email),
        present(payload.password),
        present(payload.full_name),
    ) else {
        warn!("register with missing fields");
        return Err(ApiError::Validation(
            "Email, password, and full name are required.".into(),
        ));
    };

    let keys = JwtKeys::from_ref(&state);
    let token = services::register(&state, &keys, &email, &password, &full_name).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "Registration successful!".into(),
            token,
        }),
    ))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let (Some(email), Some(password)) = (present(payload.email), present(payload.password))
    else {
        warn!("login with missing fields");
        return Err(ApiError::Validation("Email and password are required.".into()));
    };

    let keys = JwtKeys::from_ref(&state);
    let (token, user_id) = services::login(&state, &keys, &email, &password).await?;

    Ok(Json(LoginResponse {
        message: "Login Successful!".into(),
        token,
        user_id,
    }))
}

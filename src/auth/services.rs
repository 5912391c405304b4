use lazy_static::lazy_static;
use regex::Regex;
use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    activity::repo_types::{ActivityKind, NewActivity},
    auth::{
        jwt::JwtKeys,
        password::{hash_password, verify_password},
        repo_types::NewUser,
    },
    error::ApiError,
    state::AppState,
};

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

pub(crate) fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Creates the account and returns a session token for it.
pub async fn register(
    state: &AppState,
    keys: &JwtKeys,
    email: &str,
    password: &str,
    full_name: &str,
) -> Result<String, ApiError> {
    let email = normalize_email(email);
    if !is_valid_email(&email) {
        warn!(email = %email, "invalid email");
        return Err(ApiError::Validation("Invalid email.".into()));
    }

    if state.users.find_by_email(&email).await?.is_some() {
        warn!(email = %email, "email already registered");
        return Err(ApiError::Conflict("Email is already in use.".into()));
    }

    let password_hash = hash_password(password)?;
    let user = state
        .users
        .create(&NewUser {
            email: &email,
            password_hash: &password_hash,
            full_name: full_name.trim(),
        })
        .await
        .map_err(|e| match ApiError::from(e) {
            ApiError::Conflict(_) => ApiError::Conflict("Email is already in use.".into()),
            other => other,
        })?;

    let token = keys.sign(user.id)?;
    info!(user_id = %user.id, email = %user.email, "user registered");
    Ok(token)
}

/// Verifies credentials, records a login activity and returns `(token, user_id)`.
pub async fn login(
    state: &AppState,
    keys: &JwtKeys,
    email: &str,
    password: &str,
) -> Result<(String, Uuid), ApiError> {
    let email = normalize_email(email);

    let Some(user) = state.users.find_by_email(&email).await? else {
        warn!(email = %email, "login unknown email");
        return Err(ApiError::Auth);
    };

    if !verify_password(password, &user.password_hash)? {
        warn!(email = %email, user_id = %user.id, "login invalid password");
        return Err(ApiError::Auth);
    }

    let token = keys.sign(user.id)?;

    state
        .activities
        .insert(&NewActivity {
            user_id: user.id,
            kind: ActivityKind::Login,
        })
        .await?;

    info!(user_id = %user.id, email = %user.email, "user logged in");
    Ok((token, user.id))
}

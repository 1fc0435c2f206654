//! Thin proxies over the auth provider.

use axum::{body::Bytes, extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auth::{AuthUser, Credentials, Session, SessionToken};
use crate::errors::AppError;
use crate::routes::parse_json;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
struct CredentialsBody {
    email: Option<String>,
    password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: AuthUser,
}

#[derive(Debug, Serialize)]
pub struct SignInResponse {
    pub user: AuthUser,
    pub session: Session,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

fn credentials(body: &Bytes) -> Result<Credentials, AppError> {
    let body: CredentialsBody = parse_json(body)?;
    match (body.email, body.password) {
        (Some(email), Some(password)) if !email.trim().is_empty() && !password.is_empty() => {
            Ok(Credentials {
                email: email.trim().to_string(),
                password,
            })
        }
        _ => Err(AppError::Validation(
            "Email and password are required".to_string(),
        )),
    }
}

/// POST /api/auth/signup
pub async fn handle_sign_up(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<UserResponse>, AppError> {
    let credentials = credentials(&body)?;
    let user = state
        .auth
        .sign_up(&credentials)
        .await
        .map_err(AppError::from_credential_flow)?;
    info!("Signed up user {}", user.id);
    Ok(Json(UserResponse { user }))
}

/// POST /api/auth/signin
pub async fn handle_sign_in(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SignInResponse>, AppError> {
    let credentials = credentials(&body)?;
    let (user, session) = state
        .auth
        .sign_in(&credentials)
        .await
        .map_err(AppError::from_credential_flow)?;
    Ok(Json(SignInResponse { user, session }))
}

/// POST /api/auth/signout
/// Succeeds without a token: there is no session to end.
pub async fn handle_sign_out(
    State(state): State<AppState>,
    token: SessionToken,
) -> Result<Json<MessageResponse>, AppError> {
    if let Some(access_token) = token.as_deref() {
        state
            .auth
            .sign_out(access_token)
            .await
            .map_err(AppError::from_credential_flow)?;
    }
    Ok(Json(MessageResponse {
        message: "Signed out successfully".to_string(),
    }))
}

/// GET /api/auth/user
pub async fn handle_current_user(
    State(state): State<AppState>,
    token: SessionToken,
) -> Result<Json<UserResponse>, AppError> {
    let user = token
        .resolve(state.auth.as_ref())
        .await
        .map_err(AppError::from_session_lookup)?;
    Ok(Json(UserResponse { user }))
}

//! Authentication is delegated to an external provider.
//!
//! Handlers never look up the caller implicitly: they receive a `SessionToken`
//! and resolve it through `AppState.auth` (an `Arc<dyn AuthProvider>`), getting a
//! typed `Result<AuthUser, AuthError>` back.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

pub mod session;
pub mod supabase;
#[cfg(test)]
pub mod testing;

pub use session::SessionToken;
pub use supabase::SupabaseAuth;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider refused the request (bad credentials, duplicate account, expired token).
    #[error("Auth provider rejected the request (status {status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Auth provider unavailable (status {status})")]
    Upstream { status: u16 },

    #[error("Unexpected auth provider response: {0}")]
    Malformed(String),

    #[error("No session token supplied")]
    MissingToken,

    #[error("Session token is invalid or expired")]
    InvalidToken,
}

/// Identity returned by the provider. Only the fields this service reads are kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: String,
    #[serde(default)]
    pub expires_in: i64,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// The auth provider seam. Implement this to swap providers without touching handlers.
///
/// Carried in `AppState` as `Arc<dyn AuthProvider>`.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn sign_up(&self, credentials: &Credentials) -> Result<AuthUser, AuthError>;

    async fn sign_in(&self, credentials: &Credentials) -> Result<(AuthUser, Session), AuthError>;

    async fn sign_out(&self, access_token: &str) -> Result<(), AuthError>;

    async fn current_user(&self, access_token: &str) -> Result<AuthUser, AuthError>;
}

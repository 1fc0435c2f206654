//! Supabase Auth (GoTrue) client. The only module that talks to the auth provider.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Deserialize};
use tracing::{debug, warn};

use crate::auth::{AuthError, AuthProvider, AuthUser, Credentials, Session};

#[derive(Clone)]
pub struct SupabaseAuth {
    client: Client,
    base_url: String,
    anon_key: String,
}

/// `/token?grant_type=password` returns the session fields and the user side by side.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(flatten)]
    session: Session,
    user: AuthUser,
}

/// `/signup` returns a full session when email confirmation is disabled, a bare user otherwise.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SignUpResponse {
    Session(TokenResponse),
    User(AuthUser),
}

#[derive(Debug, Default, Deserialize)]
struct ProviderErrorBody {
    msg: Option<String>,
    error_description: Option<String>,
    message: Option<String>,
    error: Option<String>,
}

impl SupabaseAuth {
    pub fn new(base_url: &str, anon_key: String, timeout: Duration) -> Result<Self, AuthError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.base_url, path)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, AuthError> {
        let response = request.header("apikey", &self.anon_key).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        if status.is_client_error() {
            let message = provider_message(&body);
            debug!("Auth provider rejected request ({status}): {message}");
            Err(AuthError::Rejected {
                status: status.as_u16(),
                message,
            })
        } else {
            warn!("Auth provider returned {status}: {body}");
            Err(AuthError::Upstream {
                status: status.as_u16(),
            })
        }
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, AuthError> {
        let body = self.send(request).await?.text().await?;
        serde_json::from_str(&body).map_err(|e| AuthError::Malformed(e.to_string()))
    }
}

#[async_trait]
impl AuthProvider for SupabaseAuth {
    async fn sign_up(&self, credentials: &Credentials) -> Result<AuthUser, AuthError> {
        let request = self.client.post(self.endpoint("signup")).json(credentials);
        match self.send_json::<SignUpResponse>(request).await? {
            SignUpResponse::Session(token) => Ok(token.user),
            SignUpResponse::User(user) => Ok(user),
        }
    }

    async fn sign_in(&self, credentials: &Credentials) -> Result<(AuthUser, Session), AuthError> {
        let request = self
            .client
            .post(self.endpoint("token"))
            .query(&[("grant_type", "password")])
            .json(credentials);
        let token: TokenResponse = self.send_json(request).await?;
        Ok((token.user, token.session))
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), AuthError> {
        let request = self
            .client
            .post(self.endpoint("logout"))
            .bearer_auth(access_token);
        self.send(request).await?;
        Ok(())
    }

    async fn current_user(&self, access_token: &str) -> Result<AuthUser, AuthError> {
        let request = self.client.get(self.endpoint("user")).bearer_auth(access_token);
        match self.send_json(request).await {
            Err(AuthError::Rejected {
                status: 401 | 403, ..
            }) => Err(AuthError::InvalidToken),
            other => other,
        }
    }
}

/// Picks the human-readable message out of a provider error body.
/// Falls back to the raw body when it is not one of the known JSON shapes.
fn provider_message(body: &str) -> String {
    let parsed: ProviderErrorBody = serde_json::from_str(body).unwrap_or_default();
    parsed
        .msg
        .or(parsed.error_description)
        .or(parsed.message)
        .or(parsed.error)
        .unwrap_or_else(|| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                "Authentication request was rejected".to_string()
            } else {
                trimmed.to_string()
            }
        })
}

use std::convert::Infallible;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};

use crate::auth::{AuthError, AuthProvider, AuthUser};

/// The caller's access token, taken from `Authorization: Bearer <token>`.
/// Extraction never fails; an absent or malformed header yields `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionToken(pub Option<String>);

impl SessionToken {
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Resolves the token to a user through the provider.
    pub async fn resolve(&self, auth: &dyn AuthProvider) -> Result<AuthUser, AuthError> {
        let token = self.as_deref().ok_or(AuthError::MissingToken)?;
        auth.current_user(token).await
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for SessionToken
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(SessionToken(bearer_token(&parts.headers)))
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?.trim();
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();
    if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() {
        Some(token.to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(auth: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(auth).unwrap());
        headers
    }

    #[test]
    fn test_bearer_token_extracted() {
        assert_eq!(
            bearer_token(&headers_with("Bearer abc.def")),
            Some("abc.def".to_string())
        );
    }

    #[test]
    fn test_bearer_scheme_is_case_insensitive() {
        assert_eq!(bearer_token(&headers_with("bearer xyz")), Some("xyz".to_string()));
    }

    #[test]
    fn test_other_schemes_ignored() {
        assert_eq!(bearer_token(&headers_with("Basic dXNlcjpwYXNz")), None);
    }

    #[test]
    fn test_empty_token_ignored() {
        assert_eq!(bearer_token(&headers_with("Bearer   ")), None);
        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }

    #[tokio::test]
    async fn test_resolve_without_token_is_missing_token() {
        let auth = crate::auth::testing::FakeAuth::default();
        let err = SessionToken(None).resolve(&auth).await.unwrap_err();
        assert!(matches!(err, AuthError::MissingToken));
    }
}

//! In-process `AuthProvider` for handler tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::{AuthError, AuthProvider, AuthUser, Credentials, Session};

#[derive(Default)]
pub struct FakeAuth {
    accounts: Mutex<HashMap<String, (String, AuthUser)>>,
    sessions: Mutex<HashMap<String, AuthUser>>,
    /// When set, every call fails as if the provider were unreachable.
    pub unavailable: bool,
}

impl FakeAuth {
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    /// Registers an account and returns a live access token for it.
    pub fn login_as(&self, email: &str) -> (AuthUser, String) {
        let user = AuthUser {
            id: Uuid::new_v4(),
            email: Some(email.to_string()),
            created_at: None,
        };
        let token = format!("token-{}", user.id);
        self.sessions
            .lock()
            .unwrap()
            .insert(token.clone(), user.clone());
        (user, token)
    }

    fn check_available(&self) -> Result<(), AuthError> {
        if self.unavailable {
            Err(AuthError::Upstream { status: 503 })
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl AuthProvider for FakeAuth {
    async fn sign_up(&self, credentials: &Credentials) -> Result<AuthUser, AuthError> {
        self.check_available()?;
        if credentials.password.len() < 6 {
            return Err(AuthError::Rejected {
                status: 422,
                message: "Password should be at least 6 characters".into(),
            });
        }
        let mut accounts = self.accounts.lock().unwrap();
        if accounts.contains_key(&credentials.email) {
            return Err(AuthError::Rejected {
                status: 422,
                message: "User already registered".into(),
            });
        }
        let user = AuthUser {
            id: Uuid::new_v4(),
            email: Some(credentials.email.clone()),
            created_at: None,
        };
        accounts.insert(
            credentials.email.clone(),
            (credentials.password.clone(), user.clone()),
        );
        Ok(user)
    }

    async fn sign_in(&self, credentials: &Credentials) -> Result<(AuthUser, Session), AuthError> {
        self.check_available()?;
        let accounts = self.accounts.lock().unwrap();
        let user = match accounts.get(&credentials.email) {
            Some((password, user)) if *password == credentials.password => user.clone(),
            _ => {
                return Err(AuthError::Rejected {
                    status: 400,
                    message: "Invalid login credentials".into(),
                })
            }
        };
        let session = Session {
            access_token: format!("token-{}", user.id),
            refresh_token: "refresh".into(),
            expires_in: 3600,
            token_type: "bearer".into(),
        };
        self.sessions
            .lock()
            .unwrap()
            .insert(session.access_token.clone(), user.clone());
        Ok((user, session))
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), AuthError> {
        self.check_available()?;
        self.sessions.lock().unwrap().remove(access_token);
        Ok(())
    }

    async fn current_user(&self, access_token: &str) -> Result<AuthUser, AuthError> {
        self.check_available()?;
        self.sessions
            .lock()
            .unwrap()
            .get(access_token)
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }
}

//! Auth service
//!
//! Resolves callers to identities through an external provider and decides
//! admin access from the caller's profile role. Token issuance and
//! verification stay with the provider.

use crate::config::{ADMIN_ROLE, SESSION_RESOLVE_TIMEOUT};
use crate::database::Repository;
use crate::error::{AppError, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Duration;
use uuid::Uuid;

/// An authenticated caller
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Identity {
    #[serde(rename = "id")]
    pub user_id: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// The identity a session token belongs to, or `None` for an invalid or
    /// expired token.
    async fn resolve_session(&self, token: &str) -> Result<Option<Identity>>;

    /// Create a confirmed account for `email` and return its user id.
    async fn create_user(&self, email: &str) -> Result<String>;
}

/// Auth provider reached over its REST API
pub struct HttpIdentityProvider {
    http: reqwest::Client,
    base_url: String,
    service_key: String,
}

impl HttpIdentityProvider {
    pub fn new(base_url: &str, service_key: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            service_key: service_key.to_string(),
        })
    }
}

#[derive(Deserialize)]
struct CreatedUser {
    id: String,
}

#[async_trait]
impl IdentityProvider for HttpIdentityProvider {
    async fn resolve_session(&self, token: &str) -> Result<Option<Identity>> {
        let response = self
            .http
            .get(format!("{}/auth/v1/user", self.base_url))
            .header("apikey", &self.service_key)
            .bearer_auth(token)
            .send()
            .await?;

        if matches!(
            response.status(),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN | StatusCode::NOT_FOUND
        ) {
            return Ok(None);
        }

        let identity: Identity = response.error_for_status()?.json().await?;
        Ok(Some(identity))
    }

    async fn create_user(&self, email: &str) -> Result<String> {
        let response = self
            .http
            .post(format!("{}/auth/v1/admin/users", self.base_url))
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
            .json(&serde_json::json!({ "email": email, "email_confirm": true }))
            .send()
            .await?
            .error_for_status()?;

        let created: CreatedUser = response.json().await?;
        Ok(created.id)
    }
}

/// In-process identities, for development without an auth provider and
/// for tests
#[derive(Default)]
pub struct LocalIdentityProvider {
    sessions: RwLock<HashMap<String, Identity>>,
}

impl LocalIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a session token for `user_id`.
    pub fn insert_session(&self, token: &str, user_id: &str) {
        if let Ok(mut sessions) = self.sessions.write() {
            sessions.insert(
                token.to_string(),
                Identity {
                    user_id: user_id.to_string(),
                    email: None,
                },
            );
        }
    }
}

#[async_trait]
impl IdentityProvider for LocalIdentityProvider {
    async fn resolve_session(&self, token: &str) -> Result<Option<Identity>> {
        let sessions = self
            .sessions
            .read()
            .map_err(|_| AppError::Generic("session table poisoned".to_string()))?;
        Ok(sessions.get(token).cloned())
    }

    async fn create_user(&self, _email: &str) -> Result<String> {
        Ok(format!("user-{}", Uuid::new_v4()))
    }
}

/// Service for admin access checks
#[derive(Clone)]
pub struct AuthService {
    provider: Arc<dyn IdentityProvider>,
    repo: Repository,
    resolve_timeout: Duration,
}

impl AuthService {
    pub fn new(provider: Arc<dyn IdentityProvider>, repo: Repository) -> Self {
        Self {
            provider,
            repo,
            resolve_timeout: SESSION_RESOLVE_TIMEOUT,
        }
    }

    pub fn with_resolve_timeout(mut self, timeout: Duration) -> Self {
        self.resolve_timeout = timeout;
        self
    }

    pub fn provider(&self) -> Arc<dyn IdentityProvider> {
        Arc::clone(&self.provider)
    }

    /// Resolve a bearer token. Provider errors and a provider that does not
    /// answer within the timeout both count as not authenticated.
    pub async fn resolve(&self, token: Option<&str>) -> Option<Identity> {
        let token = token.map(str::trim).filter(|t| !t.is_empty())?;

        match tokio::time::timeout(self.resolve_timeout, self.provider.resolve_session(token)).await
        {
            Ok(Ok(identity)) => identity,
            Ok(Err(e)) => {
                tracing::warn!("Session lookup failed: {}", e);
                None
            }
            Err(_) => {
                tracing::warn!(
                    "Session lookup timed out after {:?}, treating caller as signed out",
                    self.resolve_timeout
                );
                None
            }
        }
    }

    /// The caller's identity if their profile has the admin role.
    pub async fn require_admin(&self, token: Option<&str>) -> Result<Identity> {
        let identity = self.resolve(token).await.ok_or(AppError::Unauthorized)?;

        let profile = self.repo.find_profile_by_user_id(&identity.user_id).await?;
        match profile {
            Some(profile) if profile.role == ADMIN_ROLE => Ok(identity),
            _ => {
                tracing::warn!("Non-admin user {} denied admin access", identity.user_id);
                Err(AppError::Forbidden)
            }
        }
    }
}

//! Application state and initialization
//!
//! This module manages the shared application state. All services are
//! built here from the loaded settings and handed to every route through
//! [`AppState`].

use crate::content::{CmsClient, ContentSource, StaticContentSource};
use crate::database::{self, Repository};
use crate::error::Result;
use crate::services::{
    ApplicationsService, AuthService, HttpIdentityProvider, IdentityProvider, IntakeService,
    LocalIdentityProvider, PagesService, SiteSettings,
};
use std::sync::Arc;

/// Central application state holding all services
#[derive(Clone)]
pub struct AppState {
    pub repo: Repository,
    pub content: Arc<dyn ContentSource>,
    pub auth: AuthService,
    pub intake: IntakeService,
    pub applications: ApplicationsService,
    pub pages: PagesService,
}

impl AppState {
    pub fn new(
        repo: Repository,
        content: Arc<dyn ContentSource>,
        identity: Arc<dyn IdentityProvider>,
    ) -> Self {
        Self {
            auth: AuthService::new(Arc::clone(&identity), repo.clone()),
            intake: IntakeService::new(repo.clone(), identity),
            applications: ApplicationsService::new(repo.clone()),
            pages: PagesService::new(repo.clone()),
            content,
            repo,
        }
    }

    /// Open the database and connect the external providers named in
    /// `settings`. Unconfigured providers fall back to in-process ones.
    pub async fn from_settings(settings: &SiteSettings) -> Result<Self> {
        tracing::info!("Initializing application");

        let pool = database::create_pool(&settings.database.path).await?;
        let repo = Repository::new(pool);

        let content: Arc<dyn ContentSource> = match settings.cms.base_url.as_deref() {
            Some(base_url) if !base_url.trim().is_empty() => {
                tracing::info!("Using CMS at {}", base_url);
                Arc::new(CmsClient::new(
                    base_url,
                    settings.cms.api_token.clone(),
                    settings.request_timeout(),
                )?)
            }
            _ => {
                tracing::info!("No CMS configured, pages use built-in content");
                Arc::new(StaticContentSource::empty())
            }
        };

        let identity: Arc<dyn IdentityProvider> =
            match (settings.auth.base_url.as_deref(), settings.auth.service_key.as_deref()) {
                (Some(base_url), Some(service_key)) if !base_url.trim().is_empty() => {
                    tracing::info!("Using auth provider at {}", base_url);
                    Arc::new(HttpIdentityProvider::new(
                        base_url,
                        service_key,
                        settings.request_timeout(),
                    )?)
                }
                _ => {
                    tracing::warn!(
                        "No auth provider configured, using local identities; admin API is closed"
                    );
                    Arc::new(LocalIdentityProvider::new())
                }
            };

        tracing::info!("Application initialized successfully");
        Ok(Self::new(repo, content, identity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_from_default_settings_uses_local_providers() {
        let temp_dir = TempDir::new().unwrap();
        let mut settings = SiteSettings::default();
        settings.database.path = temp_dir.path().join("data").join("site.db");

        let state = AppState::from_settings(&settings).await.unwrap();

        assert!(settings.database.path.exists());
        assert_eq!(state.auth.resolve(Some("any")).await, None);
        assert!(state.pages.list(None).await.unwrap().is_empty());
    }
}

//! Settings service
//!
//! Site settings persisted as a JSON file. A missing file is created with
//! defaults on first load, and every field falls back to its default when
//! absent from an older file.

use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::fs;

/// Environment variable that overrides the settings file location
pub const SETTINGS_PATH_ENV: &str = "SITE_SETTINGS";

const DEFAULT_SETTINGS_FILE: &str = "site.json";

/// HTTP listener settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

fn default_bind_address() -> String {
    "127.0.0.1:3000".to_string()
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseSettings {
    #[serde(default = "default_database_path")]
    pub path: PathBuf,
}

fn default_database_path() -> PathBuf {
    PathBuf::from("data/site.db")
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: default_database_path(),
        }
    }
}

/// Headless CMS connection. With no base URL every page uses its
/// built-in content.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CmsSettings {
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub api_token: Option<String>,
}

/// External auth provider used to resolve admin sessions
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthSettings {
    #[serde(default)]
    pub base_url: Option<String>,
    /// Service key for account provisioning
    #[serde(default)]
    pub service_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSettings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub database: DatabaseSettings,
    #[serde(default)]
    pub cms: CmsSettings,
    #[serde(default)]
    pub auth: AuthSettings,
    /// Timeout for outbound CMS and auth calls, in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_request_timeout_secs() -> u64 {
    10
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            server: ServerSettings::default(),
            database: DatabaseSettings::default(),
            cms: CmsSettings::default(),
            auth: AuthSettings::default(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl SiteSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }
}

/// Service for loading and saving site settings
#[derive(Clone)]
pub struct SettingsService {
    settings_path: PathBuf,
}

impl SettingsService {
    pub fn new(settings_path: impl Into<PathBuf>) -> Self {
        Self {
            settings_path: settings_path.into(),
        }
    }

    /// Settings file named by `SITE_SETTINGS`, else `site.json` in the
    /// working directory
    pub fn from_env() -> Self {
        let path = std::env::var_os(SETTINGS_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE));
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.settings_path
    }

    /// Load settings from disk, writing defaults first if the file is missing
    pub async fn load(&self) -> Result<SiteSettings> {
        if !fs::try_exists(&self.settings_path).await? {
            tracing::info!(
                "Settings file {:?} not found, creating default settings",
                self.settings_path
            );
            let default = SiteSettings::default();
            self.save(&default).await?;
            return Ok(default);
        }

        let content = fs::read_to_string(&self.settings_path).await?;
        let settings: SiteSettings = serde_json::from_str(&content)
            .map_err(|e| AppError::Generic(format!("Failed to parse settings: {}", e)))?;

        Ok(settings)
    }

    pub async fn save(&self, settings: &SiteSettings) -> Result<()> {
        if let Some(parent) = self.settings_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let content = serde_json::to_string_pretty(settings)?;
        fs::write(&self.settings_path, content).await?;

        tracing::info!("Settings saved to {:?}", self.settings_path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_service() -> (SettingsService, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let service = SettingsService::new(temp_dir.path().join("site.json"));
        (service, temp_dir)
    }

    #[tokio::test]
    async fn test_default_settings_created_on_load() {
        let (service, _temp) = create_test_service();

        let settings = service.load().await.unwrap();
        assert_eq!(settings.server.bind_address, "127.0.0.1:3000");
        assert_eq!(settings.database.path, PathBuf::from("data/site.db"));
        assert!(settings.cms.base_url.is_none());
        assert_eq!(settings.request_timeout(), Duration::from_secs(10));

        assert!(service.path().exists());
    }

    #[tokio::test]
    async fn test_partial_file_fills_defaults() {
        let (service, _temp) = create_test_service();
        fs::write(
            service.path(),
            r#"{ "cms": { "base_url": "https://cms.example.com" } }"#,
        )
        .await
        .unwrap();

        let settings = service.load().await.unwrap();
        assert_eq!(settings.cms.base_url.as_deref(), Some("https://cms.example.com"));
        assert_eq!(settings.server.bind_address, "127.0.0.1:3000");
        assert_eq!(settings.request_timeout_secs, 10);
    }

    #[tokio::test]
    async fn test_save_and_reload() {
        let (service, _temp) = create_test_service();
        let mut settings = SiteSettings::default();
        settings.server.bind_address = "0.0.0.0:8080".into();
        settings.auth.service_key = Some("secret".into());

        service.save(&settings).await.unwrap();
        let reloaded = service.load().await.unwrap();

        assert_eq!(reloaded.server.bind_address, "0.0.0.0:8080");
        assert_eq!(reloaded.auth.service_key.as_deref(), Some("secret"));
    }

    #[tokio::test]
    async fn test_malformed_file_is_an_error() {
        let (service, _temp) = create_test_service();
        fs::write(service.path(), "{ not json").await.unwrap();

        assert!(matches!(service.load().await, Err(AppError::Generic(_))));
    }
}

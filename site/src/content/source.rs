//! Content sources
//!
//! Where editable marketing copy comes from. The production source is a
//! headless CMS reached over HTTP; tests and CMS-less deployments use the
//! in-memory source.

use crate::error::Result;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Raw field map for one page, as the source returned it
pub type Fields = Map<String, Value>;

/// Identifies one editable page at the content source
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PageKey {
    Homepage,
    About,
    /// Entry of the mortgage-page collection, by slug
    MortgagePage(String),
}

impl PageKey {
    pub fn mortgage(slug: &str) -> Self {
        PageKey::MortgagePage(slug.to_string())
    }

    fn endpoint(&self) -> &'static str {
        match self {
            PageKey::Homepage => "homepage",
            PageKey::About => "about",
            PageKey::MortgagePage(_) => "mortgage-pages",
        }
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![("populate", "*".to_string())];
        if let PageKey::MortgagePage(slug) = self {
            query.push(("filters[slug][$eq]", slug.clone()));
        }
        query
    }
}

impl fmt::Display for PageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageKey::Homepage => f.write_str("homepage"),
            PageKey::About => f.write_str("about"),
            PageKey::MortgagePage(slug) => write!(f, "mortgage-pages/{}", slug),
        }
    }
}

#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Fields for `key`, or `None` when the source has no entry for it.
    async fn page_content(&self, key: &PageKey) -> Result<Option<Fields>>;

    /// Absolute URL for a media path returned by this source
    fn media_url(&self, path: &str) -> String;
}

/// Join a possibly relative media path onto `base`.
pub fn absolutize(base: &str, path: &str) -> String {
    let path = path.trim();
    if path.is_empty()
        || path.starts_with("http://")
        || path.starts_with("https://")
        || path.starts_with("//")
        || base.is_empty()
    {
        return path.to_string();
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Headless CMS client
pub struct CmsClient {
    http: reqwest::Client,
    base_url: String,
    api_token: Option<String>,
}

impl CmsClient {
    pub fn new(base_url: &str, api_token: Option<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("mortgage-site/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_token: api_token.filter(|t| !t.is_empty()),
        })
    }
}

#[async_trait]
impl ContentSource for CmsClient {
    async fn page_content(&self, key: &PageKey) -> Result<Option<Fields>> {
        let url = format!("{}/api/{}", self.base_url, key.endpoint());

        let mut request = self.http.get(&url).query(&key.query());
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let body: Value = response.error_for_status()?.json().await?;
        Ok(unwrap_entry(body))
    }

    fn media_url(&self, path: &str) -> String {
        absolutize(&self.base_url, path)
    }
}

/// Pull one entry's fields out of a CMS response envelope.
///
/// Accepts single-type (`data: {...}`) and collection (`data: [{...}]`)
/// envelopes, with or without a nested `attributes` object.
pub fn unwrap_entry(body: Value) -> Option<Fields> {
    let data = match body {
        Value::Object(mut envelope) => envelope.remove("data")?,
        _ => return None,
    };

    let entry = match data {
        Value::Array(entries) => entries.into_iter().next()?,
        other => other,
    };

    match entry {
        Value::Object(mut fields) => match fields.remove("attributes") {
            Some(Value::Object(attributes)) => Some(attributes),
            Some(other) => {
                fields.insert("attributes".to_string(), other);
                Some(fields)
            }
            None => Some(fields),
        },
        _ => None,
    }
}

/// Fixed content held in memory
#[derive(Default)]
pub struct StaticContentSource {
    pages: HashMap<PageKey, Fields>,
    media_base: String,
    failing: AtomicBool,
}

impl StaticContentSource {
    /// A source with no entries; every page uses its built-in content.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, key: PageKey, fields: Value) -> Self {
        if let Value::Object(fields) = fields {
            self.pages.insert(key, fields);
        }
        self
    }

    pub fn with_media_base(mut self, base: &str) -> Self {
        self.media_base = base.to_string();
        self
    }

    /// Make every lookup fail, as an unreachable CMS would.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

#[async_trait]
impl ContentSource for StaticContentSource {
    async fn page_content(&self, key: &PageKey) -> Result<Option<Fields>> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(crate::error::AppError::Upstream(format!(
                "content source unavailable for {}",
                key
            )));
        }
        Ok(self.pages.get(key).cloned())
    }

    fn media_url(&self, path: &str) -> String {
        absolutize(&self.media_base, path)
    }
}

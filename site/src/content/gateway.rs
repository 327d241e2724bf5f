//! Page data gateway
//!
//! Fetch-with-fallback over a [`ContentSource`]. A failed fetch and a
//! partial fetch go through the same field-by-field merge, so a page always
//! gets a complete record.

use super::source::{ContentSource, Fields, PageKey};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

/// A page record with a complete built-in fallback
pub trait PageContent: Serialize + DeserializeOwned + Clone + Send {
    /// Fields holding media references to absolutize against the source
    const MEDIA_FIELDS: &'static [&'static str] = &[];

    fn key() -> PageKey;

    fn fallback() -> Self;
}

/// Fetch a page's fields, or `None` on any failure. Failures are logged,
/// never raised.
pub async fn fetch_page_content(source: &dyn ContentSource, key: &PageKey) -> Option<Fields> {
    match source.page_content(key).await {
        Ok(Some(fields)) => Some(fields),
        Ok(None) => {
            tracing::info!("No content entry for {}, using built-in content", key);
            None
        }
        Err(e) => {
            tracing::warn!("Failed to fetch content for {}: {}", key, e);
            None
        }
    }
}

/// Load a page record: fetched fields merged over its fallback.
pub async fn load_page<T: PageContent>(source: &dyn ContentSource) -> T {
    let fetched = fetch_page_content(source, &T::key()).await;
    merge_with_fallback(&T::fallback(), fetched.as_ref(), |path| source.media_url(path))
}

/// Merge fetched fields over `fallback`, one field at a time.
///
/// A fetched field is taken only when it is present (not null, not an empty
/// string, not an empty list) and has the right shape for that field.
/// Everything else keeps the fallback value.
pub fn merge_with_fallback<T, F>(fallback: &T, fetched: Option<&Fields>, media_url: F) -> T
where
    T: PageContent,
    F: Fn(&str) -> String,
{
    let Some(fetched) = fetched else {
        return fallback.clone();
    };

    let mut merged = match serde_json::to_value(fallback) {
        Ok(Value::Object(map)) => map,
        _ => return fallback.clone(),
    };

    let keys: Vec<String> = merged.keys().cloned().collect();
    for key in keys {
        let Some(candidate) = fetched.get(&key) else {
            continue;
        };

        let candidate = if T::MEDIA_FIELDS.contains(&key.as_str()) {
            match media_path(candidate) {
                Some(path) => Value::String(media_url(&path)),
                None => continue,
            }
        } else {
            candidate.clone()
        };

        if !is_present(&candidate) {
            continue;
        }

        let mut trial = merged.clone();
        trial.insert(key.clone(), candidate);
        if serde_json::from_value::<T>(Value::Object(trial.clone())).is_ok() {
            merged = trial;
        } else {
            tracing::warn!("Ignoring malformed content field `{}` for {}", key, T::key());
        }
    }

    serde_json::from_value(Value::Object(merged)).unwrap_or_else(|_| fallback.clone())
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.trim().is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
        _ => true,
    }
}

/// Media reference as a path: a plain string, `{url}`, or a nested
/// `{data: {attributes: {url}}}` relation.
fn media_path(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Object(map) => url_of(map).or_else(|| match map.get("data") {
            Some(Value::Object(data)) => url_of(data).or_else(|| match data.get("attributes") {
                Some(Value::Object(attributes)) => url_of(attributes),
                _ => None,
            }),
            _ => None,
        }),
        _ => None,
    }
}

fn url_of(map: &Map<String, Value>) -> Option<String> {
    map.get("url")
        .and_then(Value::as_str)
        .filter(|url| !url.trim().is_empty())
        .map(str::to_string)
}

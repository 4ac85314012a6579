// src/api/cache.rs
//! Disk-based response cache for store GETs.
//!
//! Raw JSON bodies are cached by endpoint with TTL expiry. Cache hits go
//! through the same parsers as live responses.

use super::client::{
    expose_endpoint, extract_response_text, property_endpoint, template_endpoint, ApiResponse,
    ExposeHttpClient, TEMPLATES_ENDPOINT,
};
use super::{parser, ExposeRepository};
use crate::error::AppError;
use crate::model::{Expose, Property, Template};
use crate::types::{ExposeId, PropertyId, TemplateId};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

// ---------------------------------------------------------------------------
// Disk cache
// ---------------------------------------------------------------------------

/// TTL file cache for raw response bodies.
///
/// Every operation is best-effort: a read or write failure just means a
/// fresh API call.
pub struct DiskCache {
    cache_dir: PathBuf,
    ttl_secs: u64,
}

#[derive(serde::Serialize, serde::Deserialize)]
struct CacheEntry {
    data: String,
    cached_at: u64,
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

impl DiskCache {
    /// Cache in `$XDG_CACHE_HOME/expose-layout` (or `~/.cache/expose-layout`).
    pub async fn new(ttl_secs: u64) -> Result<Self, std::io::Error> {
        Self::in_dir(Self::default_cache_dir(), ttl_secs).await
    }

    /// Cache in `cache_dir`; expired entries are purged right away.
    pub async fn in_dir(cache_dir: PathBuf, ttl_secs: u64) -> Result<Self, std::io::Error> {
        tokio::fs::create_dir_all(&cache_dir).await?;
        let cache = Self {
            cache_dir,
            ttl_secs,
        };
        cache.purge_expired().await;
        Ok(cache)
    }

    fn default_cache_dir() -> PathBuf {
        std::env::var("XDG_CACHE_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
                PathBuf::from(home).join(".cache")
            })
            .join("expose-layout")
    }

    pub async fn get(&self, key: &str) -> Option<String> {
        let path = self.key_to_path(key);
        let content = tokio::fs::read_to_string(&path).await.ok()?;
        let entry: CacheEntry = serde_json::from_str(&content).ok()?;
        if now_secs().saturating_sub(entry.cached_at) > self.ttl_secs {
            let _ = tokio::fs::remove_file(&path).await;
            return None;
        }
        Some(entry.data)
    }

    pub async fn set(&self, key: &str, data: &str) {
        let entry = CacheEntry {
            data: data.to_string(),
            cached_at: now_secs(),
        };
        if let Ok(json) = serde_json::to_string(&entry) {
            let _ = tokio::fs::write(self.key_to_path(key), json).await;
        }
    }

    pub async fn remove(&self, key: &str) {
        let _ = tokio::fs::remove_file(self.key_to_path(key)).await;
    }

    async fn purge_expired(&self) {
        let now = now_secs();
        let mut dir = match tokio::fs::read_dir(&self.cache_dir).await {
            Ok(d) => d,
            Err(_) => return,
        };

        let mut purged = 0usize;
        while let Ok(Some(entry)) = dir.next_entry().await {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Ok(content) = tokio::fs::read_to_string(&path).await else {
                continue;
            };
            if let Ok(cached) = serde_json::from_str::<CacheEntry>(&content) {
                if now.saturating_sub(cached.cached_at) > self.ttl_secs
                    && tokio::fs::remove_file(&path).await.is_ok()
                {
                    purged += 1;
                }
            }
        }
        if purged > 0 {
            log::debug!("Purged {} expired cache entries", purged);
        }
    }

    fn key_to_path(&self, key: &str) -> PathBuf {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        self.cache_dir.join(format!("{:016x}.json", hasher.finish()))
    }
}

// ---------------------------------------------------------------------------
// Cached store client
// ---------------------------------------------------------------------------

/// An [`ExposeRepository`] that caches GET bodies on disk. Updates go straight
/// to the store and drop the cached copy of the written resource.
pub struct CachedExposeClient {
    inner: ExposeHttpClient,
    cache: DiskCache,
}

impl CachedExposeClient {
    pub async fn new(inner: ExposeHttpClient, ttl_secs: u64) -> Result<Self, AppError> {
        let cache = DiskCache::new(ttl_secs)
            .await
            .map_err(|e| AppError::InternalError {
                message: format!("Failed to initialize disk cache: {}", e),
                source: None,
            })?;
        Ok(Self { inner, cache })
    }

    /// Cache keys include the base URL so stages never share entries.
    fn cache_key(&self, endpoint: &str) -> String {
        format!("{}|{}", self.inner.base_url(), endpoint)
    }

    async fn cached_get(&self, endpoint: &str) -> Result<ApiResponse<String>, AppError> {
        let key = self.cache_key(endpoint);
        if let Some(cached) = self.cache.get(&key).await {
            log::debug!("Cache hit: {}", endpoint);
            return Ok(ApiResponse {
                data: cached,
                status: reqwest::StatusCode::OK,
                url: format!("cache://{}", endpoint),
            });
        }

        log::debug!("Cache miss: {}", endpoint);
        let response = self.inner.get(endpoint).await?;
        let api_response = extract_response_text(response).await?;
        if api_response.status.is_success() {
            self.cache.set(&key, &api_response.data).await;
        }
        Ok(api_response)
    }

    async fn invalidate(&self, endpoint: &str) {
        self.cache.remove(&self.cache_key(endpoint)).await;
    }
}

#[async_trait::async_trait]
impl ExposeRepository for CachedExposeClient {
    async fn list_templates(&self) -> Result<Vec<Template>, AppError> {
        parser::parse_templates_response(self.cached_get(TEMPLATES_ENDPOINT).await?)
    }

    async fn retrieve_template(&self, id: &TemplateId) -> Result<Template, AppError> {
        parser::parse_template_response(self.cached_get(&template_endpoint(id)).await?)
    }

    async fn retrieve_expose(&self, id: &ExposeId) -> Result<Expose, AppError> {
        parser::parse_expose_response(self.cached_get(&expose_endpoint(id)).await?)
    }

    async fn retrieve_property(&self, id: &PropertyId) -> Result<Property, AppError> {
        parser::parse_property_response(self.cached_get(&property_endpoint(id)).await?)
    }

    async fn update_template(&self, template: &Template) -> Result<Template, AppError> {
        let updated = self.inner.update_template(template).await?;
        self.invalidate(&template_endpoint(&template.id)).await;
        self.invalidate(TEMPLATES_ENDPOINT).await;
        Ok(updated)
    }

    async fn update_expose(&self, expose: &Expose) -> Result<Expose, AppError> {
        let updated = self.inner.update_expose(expose).await?;
        self.invalidate(&expose_endpoint(&expose.id)).await;
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_round_trip_and_remove() {
        let dir = tempfile::tempdir().unwrap();
        let cache = DiskCache::in_dir(dir.path().to_path_buf(), 300).await.unwrap();
        assert_eq!(cache.get("a").await, None);

        cache.set("a", "{\"id\":\"t1\"}").await;
        assert_eq!(cache.get("a").await.as_deref(), Some("{\"id\":\"t1\"}"));

        cache.remove("a").await;
        assert_eq!(cache.get("a").await, None);
    }

    #[tokio::test]
    async fn test_expired_entries_are_purged_on_start() {
        let dir = tempfile::tempdir().unwrap();
        let stale = CacheEntry {
            data: "old".to_string(),
            cached_at: 0,
        };
        let path = dir.path().join("0000000000000001.json");
        std::fs::write(&path, serde_json::to_string(&stale).unwrap()).unwrap();

        let _cache = DiskCache::in_dir(dir.path().to_path_buf(), 60).await.unwrap();
        assert!(!path.exists());
    }
}

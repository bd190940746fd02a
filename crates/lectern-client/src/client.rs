//! Reqwest-based content lookup client.

use std::sync::Arc;

use lectern_core::{ContentLookup, ContentRecord, ShareRef};
use reqwest::{Client, StatusCode};
use url::Url;

use crate::{ContentCache, ContentClientConfig, Error, Result};

/// Tracing target for content client operations.
pub const TRACING_TARGET: &str = "lectern_client::client";

struct ContentClientInner {
    http: Client,
    base_url: Url,
    config: ContentClientConfig,
    cache: ContentCache,
}

/// Fetches content records from the lectern content endpoint.
///
/// Found records are kept in the injected [`ContentCache`]; a missing record
/// is reported as `Ok(None)` and never cached.
///
/// [`ContentCache`]: crate::ContentCache
#[derive(Clone)]
pub struct ContentClient {
    inner: Arc<ContentClientInner>,
}

impl std::fmt::Debug for ContentClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentClient")
            .field("base_url", &self.inner.base_url.as_str())
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

impl ContentClient {
    /// Creates a new client with the given configuration and cache.
    pub fn new(config: ContentClientConfig, cache: ContentCache) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(Error::CannotBeABase(config.base_url));
        }

        let timeout = config.effective_timeout();
        let user_agent = config.effective_user_agent();

        tracing::debug!(
            target: TRACING_TARGET,
            base_url = %base_url,
            timeout_ms = timeout.as_millis(),
            cache_ttl_ms = cache.ttl().as_millis(),
            "Creating content client"
        );

        let http = Client::builder()
            .timeout(timeout)
            .user_agent(&user_agent)
            .build()?;

        let inner = ContentClientInner {
            http,
            base_url,
            config,
            cache,
        };

        Ok(Self {
            inner: Arc::new(inner),
        })
    }

    /// Gets the client configuration.
    pub fn config(&self) -> &ContentClientConfig {
        &self.inner.config
    }

    /// Gets the shared response cache.
    pub fn cache(&self) -> &ContentCache {
        &self.inner.cache
    }

    /// Returns the endpoint URL for `share`.
    pub fn content_url(&self, share: &ShareRef) -> Url {
        let mut url = self.inner.base_url.clone();
        url.set_query(None);
        url.set_fragment(None);
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["api", "content", share.kind.as_ref(), share.id.as_str()]);
        }
        url
    }

    /// Fetches the record addressed by `share`, consulting the cache first.
    pub async fn fetch_content(&self, share: &ShareRef) -> Result<Option<ContentRecord>> {
        if let Some(record) = self.inner.cache.get(share).await {
            tracing::trace!(target: TRACING_TARGET, share = %share, "cache hit");
            return Ok(Some(record));
        }

        let url = self.content_url(share);
        tracing::debug!(target: TRACING_TARGET, url = %url, "fetching content");

        let response = self.inner.http.get(url.clone()).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            tracing::debug!(target: TRACING_TARGET, share = %share, "content not found");
            return Ok(None);
        }

        if !status.is_success() {
            return Err(Error::Status {
                status,
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        let record: ContentRecord = serde_json::from_slice(&body)?;
        self.inner.cache.insert(share.clone(), record.clone()).await;

        Ok(Some(record))
    }
}

#[async_trait::async_trait]
impl ContentLookup for ContentClient {
    async fn fetch(&self, share: &ShareRef) -> lectern_core::Result<Option<ContentRecord>> {
        Ok(self.fetch_content(share).await?)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use lectern_core::ContentKind;

    use super::*;
    use crate::ResponseCache;

    const ID: &str = "123e4567-e89b-12d3-a456-426614174000";

    fn client(base_url: &str) -> anyhow::Result<ContentClient> {
        let cache = ResponseCache::new(Duration::from_secs(60));
        Ok(ContentClient::new(ContentClientConfig::new(base_url), cache)?)
    }

    #[test]
    fn builds_content_url() -> anyhow::Result<()> {
        let client = client("https://lectern.dev")?;
        let share = ShareRef::new(ContentKind::StudyTool, ID);
        assert_eq!(
            client.content_url(&share).as_str(),
            format!("https://lectern.dev/api/content/study-tool/{ID}")
        );
        Ok(())
    }

    #[test]
    fn keeps_base_path_prefix() -> anyhow::Result<()> {
        let client = client("https://example.com/lectern/?debug=1")?;
        let share = ShareRef::new(ContentKind::Video, ID);
        assert_eq!(
            client.content_url(&share).as_str(),
            format!("https://example.com/lectern/api/content/video/{ID}")
        );
        Ok(())
    }

    #[test]
    fn rejects_invalid_base_url() {
        let cache = ResponseCache::new(Duration::from_secs(60));
        assert!(matches!(
            ContentClient::new(ContentClientConfig::new("not a url"), cache.clone()),
            Err(Error::Url(_))
        ));
        assert!(matches!(
            ContentClient::new(ContentClientConfig::new("mailto:admin@lectern.dev"), cache),
            Err(Error::CannotBeABase(_))
        ));
    }

    #[tokio::test]
    async fn uses_the_injected_cache() -> anyhow::Result<()> {
        let cache = ResponseCache::with_capacity(Duration::from_secs(1), 8);
        let client = ContentClient::new(ContentClientConfig::new("https://lectern.dev"), cache)?;

        assert_eq!(client.cache().ttl(), Duration::from_secs(1));
        assert_eq!(client.cache().capacity().await, 8);
        Ok(())
    }

    #[tokio::test]
    async fn cached_records_skip_the_network() -> anyhow::Result<()> {
        // Nothing listens on port 9; only a cache hit can succeed.
        let client = client("http://127.0.0.1:9")?;
        let share = ShareRef::new(ContentKind::Slide, ID);
        let record = ContentRecord {
            id: ID.to_owned(),
            title: "Week 1".to_owned(),
            url: "https://cdn.lectern.dev/week-1.pdf".to_owned(),
            description: String::new(),
            kind: ContentKind::Document,
        };
        client.cache().insert(share.clone(), record.clone()).await;

        assert_eq!(client.fetch(&share).await?, Some(record));
        Ok(())
    }

    #[tokio::test]
    async fn unreachable_server_is_a_network_error() -> anyhow::Result<()> {
        let client = client("http://127.0.0.1:9")?;
        let share = ShareRef::new(ContentKind::Video, ID);

        let err = client
            .fetch(&share)
            .await
            .err()
            .ok_or_else(|| anyhow::anyhow!("lookup unexpectedly succeeded"))?;
        assert!(matches!(
            err.kind(),
            lectern_core::ErrorKind::NetworkError | lectern_core::ErrorKind::Timeout
        ));
        Ok(())
    }
}

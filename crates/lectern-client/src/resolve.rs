//! Resolution of share links on viewer start-up.
//!
//! The edge rewrite turns `/slide/{id}` into `/?share_path=%2Fslide%2F{id}`.
//! [`ShareResolver`] picks that parameter up, decodes it and loads the
//! referenced content with a single lookup.

use lectern_core::{ContentLookup, ContentRecord, SHARE_PATH_PARAM, ShareRef, decode};
use url::Url;

/// Tracing target for share link resolution.
const TRACING_TARGET: &str = "lectern_client::resolve";

/// What the viewer shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewerState {
    /// No share link has been resolved.
    #[default]
    Idle,
    /// The shared content was found.
    Loaded(ContentRecord),
    /// The link decoded but no content could be loaded for it.
    NotFound(ShareRef),
}

impl ViewerState {
    /// Returns the loaded record, if any.
    pub fn record(&self) -> Option<&ContentRecord> {
        match self {
            Self::Loaded(record) => Some(record),
            _ => None,
        }
    }
}

/// Loads shared content into the viewer.
#[derive(Debug)]
pub struct ShareResolver<L> {
    lookup: L,
    state: ViewerState,
}

impl<L> ShareResolver<L>
where
    L: ContentLookup,
{
    /// Creates an idle resolver backed by `lookup`.
    pub fn new(lookup: L) -> Self {
        Self {
            lookup,
            state: ViewerState::Idle,
        }
    }

    /// Returns the current viewer state.
    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    /// Returns the lookup collaborator.
    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    /// Resolves the share link carried by a page URL.
    pub async fn resolve_url(&mut self, url: &Url) -> &ViewerState {
        let share_path = url
            .query_pairs()
            .find(|(key, _)| key == SHARE_PATH_PARAM)
            .map(|(_, value)| value.into_owned());
        self.resolve(share_path.as_deref()).await
    }

    /// Resolves the share link carried by a raw query string.
    ///
    /// A leading `?` is ignored.
    pub async fn resolve_query(&mut self, query: &str) -> &ViewerState {
        let query = query.strip_prefix('?').unwrap_or(query);
        let share_path = url::form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == SHARE_PATH_PARAM)
            .map(|(_, value)| value.into_owned());
        self.resolve(share_path.as_deref()).await
    }

    /// Resolves an already extracted `share_path` value.
    ///
    /// Does nothing when the value is absent or does not decode. Otherwise
    /// performs exactly one lookup and moves the viewer to
    /// [`ViewerState::Loaded`] or [`ViewerState::NotFound`]. Lookup failures
    /// are logged and shown as not found.
    pub async fn resolve(&mut self, share_path: Option<&str>) -> &ViewerState {
        let Some(share_path) = share_path else {
            return &self.state;
        };

        let Some(share) = decode(share_path) else {
            tracing::debug!(
                target: TRACING_TARGET,
                share_path,
                "ignoring undecodable share path"
            );
            return &self.state;
        };

        self.state = match self.lookup.fetch(&share).await {
            Ok(Some(record)) => {
                tracing::debug!(target: TRACING_TARGET, share = %share, "shared content loaded");
                ViewerState::Loaded(record)
            }
            Ok(None) => {
                tracing::debug!(target: TRACING_TARGET, share = %share, "shared content not found");
                ViewerState::NotFound(share)
            }
            Err(error) => {
                tracing::warn!(
                    target: TRACING_TARGET,
                    share = %share,
                    error = %error,
                    "shared content lookup failed"
                );
                ViewerState::NotFound(share)
            }
        };

        &self.state
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use lectern_core::ContentKind;

    use super::*;

    const ID: &str = "123e4567-e89b-12d3-a456-426614174000";

    #[derive(Default)]
    struct CountingLookup {
        records: HashMap<ShareRef, ContentRecord>,
        fail: bool,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait::async_trait]
    impl ContentLookup for CountingLookup {
        async fn fetch(&self, share: &ShareRef) -> lectern_core::Result<Option<ContentRecord>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(lectern_core::Error::network_error());
            }
            Ok(self.records.get(share).cloned())
        }
    }

    fn slide() -> ContentRecord {
        ContentRecord {
            id: ID.to_owned(),
            title: "Sorting algorithms".to_owned(),
            url: "https://cdn.lectern.dev/sorting.pdf".to_owned(),
            description: "Week 3".to_owned(),
            kind: ContentKind::Slide,
        }
    }

    fn lookup_with_slide() -> (CountingLookup, Arc<AtomicUsize>) {
        let lookup = CountingLookup {
            records: HashMap::from([(ShareRef::new(ContentKind::Slide, ID), slide())]),
            ..CountingLookup::default()
        };
        let calls = Arc::clone(&lookup.calls);
        (lookup, calls)
    }

    #[tokio::test]
    async fn absent_parameter_does_nothing() {
        let (lookup, calls) = lookup_with_slide();
        let mut resolver = ShareResolver::new(lookup);

        assert_eq!(resolver.resolve_query("tab=notes").await, &ViewerState::Idle);
        assert_eq!(resolver.resolve(None).await, &ViewerState::Idle);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn undecodable_path_does_nothing() {
        let (lookup, calls) = lookup_with_slide();
        let mut resolver = ShareResolver::new(lookup);

        assert_eq!(
            resolver.resolve(Some("/podcast/abc")).await,
            &ViewerState::Idle
        );
        assert_eq!(resolver.resolve(Some("/")).await, &ViewerState::Idle);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn valid_link_fetches_once() {
        let (lookup, calls) = lookup_with_slide();
        let mut resolver = ShareResolver::new(lookup);

        let state = resolver
            .resolve_query("?share_path=%2Fslide%2F123e4567-e89b-12d3-a456-426614174000")
            .await;
        assert_eq!(state.record(), Some(&slide()));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn resolves_from_page_url() -> anyhow::Result<()> {
        let (lookup, calls) = lookup_with_slide();
        let mut resolver = ShareResolver::new(lookup);

        let url = Url::parse(&format!(
            "https://lectern.dev/?lang=en&share_path=%2Fslide%2F{ID}"
        ))?;
        assert!(matches!(
            resolver.resolve_url(&url).await,
            ViewerState::Loaded(_)
        ));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        Ok(())
    }

    #[tokio::test]
    async fn missing_content_is_not_found() {
        let (lookup, calls) = lookup_with_slide();
        let mut resolver = ShareResolver::new(lookup);
        let path = format!("/video/{ID}");

        assert_eq!(
            resolver.resolve(Some(&path)).await,
            &ViewerState::NotFound(ShareRef::new(ContentKind::Video, ID))
        );
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn lookup_failure_is_not_found() {
        let lookup = CountingLookup {
            fail: true,
            ..CountingLookup::default()
        };
        let calls = Arc::clone(&lookup.calls);
        let mut resolver = ShareResolver::new(lookup);
        let path = format!("/study-tool/{ID}");

        assert!(matches!(
            resolver.resolve(Some(&path)).await,
            ViewerState::NotFound(_)
        ));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}

use std::sync::LazyLock;

use regex::Regex;
use url::form_urlencoded;

/// Query parameter carrying the original share path after a rewrite.
pub const SHARE_PATH_PARAM: &str = "share_path";

/// Matches a whole share path ending in a canonical UUID.
static SHARE_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^/(video|slide|study-tool)/[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$",
    )
    .expect("share path pattern is a valid regex")
});

/// Internal rewrite of a share link to the SPA entry page.
///
/// The request is served from [`RewriteDirective::TARGET_PATH`] while the
/// original path travels in the `share_path` query parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteDirective {
    preserved_path: String,
}

impl RewriteDirective {
    /// Path every share link is served from.
    pub const TARGET_PATH: &'static str = "/";

    /// Returns a directive if `path` is a share link with a UUID id.
    ///
    /// The whole path must match; trailing slashes, extra segments and
    /// malformed ids are not share links.
    pub fn from_path(path: &str) -> Option<Self> {
        SHARE_PATH.is_match(path).then(|| Self {
            preserved_path: path.to_owned(),
        })
    }

    /// Returns the original request path.
    pub fn preserved_path(&self) -> &str {
        &self.preserved_path
    }

    /// Returns the rewritten path and query.
    ///
    /// Parameters of `query` are kept verbatim except any existing
    /// `share_path`, which is replaced. Keys are compared after decoding.
    #[must_use]
    pub fn target_uri(&self, query: Option<&str>) -> String {
        let encoded: String =
            form_urlencoded::byte_serialize(self.preserved_path.as_bytes()).collect();
        let share_pair = format!("{SHARE_PATH_PARAM}={encoded}");

        let mut pairs: Vec<&str> = query
            .unwrap_or_default()
            .split('&')
            .filter(|pair| !pair.is_empty())
            .filter(|pair| {
                !form_urlencoded::parse(pair.as_bytes())
                    .next()
                    .is_some_and(|(key, _)| key == SHARE_PATH_PARAM)
            })
            .collect();

        pairs.push(&share_pair);

        format!("{}?{}", Self::TARGET_PATH, pairs.join("&"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UUID: &str = "123e4567-e89b-12d3-a456-426614174000";

    #[test]
    fn matches_share_paths_with_uuids() {
        for bucket in ["video", "slide", "study-tool"] {
            let path = format!("/{bucket}/{UUID}");
            let directive = RewriteDirective::from_path(&path);
            assert_eq!(directive.map(|d| d.preserved_path().to_owned()), Some(path));
        }
    }

    #[test]
    fn uuid_match_is_case_insensitive() {
        let path = format!("/video/{}", UUID.to_uppercase());
        assert!(RewriteDirective::from_path(&path).is_some());
    }

    #[test]
    fn rejects_other_paths() {
        assert!(RewriteDirective::from_path("/slide/not-a-uuid").is_none());
        assert!(RewriteDirective::from_path("/about").is_none());
        assert!(RewriteDirective::from_path("/").is_none());
        assert!(RewriteDirective::from_path(&format!("/document/{UUID}")).is_none());
        assert!(RewriteDirective::from_path(&format!("/slide/{UUID}/")).is_none());
        assert!(RewriteDirective::from_path(&format!("/api/slide/{UUID}")).is_none());
        assert!(RewriteDirective::from_path(&format!("/slide/{UUID}0")).is_none());
        assert!(RewriteDirective::from_path("/slide/123e4567e89b12d3a456426614174000").is_none());
    }

    #[test]
    fn target_uri_encodes_the_path() {
        let directive = RewriteDirective::from_path(&format!("/slide/{UUID}"));
        assert_eq!(
            directive.map(|d| d.target_uri(None)),
            Some(format!("/?share_path=%2Fslide%2F{UUID}"))
        );
    }

    #[test]
    fn target_uri_keeps_other_parameters() {
        let directive = RewriteDirective::from_path(&format!("/video/{UUID}"));
        assert_eq!(
            directive.map(|d| d.target_uri(Some("utm_source=mail&share_path=%2Fold&t=30"))),
            Some(format!("/?utm_source=mail&t=30&share_path=%2Fvideo%2F{UUID}"))
        );
    }

    #[test]
    fn target_uri_replaces_encoded_share_path_keys() {
        let directive = RewriteDirective::from_path(&format!("/slide/{UUID}"));
        assert_eq!(
            directive.map(|d| d.target_uri(Some("share%5Fpath=%2Fold&share+path=x&lang=en"))),
            Some(format!("/?share+path=x&lang=en&share_path=%2Fslide%2F{UUID}"))
        );
    }
}

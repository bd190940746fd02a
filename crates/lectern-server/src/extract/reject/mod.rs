//! Request extractors with descriptive rejections.
//!
//! Drop-in replacements for the axum extractors of the same name whose
//! rejections convert into the handler [`Error`](crate::handler::Error).

pub mod enhanced_json;
pub mod enhanced_path;
pub mod enhanced_query;
pub mod validated_json;

pub use self::enhanced_json::Json;
pub use self::enhanced_path::Path;
pub use self::enhanced_query::Query;
pub use self::validated_json::ValidateJson;

/// Shortens a rejection detail to its first `max_lines` lines and `max_chars` characters.
fn shorten_detail(detail: &str, max_lines: usize, max_chars: usize) -> String {
    detail
        .lines()
        .take(max_lines)
        .collect::<Vec<_>>()
        .join(" ")
        .chars()
        .take(max_chars)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::shorten_detail;

    #[test]
    fn shorten_detail_joins_and_truncates() {
        assert_eq!(shorten_detail("a\nb\nc", 2, 100), "a b");
        assert_eq!(shorten_detail("abcdef", 3, 4), "abcd");
    }
}

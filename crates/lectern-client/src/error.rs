//! Error types for lectern-client.

use reqwest::StatusCode;
use thiserror::Error;

/// Result type alias for lectern-client operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error type for lectern-client operations.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Reqwest(#[from] reqwest::Error),
    /// Response body was not a content record.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    /// The configured base URL could not be parsed.
    #[error("Invalid base URL: {0}")]
    Url(#[from] url::ParseError),
    /// The base URL cannot carry path segments.
    #[error("Base URL cannot be a base: {0}")]
    CannotBeABase(String),
    /// The server answered with an unexpected status.
    #[error("Unexpected status {status} from {url}")]
    Status {
        /// Response status.
        status: StatusCode,
        /// Requested URL.
        url: String,
    },
}

impl From<Error> for lectern_core::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Reqwest(e) => {
                if e.is_timeout() {
                    lectern_core::Error::timeout()
                        .with_message(e.to_string())
                        .with_source(e)
                } else if e.is_connect() {
                    lectern_core::Error::network_error()
                        .with_message("Connection failed")
                        .with_source(e)
                } else {
                    lectern_core::Error::network_error()
                        .with_message(e.to_string())
                        .with_source(e)
                }
            }
            Error::Serde(e) => lectern_core::Error::serialization()
                .with_message(e.to_string())
                .with_source(e),
            Error::Url(e) => lectern_core::Error::configuration()
                .with_message(e.to_string())
                .with_source(e),
            e @ Error::CannotBeABase(_) => {
                lectern_core::Error::configuration().with_message(e.to_string())
            }
            e @ Error::Status { .. } => {
                lectern_core::Error::external_error().with_message(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use lectern_core::ErrorKind;

    use super::*;

    #[test]
    fn status_maps_to_external_error() {
        let err = Error::Status {
            status: StatusCode::BAD_GATEWAY,
            url: "http://127.0.0.1:8080/api/content/slide/x".to_owned(),
        };
        let core: lectern_core::Error = err.into();
        assert_eq!(core.kind(), ErrorKind::ExternalError);
        assert!(core.message.is_some_and(|m| m.contains("502")));
    }

    #[test]
    fn parse_error_maps_to_configuration() {
        let err = Error::from(url::Url::parse("not a url").unwrap_err());
        let core: lectern_core::Error = err.into();
        assert_eq!(core.kind(), ErrorKind::Configuration);
    }
}

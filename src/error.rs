// src/error.rs
// =============================================================================
// Error type shared by the whole library.
//
// The listing and header stages never hand these to their callers: they log
// them and degrade (see listing::Listing). Config loading, rendering a single
// post and writing an index do return them.
// =============================================================================

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BlogError {
    /// The request never produced a response (DNS, TLS, timeout, ...)
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    /// A response came back, but not a 2xx one
    #[error("failed to fetch {url}: HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid sort mask '{pattern}': {source}")]
    SortMask {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("invalid URL '{url}': {source}")]
    Url {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The blocking API could not start its runtime
    #[error("could not start async runtime: {0}")]
    Runtime(#[source] std::io::Error),

    #[error("no entry named '{0}' in the listing")]
    NotFound(String),

    #[error("entry '{0}' has no content URL")]
    NoContent(String),
}

pub type Result<T> = std::result::Result<T, BlogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_names_url_and_code() {
        let err = BlogError::Status {
            url: "https://example.com/blog/index.html".to_string(),
            status: 404,
        };
        assert_eq!(
            err.to_string(),
            "failed to fetch https://example.com/blog/index.html: HTTP 404"
        );
    }

    #[test]
    fn runtime_error_is_not_plain_io() {
        let err = BlogError::Runtime(std::io::Error::new(std::io::ErrorKind::Other, "no threads"));
        assert_eq!(err.to_string(), "could not start async runtime: no threads");
        assert!(std::error::Error::source(&err).is_some());
        assert!(!matches!(err, BlogError::Io(_)));
    }

    #[test]
    fn sort_mask_error_keeps_source() {
        let source = regex::Regex::new("(").unwrap_err();
        let err = BlogError::SortMask {
            pattern: "(".to_string(),
            source,
        };
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("invalid sort mask '('"));
    }
}

// src/http/transport.rs
// =============================================================================
// The transport boundary: "give me the body of this URL as text".
//
// All three kinds of fetch the blog does (contents API listing, HTML index
// page, raw markdown file) are plain GETs returning text, so the trait only
// has the one method. Non-2xx responses are errors, same as a dropped
// connection.
// =============================================================================

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::{BlogError, Result};

// GitHub's API rejects requests without a User-Agent
const USER_AGENT: &str = concat!("repoblog/", env!("CARGO_PKG_VERSION"));

// Per-request timeout
const TIMEOUT: Duration = Duration::from_secs(10);

#[async_trait]
pub trait Transport: Send + Sync {
    /// GET `url` and return the body, failing on any non-success status.
    async fn get_text(&self, url: &str) -> Result<String>;
}

/// The real transport, backed by a shared reqwest client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(TIMEOUT)
            .user_agent(USER_AGENT)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .map_err(|e| BlogError::Transport {
                url: String::new(),
                message: format!("could not build HTTP client: {}", e),
            })?;
        Ok(Self { client })
    }

    /// Wrap an already-configured client (proxies, custom TLS, ...).
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get_text(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| transport_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BlogError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| transport_error(url, e))
    }
}

// Keeps the same failure categories the CLI would want to show a user
fn transport_error(url: &str, error: reqwest::Error) -> BlogError {
    let message = if error.is_timeout() {
        "request timed out".to_string()
    } else if error.is_redirect() {
        "too many redirects".to_string()
    } else if error.is_connect() {
        format!("connection failed: {}", error)
    } else {
        error.to_string()
    };

    BlogError::Transport {
        url: url.to_string(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_agent_carries_crate_version() {
        assert!(USER_AGENT.starts_with("repoblog/"));
        assert!(USER_AGENT.len() > "repoblog/".len());
    }

    #[test]
    fn builds_default_client() {
        assert!(ReqwestTransport::new().is_ok());
    }
}

// src/http/mock.rs
// =============================================================================
// In-memory transport for unit tests: no sockets, no loopback servers.
//
// Register a body (or a status code) per URL, run the code under test, then
// inspect which URLs were requested and in what order.
// =============================================================================

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::Transport;
use crate::error::{BlogError, Result};

#[derive(Clone, Default)]
pub struct MockTransport {
    inner: Arc<Mutex<MockInner>>,
}

#[derive(Default)]
struct MockInner {
    routes: HashMap<String, Route>,
    requests: Vec<String>,
}

#[derive(Clone)]
enum Route {
    Body(String),
    Status(u16),
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` with a 200 for every GET of `url`.
    pub fn with_body(self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.insert(url.into(), Route::Body(body.into()));
        self
    }

    /// Answer every GET of `url` with `status`.
    pub fn with_status(self, url: impl Into<String>, status: u16) -> Self {
        self.insert(url.into(), Route::Status(status));
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.inner
            .lock()
            .expect("mock transport lock should not be poisoned")
            .requests
            .clone()
    }

    fn insert(&self, url: String, route: Route) {
        self.inner
            .lock()
            .expect("mock transport lock should not be poisoned")
            .routes
            .insert(url, route);
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get_text(&self, url: &str) -> Result<String> {
        let mut inner = self
            .inner
            .lock()
            .expect("mock transport lock should not be poisoned");
        inner.requests.push(url.to_string());

        match inner.routes.get(url).cloned() {
            Some(Route::Body(body)) => Ok(body),
            Some(Route::Status(status)) => Err(BlogError::Status {
                url: url.to_string(),
                status,
            }),
            None => Err(BlogError::Transport {
                url: url.to_string(),
                message: "no mock response registered".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn serves_registered_body_and_records_request() {
        let transport = MockTransport::new().with_body("https://example.com/a.md", "# A");
        let body = transport.get_text("https://example.com/a.md").await.unwrap();
        assert_eq!(body, "# A");
        assert_eq!(transport.requests(), vec!["https://example.com/a.md"]);
    }

    #[tokio::test]
    async fn unknown_url_and_status_routes_fail() {
        let transport = MockTransport::new().with_status("https://example.com/gone", 410);
        assert!(matches!(
            transport.get_text("https://example.com/gone").await,
            Err(BlogError::Status { status: 410, .. })
        ));
        assert!(matches!(
            transport.get_text("https://example.com/missing").await,
            Err(BlogError::Transport { .. })
        ));
    }
}

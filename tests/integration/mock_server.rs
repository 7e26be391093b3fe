//! Mock HTTP server setup for integration tests

use contentagen_sdk::{ContentaGenClient, ContentaGenClientBuilder, TransportMode};
use mockito::{Matcher, Mock, Server, ServerGuard};
use std::io::Write;
use std::sync::Arc;
use tokio::sync::Mutex;

pub const API_KEY: &str = "test-api-key";
pub const AGENT_ID: &str = "123e4567-e89b-12d3-a456-426614174000";

/// Test fixture that manages a mock server
pub struct MockServerFixture {
    pub server: Arc<Mutex<ServerGuard>>,
    pub base_url: String,
}

/// Path of a tRPC procedure.
pub fn procedure(name: &str) -> String {
    format!("/trpc/sdk.{}", name)
}

/// Match `path` with or without a query string.
pub fn path(path: &str) -> Matcher {
    Matcher::Regex(format!("^{}(\\?.*)?$", regex::escape(path)))
}

impl MockServerFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let base_url = server.url();
        Self {
            server: Arc::new(Mutex::new(server)),
            base_url,
        }
    }

    /// Builder pointed at the mock server with the test API key.
    pub fn builder(&self) -> ContentaGenClientBuilder {
        ContentaGenClient::builder()
            .api_key(API_KEY)
            .host(&self.base_url)
    }

    /// Client in the default (tRPC) layout.
    pub fn client(&self) -> ContentaGenClient {
        self.builder().build().expect("client should build")
    }

    /// Client in the `/sdk/...` REST layout.
    pub fn rest_client(&self) -> ContentaGenClient {
        self.builder()
            .transport_mode(TransportMode::Rest)
            .build()
            .expect("client should build")
    }

    /// Create a mock for a JSON response to a GET on `path`
    pub async fn mock_json(&self, path_str: &str, status: usize, body: &str) -> Mock {
        let mut server = self.server.lock().await;
        server
            .mock("GET", path(path_str))
            .match_header("sdk-api-key", API_KEY)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    /// Like [`mock_json`](Self::mock_json) but also requires the given
    /// decoded query pairs.
    pub async fn mock_json_with_query(
        &self,
        path_str: &str,
        query: Vec<(&str, &str)>,
        body: &str,
    ) -> Mock {
        let matchers = query
            .into_iter()
            .map(|(k, v)| Matcher::UrlEncoded(k.to_string(), v.to_string()))
            .collect();
        let mut server = self.server.lock().await;
        server
            .mock("GET", path(path_str))
            .match_header("sdk-api-key", API_KEY)
            .match_query(Matcher::AllOf(matchers))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    /// A mock that matches every request and must never be hit.
    pub async fn mock_unreachable(&self) -> Mock {
        let mut server = self.server.lock().await;
        server
            .mock("GET", Matcher::Any)
            .expect(0)
            .create_async()
            .await
    }

    /// Create a mock for a tRPC procedure that only matches when the
    /// `input` query parameter carries exactly `{"json": input}`.
    pub async fn mock_procedure(&self, name: &str, input: serde_json::Value, body: &str) -> Mock {
        let document = serde_json::json!({ "json": input }).to_string();
        let mut server = self.server.lock().await;
        server
            .mock("GET", path(&procedure(name)))
            .match_header("sdk-api-key", API_KEY)
            .match_query(Matcher::UrlEncoded("input".to_string(), document))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    /// Create a mock for a chunked text stream on `/sdk/assistant`
    pub async fn mock_text_stream(&self, chunks: Vec<&'static [u8]>) -> Mock {
        let mut server = self.server.lock().await;
        server
            .mock("GET", path("/sdk/assistant"))
            .match_header("sdk-api-key", API_KEY)
            .match_header("accept", "text/event-stream")
            .with_status(200)
            .with_header("content-type", "text/event-stream")
            .with_chunked_body(move |w| {
                for chunk in &chunks {
                    w.write_all(chunk)?;
                }
                Ok(())
            })
            .create_async()
            .await
    }

    /// Create a mock for a bare status on `path`
    pub async fn mock_status(&self, path_str: &str, status: usize) -> Mock {
        let mut server = self.server.lock().await;
        server
            .mock("GET", path(path_str))
            .with_status(status)
            .create_async()
            .await
    }
}

/// A list entry as the service returns it.
pub fn post_json(id: &str, created_at: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "meta": {"title": "Test Title", "slug": "test-title", "keywords": ["rust"], "sources": []},
        "imageUrl": null,
        "status": "draft",
        "createdAt": created_at,
        "stats": {"wordsCount": "120", "readTimeMinutes": "1"}
    })
}

/// Wrap a payload in the nested `result.data.json` envelope.
pub fn nested(payload: serde_json::Value) -> String {
    serde_json::json!({"result": {"data": {"json": payload}}}).to_string()
}

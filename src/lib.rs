//! # contentagen-sdk
//!
//! ContentaGen 内容服务的类型化 Rust 客户端。
//!
//! Typed async client for the ContentaGen content API.
//!
//! ## Overview
//!
//! Every call goes through the same pipeline: the caller's arguments are
//! checked against a declarative input shape, a single HTTP request is issued,
//! and the response is unwrapped, date-coerced and checked against the
//! operation's output shape before it is materialized into a typed record.
//! The assistant endpoint is streamed instead, yielding decoded text
//! fragments as the bytes arrive.
//!
//! ## Core Philosophy
//!
//! - **Validate before sending**: invalid arguments never reach the network
//! - **One attempt per call**: no retries, caching or pooling knobs
//! - **Typed failures**: four stable error codes (`SDK_E001`..`SDK_E004`)
//! - **Streaming-First assistant**: fragments are yielded in arrival order
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use contentagen_sdk::{ContentaGenClient, ListContentByAgentParams, StreamAssistantParams};
//! use futures::StreamExt;
//!
//! #[tokio::main]
//! async fn main() -> contentagen_sdk::Result<()> {
//!     let client = ContentaGenClient::builder()
//!         .api_key("your-api-key")
//!         .locale("pt-BR")
//!         .build()?;
//!
//!     let agent = "123e4567-e89b-12d3-a456-426614174000";
//!     let page = client
//!         .list_content_by_agent(&ListContentByAgentParams::new([agent], ["approved"]).with_limit(5))
//!         .await?;
//!     println!("{} posts", page.total);
//!
//!     let mut stream = client.stream_assistant_response(&StreamAssistantParams::new(agent, "Hi!"))?;
//!     while let Some(fragment) = stream.next().await {
//!         print!("{}", fragment?);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Client configuration, builder and the named operations |
//! | [`operation`] | Static operation descriptors (method, path, shapes) |
//! | [`schema`] | Declarative field constraints and the generic validator |
//! | [`transport`] | URL construction, headers and status classification |
//! | [`normalize`] | Envelope unwrapping and timestamp coercion |
//! | [`stream`] | Incremental decoding of the assistant reply |
//! | [`types`] | Caller parameters and response records |

pub mod client;
pub mod error_code;
pub mod normalize;
pub mod operation;
pub mod schema;
pub mod stream;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use client::{ContentaGenClient, ContentaGenClientBuilder, SdkConfig, PRODUCTION_API_URL};
pub use error_code::SdkErrorCode;
pub use normalize::Node;
pub use operation::Operation;
pub use stream::{AssistantStream, StreamPhase};
pub use transport::TransportMode;
pub use types::{
    author::{Author, ProfilePhoto},
    content::{
        ContentImage, ContentList, ContentMeta, ContentRecord, ContentRequest, ContentStats,
        ContentStatus, ContentSummary,
    },
    params::{
        AuthorParams, ContentImageParams, ContentSlugParams, Language, ListContentByAgentParams,
        StreamAssistantParams,
    },
};

use futures::Stream;
use std::pin::Pin;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// A unified pinned, boxed stream that emits `Result<T>`
pub type BoxStream<'a, T> = Pin<Box<dyn Stream<Item = Result<T>> + Send + 'a>>;

/// Build a client from a configuration value.
///
/// Shorthand for [`ContentaGenClient::new`]; fails with
/// [`Error::MissingApiKey`] when the key is empty.
pub fn create_sdk(config: SdkConfig) -> Result<ContentaGenClient> {
    ContentaGenClient::new(config)
}

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};

//! 类型系统模块：调用参数与响应记录。
//!
//! # Types Module
//!
//! Strongly-typed views of what goes into and comes out of the service.
//! Parameter structs serialize to the camelCase argument objects the input
//! shapes check; records deserialize from normalized, validated payloads.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`params`] | Caller parameter structs and [`params::Language`] |
//! | [`content`] | Content records, lists and images |
//! | [`author`] | Author profile and photo |

pub mod author;
pub mod content;
pub mod params;

pub use author::{Author, ProfilePhoto};
pub use content::{
    ContentImage, ContentList, ContentMeta, ContentRecord, ContentRequest, ContentStats,
    ContentStatus, ContentSummary,
};
pub use params::{
    AuthorParams, ContentImageParams, ContentSlugParams, Language, ListContentByAgentParams,
    StreamAssistantParams,
};

use crate::{Error, ErrorContext, Result};
use base64::Engine as _;

/// Decode a base64 payload field, reporting failures as invalid responses.
pub(crate) fn decode_base64(data: &str, field: &str) -> Result<Vec<u8>> {
    base64::engine::general_purpose::STANDARD
        .decode(data.trim())
        .map_err(|e| {
            Error::invalid_response_with_context(
                "payload is not valid base64",
                ErrorContext::new()
                    .with_field_path(field)
                    .with_details(e.to_string()),
            )
        })
}

//! 传输层：URL 构建、请求头与状态分类。
//!
//! Transport layer: turns a validated input into exactly one HTTP request and
//! classifies the outcome.

pub mod http;

pub use http::{ensure_success, HttpTransport, API_PREFIX, API_KEY_HEADER, LOCALE_HEADER};

use serde::{Deserialize, Serialize};

/// URL layout used for batch operations. Streaming always uses
/// `{host}/sdk/assistant`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    /// `{host}/trpc/sdk.{name}?input={"json":…}`; answers arrive in the
    /// nested `result.data.json` envelope.
    #[default]
    Trpc,
    /// `{host}/sdk/{path}` with plain query parameters.
    Rest,
}

//! 客户端接口：配置、构建器与具名操作。
//!
//! Client facade for the ContentaGen service.
//!
//! Keep the public surface small: one configuration value, one builder, and
//! one method per service operation. Implementation details are split into
//! submodules under `src/client/`.

pub mod builder;
pub mod core;
mod operations;

pub use builder::ContentaGenClientBuilder;
pub use self::core::ContentaGenClient;

use crate::transport::TransportMode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Host used when none is configured.
pub const PRODUCTION_API_URL: &str = "https://api.contentagen.com";

pub const API_KEY_ENV: &str = "CONTENTAGEN_API_KEY";
pub const LOCALE_ENV: &str = "CONTENTAGEN_LOCALE";
pub const HOST_ENV: &str = "CONTENTAGEN_HOST";

/// Client configuration.
///
/// Deserializes from the camelCase form (`apiKey`, `locale`, `host`,
/// `transportMode`) so it can be loaded straight from a JSON config file.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SdkConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(default)]
    pub transport_mode: TransportMode,
}

impl SdkConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }
}

impl fmt::Debug for SdkConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SdkConfig")
            .field("api_key", &"<redacted>")
            .field("locale", &self.locale)
            .field("host", &self.host)
            .field("transport_mode", &self.transport_mode)
            .finish()
    }
}

use super::{SdkConfig, API_KEY_ENV, HOST_ENV, LOCALE_ENV};
use crate::client::core::ContentaGenClient;
use crate::transport::TransportMode;
use crate::Result;

/// Builder for creating clients with custom configuration.
#[derive(Debug, Default)]
pub struct ContentaGenClientBuilder {
    config: SdkConfig,
}

impl ContentaGenClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from `CONTENTAGEN_API_KEY`, `CONTENTAGEN_LOCALE` and
    /// `CONTENTAGEN_HOST`. Explicit setters called afterwards win.
    pub fn from_env() -> Self {
        let var = |key: &str| std::env::var(key).ok().filter(|v| !v.trim().is_empty());
        Self {
            config: SdkConfig {
                api_key: var(API_KEY_ENV).unwrap_or_default(),
                locale: var(LOCALE_ENV),
                host: var(HOST_ENV),
                transport_mode: TransportMode::default(),
            },
        }
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config.api_key = api_key.into();
        self
    }

    /// Sent as `x-locale` on every request.
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.config.locale = Some(locale.into());
        self
    }

    /// Override the service host (primarily for testing with mock servers).
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = Some(host.into());
        self
    }

    pub fn transport_mode(mut self, mode: TransportMode) -> Self {
        self.config.transport_mode = mode;
        self
    }

    pub fn build(self) -> Result<ContentaGenClient> {
        ContentaGenClient::new(self.config)
    }
}

use super::{SdkConfig, PRODUCTION_API_URL};
use crate::client::builder::ContentaGenClientBuilder;
use crate::normalize::{normalize_response, Node};
use crate::operation::Operation;
use crate::stream::AssistantStream;
use crate::transport::{HttpTransport, TransportMode};
use crate::{Error, ErrorContext, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use tracing::debug;
use url::Url;

/// Typed client for the ContentaGen service.
///
/// Configuration is resolved once, at construction, and never changes. The
/// client holds no per-call state, so one instance can serve concurrent calls.
pub struct ContentaGenClient {
    host: String,
    locale: Option<String>,
    transport: HttpTransport,
}

impl ContentaGenClient {
    /// Create a client from a configuration value.
    pub fn new(config: SdkConfig) -> Result<Self> {
        let api_key = config.api_key.trim();
        if api_key.is_empty() {
            return Err(Error::MissingApiKey);
        }

        let locale = config.locale.filter(|l| !l.trim().is_empty());
        let host = config
            .host
            .as_deref()
            .map(str::trim)
            .filter(|h| !h.is_empty())
            .unwrap_or(PRODUCTION_API_URL)
            .trim_end_matches('/')
            .to_string();
        let base_url = parse_host(&host)?;

        let transport = HttpTransport::new(base_url, api_key, locale.as_deref(), config.transport_mode)?;
        debug!(host = %host, locale = ?locale, mode = ?config.transport_mode, "client configured");

        Ok(Self {
            host,
            locale,
            transport,
        })
    }

    pub fn builder() -> ContentaGenClientBuilder {
        ContentaGenClientBuilder::new()
    }

    /// Effective host, without a trailing `/`.
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    pub fn transport_mode(&self) -> TransportMode {
        self.transport.mode()
    }

    /// Run a batch operation on raw JSON arguments.
    ///
    /// Arguments are validated before any request is made; the response is
    /// unwrapped, date-coerced and validated against the operation's output
    /// shape.
    pub async fn execute(&self, operation: &Operation, args: &Value) -> Result<Node> {
        if operation.is_streaming() {
            return Err(Error::configuration_with_context(
                format!("{} is a streaming operation", operation.name),
                ErrorContext::new()
                    .with_details("use ContentaGenClient::stream")
                    .with_source("client"),
            ));
        }

        let input = operation.validate_input(args)?;
        let body = self.transport.get_json(operation, &input).await?;
        normalize_response(operation, body)
    }

    /// Open a streaming operation on raw JSON arguments.
    ///
    /// Validation happens here, synchronously. The request is only sent when
    /// the returned stream is first polled.
    pub fn stream(&self, operation: &Operation, args: &Value) -> Result<AssistantStream> {
        if !operation.is_streaming() {
            return Err(Error::configuration_with_context(
                format!("{} is not a streaming operation", operation.name),
                ErrorContext::new()
                    .with_details("use ContentaGenClient::execute")
                    .with_source("client"),
            ));
        }

        let input = operation.validate_input(args)?;
        let request = self.transport.stream_request(operation, &input)?;
        Ok(AssistantStream::new(request))
    }

    pub(crate) async fn call<T: DeserializeOwned>(&self, operation: &Operation, args: Value) -> Result<T> {
        let node = self.execute(operation, &args).await?;
        materialize(operation, node)
    }
}

/// Convert a validated node into its typed record.
pub(crate) fn materialize<T: DeserializeOwned>(operation: &Operation, node: Node) -> Result<T> {
    serde_json::from_value(node.into_json()).map_err(|e| {
        Error::invalid_response_with_context(
            e.to_string(),
            ErrorContext::new().with_source(operation.name),
        )
    })
}

fn parse_host(host: &str) -> Result<Url> {
    let invalid = |details: String| {
        Error::configuration_with_context(
            format!("invalid host: {}", host),
            ErrorContext::new()
                .with_field_path("host")
                .with_details(details)
                .with_source("client_builder"),
        )
    };

    let url = Url::parse(host).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(invalid(format!("unsupported scheme {}", url.scheme())));
    }
    Ok(url)
}

impl fmt::Debug for ContentaGenClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentaGenClient")
            .field("host", &self.host)
            .field("locale", &self.locale)
            .field("transport_mode", &self.transport.mode())
            .finish_non_exhaustive()
    }
}

use super::TransportMode;
use crate::operation::Operation;
use crate::schema::ValidatedInput;
use crate::{Error, ErrorContext, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Response;
use serde_json::{Map, Value};
use tracing::{debug, warn};
use url::Url;

/// Path prefix for REST operations.
pub const API_PREFIX: &str = "sdk";
/// Path prefix for tRPC procedures.
pub const TRPC_PREFIX: &str = "trpc";
pub const API_KEY_HEADER: &str = "sdk-api-key";
pub const LOCALE_HEADER: &str = "x-locale";

const EVENT_STREAM: &str = "text/event-stream";
const JSON_CONTENT_TYPE: &str = "application/json";

/// One-shot HTTP transport bound to a single client configuration.
///
/// Holds no mutable state: every call builds its own URL and request.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
    headers: HeaderMap,
    mode: TransportMode,
}

impl HttpTransport {
    pub fn new(
        base_url: Url,
        api_key: &str,
        locale: Option<&str>,
        mode: TransportMode,
    ) -> Result<Self> {
        if base_url.cannot_be_a_base() {
            return Err(Error::configuration_with_context(
                format!("host must be an absolute http(s) URL, got {}", base_url),
                ErrorContext::new()
                    .with_field_path("host")
                    .with_source("http_transport"),
            ));
        }

        let mut headers = HeaderMap::new();
        let mut key = HeaderValue::from_str(api_key).map_err(|_| {
            Error::configuration_with_context(
                "API key contains characters that are not allowed in an HTTP header",
                ErrorContext::new()
                    .with_field_path("apiKey")
                    .with_source("http_transport"),
            )
        })?;
        key.set_sensitive(true);
        headers.insert(HeaderName::from_static(API_KEY_HEADER), key);

        if let Some(locale) = locale {
            let value = HeaderValue::from_str(locale).map_err(|_| {
                Error::configuration_with_context(
                    format!("locale {:?} is not a valid header value", locale),
                    ErrorContext::new()
                        .with_field_path("locale")
                        .with_source("http_transport"),
                )
            })?;
            headers.insert(HeaderName::from_static(LOCALE_HEADER), value);
        }

        let client = reqwest::Client::builder()
            .user_agent(concat!("contentagen-sdk-rust/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                Error::configuration_with_context(
                    format!("Failed to create HTTP client: {}", e),
                    ErrorContext::new().with_source("http_transport"),
                )
            })?;

        Ok(Self {
            client,
            base_url,
            headers,
            mode,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn mode(&self) -> TransportMode {
        self.mode
    }

    /// Headers attached to every request (API key, optional locale).
    pub fn default_headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Build the target URL for a batch call in the configured mode.
    ///
    /// Streaming operations always use the REST layout.
    pub fn build_url(&self, operation: &Operation, input: &ValidatedInput) -> Result<Url> {
        match self.mode {
            TransportMode::Trpc if !operation.is_streaming() => self.trpc_url(operation, input),
            _ => self.rest_url(operation, input),
        }
    }

    fn rest_url(&self, operation: &Operation, input: &ValidatedInput) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| not_a_base(&self.base_url))?;
            segments.pop_if_empty().push(API_PREFIX);
            for segment in operation.path.split('/') {
                match segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
                    Some(param) => {
                        let value = input.get(param).and_then(query_value).unwrap_or_default();
                        segments.push(&value);
                    }
                    None => {
                        segments.push(segment);
                    }
                }
            }
        }

        let path_params: Vec<&str> = operation.path_params().collect();
        let pairs: Vec<(&str, String)> = operation
            .input
            .fields()
            .iter()
            .filter(|field| !path_params.contains(&field.name))
            .filter_map(|field| {
                input
                    .get(field.name)
                    .and_then(query_value)
                    .map(|value| (field.name, value))
            })
            .collect();

        if !pairs.is_empty() {
            let mut query = url.query_pairs_mut();
            for (name, value) in &pairs {
                query.append_pair(name, value);
            }
        }
        Ok(url)
    }

    fn trpc_url(&self, operation: &Operation, input: &ValidatedInput) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| not_a_base(&self.base_url))?
            .pop_if_empty()
            .push(TRPC_PREFIX)
            .push(&format!("{}.{}", API_PREFIX, operation.name));

        let mut document = Map::new();
        document.insert("json".to_string(), input.clone().into_value());
        url.query_pairs_mut()
            .append_pair("input", &Value::Object(document).to_string());
        Ok(url)
    }

    /// Issue a batch call and parse its JSON body.
    ///
    /// Non-success statuses become [`Error::ApiRequestFailed`]; a success body
    /// that is not JSON surfaces as [`Error::Serialization`] unchanged.
    pub async fn get_json(&self, operation: &Operation, input: &ValidatedInput) -> Result<Value> {
        let url = self.build_url(operation, input)?;
        debug!(
            operation = operation.name,
            method = %operation.method,
            url = %url,
            "sending request"
        );

        let response = self
            .client
            .request(operation.method.clone(), url)
            .headers(self.headers.clone())
            .send()
            .await?;
        let response = ensure_success(response).await?;

        let body = response.text().await?;
        let json = serde_json::from_str(&body)?;
        Ok(json)
    }

    /// Prepare (but do not send) the request for a streaming operation.
    pub fn stream_request(
        &self,
        operation: &Operation,
        input: &ValidatedInput,
    ) -> Result<reqwest::RequestBuilder> {
        let url = self.rest_url(operation, input)?;
        debug!(operation = operation.name, url = %url, "prepared streaming request");

        Ok(self
            .client
            .request(operation.method.clone(), url)
            .headers(self.headers.clone())
            .header(ACCEPT, EVENT_STREAM)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE))
    }
}

/// Pass success responses through; turn anything else into
/// [`Error::ApiRequestFailed`] carrying the status text and, when it can be
/// read, the response body.
pub async fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    // reqwest does not expose the reason phrase sent by the server, so this is
    // the canonical text for the code. Non-standard codes read "Unknown Status".
    let status_text = status
        .canonical_reason()
        .unwrap_or("Unknown Status")
        .to_string();
    let body = response.text().await.ok().filter(|b| !b.trim().is_empty());
    warn!(status = status.as_u16(), status_text = %status_text, "request failed");

    Err(Error::ApiRequestFailed {
        status: status.as_u16(),
        status_text,
        body,
    })
}

/// Render a validated value as a query parameter. Arrays are joined with `,`.
fn query_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(_) | Value::Number(_) => Some(value.to_string()),
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(query_value)
                .collect::<Vec<_>>()
                .join(","),
        ),
        Value::Object(_) => Some(value.to_string()),
    }
}

fn not_a_base(url: &Url) -> Error {
    Error::configuration_with_context(
        format!("cannot append a path to {}", url),
        ErrorContext::new().with_source("http_transport"),
    )
}

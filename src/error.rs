use crate::error_code::SdkErrorCode;
use crate::schema::{join_violations, Violation};
use thiserror::Error;

/// Structured error context for better error handling and debugging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Field path or configuration key that caused the error (e.g., "config.host", "posts[0].createdAt")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., expected type, actual value)
    pub details: Option<String>,
    /// Source of the error (e.g., "normalizer", "client_builder")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            field_path: None,
            details: None,
            source: None,
        }
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Unified error type for the SDK.
///
/// The first five variants form the SDK's own taxonomy and carry a stable
/// [`SdkErrorCode`]. Lower-level failures (network, JSON parsing) are passed
/// through unchanged so the original diagnostic survives.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{}: {}", SdkErrorCode::MissingApiKey.code(), SdkErrorCode::MissingApiKey.message())]
    MissingApiKey,

    #[error(
        "{}: {} for {operation}: {message}",
        SdkErrorCode::InvalidInput.code(),
        SdkErrorCode::InvalidInput.message()
    )]
    InvalidInput {
        operation: String,
        message: String,
        violations: Vec<Violation>,
    },

    #[error(
        "{}: {} ({status_text}){}",
        SdkErrorCode::ApiRequestFailed.code(),
        SdkErrorCode::ApiRequestFailed.message(),
        format_body(.body)
    )]
    ApiRequestFailed {
        status: u16,
        status_text: String,
        body: Option<String>,
    },

    #[error(
        "{}: {} {message}{}",
        SdkErrorCode::InvalidApiResponse.code(),
        SdkErrorCode::InvalidApiResponse.message(),
        format_context(.context)
    )]
    InvalidApiResponse {
        message: String,
        context: ErrorContext,
    },

    #[error(
        "{}: {} Response body is null (HTTP {status})",
        SdkErrorCode::InvalidApiResponse.code(),
        SdkErrorCode::InvalidApiResponse.message()
    )]
    NoResponseBody { status: u16 },

    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    #[error("Network transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// Helper function to format error context for display
fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

fn format_body(body: &Option<String>) -> String {
    match body.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => format!(": {}", text),
        _ => String::new(),
    }
}

impl Error {
    /// Build an `InvalidInput` error whose message enumerates every violation.
    pub fn invalid_input(operation: impl Into<String>, violations: Vec<Violation>) -> Self {
        let message = join_violations(&violations);
        Error::InvalidInput {
            operation: operation.into(),
            message,
            violations,
        }
    }

    /// Create a new invalid-response error with structured context
    pub fn invalid_response_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::InvalidApiResponse {
            message: msg.into(),
            context,
        }
    }

    /// Create a new configuration error with structured context
    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    /// The stable SDK code, if this error belongs to the SDK taxonomy.
    pub fn code(&self) -> Option<SdkErrorCode> {
        match self {
            Error::MissingApiKey => Some(SdkErrorCode::MissingApiKey),
            Error::InvalidInput { .. } => Some(SdkErrorCode::InvalidInput),
            Error::ApiRequestFailed { .. } => Some(SdkErrorCode::ApiRequestFailed),
            Error::InvalidApiResponse { .. } | Error::NoResponseBody { .. } => {
                Some(SdkErrorCode::InvalidApiResponse)
            }
            Error::Configuration { .. } | Error::Transport(_) | Error::Serialization(_) => None,
        }
    }

    /// HTTP status carried by the error, when the service answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::ApiRequestFailed { status, .. } | Error::NoResponseBody { status } => {
                Some(*status)
            }
            Error::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Violations behind an `InvalidInput` error; empty for every other variant.
    pub fn violations(&self) -> &[Violation] {
        match self {
            Error::InvalidInput { violations, .. } => violations,
            _ => &[],
        }
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::InvalidApiResponse { context, .. } | Error::Configuration { context, .. } => {
                Some(context)
            }
            _ => None,
        }
    }
}

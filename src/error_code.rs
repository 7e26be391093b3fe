//! SDK 错误码：四类稳定错误码及其默认消息。
//!
//! Stable SDK error codes.
//!
//! Every failure the SDK itself raises belongs to one of four kinds, each with a
//! stable code string that callers can match on without parsing messages.
//!
//! | Code       | Kind                 | Raised when                                   |
//! |------------|----------------------|-----------------------------------------------|
//! | `SDK_E001` | missing_api_key      | the client is constructed without an API key  |
//! | `SDK_E002` | api_request_failed   | the service answered with a non-success status |
//! | `SDK_E003` | invalid_api_response | a success body does not match the expected shape |
//! | `SDK_E004` | invalid_input        | caller arguments fail validation              |
//!
//! ## Example
//!
//! ```rust
//! use contentagen_sdk::error_code::SdkErrorCode;
//!
//! let code = SdkErrorCode::from_code("SDK_E004").unwrap();
//! assert_eq!(code, SdkErrorCode::InvalidInput);
//! assert_eq!(code.message(), "Invalid input.");
//! assert!(code.is_client_side());
//! ```

use std::fmt;

/// Stable error code attached to every SDK-raised failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SdkErrorCode {
    /// SDK_E001: the API key was missing or blank at construction
    MissingApiKey,
    /// SDK_E002: the remote service responded with a non-success status
    ApiRequestFailed,
    /// SDK_E003: the remote payload did not match the expected envelope or shape
    InvalidApiResponse,
    /// SDK_E004: caller-supplied arguments failed validation
    InvalidInput,
}

impl SdkErrorCode {
    /// Every code, in code order.
    pub const ALL: [SdkErrorCode; 4] = [
        Self::MissingApiKey,
        Self::ApiRequestFailed,
        Self::InvalidApiResponse,
        Self::InvalidInput,
    ];

    /// Returns the canonical code string (e.g., `"SDK_E004"`).
    #[inline]
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingApiKey => "SDK_E001",
            Self::ApiRequestFailed => "SDK_E002",
            Self::InvalidApiResponse => "SDK_E003",
            Self::InvalidInput => "SDK_E004",
        }
    }

    /// Returns the snake_case name (e.g., `"invalid_input"`).
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::MissingApiKey => "missing_api_key",
            Self::ApiRequestFailed => "api_request_failed",
            Self::InvalidApiResponse => "invalid_api_response",
            Self::InvalidInput => "invalid_input",
        }
    }

    /// Returns the default human message for this code.
    #[inline]
    pub fn message(&self) -> &'static str {
        match self {
            Self::MissingApiKey => "apiKey is required to initialize the ContentaGenSDK",
            Self::ApiRequestFailed => "API request failed",
            Self::InvalidApiResponse => "Invalid API response format.",
            Self::InvalidInput => "Invalid input.",
        }
    }

    /// Whether the cause lies with the caller (configuration or arguments)
    /// rather than with the remote service.
    #[inline]
    pub fn is_client_side(&self) -> bool {
        matches!(self, Self::MissingApiKey | Self::InvalidInput)
    }

    /// Looks up a code by its canonical string.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }
}

impl fmt::Display for SdkErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

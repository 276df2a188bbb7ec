use serde::{Deserialize, Serialize};

/// Error type for every Custom DNS provider operation.
///
/// There is a single error kind so callers can treat any failure as fatal to
/// the current call. The variants keep HTTP failures, decoding failures and
/// transport failures apart for diagnostics, and carry the raw response body
/// whenever one was received.
///
/// No variant is retried by this crate. Retry policy belongs to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// The API answered with a non-success HTTP status.
    HttpStatus {
        /// Provider that produced the error.
        provider: String,
        /// HTTP status code.
        status: u16,
        /// Raw response body, read before the status was inspected.
        body: String,
    },

    /// The response body did not have the expected JSON shape.
    ///
    /// Raised when the document is not JSON, is `null`, or lacks the `data`
    /// array.
    ParseError {
        /// Provider that produced the error.
        provider: String,
        /// Details about the parse failure.
        detail: String,
        /// Raw response body that failed to decode.
        raw_body: String,
    },

    /// A network-level error occurred (DNS resolution failure, connection refused, TLS, etc.).
    NetworkError {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// A request parameter is invalid.
    InvalidParameter {
        /// Provider that produced the error.
        provider: String,
        /// Name of the invalid parameter.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// Failed to serialize a request body.
    SerializationError {
        /// Provider that produced the error.
        provider: String,
        /// Details about the serialization failure.
        detail: String,
    },

    /// The provider could not be constructed from its options.
    InvalidConfig {
        /// Provider that produced the error.
        provider: String,
        /// Details about the invalid option.
        detail: String,
    },
}

impl ProviderError {
    /// HTTP status code, if the error came from a received response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw response body captured for diagnostics, if any.
    pub fn raw_body(&self) -> Option<&str> {
        match self {
            Self::HttpStatus { body, .. } => Some(body),
            Self::ParseError { raw_body, .. } => Some(raw_body),
            _ => None,
        }
    }

    /// 是否为传输层错误（网络、超时），用于调用方决定是否重试。
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::NetworkError { .. } | Self::Timeout { .. })
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HttpStatus {
                provider,
                status,
                body,
            } => {
                write!(f, "[{provider}] HTTP {status}: {body}")
            }
            Self::ParseError {
                provider,
                detail,
                raw_body,
            } => {
                write!(
                    f,
                    "[{provider}] Deserialization failed ({detail}). Raw content: {raw_body}"
                )
            }
            Self::NetworkError { provider, detail } => {
                write!(f, "[{provider}] Network error: {detail}")
            }
            Self::Timeout { provider, detail } => {
                write!(f, "[{provider}] Request timeout: {detail}")
            }
            Self::InvalidParameter {
                provider,
                param,
                detail,
            } => {
                write!(f, "[{provider}] Invalid parameter '{param}': {detail}")
            }
            Self::SerializationError { provider, detail } => {
                write!(f, "[{provider}] Serialization error: {detail}")
            }
            Self::InvalidConfig { provider, detail } => {
                write!(f, "[{provider}] Invalid configuration: {detail}")
            }
        }
    }
}

impl std::error::Error for ProviderError {}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;

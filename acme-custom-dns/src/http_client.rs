//! Generic HTTP client tools
//!
//! Every call goes through the same flow: send, read the whole body as text,
//! then inspect the status. The body is therefore always available when the
//! status turns out to be an error.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::ProviderError;
use crate::utils::log_sanitizer::truncate_for_log;

/// Status code and body text of a completed exchange.
#[derive(Debug, Clone)]
pub(crate) struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Turns a non-success status into [`ProviderError::HttpStatus`].
    pub fn error_for_status(self, provider_name: &str) -> Result<Self, ProviderError> {
        if self.is_success() {
            Ok(self)
        } else {
            log::warn!(
                "[{provider_name}] HTTP {}: {}",
                self.status,
                truncate_for_log(&self.body)
            );
            Err(ProviderError::HttpStatus {
                provider: provider_name.to_string(),
                status: self.status,
                body: self.body,
            })
        }
    }
}

/// HTTP tool function set
pub(crate) struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns status and response text
    ///
    /// # Arguments
    /// * `request_builder` - configured request constructor (URL, headers, body)
    /// * `provider_name` - Provider name (for logging and errors)
    /// * `method_name` - request method name (such as "GET", "POST", used for logs)
    /// * `path` - request path relative to the endpoint (for logging)
    ///
    /// # Returns
    /// * `Ok(RawResponse)` - for any status, success or not
    /// * `Err(ProviderError::Timeout | ProviderError::NetworkError)` - transport failure
    pub async fn execute_request(
        request_builder: RequestBuilder,
        provider_name: &str,
        method_name: &str,
        path: &str,
    ) -> Result<RawResponse, ProviderError> {
        log::debug!("[{provider_name}] {method_name} {path}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            } else {
                ProviderError::NetworkError {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status = response.status().as_u16();
        log::debug!("[{provider_name}] Response Status: {status}");

        // Body first, status later
        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::NetworkError {
                provider: provider_name.to_string(),
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!("[{provider_name}] Response Body: {}", truncate_for_log(&body));

        Ok(RawResponse { status, body })
    }

    /// Parse JSON response
    ///
    /// A `null` document is reported as a parse error, like malformed JSON.
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(ProviderError::ParseError)` - parsing failed, carries the raw body
    pub fn parse_json<T>(response_text: &str, provider_name: &str) -> Result<T, ProviderError>
    where
        T: DeserializeOwned,
    {
        let parse_error = |detail: String| {
            log::error!("[{provider_name}] JSON parse failed: {detail}");
            log::error!(
                "[{provider_name}] Raw response: {}",
                truncate_for_log(response_text)
            );
            ProviderError::ParseError {
                provider: provider_name.to_string(),
                detail,
                raw_body: response_text.to_string(),
            }
        };

        match serde_json::from_str::<Option<T>>(response_text) {
            Ok(Some(value)) => Ok(value),
            Ok(None) => Err(parse_error("response is null".to_string())),
            Err(e) => Err(parse_error(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(serde::Deserialize, Debug, PartialEq)]
    struct Foo {
        x: i32,
    }

    #[test]
    fn parse_json_valid() {
        let result: Result<Foo, ProviderError> = HttpUtils::parse_json(r#"{"x":42}"#, "test");
        assert!(
            matches!(&result, Ok(Foo { x: 42 })),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn parse_json_invalid_keeps_raw_body() {
        let result: Result<Foo, ProviderError> = HttpUtils::parse_json("not json", "test");
        assert!(
            matches!(&result, Err(ProviderError::ParseError { raw_body, .. }) if raw_body == "not json"),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn parse_json_null_is_error() {
        let result: Result<Foo, ProviderError> = HttpUtils::parse_json("null", "test");
        assert!(matches!(&result, Err(ProviderError::ParseError { .. })));
    }

    #[test]
    fn error_for_status_passes_success() {
        let raw = RawResponse {
            status: 204,
            body: String::new(),
        };
        assert!(raw.error_for_status("test").is_ok());
    }

    #[test]
    fn error_for_status_keeps_body() {
        let raw = RawResponse {
            status: 403,
            body: "forbidden".to_string(),
        };
        let err = raw.error_for_status("test").err();
        assert!(matches!(
            err,
            Some(ProviderError::HttpStatus { status: 403, ref body, .. }) if body == "forbidden"
        ));
    }
}

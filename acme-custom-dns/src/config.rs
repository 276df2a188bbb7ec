//! Provider options
//!
//! `CustomDnsOptions` is normally bound from the hosting application's
//! settings. Both `camelCase` keys and the application-settings `PascalCase`
//! keys are accepted when deserializing.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::log_sanitizer::mask_secret;

/// 默认 API Key 请求头名称
pub const DEFAULT_API_KEY_HEADER_NAME: &str = "X-Api-Key";
/// 默认 DNS 传播等待时间（秒）
pub const DEFAULT_PROPAGATION_SECONDS: u32 = 180;

/// Environment key prefix used by the hosting application.
pub const ENV_PREFIX: &str = "Acmebot__CustomDns__";

/// Errors raised while loading or validating [`CustomDnsOptions`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required option is missing entirely.
    #[error("Missing required option: {0}")]
    MissingField(&'static str),

    /// An option is present but empty/whitespace-only.
    #[error("Option must not be empty: {0}")]
    EmptyField(&'static str),

    /// An option has an invalid format.
    #[error("{field}: {reason}")]
    InvalidFormat {
        /// Option name.
        field: &'static str,
        /// Description of what's wrong with the value.
        reason: String,
    },
}

/// Options for [`CustomDnsProvider`](crate::CustomDnsProvider).
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CustomDnsOptions {
    /// Base URL of the DNS hosting API, e.g. `https://dns.example.net/api/`.
    #[serde(alias = "Endpoint")]
    pub endpoint: String,

    /// Name of the header carrying the API key.
    #[serde(alias = "ApiKeyHeaderName", default = "default_api_key_header_name")]
    pub api_key_header_name: String,

    /// API key sent on every request.
    #[serde(alias = "ApiKey")]
    pub api_key: String,

    /// Seconds the caller must wait after creating a record before validation.
    #[serde(alias = "PropagationSeconds", default = "default_propagation_seconds")]
    pub propagation_seconds: u32,
}

fn default_api_key_header_name() -> String {
    DEFAULT_API_KEY_HEADER_NAME.to_string()
}

const fn default_propagation_seconds() -> u32 {
    DEFAULT_PROPAGATION_SECONDS
}

impl CustomDnsOptions {
    /// Creates options with the default header name and propagation delay.
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key_header_name: default_api_key_header_name(),
            api_key: api_key.into(),
            propagation_seconds: DEFAULT_PROPAGATION_SECONDS,
        }
    }

    /// Overrides the API key header name.
    #[must_use]
    pub fn with_api_key_header_name(mut self, name: impl Into<String>) -> Self {
        self.api_key_header_name = name.into();
        self
    }

    /// Overrides the propagation delay.
    #[must_use]
    pub const fn with_propagation_seconds(mut self, seconds: u32) -> Self {
        self.propagation_seconds = seconds;
        self
    }

    /// Checks that every required option is present.
    ///
    /// The API key value itself is not validated beyond being non-empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.endpoint.trim().is_empty() {
            return Err(ConfigError::EmptyField("Endpoint"));
        }
        if self.api_key_header_name.trim().is_empty() {
            return Err(ConfigError::EmptyField("ApiKeyHeaderName"));
        }
        if self.api_key.is_empty() {
            return Err(ConfigError::EmptyField("ApiKey"));
        }
        Ok(())
    }

    /// Builds options from a key lookup using `Acmebot__CustomDns__<Field>` keys.
    ///
    /// `Endpoint` and `ApiKey` are required. `ApiKeyHeaderName` and
    /// `PropagationSeconds` fall back to their defaults when absent.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |field: &str| lookup(format!("{ENV_PREFIX}{field}").as_str());

        let endpoint = get("Endpoint").ok_or(ConfigError::MissingField("Endpoint"))?;
        let api_key = get("ApiKey").ok_or(ConfigError::MissingField("ApiKey"))?;
        let api_key_header_name =
            get("ApiKeyHeaderName").unwrap_or_else(default_api_key_header_name);

        let propagation_seconds = match get("PropagationSeconds") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .map_err(|e| ConfigError::InvalidFormat {
                    field: "PropagationSeconds",
                    reason: format!("'{raw}' is not a valid number of seconds: {e}"),
                })?,
            None => DEFAULT_PROPAGATION_SECONDS,
        };

        let options = Self {
            endpoint,
            api_key_header_name,
            api_key,
            propagation_seconds,
        };
        options.validate()?;
        Ok(options)
    }

    /// Builds options from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

impl std::fmt::Debug for CustomDnsOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomDnsOptions")
            .field("endpoint", &self.endpoint)
            .field("api_key_header_name", &self.api_key_header_name)
            .field("api_key", &mask_secret(&self.api_key))
            .field("propagation_seconds", &self.propagation_seconds)
            .finish()
    }
}

//! Provider 公共工具函数

use std::time::Duration;

use reqwest::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Url};

use crate::error::{ProviderError, Result};

// ============ HTTP Client ============

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// 创建带超时配置和默认请求头的 HTTP Client
pub(crate) fn create_http_client(default_headers: HeaderMap, provider: &str) -> Result<Client> {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .default_headers(default_headers)
        .build()
        .map_err(|e| ProviderError::InvalidConfig {
            provider: provider.to_string(),
            detail: format!("Failed to create HTTP client: {e}"),
        })
}

/// Builds the headers attached to every request: `Accept: application/json`
/// plus the API key under the configured header name.
///
/// The key is checked only for bytes that can never appear in a header
/// (control characters), not for strict visible-ASCII syntax.
pub(crate) fn api_key_headers(
    header_name: &str,
    api_key: &str,
    provider: &str,
) -> Result<HeaderMap> {
    let name = HeaderName::from_bytes(header_name.trim().as_bytes()).map_err(|e| {
        ProviderError::InvalidConfig {
            provider: provider.to_string(),
            detail: format!("Invalid API key header name '{header_name}': {e}"),
        }
    })?;

    let mut value =
        HeaderValue::from_bytes(api_key.as_bytes()).map_err(|_| ProviderError::InvalidConfig {
            provider: provider.to_string(),
            detail: "API key contains characters that cannot be sent in a header".to_string(),
        })?;
    value.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(name, value);
    Ok(headers)
}

// ============ Endpoint ============

/// Parses the endpoint and makes sure it ends with `/`, so that relative
/// paths such as `zones` resolve below it instead of replacing its last segment.
pub(crate) fn normalize_endpoint(endpoint: &str, provider: &str) -> Result<Url> {
    let trimmed = endpoint.trim();
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    };

    let url = Url::parse(&with_slash).map_err(|e| ProviderError::InvalidConfig {
        provider: provider.to_string(),
        detail: format!("Invalid endpoint '{endpoint}': {e}"),
    })?;

    if url.cannot_be_a_base() {
        return Err(ProviderError::InvalidConfig {
            provider: provider.to_string(),
            detail: format!("Endpoint '{endpoint}' cannot be used as a base URL"),
        });
    }

    Ok(url)
}

// ============ 域名名称处理 ============

/// 去掉域名末尾的点
pub(crate) fn normalize_domain_name(name: &str) -> &str {
    name.trim_end_matches('.')
}

/// 将相对名称转换为完整域名
/// 如: "_acme-challenge" + "example.com" -> "_acme-challenge.example.com"
/// 如: "@" + "example.com" -> "example.com"
pub(crate) fn relative_to_full_name(relative_name: &str, zone_name: &str) -> String {
    let zone = normalize_domain_name(zone_name);

    if relative_name == "@" || relative_name.is_empty() {
        zone.to_string()
    } else {
        format!("{relative_name}.{zone}")
    }
}

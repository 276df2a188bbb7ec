//! Custom DNS HTTP 请求方法

use reqwest::Url;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ProviderError, Result};
use crate::http_client::{HttpUtils, RawResponse};

use super::{CustomDnsProvider, DataEnvelope, PROVIDER_NAME};

impl CustomDnsProvider {
    /// Resolves path segments below the configured endpoint.
    ///
    /// Segments are percent-encoded, so an opaque zone id can never escape
    /// its path position.
    fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ProviderError::InvalidConfig {
                provider: PROVIDER_NAME.to_string(),
                detail: format!("Endpoint '{}' cannot be used as a base URL", self.base_url),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// 执行 GET 请求并解析 `data` 数组
    pub(crate) async fn get_data<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<Vec<T>> {
        let path = segments.join("/");
        let request = self.client.get(self.url(segments)?);
        let response = HttpUtils::execute_request(request, PROVIDER_NAME, "GET", &path)
            .await?
            .error_for_status(PROVIDER_NAME)?;

        let envelope: DataEnvelope<T> = HttpUtils::parse_json(&response.body, PROVIDER_NAME)?;

        envelope.data.ok_or_else(|| {
            log::error!("[{PROVIDER_NAME}] Response is missing 'data'");
            ProviderError::ParseError {
                provider: PROVIDER_NAME.to_string(),
                detail: "'data' is null or missing".to_string(),
                raw_body: response.body,
            }
        })
    }

    /// 执行 POST 请求（JSON 请求体），返回原始响应
    pub(crate) async fn post_json<B: Serialize>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> Result<RawResponse> {
        let path = segments.join("/");
        let body_json = serde_json::to_string(body).map_err(|e| ProviderError::SerializationError {
            provider: PROVIDER_NAME.to_string(),
            detail: e.to_string(),
        })?;
        log::debug!("[{PROVIDER_NAME}] Request Body: {body_json}");

        let request = self
            .client
            .post(self.url(segments)?)
            .header(reqwest::header::CONTENT_TYPE, "application/json; charset=utf-8")
            .body(body_json);

        HttpUtils::execute_request(request, PROVIDER_NAME, "POST", &path)
            .await?
            .error_for_status(PROVIDER_NAME)
    }

    /// 执行 DELETE 请求
    pub(crate) async fn delete(&self, segments: &[&str]) -> Result<()> {
        let path = segments.join("/");
        let request = self.client.delete(self.url(segments)?);
        HttpUtils::execute_request(request, PROVIDER_NAME, "DELETE", &path)
            .await?
            .error_for_status(PROVIDER_NAME)?;
        Ok(())
    }
}

//! Custom DNS Provider
//!
//! Talks to a small REST API exposing `zones` and `zones/{id}/records`,
//! authenticated by a single API key header.

mod http;
mod provider;
mod types;

use std::sync::Arc;

use reqwest::{Client, Url};

use crate::config::CustomDnsOptions;
use crate::diagnostics::LogDiagnostics;
use crate::error::{ProviderError, Result};
use crate::providers::common::{api_key_headers, create_http_client, normalize_endpoint};
use crate::traits::DiagnosticSink;

pub(crate) use types::{CreateTxtRecordBody, DataEnvelope, RemoteRecord, RemoteZone};

/// Provider display name.
pub(crate) const PROVIDER_NAME: &str = "Custom DNS";

/// Custom DNS Provider
pub struct CustomDnsProvider {
    pub(crate) client: Client,
    pub(crate) base_url: Url,
    pub(crate) propagation_seconds: u32,
    pub(crate) diagnostics: Arc<dyn DiagnosticSink>,
}

impl CustomDnsProvider {
    /// Creates a provider that reports diagnostics through the `log` facade.
    pub fn new(options: &CustomDnsOptions) -> Result<Self> {
        Self::with_diagnostics(options, Arc::new(LogDiagnostics))
    }

    /// Creates a provider with a custom diagnostic sink.
    pub fn with_diagnostics(
        options: &CustomDnsOptions,
        diagnostics: Arc<dyn DiagnosticSink>,
    ) -> Result<Self> {
        options
            .validate()
            .map_err(|e| ProviderError::InvalidConfig {
                provider: PROVIDER_NAME.to_string(),
                detail: e.to_string(),
            })?;

        let base_url = normalize_endpoint(&options.endpoint, PROVIDER_NAME)?;
        let headers = api_key_headers(
            &options.api_key_header_name,
            &options.api_key,
            PROVIDER_NAME,
        )?;
        let client = create_http_client(headers, PROVIDER_NAME)?;

        log::debug!("[{PROVIDER_NAME}] Endpoint: {base_url}");

        Ok(Self {
            client,
            base_url,
            propagation_seconds: options.propagation_seconds,
            diagnostics,
        })
    }
}

impl std::fmt::Debug for CustomDnsProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomDnsProvider")
            .field("base_url", &self.base_url.as_str())
            .field("propagation_seconds", &self.propagation_seconds)
            .finish_non_exhaustive()
    }
}

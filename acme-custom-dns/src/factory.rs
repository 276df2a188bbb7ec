//! Provider factory functions.

use std::sync::Arc;

use crate::config::CustomDnsOptions;
use crate::error::Result;
use crate::providers::CustomDnsProvider;
use crate::traits::{DiagnosticSink, DnsProvider};

/// Creates a [`DnsProvider`] from the given options.
///
/// The returned provider is wrapped in `Arc<dyn DnsProvider>` for easy sharing
/// across async tasks.
///
/// # Examples
///
/// ```rust,no_run
/// use acme_custom_dns::{CustomDnsOptions, DnsProvider, create_provider};
///
/// let provider = create_provider(&CustomDnsOptions::new(
///     "https://dns.example.net/api/",
///     "your-api-key",
/// ))
/// .unwrap();
/// assert_eq!(provider.name(), "Custom DNS");
/// ```
pub fn create_provider(options: &CustomDnsOptions) -> Result<Arc<dyn DnsProvider>> {
    Ok(Arc::new(CustomDnsProvider::new(options)?))
}

/// Same as [`create_provider`], reporting diagnostics to `diagnostics`.
pub fn create_provider_with_diagnostics(
    options: &CustomDnsOptions,
    diagnostics: Arc<dyn DiagnosticSink>,
) -> Result<Arc<dyn DnsProvider>> {
    Ok(Arc::new(CustomDnsProvider::with_diagnostics(
        options,
        diagnostics,
    )?))
}

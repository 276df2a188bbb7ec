//! # acme-custom-dns
//!
//! DNS-01 challenge provider for ACME certificate automation, backed by a
//! custom DNS hosting REST API.
//!
//! The provider lists the account's zones, creates the `_acme-challenge` TXT
//! record under a zone and removes it again once validation is done. ACME
//! itself, scheduling and retries are left to the caller.
//!
//! ## Wire Protocol
//!
//! All requests are relative to the configured endpoint and carry
//! `Accept: application/json` plus the API key header.
//!
//! | Operation | Method | Path | Body |
//! |-----------|--------|------|------|
//! | List zones | `GET` | `zones` | - |
//! | Create record | `POST` | `zones/{zoneId}/records` | `{"type":"TXT","name":..,"text":..,"ttl":3600}` |
//! | List records | `GET` | `zones/{zoneId}/records` | - |
//! | Delete record | `DELETE` | `zones/{zoneId}/records/{recordId}` | - |
//!
//! Listings are expected as `{"data":[...]}`.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use acme_custom_dns::{CustomDnsOptions, DnsProvider, Result, create_provider};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let options = CustomDnsOptions::new("https://dns.example.net/api/", "your-api-key")
//!         .with_api_key_header_name("X-Api-Key")
//!         .with_propagation_seconds(120);
//!     let provider = create_provider(&options)?;
//!
//!     let zones = provider.list_zones().await?;
//!     let zone = &zones[0];
//!
//!     provider
//!         .create_txt_record(zone, "_acme-challenge", &["token-digest".to_string()])
//!         .await?;
//!
//!     // Wait provider.propagation_seconds(), let the CA validate, then clean up
//!     provider.delete_txt_record(zone, "_acme-challenge").await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ProviderError>`](ProviderError):
//!
//! - [`ProviderError::HttpStatus`] — non-success status, with the raw body
//! - [`ProviderError::ParseError`] — unexpected listing JSON, with the raw body
//! - [`ProviderError::NetworkError`] / [`ProviderError::Timeout`] — transport failures
//!
//! Deleting a record that does not exist is not an error.
//!
//! ## Diagnostics
//!
//! Created records, TXT records seen during deletion and "nothing to delete"
//! outcomes are reported to a [`DiagnosticSink`]. The default
//! [`LogDiagnostics`] writes through the `log` facade.

mod config;
mod diagnostics;
mod error;
mod factory;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

// Re-export configuration
pub use config::{
    ConfigError, CustomDnsOptions, DEFAULT_API_KEY_HEADER_NAME, DEFAULT_PROPAGATION_SECONDS,
    ENV_PREFIX,
};

// Re-export diagnostics
pub use diagnostics::{Diagnostic, LogDiagnostics};

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export factory functions
pub use factory::{create_provider, create_provider_with_diagnostics};

// Re-export traits
pub use traits::{DiagnosticSink, DnsProvider};

// Re-export types
pub use types::DnsZone;

// Re-export concrete provider
pub use providers::CustomDnsProvider;

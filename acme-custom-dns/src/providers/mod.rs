//! DNS Provider implementations

/// Shared utilities used by provider implementations.
pub(crate) mod common;

mod custom;

pub use custom::CustomDnsProvider;
pub(crate) use custom::PROVIDER_NAME;

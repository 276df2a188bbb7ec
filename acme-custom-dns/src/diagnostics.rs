//! Diagnostic events emitted by the provider
//!
//! These are observability side effects only; none of them affect the result
//! of an operation.

use crate::providers::PROVIDER_NAME;
use crate::traits::DiagnosticSink;
use crate::utils::log_sanitizer::truncate_for_log;

/// A diagnostic event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A TXT record was created; carries the raw response body.
    RecordCreated {
        zone: String,
        record_name: String,
        response_body: String,
    },
    /// A TXT record seen while looking for the record to delete.
    TxtRecordFound { name: String, text: String },
    /// No TXT record matched, so nothing was deleted.
    NothingToDelete { zone: String, record_name: String },
    /// The matching TXT record was deleted.
    RecordDeleted { zone: String, record_id: i64 },
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RecordCreated {
                zone,
                record_name,
                response_body,
            } => write!(
                f,
                "Created TXT record '{record_name}' in zone '{zone}', response: {}",
                truncate_for_log(response_body)
            ),
            Self::TxtRecordFound { name, text } => {
                write!(f, "TXT record: name='{name}', text='{text}'")
            }
            Self::NothingToDelete { zone, record_name } => write!(
                f,
                "TXT record '{record_name}' not found in zone '{zone}', nothing to delete."
            ),
            Self::RecordDeleted { zone, record_id } => {
                write!(f, "Deleted TXT record {record_id} from zone '{zone}'")
            }
        }
    }
}

/// Default sink writing through the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDiagnostics;

impl DiagnosticSink for LogDiagnostics {
    fn emit(&self, diagnostic: &Diagnostic) {
        match diagnostic {
            Diagnostic::TxtRecordFound { .. } => log::debug!("[{PROVIDER_NAME}] {diagnostic}"),
            _ => log::info!("[{PROVIDER_NAME}] {diagnostic}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_prefix_is_provider_name() {
        assert_eq!(PROVIDER_NAME, "Custom DNS");
    }

    #[test]
    fn nothing_to_delete_message() {
        let d = Diagnostic::NothingToDelete {
            zone: "example.com".into(),
            record_name: "_acme-challenge".into(),
        };
        assert_eq!(
            d.to_string(),
            "TXT record '_acme-challenge' not found in zone 'example.com', nothing to delete."
        );
    }

    #[test]
    fn record_created_truncates_long_body() {
        let d = Diagnostic::RecordCreated {
            zone: "example.com".into(),
            record_name: "_acme-challenge".into(),
            response_body: "x".repeat(1000),
        };
        assert!(d.to_string().contains("[truncated, total 1000 bytes]"));
    }
}

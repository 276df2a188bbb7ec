//! Custom DNS DnsProvider trait 实现

use async_trait::async_trait;

use crate::diagnostics::Diagnostic;
use crate::error::{ProviderError, Result};
use crate::providers::common::{normalize_domain_name, relative_to_full_name};
use crate::traits::DnsProvider;
use crate::types::DnsZone;

use super::{CreateTxtRecordBody, CustomDnsProvider, PROVIDER_NAME, RemoteRecord, RemoteZone};

/// Picks the TXT record to delete.
///
/// The first TXT record wins whose name, ignoring ASCII case and a trailing
/// dot, either equals `relative_record_name`, ends with it, or equals its
/// fully-qualified form under `zone_name`. The last two rules cover APIs that
/// return fully-qualified names for records created with a relative name.
/// Provider ordering decides between several matches.
pub(crate) fn find_txt_record<'a>(
    records: &'a [RemoteRecord],
    relative_record_name: &str,
    zone_name: &str,
) -> Option<&'a RemoteRecord> {
    let lowered_wanted = relative_record_name.to_ascii_lowercase();
    let wanted = normalize_domain_name(&lowered_wanted);
    let wanted_full = relative_to_full_name(wanted, &zone_name.to_ascii_lowercase());

    records.iter().find(|r| {
        if !r.is_txt() {
            return false;
        }
        let lowered = r.name.to_ascii_lowercase();
        let name = normalize_domain_name(&lowered);
        name == wanted || name.ends_with(wanted) || name == wanted_full
    })
}

#[async_trait]
impl DnsProvider for CustomDnsProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    fn propagation_seconds(&self) -> u32 {
        self.propagation_seconds
    }

    async fn list_zones(&self) -> Result<Vec<DnsZone>> {
        let zones: Vec<RemoteZone> = self.get_data(&["zones"]).await?;
        log::debug!("[{PROVIDER_NAME}] Found {} zone(s)", zones.len());
        Ok(zones.into_iter().map(DnsZone::from).collect())
    }

    async fn create_txt_record(
        &self,
        zone: &DnsZone,
        relative_record_name: &str,
        values: &[String],
    ) -> Result<()> {
        let Some((text, ignored)) = values.split_first() else {
            return Err(ProviderError::InvalidParameter {
                provider: PROVIDER_NAME.to_string(),
                param: "values".to_string(),
                detail: "at least one TXT value is required".to_string(),
            });
        };
        if !ignored.is_empty() {
            log::debug!(
                "[{PROVIDER_NAME}] Only the first TXT value is published, {} dropped",
                ignored.len()
            );
        }

        let body = CreateTxtRecordBody::new(relative_record_name, text);
        let response = self
            .post_json(&["zones", zone.id.as_str(), "records"], &body)
            .await?;

        self.diagnostics.emit(&Diagnostic::RecordCreated {
            zone: zone.name.clone(),
            record_name: relative_record_name.to_string(),
            response_body: response.body,
        });
        Ok(())
    }

    async fn delete_txt_record(&self, zone: &DnsZone, relative_record_name: &str) -> Result<()> {
        let records: Vec<RemoteRecord> = self
            .get_data(&["zones", zone.id.as_str(), "records"])
            .await?;

        for record in records.iter().filter(|r| r.is_txt()) {
            self.diagnostics.emit(&Diagnostic::TxtRecordFound {
                name: record.name.clone(),
                text: record.text.clone(),
            });
        }

        let Some(record) = find_txt_record(&records, relative_record_name, &zone.name) else {
            self.diagnostics.emit(&Diagnostic::NothingToDelete {
                zone: zone.name.clone(),
                record_name: relative_record_name.to_string(),
            });
            return Ok(());
        };

        let record_id = record.id.to_string();
        self.delete(&["zones", zone.id.as_str(), "records", record_id.as_str()])
            .await?;

        self.diagnostics.emit(&Diagnostic::RecordDeleted {
            zone: zone.name.clone(),
            record_id: record.id,
        });
        Ok(())
    }
}

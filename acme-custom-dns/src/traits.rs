use async_trait::async_trait;

use crate::diagnostics::Diagnostic;
use crate::error::Result;
use crate::types::DnsZone;

/// DNS-01 challenge provider Trait
///
/// The ACME orchestrator enumerates zones, creates the challenge TXT record,
/// waits `propagation_seconds`, validates, then deletes the record.
#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// 提供商显示名称
    fn name(&self) -> &str;

    /// Seconds to wait after record creation before validation.
    fn propagation_seconds(&self) -> u32;

    /// 获取账户下的所有 Zone（不分页）
    async fn list_zones(&self) -> Result<Vec<DnsZone>>;

    /// Creates a TXT record named `relative_record_name` under `zone`.
    ///
    /// Only the first element of `values` is published.
    async fn create_txt_record(
        &self,
        zone: &DnsZone,
        relative_record_name: &str,
        values: &[String],
    ) -> Result<()>;

    /// Deletes the TXT record named `relative_record_name` from `zone`.
    ///
    /// Succeeds without doing anything when no such record exists.
    async fn delete_txt_record(&self, zone: &DnsZone, relative_record_name: &str) -> Result<()>;
}

/// 诊断输出能力（可替换的日志后端）
pub trait DiagnosticSink: Send + Sync {
    fn emit(&self, diagnostic: &Diagnostic);
}

use serde::{Deserialize, Serialize};

/// A DNS zone owned by the account.
///
/// `id` is the decimal string form of the provider's numeric zone id and is
/// passed back unchanged when creating or deleting records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsZone {
    /// Provider zone id.
    pub id: String,
    /// Zone apex, e.g. `example.com`.
    pub name: String,
    /// Authoritative name servers reported by the provider.
    pub name_servers: Vec<String>,
}


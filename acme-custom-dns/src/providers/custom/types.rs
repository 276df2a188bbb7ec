//! Custom DNS API 类型定义

use serde::{Deserialize, Deserializer, Serialize};

use crate::types::DnsZone;

pub(crate) const TXT_RECORD_TYPE: &str = "TXT";
/// Every record this provider creates uses this TTL.
pub(crate) const TXT_RECORD_TTL: u32 = 3600;

/// Reads an explicit `null` as the type's default value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// `{ "data": [...] }` listing envelope
///
/// `data` is optional here so that a missing or `null` array can be reported
/// with the raw body instead of a generic serde message.
#[derive(Debug, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: Option<Vec<T>>,
}

/// Zone 结构（响应）
#[derive(Debug, Deserialize)]
pub struct RemoteZone {
    pub id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nameserver: String,
}

impl From<RemoteZone> for DnsZone {
    fn from(zone: RemoteZone) -> Self {
        Self {
            id: zone.id.to_string(),
            name: zone.name,
            name_servers: vec![zone.nameserver],
        }
    }
}

/// Record 结构（响应）
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteRecord {
    pub id: i64,
    #[serde(rename = "type")]
    pub record_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
}

impl RemoteRecord {
    pub fn is_txt(&self) -> bool {
        self.record_type == TXT_RECORD_TYPE
    }
}

/// TXT 记录创建请求体
#[derive(Debug, Serialize)]
pub struct CreateTxtRecordBody<'a> {
    #[serde(rename = "type")]
    pub record_type: &'static str,
    pub name: &'a str,
    pub text: &'a str,
    pub ttl: u32,
}

impl<'a> CreateTxtRecordBody<'a> {
    pub const fn new(name: &'a str, text: &'a str) -> Self {
        Self {
            record_type: TXT_RECORD_TYPE,
            name,
            text,
            ttl: TXT_RECORD_TTL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zone_maps_to_dns_zone() {
        let json = r#"{"data":[{"id":7,"name":"example.com","nameserver":"ns1.example.com"}]}"#;
        let envelope: DataEnvelope<RemoteZone> =
            serde_json::from_str(json).unwrap_or(DataEnvelope { data: None });
        let zones: Vec<DnsZone> = envelope
            .data
            .unwrap_or_default()
            .into_iter()
            .map(DnsZone::from)
            .collect();

        assert_eq!(
            zones,
            vec![DnsZone {
                id: "7".into(),
                name: "example.com".into(),
                name_servers: vec!["ns1.example.com".into()],
            }]
        );
    }

    #[test]
    fn zone_id_keeps_decimal_form() {
        for id in [0_i64, 1, 42, 2_147_483_647, 9_007_199_254_740_993] {
            let zone = DnsZone::from(RemoteZone {
                id,
                name: "example.com".into(),
                nameserver: "ns1.example.com".into(),
            });
            assert_eq!(zone.id.parse::<i64>().ok(), Some(id));
            assert_eq!(zone.id, id.to_string());
        }
    }

    #[test]
    fn missing_data_decodes_as_none() {
        let envelope: Result<DataEnvelope<RemoteZone>, _> = serde_json::from_str(r#"{"zones":[]}"#);
        assert!(matches!(envelope, Ok(DataEnvelope { data: None })));
    }

    #[test]
    fn null_nameserver_decodes_as_empty() {
        let json = r#"{"data":[{"id":7,"name":"example.com","nameserver":null}]}"#;
        let envelope: Result<DataEnvelope<RemoteZone>, _> = serde_json::from_str(json);
        let zone = envelope
            .ok()
            .and_then(|e| e.data)
            .and_then(|mut zones| zones.pop())
            .map(DnsZone::from);
        assert_eq!(zone.map(|z| z.name_servers), Some(vec![String::new()]));
    }

    #[test]
    fn null_record_fields_decode_as_empty() {
        let json = r#"{"data":[{"id":1,"type":"A","name":null,"text":null}]}"#;
        let envelope: Result<DataEnvelope<RemoteRecord>, _> = serde_json::from_str(json);
        let record = envelope.ok().and_then(|e| e.data).and_then(|mut r| r.pop());
        assert!(record.is_some_and(|r| r.name.is_empty() && r.text.is_empty()));
    }

    #[test]
    fn create_body_shape() {
        let body = CreateTxtRecordBody::new("_acme-challenge", "abc123");
        let json = serde_json::to_value(&body).unwrap_or_default();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "TXT",
                "name": "_acme-challenge",
                "text": "abc123",
                "ttl": 3600
            })
        );
    }

    #[test]
    fn record_type_is_case_sensitive() {
        let record = RemoteRecord {
            id: 1,
            record_type: "txt".into(),
            name: "_acme-challenge".into(),
            text: String::new(),
        };
        assert!(!record.is_txt());
    }
}

//! Endpoint record and its ordering.

use serde::{Deserialize, Deserializer};

use super::Phase;

/// Sort key assigned to names without a numeric suffix.
pub const NO_SORT_KEY: u64 = u64::MAX;

/// One private-link egress endpoint as reported by the inventory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EndpointRecord {
    #[serde(default, deserialize_with = "nullable_string")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub id: String,
    #[serde(default, deserialize_with = "nullable_phase")]
    pub phase: Phase,
    #[serde(
        default,
        rename = "gcp_private_service_connect_endpoint_ip_address",
        alias = "ip_address",
        alias = "ipAddress",
        deserialize_with = "nullable_string"
    )]
    pub ip_address: String,
    #[serde(
        default,
        rename = "gcp_private_service_connect_endpoint_connection_id",
        alias = "connection_id",
        alias = "connectionId",
        deserialize_with = "nullable_string"
    )]
    pub connection_id: String,
}

impl EndpointRecord {
    pub fn sort_key(&self) -> u64 {
        name_sort_key(&self.name)
    }
}

/// Numeric suffix after the last `-` of a name, or [`NO_SORT_KEY`].
///
/// `ep-10` → 10, `ep-a` → NO_SORT_KEY, `other` → NO_SORT_KEY.
pub fn name_sort_key(name: &str) -> u64 {
    name.rsplit_once('-')
        .and_then(|(_, suffix)| suffix.parse::<u64>().ok())
        .unwrap_or(NO_SORT_KEY)
}

/// Sorts records ascending by name suffix. Stable, so ties keep fetch order.
pub fn sort_records(records: &mut [EndpointRecord]) {
    records.sort_by_key(EndpointRecord::sort_key);
}

/// Decodes the JSON array printed by the inventory CLI.
pub fn decode_records(bytes: &[u8]) -> serde_json::Result<Vec<EndpointRecord>> {
    serde_json::from_slice(bytes)
}

fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn nullable_phase<'de, D>(deserializer: D) -> Result<Phase, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?
        .map(Phase::from)
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> EndpointRecord {
        EndpointRecord {
            name: name.to_string(),
            ..EndpointRecord::default()
        }
    }

    #[test]
    fn sort_key_uses_last_dash_suffix() {
        assert_eq!(name_sort_key("ep-3"), 3);
        assert_eq!(name_sort_key("my-ep-42"), 42);
        assert_eq!(name_sort_key("ep-"), NO_SORT_KEY);
        assert_eq!(name_sort_key("ep-x1"), NO_SORT_KEY);
        assert_eq!(name_sort_key("other"), NO_SORT_KEY);
    }

    #[test]
    fn sort_is_numeric_with_unmatched_last() {
        let mut records = vec![named("ep-3"), named("ep-1"), named("ep-10"), named("other")];
        sort_records(&mut records);

        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["ep-1", "ep-3", "ep-10", "other"]);
    }

    #[test]
    fn sort_keeps_fetch_order_on_ties() {
        let mut records = vec![named("beta"), named("ep-2"), named("alpha")];
        sort_records(&mut records);

        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["ep-2", "beta", "alpha"]);
    }

    #[test]
    fn decode_cli_output() {
        let json = br#"[
            {
                "id": "ap-abc123",
                "name": "egress-7",
                "phase": "READY",
                "gcp_private_service_connect_endpoint_ip_address": "10.0.0.7",
                "gcp_private_service_connect_endpoint_connection_id": "1234567890",
                "environment": "env-xyz"
            },
            {
                "id": "ap-def456",
                "name": "egress-8"
            }
        ]"#;

        let records = decode_records(json).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].phase, Phase::Ready);
        assert_eq!(records[0].ip_address, "10.0.0.7");
        assert_eq!(records[0].connection_id, "1234567890");
        assert_eq!(records[1].phase.label(), "UNKNOWN");
        assert!(records[1].ip_address.is_empty());
    }

    #[test]
    fn decode_accepts_short_field_names_and_nulls() {
        let json = br#"[{"name": "ep-1", "id": null, "phase": null, "ipAddress": "10.1.1.1", "connection_id": "c-1"}]"#;

        let records = decode_records(json).unwrap();
        assert_eq!(records[0].id, "");
        assert_eq!(records[0].phase, Phase::default());
        assert_eq!(records[0].ip_address, "10.1.1.1");
        assert_eq!(records[0].connection_id, "c-1");
    }

    #[test]
    fn decode_rejects_garbage() {
        assert!(decode_records(b"").is_err());
        assert!(decode_records(b"not json").is_err());
        assert!(decode_records(br#"{"name": "ep-1"}"#).is_err());
    }
}

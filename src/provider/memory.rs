//! An in-memory implementation of the [`DnsProvider`][super::DnsProvider]
//! trait.
//!
//! Accepts every upsert and keeps the latest [`RecordChange`] per
//! `(zone, name)` pair. Serves as the dry-run backend (`DDNSGW_MODE=dry-run`)
//! and as the fake provider in tests.

use crate::error::Error;
use crate::provider::{DnsProvider, RecordChange};
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default, Debug)]
pub struct InMemoryDns {
    records: RwLock<HashMap<(String, String), RecordChange>>,
}

impl InMemoryDns {
    /// Get the last change upserted for `name` in zone `zone_id`, if any.
    pub async fn record(&self, zone_id: &str, name: &str) -> Option<RecordChange> {
        self.records
            .read()
            .await
            .get(&(zone_id.to_string(), name.to_string()))
            .cloned()
    }

    /// Number of distinct records upserted so far.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl DnsProvider for InMemoryDns {
    async fn upsert_a(&self, zone_id: &str, change: &RecordChange) -> Result<(), Error> {
        tracing::info!(
            "dry-run upsert: zone {} A {} -> {} (ttl {})",
            zone_id,
            change.name,
            change.value,
            change.ttl
        );
        self.records
            .write()
            .await
            .insert((zone_id.to_string(), change.name.clone()), change.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn upsert_replaces_existing_record() {
        let dns = InMemoryDns::default();
        dns.upsert_a("Z1", &RecordChange::upsert_a("a.example.com", "1.1.1.1"))
            .await
            .unwrap();
        dns.upsert_a("Z1", &RecordChange::upsert_a("a.example.com", "2.2.2.2"))
            .await
            .unwrap();

        assert_eq!(dns.len().await, 1);
        let record = dns.record("Z1", "a.example.com.").await.unwrap();
        assert_eq!(record.value, "2.2.2.2");
    }

    #[tokio::test]
    async fn records_are_scoped_by_zone() {
        let dns = InMemoryDns::default();
        dns.upsert_a("Z1", &RecordChange::upsert_a("a.example.com", "1.1.1.1"))
            .await
            .unwrap();

        assert!(dns.record("Z2", "a.example.com.").await.is_none());
        assert!(!dns.is_empty().await);
    }
}

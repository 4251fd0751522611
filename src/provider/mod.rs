//! DNS record upsert backends.
//!
//! The update handler talks to DNS through the [`DnsProvider`] trait: one
//! operation, create-or-replace the `A` record for an FQDN in a zone. Two
//! implementations are provided. [`cloudflare::CloudflareDns`] performs the
//! upsert against the Cloudflare v4 API. [`memory::InMemoryDns`] records
//! upserts in a map, backing dry-run mode and tests.

use crate::error::Error;
use std::sync::Arc;

pub mod cloudflare;
pub mod memory;

#[allow(clippy::module_name_repetitions)]
pub use cloudflare::CloudflareDns;
#[allow(clippy::module_name_repetitions)]
pub use memory::InMemoryDns;

/// TTL applied to every upserted record, in seconds.
pub const RECORD_TTL_SECS: u32 = 300;

/// `DynDnsProvider` is a type alias for a [`DnsProvider`] shared across
/// request handlers through an [`Arc`]. Providers are stateless, so no lock
/// is involved.
#[allow(clippy::module_name_repetitions)]
pub type DynDnsProvider = Arc<dyn DnsProvider + Send + Sync>;

/// A single pending `A`-record change: create or replace `name` with the
/// address in `value`. Built per authorized request and discarded after the
/// provider call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordChange {
    /// Fully-qualified record name with exactly one trailing dot.
    pub name: String,
    /// IP address literal, passed through to the provider verbatim.
    pub value: String,
    /// Record TTL in seconds, fixed at [`RECORD_TTL_SECS`].
    pub ttl: u32,
}

impl RecordChange {
    /// Build an `A`-record upsert for `hostname` pointing at `ip`.
    ///
    /// The hostname is canonicalized to FQDN form: any trailing dots are
    /// stripped and a single one appended, so `example.com`, `example.com.`
    /// and `example.com..` all name `example.com.`.
    #[must_use]
    pub fn upsert_a(hostname: &str, ip: &str) -> Self {
        Self {
            name: format!("{}.", hostname.trim_end_matches('.')),
            value: ip.to_string(),
            ttl: RECORD_TTL_SECS,
        }
    }
}

/// An async trait describing the one capability ddnsgw needs from a DNS
/// provider: an idempotent create-or-replace of an `A` record in a zone.
///
/// Implementations make a single attempt per call. Retry and backoff are
/// deliberately absent; a failure propagates to the HTTP layer and the
/// client decides whether to try again.
#[async_trait::async_trait]
pub trait DnsProvider {
    /// Create or replace the `A` record for `change.name` in zone `zone_id`.
    async fn upsert_a(&self, zone_id: &str, change: &RecordChange) -> Result<(), Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_trailing_dot() {
        let change = RecordChange::upsert_a("example.com", "1.2.3.4");
        assert_eq!(change.name, "example.com.");
    }

    #[test]
    fn keeps_single_trailing_dot() {
        let change = RecordChange::upsert_a("example.com.", "1.2.3.4");
        assert_eq!(change.name, "example.com.");
    }

    #[test]
    fn collapses_multiple_trailing_dots() {
        let change = RecordChange::upsert_a("example.com..", "1.2.3.4");
        assert_eq!(change.name, "example.com.");
    }

    #[test]
    fn fixed_ttl_and_verbatim_value() {
        let change = RecordChange::upsert_a("home.example.org", "203.0.113.9");
        assert_eq!(change.ttl, 300);
        assert_eq!(change.value, "203.0.113.9");
    }
}

//! ddnsgw
//!
//! A small dynamic-DNS update gateway in the [dyndns2] style, suitable as a
//! self-hosted endpoint for [ddclient] and friends.
//!
//! Clients `GET /nic/update?hostname=<fqdn>&myip=<ip>` with HTTP Basic
//! credentials. Authorized requests upsert an `A` record (TTL 300) for the
//! hostname in the configured DNS zone, via the [Cloudflare v4 API][cf-api] or
//! an in-memory backend in dry-run mode.
//!
//! [dyndns2]: https://help.dyn.com/remote-access-api/perform-update/
//! [ddclient]: https://ddclient.net
//! [cf-api]: https://developers.cloudflare.com/api/
//!
#![warn(clippy::pedantic)]

pub mod api;
pub mod config;
pub mod error;
pub mod provider;

pub use api::{new as new_http, router};
pub use config::{Config, SharedConfig};
pub use provider::{CloudflareDns, DnsProvider, DynDnsProvider, InMemoryDns, RecordChange};

//! HTTP API for dynamic DNS updates.
//!
//! # API Endpoints
//!
//! ## `/healthcheck` (GET)
//!
//!   Returns HTTP 200 (OK) and the JSON body `{"ok":"healthy"}` when the
//!   service is operational.
//!
//! ## `/update`, `/nic/update` (GET)
//!
//!   The dyndns2-style update endpoint. `/nic/update` is the path ddclient
//!   uses; both routes behave identically.
//!
//!   Expects HTTP Basic credentials and two query parameters:
//!
//!   ```text
//!   GET /nic/update?hostname=home.example.org&myip=203.0.113.9
//!   Authorization: Basic <base64(username:password)>
//!   ```
//!
//!   The `Authorization` header value must match the configured credentials
//!   byte-for-byte; anything else (including a missing header) yields
//!   HTTP 403. Authorized requests missing `hostname` or `myip` yield
//!   HTTP 400. Otherwise the hostname is canonicalized to FQDN form and an
//!   `A` record with TTL 300 is upserted in the configured zone, yielding
//!   HTTP 200.
//!
//!   All responses carry `Content-Type: text/plain` and an empty body, which
//!   is what dyndns2 clients expect to see from this family of endpoints.

mod api_error;
mod model;
mod routes;
pub mod server;

pub use server::{new, router};

//! A Cloudflare-backed implementation of the
//! [`DnsProvider`][super::DnsProvider] trait.
//!
//! Upserts are expressed against the [Cloudflare v4 API][cf-api] as a record
//! lookup by name followed by a `PUT` (record exists) or `POST` (record
//! absent). Each upsert is a single attempt; errors propagate to the caller
//! without retries.
//!
//! [cf-api]: https://developers.cloudflare.com/api/

use crate::error::Error;
use crate::provider::{DnsProvider, RecordChange};
use serde_json::{json, Value};
use std::fmt;
use std::time::Duration;

const CLOUDFLARE_API_BASE: &str = "https://api.cloudflare.com/client/v4";

/// Outbound HTTP timeout, independent of the inbound request timeout.
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

#[allow(clippy::module_name_repetitions)]
pub struct CloudflareDns {
    api_token: String,
    base_url: String,
    client: reqwest::Client,
}

impl CloudflareDns {
    /// Create a provider talking to the public Cloudflare API.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyApiToken`] for a blank token and
    /// [`Error::ProviderHttp`] if the HTTP client can't be built.
    pub fn new(api_token: impl Into<String>) -> Result<Self, Error> {
        Self::with_base_url(api_token, CLOUDFLARE_API_BASE)
    }

    /// Create a provider with a custom API base URL. Tests point this at a
    /// local mock server.
    ///
    /// # Errors
    ///
    /// See [`CloudflareDns::new`].
    pub fn with_base_url(
        api_token: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, Error> {
        let api_token = api_token.into();
        if api_token.is_empty() {
            return Err(Error::EmptyApiToken);
        }
        let client = reqwest::Client::builder().timeout(HTTP_TIMEOUT).build()?;
        Ok(Self {
            api_token,
            base_url: base_url.into(),
            client,
        })
    }

    /// Find the ID of the `A` record named `name` in `zone_id`, if one exists.
    /// Cloudflare answers a name filter that matches nothing with HTTP 200 and
    /// an empty result list.
    async fn find_record_id(&self, zone_id: &str, name: &str) -> Result<Option<String>, Error> {
        let url = format!("{}/zones/{}/dns_records", self.base_url, zone_id);
        let response = self
            .client
            .get(&url)
            .query(&[("name", name), ("type", "A")])
            .bearer_auth(&self.api_token)
            .send()
            .await?;
        let body: Value = checked(response).await?.json().await?;

        let records = body["result"]
            .as_array()
            .ok_or_else(|| Error::ProviderResponse("\"result\" is not an array".to_string()))?;
        records
            .first()
            .map(|record| {
                record["id"]
                    .as_str()
                    .map(ToString::to_string)
                    .ok_or_else(|| {
                        Error::ProviderResponse("record \"id\" is not a string".to_string())
                    })
            })
            .transpose()
    }
}

#[async_trait::async_trait]
impl DnsProvider for CloudflareDns {
    async fn upsert_a(&self, zone_id: &str, change: &RecordChange) -> Result<(), Error> {
        // Cloudflare names records without the trailing dot.
        let name = change.name.trim_end_matches('.');
        let payload = json!({
            "type": "A",
            "name": name,
            "content": change.value,
            "ttl": change.ttl,
        });

        let response = match self.find_record_id(zone_id, name).await? {
            Some(record_id) => {
                tracing::debug!("replacing record {record_id} for {name}");
                let url = format!("{}/zones/{}/dns_records/{}", self.base_url, zone_id, record_id);
                self.client
                    .put(&url)
                    .bearer_auth(&self.api_token)
                    .json(&payload)
                    .send()
                    .await?
            }
            None => {
                tracing::debug!("creating record for {name}");
                let url = format!("{}/zones/{}/dns_records", self.base_url, zone_id);
                self.client
                    .post(&url)
                    .bearer_auth(&self.api_token)
                    .json(&payload)
                    .send()
                    .await?
            }
        };
        checked(response).await?;
        Ok(())
    }
}

// The API token stays out of log output.
impl fmt::Debug for CloudflareDns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CloudflareDns")
            .field("api_token", &"<REDACTED>")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

async fn checked(response: reqwest::Response) -> Result<reqwest::Response, Error> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let detail = response.text().await.unwrap_or_default();
    Err(Error::ProviderApi {
        status: status.as_u16(),
        detail,
    })
}

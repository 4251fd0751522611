use crate::error::Error;
use crate::provider::RecordChange;
use serde::Deserialize;

/// Query parameters of an update request. Absent parameters deserialize to
/// empty strings, matching the "absent is empty" contract of the endpoint.
#[derive(Deserialize, Debug, Clone, Default, Eq, PartialEq)]
pub(super) struct UpdateQuery {
    #[serde(default)]
    pub hostname: String,
    #[serde(default)]
    pub myip: String,
}

impl UpdateQuery {
    /// Validate the pair and turn it into a [`RecordChange`]. Either value
    /// being empty is a bad request; no change is constructed.
    pub(super) fn into_change(self) -> Result<RecordChange, Error> {
        if self.hostname.is_empty() {
            return Err(Error::MissingParam("hostname"));
        }
        if self.myip.is_empty() {
            return Err(Error::MissingParam("myip"));
        }
        Ok(RecordChange::upsert_a(&self.hostname, &self.myip))
    }
}

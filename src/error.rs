//! Error types.

/// Error enumerates the possible ddnsgw error states.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Returned when the `Authorization` header of an update request does not
    /// match the configured credentials byte-for-byte. A request without an
    /// `Authorization` header never matches.
    #[error("authorization header does not match the configured credentials")]
    AuthForbidden,

    /// Returned when an authorized update request is missing a required query
    /// parameter, or supplies it with an empty value.
    #[error("missing or empty query parameter \"{0}\"")]
    MissingParam(&'static str),

    /// Returned when a required environment variable is not set at startup.
    #[error("required environment variable {0} is not set")]
    MissingEnv(&'static str),

    /// Returned when an environment variable is set but can't be parsed.
    #[error("environment variable {0} has an invalid value: {1}")]
    InvalidEnv(&'static str, String),

    /// Returned when the DNS provider API token is configured as an empty
    /// string. The provider refuses to start rather than fail on first use.
    #[error("DNS provider API token must not be empty")]
    EmptyApiToken,

    /// Returned when an HTTP request to the DNS provider fails outright
    /// (connect error, timeout, malformed response body).
    #[error("DNS provider request failed")]
    ProviderHttp(#[from] reqwest::Error),

    /// Returned when the DNS provider answers with a non-success HTTP status.
    /// Not retried: the request fails and the client may try again.
    #[error("DNS provider returned HTTP {status}: {detail}")]
    ProviderApi { status: u16, detail: String },

    /// Returned when a DNS provider response is well-formed JSON but missing
    /// the fields we rely on.
    #[error("unexpected DNS provider response: {0}")]
    ProviderResponse(String),
}

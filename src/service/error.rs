use thiserror::Error;

/// Errors talking to the platform's HTTP services.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request could not be sent or no response arrived.
    #[error("Request to '{url}' failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-success status.
    #[error("'{url}' returned status {status}")]
    Status { url: String, status: u16 },

    /// The response body did not have the expected shape.
    #[error("Failed to decode response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid service URL '{0}'")]
    InvalidUrl(String),

    /// The operation needs a persisted article.
    #[error("Article has no id")]
    MissingId,
}

impl ServiceError {
    /// True when the service reported that the resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ServiceError::Status { status: 404, .. })
    }
}

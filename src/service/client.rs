use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;

use crate::config::ServiceConfig;
use crate::service::error::ServiceError;

/// HTTP client for the publishing platform API.
///
/// One instance serves search, artwork lookups and article persistence.
#[derive(Debug, Clone)]
pub struct PlatformClient {
    http: Client,
    base_url: String,
}

impl PlatformClient {
    pub fn new(config: &ServiceConfig) -> Result<Self, ServiceError> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|_| ServiceError::InvalidUrl(base_url.clone()))?;

        let http = Client::builder()
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .build()
            .map_err(|e| ServiceError::Request {
                url: base_url.clone(),
                source: e,
            })?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API resource. Each segment is percent-encoded,
    /// so ids cannot change the request target.
    pub(crate) fn resource_url(&self, segments: &[&str]) -> Result<Url, ServiceError> {
        let mut url =
            Url::parse(&self.base_url).map_err(|_| ServiceError::InvalidUrl(self.base_url.clone()))?;
        url.path_segments_mut()
            .map_err(|_| ServiceError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub(crate) fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.http.request(method, url)
    }

    /// Send a request and fail on non-success status.
    pub(crate) async fn send(&self, request: RequestBuilder, url: &Url) -> Result<Response, ServiceError> {
        let response = request.send().await.map_err(|e| ServiceError::Request {
            url: url.to_string(),
            source: e,
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(%url, status = status.as_u16(), "Service returned error status");
            return Err(ServiceError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ServiceError> {
        let response = self.send(self.request(Method::GET, url.clone()), &url).await?;
        decode(response, &url).await
    }
}

pub(crate) async fn decode<T: DeserializeOwned>(response: Response, url: &Url) -> Result<T, ServiceError> {
    response.json::<T>().await.map_err(|e| ServiceError::Decode {
        url: url.to_string(),
        source: e,
    })
}

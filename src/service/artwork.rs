use async_trait::async_trait;

use crate::article::ArtworkRecord;
use crate::service::client::PlatformClient;
use crate::service::error::ServiceError;

/// Lookup of artwork records by id.
#[async_trait]
pub trait ArtworkSource: Send + Sync {
    async fn fetch_artwork(&self, id: &str) -> Result<ArtworkRecord, ServiceError>;
}

#[async_trait]
impl ArtworkSource for PlatformClient {
    async fn fetch_artwork(&self, id: &str) -> Result<ArtworkRecord, ServiceError> {
        let url = self.resource_url(&["api", "artworks", id])?;
        tracing::debug!(id, "Fetching artwork");
        self.get_json(url).await
    }
}

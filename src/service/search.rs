use crate::service::client::PlatformClient;
use crate::service::error::ServiceError;
use crate::ui::images::search::{artwork_suggestions, ArtworkSuggestion, SearchEnvelope};

impl PlatformClient {
    /// Run a search and return the raw envelope.
    pub async fn search(&self, query: &str) -> Result<SearchEnvelope, ServiceError> {
        let mut url = self.resource_url(&["api", "search"])?;
        url.query_pairs_mut().append_pair("q", query);

        tracing::debug!(query, "Searching");
        self.get_json(url).await
    }

    /// Search and keep artwork hits only.
    pub async fn search_artworks(&self, query: &str) -> Result<Vec<ArtworkSuggestion>, ServiceError> {
        let envelope = self.search(query).await?;
        let suggestions = artwork_suggestions(&envelope);
        tracing::debug!(
            query,
            hits = envelope.embedded.results.len(),
            artworks = suggestions.len(),
            "Search finished"
        );
        Ok(suggestions)
    }
}

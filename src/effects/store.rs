use async_trait::async_trait;

use crate::article::Article;
use crate::service::ServiceError;

/// Persistence collaborator for articles.
///
/// Returns the stored article so callers that do await can pick up
/// server-assigned fields such as the id.
#[async_trait]
pub trait ArticleStore: Send + Sync {
    async fn save(&self, article: &Article) -> Result<Article, ServiceError>;

    async fn destroy(&self, article: &Article) -> Result<(), ServiceError>;
}

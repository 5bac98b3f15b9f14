use async_trait::async_trait;
use reqwest::Method;

use crate::article::Article;
use crate::effects::ArticleStore;
use crate::service::client::{decode, PlatformClient};
use crate::service::error::ServiceError;

impl PlatformClient {
    pub async fn fetch_article(&self, id: &str) -> Result<Article, ServiceError> {
        let url = self.resource_url(&["api", "articles", id])?;
        self.get_json(url).await
    }
}

/// New articles are created with `POST /api/articles`; existing ones are
/// replaced with `PUT /api/articles/<id>`.
#[async_trait]
impl ArticleStore for PlatformClient {
    async fn save(&self, article: &Article) -> Result<Article, ServiceError> {
        let (method, url) = match article.id.as_deref() {
            Some(id) => (Method::PUT, self.resource_url(&["api", "articles", id])?),
            None => (Method::POST, self.resource_url(&["api", "articles"])?),
        };

        let request = self.request(method, url.clone()).json(article);
        let response = self.send(request, &url).await?;
        decode(response, &url).await
    }

    async fn destroy(&self, article: &Article) -> Result<(), ServiceError> {
        let id = article.id.as_deref().ok_or(ServiceError::MissingId)?;
        let url = self.resource_url(&["api", "articles", id])?;

        self.send(self.request(Method::DELETE, url.clone()), &url)
            .await?;
        Ok(())
    }
}

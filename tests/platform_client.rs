mod common;

use articledesk::article::Article;
use articledesk::config::ServiceConfig;
use articledesk::effects::ArticleStore;
use articledesk::service::{ArtworkSource, PlatformClient, ServiceError};
use common::mock_service::{MockResponse, MockService};
use common::{artwork_record, feature_article};
use serde_json::json;

fn client_for(mock: &MockService) -> PlatformClient {
    let config = ServiceConfig {
        base_url: mock.base_url(),
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
    };
    PlatformClient::new(&config).unwrap()
}

fn search_body() -> serde_json::Value {
    json!({
        "total_count": 2,
        "_embedded": {
            "results": [
                {
                    "type": "artwork",
                    "title": "Stripes",
                    "_links": {
                        "self": {"href": "https://api.example/api/artworks/564be09ab202a319e90000e2"},
                        "thumbnail": {"href": "https://img.example/thumb.jpg"}
                    }
                },
                {
                    "type": "profile",
                    "title": "Gallery X",
                    "_links": {"self": {"href": "https://api.example/api/profiles/gallery-x"}}
                }
            ]
        }
    })
}

#[tokio::test]
async fn search_sends_query_and_filters_artworks() {
    let mock = MockService::start().await;
    mock.enqueue_response(MockResponse::json(search_body())).await;

    let client = client_for(&mock);
    let suggestions = client.search_artworks("chip hughes").await.unwrap();

    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].id, "564be09ab202a319e90000e2");

    let requests = mock.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/api/search");
    assert_eq!(requests[0].query.as_deref(), Some("q=chip+hughes"));
}

#[tokio::test]
async fn search_keeps_raw_envelope() {
    let mock = MockService::start().await;
    mock.enqueue_response(MockResponse::json(search_body())).await;

    let envelope = client_for(&mock).search("stripes").await.unwrap();
    assert_eq!(envelope.embedded.results.len(), 2);
}

#[tokio::test]
async fn search_tolerates_hits_without_links() {
    let mock = MockService::start().await;
    let mut body = search_body();
    body["_embedded"]["results"]
        .as_array_mut()
        .unwrap()
        .push(json!({"type": "tag", "title": "Ceramics"}));
    mock.enqueue_response(MockResponse::json(body)).await;

    let suggestions = client_for(&mock).search_artworks("ceramics").await.unwrap();
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].title.as_deref(), Some("Stripes"));
}

#[tokio::test]
async fn search_error_status_is_reported() {
    let mock = MockService::start().await;
    mock.enqueue_response(MockResponse::error(503, "down")).await;

    let err = client_for(&mock).search("stripes").await.unwrap_err();
    assert!(matches!(err, ServiceError::Status { status: 503, .. }));
}

#[tokio::test]
async fn fetch_artwork_decodes_record() {
    let mock = MockService::start().await;
    let record = artwork_record("564be09ab202a319e90000e2");
    mock.enqueue_response(MockResponse::json(serde_json::to_value(&record).unwrap()))
        .await;

    let fetched = client_for(&mock)
        .fetch_artwork("564be09ab202a319e90000e2")
        .await
        .unwrap();
    assert_eq!(fetched, record);

    let requests = mock.captured_requests().await;
    assert_eq!(requests[0].path, "/api/artworks/564be09ab202a319e90000e2");
}

#[tokio::test]
async fn fetch_artwork_not_found() {
    let mock = MockService::start().await;
    mock.enqueue_response(MockResponse::error(404, "Artwork Not Found"))
        .await;

    let err = client_for(&mock).fetch_artwork("nope").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn fetch_artwork_bad_body_is_decode_error() {
    let mock = MockService::start().await;
    mock.enqueue_response(MockResponse::json(json!({"title": "no id"})))
        .await;

    let err = client_for(&mock).fetch_artwork("x").await.unwrap_err();
    assert!(matches!(err, ServiceError::Decode { .. }));
}

#[tokio::test]
async fn save_existing_article_puts() {
    let mock = MockService::start().await;
    let article = feature_article();
    mock.enqueue_response(MockResponse::json(serde_json::to_value(&article).unwrap()))
        .await;

    let saved = client_for(&mock).save(&article).await.unwrap();
    assert_eq!(saved.id, article.id);

    let requests = mock.captured_requests().await;
    assert_eq!(requests[0].method, "PUT");
    assert_eq!(requests[0].path, "/api/articles/594a7e2254c37f00177c0ea9");
    assert_eq!(requests[0].json()["title"], article.title);
}

#[tokio::test]
async fn fetched_article_saves_back_unchanged() {
    let mock = MockService::start().await;
    let stored = json!({
        "id": "594a7e2254c37f00177c0ea9",
        "title": "Callouts",
        "published": true,
        "layout": "standard",
        "sections": [
            {"type": "callout", "text": "Read more", "article": "abc"},
            {
                "type": "video",
                "url": "https://video.example/1",
                "layout": "column_width",
                "cover_image_url": "https://img.example/cover.jpg"
            }
        ]
    });
    mock.enqueue_response(MockResponse::json(stored.clone())).await;
    mock.enqueue_response(MockResponse::json(stored.clone())).await;

    let client = client_for(&mock);
    let article = client.fetch_article("594a7e2254c37f00177c0ea9").await.unwrap();
    client.save(&article).await.unwrap();

    let requests = mock.captured_requests().await;
    assert_eq!(requests[1].method, "PUT");
    assert_eq!(requests[1].json(), stored);
}

#[tokio::test]
async fn ids_are_encoded_as_one_path_segment() {
    let mock = MockService::start().await;
    mock.enqueue_response(MockResponse::default()).await;
    mock.enqueue_response(MockResponse::error(404, "Artwork Not Found"))
        .await;

    let client = client_for(&mock);
    client
        .destroy(&Article::new("Odd").with_id("a/b?c"))
        .await
        .unwrap();
    client.fetch_artwork("x#y").await.unwrap_err();

    let requests = mock.captured_requests().await;
    assert_eq!(requests[0].method, "DELETE");
    assert_eq!(requests[0].path, "/api/articles/a%2Fb%3Fc");
    assert!(requests[0].query.is_none());
    assert_eq!(requests[1].path, "/api/artworks/x%23y");
}

#[tokio::test]
async fn save_new_article_posts() {
    let mock = MockService::start().await;
    mock.enqueue_response(MockResponse::json(json!({"id": "abc123", "title": "Draft"})))
        .await;

    let saved = client_for(&mock).save(&Article::new("Draft")).await.unwrap();
    assert_eq!(saved.id.as_deref(), Some("abc123"));

    let requests = mock.captured_requests().await;
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/api/articles");
    assert!(requests[0].json().get("id").is_none());
}

#[tokio::test]
async fn destroy_deletes_by_id() {
    let mock = MockService::start().await;
    client_for(&mock).destroy(&feature_article()).await.unwrap();

    let requests = mock.captured_requests().await;
    assert_eq!(requests[0].method, "DELETE");
    assert_eq!(requests[0].path, "/api/articles/594a7e2254c37f00177c0ea9");
}

#[tokio::test]
async fn destroy_unsaved_article_fails_without_request() {
    let mock = MockService::start().await;
    let err = client_for(&mock)
        .destroy(&Article::new("Never saved"))
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::MissingId));
    assert!(mock.captured_requests().await.is_empty());
}

#[tokio::test]
async fn fetch_article_round_trips_extra_fields() {
    let mock = MockService::start().await;
    mock.enqueue_response(MockResponse::json(json!({
        "id": "594a7e2254c37f00177c0ea9",
        "title": "Feature",
        "published": true,
        "layout": "feature",
        "sections": []
    })))
    .await;

    let article = client_for(&mock)
        .fetch_article("594a7e2254c37f00177c0ea9")
        .await
        .unwrap();
    assert!(article.published);
    assert_eq!(article.extra["layout"], "feature");
}

//! Shared test utilities and fakes for the injected capabilities.

#![allow(dead_code, unused_imports)]

pub mod mock_service;

use articledesk::article::{Article, ArtworkRecord, Section, SectionImage, SectionKind, SectionLayout};
use articledesk::config::EditorConfig;
use articledesk::effects::{ArticleStore, EffectRunner, ElementView, HistoryNavigator};
use articledesk::service::{ArtworkSource, ServiceError};
use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::{json, Map};
use std::collections::HashMap;
use std::sync::Arc;

pub const SEO_KEYWORD: &str = "ceramics";

/// A published feature article with a couple of sections.
pub fn feature_article() -> Article {
    Article::new("New York's Next Art District")
        .with_id("594a7e2254c37f00177c0ea9")
        .with_published(true)
        .with_sections(vec![
            Section::Text {
                body: "<p>What would Antoine Court's do?</p>".to_string(),
                extra: Map::new(),
            },
            Section::ImageCollection {
                images: vec![SectionImage::uploaded(
                    "https://artsy-media-uploads.s3.amazonaws.com/hero.jpg",
                    1200,
                    800,
                )],
                layout: SectionLayout::OverflowFillwidth,
                extra: Map::new(),
            },
        ])
}

pub fn image_section(layout: SectionLayout, count: usize) -> Section {
    let images = (0..count)
        .map(|i| SectionImage::uploaded(format!("https://img.example/{i}.jpg"), 800, 600))
        .collect();
    Section::ImageCollection {
        images,
        layout,
        extra: Map::new(),
    }
}

/// Page with the spinner and the SEO input filled in.
pub fn page() -> Arc<ElementView> {
    let view = ElementView::new(&EditorConfig::default());
    view.set_seo_keyword(SEO_KEYWORD);
    Arc::new(view)
}

/// Store that records calls instead of persisting.
#[derive(Default)]
pub struct RecordingStore {
    pub saved: Mutex<Vec<Article>>,
    pub destroyed: Mutex<Vec<Article>>,
    pub fail: bool,
}

impl RecordingStore {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn save_count(&self) -> usize {
        self.saved.lock().len()
    }

    pub fn destroy_count(&self) -> usize {
        self.destroyed.lock().len()
    }
}

#[async_trait]
impl ArticleStore for RecordingStore {
    async fn save(&self, article: &Article) -> Result<Article, ServiceError> {
        self.saved.lock().push(article.clone());
        if self.fail {
            return Err(ServiceError::Status {
                url: "memory://articles".to_string(),
                status: 500,
            });
        }
        Ok(article.clone())
    }

    async fn destroy(&self, article: &Article) -> Result<(), ServiceError> {
        self.destroyed.lock().push(article.clone());
        if self.fail {
            return Err(ServiceError::MissingId);
        }
        Ok(())
    }
}

/// Artwork lookup backed by a map; unknown ids are 404s.
#[derive(Default)]
pub struct StubArtworks {
    records: HashMap<String, ArtworkRecord>,
}

impl StubArtworks {
    pub fn with(mut self, record: ArtworkRecord) -> Self {
        self.records.insert(record.internal_id.clone(), record);
        self
    }
}

#[async_trait]
impl ArtworkSource for StubArtworks {
    async fn fetch_artwork(&self, id: &str) -> Result<ArtworkRecord, ServiceError> {
        self.records
            .get(id)
            .cloned()
            .ok_or_else(|| ServiceError::Status {
                url: format!("memory://artworks/{id}"),
                status: 404,
            })
    }
}

pub fn artwork_record(id: &str) -> ArtworkRecord {
    serde_json::from_value(json!({
        "_id": id,
        "id": "chip-hughes-stripes",
        "title": "Stripes",
        "date": "2015",
        "partner": {"id": "gallery-x", "name": "Gallery X"},
        "artists": [{"id": "chip-hughes", "name": "Chip Hughes"}],
        "images": [{
            "image_url": "https://img.example/abc/:version.jpg",
            "image_versions": ["larger"],
            "original_width": 3000,
            "original_height": 2000
        }]
    }))
    .unwrap()
}

// -- Runner helpers -----------------------------------------------------------

pub struct Harness {
    pub navigator: Arc<HistoryNavigator>,
    pub view: Arc<ElementView>,
    pub store: Arc<RecordingStore>,
}

impl Harness {
    /// A runner wired to this harness's fakes.
    pub fn runner(&self) -> EffectRunner {
        EffectRunner::new(
            self.navigator.clone(),
            self.view.clone(),
            self.store.clone(),
        )
    }
}

pub fn harness_with_store(store: RecordingStore) -> Harness {
    Harness {
        navigator: Arc::new(HistoryNavigator::new()),
        view: page(),
        store: Arc::new(store),
    }
}

pub fn harness() -> Harness {
    harness_with_store(RecordingStore::default())
}

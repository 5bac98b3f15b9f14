//! Editorial authoring core for section-based articles.
//!
//! ```text
//! UI event ──→ edit action ──→ Outcome { article, action, effects }
//!                                   │         │          │
//!                                   ▼         ▼          ▼
//!                              EditorSession ─ EditReducer  EffectRunner
//!                                                           (Navigator, ViewState, ArticleStore)
//! ```
//!
//! Actions never touch navigation, the page or persistence directly. They
//! describe what should happen and the session executes it through the
//! capabilities it was built with.

pub mod article;
pub mod config;
pub mod effects;
pub mod error;
pub mod service;
pub mod session;
pub mod ui;

pub use error::EditorError;

use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber. `RUST_LOG` overrides the
/// default `info` filter.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();
}

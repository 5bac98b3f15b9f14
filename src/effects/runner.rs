use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::article::Article;
use crate::effects::navigator::Navigator;
use crate::effects::store::ArticleStore;
use crate::effects::view::ViewState;
use crate::effects::Effect;

/// What a batch of effects did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// At least one navigation happened.
    pub navigated: bool,
    /// Persistence calls handed to the runtime.
    pub spawned: usize,
    /// A persistence call could not be scheduled. Effects after it were
    /// not run.
    pub unscheduled: bool,
}

/// Executes effects against injected capabilities.
///
/// Navigation and spinner toggles run inline. Persistence is
/// fire-and-forget: calls are spawned on a Tokio runtime and their failures
/// are logged, never returned. The runtime is the one current at the call,
/// else the one captured when the runner was built.
pub struct EffectRunner {
    navigator: Arc<dyn Navigator>,
    view: Arc<dyn ViewState>,
    store: Arc<dyn ArticleStore>,
    runtime: Option<Handle>,
    in_flight: Vec<JoinHandle<()>>,
}

impl EffectRunner {
    pub fn new(
        navigator: Arc<dyn Navigator>,
        view: Arc<dyn ViewState>,
        store: Arc<dyn ArticleStore>,
    ) -> Self {
        Self {
            navigator,
            view,
            store,
            runtime: Handle::try_current().ok(),
            in_flight: Vec::new(),
        }
    }

    /// Spawn persistence on `handle` when no runtime is current.
    pub fn with_runtime(mut self, handle: Handle) -> Self {
        self.runtime = Some(handle);
        self
    }

    pub fn view(&self) -> &dyn ViewState {
        self.view.as_ref()
    }

    pub fn run(&mut self, effects: Vec<Effect>) -> RunSummary {
        let mut summary = RunSummary::default();

        for effect in effects {
            match effect {
                Effect::Navigate(url) => {
                    tracing::info!(%url, "Navigating");
                    self.navigator.assign(&url);
                    summary.navigated = true;
                }
                Effect::ToggleSpinner(visible) => {
                    self.view.set_spinner_visible(visible);
                }
                Effect::Save(article) => {
                    if !self.spawn_save(article) {
                        summary.unscheduled = true;
                        break;
                    }
                    summary.spawned += 1;
                }
                Effect::Destroy(article) => {
                    if !self.spawn_destroy(article) {
                        summary.unscheduled = true;
                        break;
                    }
                    summary.spawned += 1;
                }
            }
        }

        summary
    }

    /// Wait for every spawned persistence call to finish.
    pub async fn settle(&mut self) {
        for handle in self.in_flight.drain(..) {
            if let Err(e) = handle.await {
                tracing::warn!("Persistence task aborted: {}", e);
            }
        }
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.iter().filter(|h| !h.is_finished()).count()
    }

    fn spawn_save(&mut self, article: Article) -> bool {
        let store = Arc::clone(&self.store);
        self.spawn("save", async move {
            match store.save(&article).await {
                Ok(saved) => tracing::info!(id = ?saved.id, "Article saved"),
                Err(e) => tracing::warn!(id = ?article.id, "Article save failed: {}", e),
            }
        })
    }

    fn spawn_destroy(&mut self, article: Article) -> bool {
        let store = Arc::clone(&self.store);
        self.spawn("destroy", async move {
            match store.destroy(&article).await {
                Ok(()) => tracing::info!(id = ?article.id, "Article deleted"),
                Err(e) => tracing::warn!(id = ?article.id, "Article delete failed: {}", e),
            }
        })
    }

    fn spawn<F>(&mut self, op: &'static str, task: F) -> bool
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        match Handle::try_current().ok().or_else(|| self.runtime.clone()) {
            Some(handle) => {
                self.in_flight.retain(|h| !h.is_finished());
                self.in_flight.push(handle.spawn(task));
                true
            }
            None => {
                tracing::error!(op, "No async runtime available, persistence call not scheduled");
                false
            }
        }
    }
}

use parking_lot::Mutex;

/// Full-page navigation capability.
pub trait Navigator: Send + Sync {
    fn assign(&self, url: &str);
}

/// Navigator that records every assignment instead of leaving the page.
///
/// Used by headless sessions (the CLI, tests) where there is no browser to
/// navigate.
#[derive(Debug, Default)]
pub struct HistoryNavigator {
    history: Mutex<Vec<String>>,
}

impl HistoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every URL assigned so far, oldest first.
    pub fn history(&self) -> Vec<String> {
        self.history.lock().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.history.lock().last().cloned()
    }
}

impl Navigator for HistoryNavigator {
    fn assign(&self, url: &str) {
        tracing::debug!(url, "navigate");
        self.history.lock().push(url.to_string());
    }
}

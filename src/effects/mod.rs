//! Side effects requested by edit actions and the capabilities that run them.
//!
//! Actions return [`Effect`] values; nothing in the action layer reaches for
//! navigation, the page, or the article store directly. An
//! [`EffectRunner`] owns the injected capabilities and executes effects in
//! the order they were produced.

mod navigator;
mod runner;
mod store;
mod view;

pub use navigator::{HistoryNavigator, Navigator};
pub use runner::{EffectRunner, RunSummary};
pub use store::ArticleStore;
pub use view::{Display, ElementView, ViewState};

use crate::article::Article;

/// Something an action wants done outside of state reduction.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Full-page navigation to a path.
    Navigate(String),
    /// Show (`true`) or hide the loading spinner.
    ToggleSpinner(bool),
    /// Persist this snapshot of the article.
    Save(Article),
    /// Delete the article from the store.
    Destroy(Article),
}

impl Effect {
    pub fn is_navigation(&self) -> bool {
        matches!(self, Effect::Navigate(_))
    }
}

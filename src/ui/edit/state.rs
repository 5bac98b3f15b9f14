use serde::{Deserialize, Serialize};

use crate::article::Article;
use crate::ui::mvi::UiState;

/// Top-level tab of the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorView {
    #[default]
    Content,
    Display,
    Admin,
}

/// Error shown in the editor's shared error slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditError {
    pub message: String,
}

impl EditError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<&str> for EditError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

/// Editor UI state for one article session.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EditorState {
    pub active_view: EditorView,
    /// Section currently being edited.
    pub section_index: Option<usize>,
    pub is_saving: bool,
    pub is_publishing: bool,
    pub is_deleting: bool,
    pub is_saved: bool,
    pub error: Option<EditError>,
    /// Article snapshot the view renders from.
    pub article: Article,
}

impl UiState for EditorState {}

impl EditorState {
    pub fn new(article: Article) -> Self {
        Self {
            article,
            ..Self::default()
        }
    }

    /// Drop all view flags, keeping the article snapshot.
    pub fn reset(self) -> Self {
        Self::new(self.article)
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// True while a save, publish or delete is in flight.
    pub fn is_busy(&self) -> bool {
        self.is_saving || self.is_publishing || self.is_deleting
    }
}

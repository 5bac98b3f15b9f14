use serde::{Deserialize, Serialize};

use crate::article::{Article, Section};
use crate::ui::edit::state::{EditError, EditorView};
use crate::ui::mvi::Intent;

/// Action descriptor consumed by [`EditReducer`](super::EditReducer).
///
/// Serializes as `{"type": "SAVE_ARTICLE", "payload": {"isSaving": true}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EditAction {
    #[serde(rename_all = "camelCase")]
    ChangeSavedStatus { article: Article, is_saved: bool },
    #[serde(rename_all = "camelCase")]
    SetSection { section_index: usize },
    #[serde(rename_all = "camelCase")]
    ChangeView { active_view: EditorView },
    #[serde(rename_all = "camelCase")]
    DeleteArticle { is_deleting: bool },
    #[serde(rename_all = "camelCase")]
    SaveArticle { is_saving: bool },
    #[serde(rename_all = "camelCase")]
    PublishArticle { is_publishing: bool },
    NewSection { section: Section },
    #[serde(rename_all = "camelCase")]
    UpdateSection { section_index: usize, section: Section },
    #[serde(rename_all = "camelCase")]
    RemoveSection { section_index: usize },
    Error { error: Option<EditError> },
}

impl Intent for EditAction {}

impl EditAction {
    /// Wire name of the action type.
    pub fn name(&self) -> &'static str {
        match self {
            EditAction::ChangeSavedStatus { .. } => "CHANGE_SAVED_STATUS",
            EditAction::SetSection { .. } => "SET_SECTION",
            EditAction::ChangeView { .. } => "CHANGE_VIEW",
            EditAction::DeleteArticle { .. } => "DELETE_ARTICLE",
            EditAction::SaveArticle { .. } => "SAVE_ARTICLE",
            EditAction::PublishArticle { .. } => "PUBLISH_ARTICLE",
            EditAction::NewSection { .. } => "NEW_SECTION",
            EditAction::UpdateSection { .. } => "UPDATE_SECTION",
            EditAction::RemoveSection { .. } => "REMOVE_SECTION",
            EditAction::Error { .. } => "ERROR",
        }
    }
}

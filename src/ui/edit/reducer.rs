use crate::ui::edit::intent::EditAction;
use crate::ui::edit::state::EditorState;
use crate::ui::mvi::Reducer;

pub struct EditReducer;

impl Reducer for EditReducer {
    type State = EditorState;
    type Intent = EditAction;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            EditAction::ChangeSavedStatus { article, is_saved } => EditorState {
                article,
                is_saved,
                is_saving: false,
                is_publishing: false,
                ..state
            },
            EditAction::SetSection { section_index } => EditorState {
                section_index: Some(section_index),
                ..state
            },
            EditAction::ChangeView { active_view } => EditorState {
                active_view,
                ..state
            },
            EditAction::DeleteArticle { is_deleting } => EditorState {
                is_deleting,
                ..state
            },
            EditAction::SaveArticle { is_saving } => EditorState { is_saving, ..state },
            EditAction::PublishArticle { is_publishing } => EditorState {
                is_publishing,
                ..state
            },
            EditAction::NewSection { section } => {
                let mut article = state.article;
                // New sections go after the one being edited, or at the end.
                let at = state
                    .section_index
                    .map_or(article.sections.len(), |index| index.saturating_add(1));
                let at = article.insert_section(at, section);
                EditorState {
                    article,
                    section_index: Some(at),
                    is_saved: false,
                    ..state
                }
            }
            EditAction::UpdateSection {
                section_index,
                section,
            } => {
                let mut article = state.article;
                if article.replace_section(section_index, section).is_err() {
                    tracing::debug!(section_index, "UPDATE_SECTION for missing section ignored");
                    return EditorState { article, ..state };
                }
                EditorState {
                    article,
                    is_saved: false,
                    ..state
                }
            }
            EditAction::RemoveSection { section_index } => {
                let mut article = state.article;
                let removed = article.remove_section(section_index).is_ok();
                EditorState {
                    article,
                    section_index: None,
                    is_saved: state.is_saved && !removed,
                    ..state
                }
            }
            EditAction::Error { error } => EditorState { error, ..state },
        }
    }
}

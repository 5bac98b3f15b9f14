//! One article edit session: state, reducer and effect execution.

use std::sync::Arc;

use crate::article::Article;
use crate::effects::{EffectRunner, RunSummary};
use crate::error::EditorError;
use crate::service::ArtworkSource;
use crate::ui::edit::{
    action_channel, ActionReceiver, ActionSender, EditAction, EditError, EditReducer, EditorState,
    Outcome,
};
use crate::ui::images::ImagesControls;
use crate::ui::mvi::Reducer;

/// Shown when a save or delete could not be scheduled.
pub const PERSISTENCE_UNAVAILABLE: &str =
    "Changes could not be saved: no async runtime is available.";

/// Owns the editor state for a single article and applies action outcomes
/// to it.
///
/// Controls created by the session report back over an action channel;
/// call [`drain`](Self::drain) to fold their actions in.
pub struct EditorSession {
    state: EditorState,
    runner: EffectRunner,
    tx: ActionSender,
    rx: ActionReceiver,
}

impl EditorSession {
    pub fn new(article: Article, runner: EffectRunner) -> Self {
        let (tx, rx) = action_channel();
        Self {
            state: EditorState::new(article),
            runner,
            tx,
            rx,
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn article(&self) -> &Article {
        &self.state.article
    }

    pub fn runner(&self) -> &EffectRunner {
        &self.runner
    }

    pub fn action_sender(&self) -> ActionSender {
        self.tx.clone()
    }

    /// Store the outcome's snapshot, reduce its action, then run its
    /// effects. Navigating away resets the view state. A save or delete
    /// that could not be scheduled clears the progress flags and raises
    /// [`PERSISTENCE_UNAVAILABLE`].
    pub fn apply(&mut self, outcome: Outcome) -> RunSummary {
        if let Some(article) = outcome.article {
            self.state.article = article;
        }
        if let Some(action) = outcome.action {
            self.dispatch(action);
        }

        let summary = self.runner.run(outcome.effects);
        if summary.unscheduled {
            for action in [
                EditAction::SaveArticle { is_saving: false },
                EditAction::PublishArticle {
                    is_publishing: false,
                },
                EditAction::DeleteArticle { is_deleting: false },
                EditAction::Error {
                    error: Some(EditError::new(PERSISTENCE_UNAVAILABLE)),
                },
            ] {
                self.dispatch(action);
            }
        }
        if summary.navigated {
            tracing::debug!("Navigation left the editor, resetting view state");
            self.state = std::mem::take(&mut self.state).reset();
        }
        summary
    }

    pub fn dispatch(&mut self, action: EditAction) {
        tracing::trace!(action = action.name(), "Reducing");
        let state = std::mem::take(&mut self.state);
        self.state = EditReducer::reduce(state, action);
    }

    /// Reduce every action queued by controls. Returns how many were applied.
    pub fn drain(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(action) = self.rx.try_recv() {
            self.dispatch(action);
            applied += 1;
        }
        applied
    }

    /// Controls for the image section at `index`.
    pub fn images_controls(
        &self,
        index: usize,
        artworks: Arc<dyn ArtworkSource>,
    ) -> Result<ImagesControls, EditorError> {
        let section = self
            .state
            .article
            .section(index)
            .cloned()
            .ok_or(EditorError::SectionOutOfRange(index))?;
        ImagesControls::new(index, section, self.action_sender(), artworks)
    }

    /// Wait for in-flight persistence calls.
    pub async fn settle(&mut self) {
        self.runner.settle().await;
    }
}

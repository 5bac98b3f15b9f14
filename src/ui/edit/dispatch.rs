use tokio::sync::mpsc;

use crate::ui::edit::intent::EditAction;

/// Handle UI components use to send actions back to their session.
#[derive(Debug, Clone)]
pub struct ActionSender {
    tx: mpsc::UnboundedSender<EditAction>,
}

pub type ActionReceiver = mpsc::UnboundedReceiver<EditAction>;

/// Create a connected sender/receiver pair.
pub fn action_channel() -> (ActionSender, ActionReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (ActionSender { tx }, rx)
}

impl ActionSender {
    pub fn dispatch(&self, action: EditAction) {
        let name = action.name();
        if self.tx.send(action).is_err() {
            tracing::trace!("{} dropped (session gone)", name);
        }
    }
}

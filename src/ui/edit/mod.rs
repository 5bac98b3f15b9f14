//! Article editing: actions, reducer and editor view state.

pub mod actions;
mod dispatch;
mod intent;
mod reducer;
mod state;

pub use actions::Outcome;
pub use dispatch::{action_channel, ActionReceiver, ActionSender};
pub use intent::EditAction;
pub use reducer::EditReducer;
pub use state::{EditError, EditorState, EditorView};

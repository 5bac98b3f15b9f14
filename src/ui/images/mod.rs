mod controls;
pub mod search;

pub use controls::{ImagesControls, ARTWORK_NOT_FOUND, FILLWIDTH_ALERT};
pub use search::{ArtworkSuggestion, SearchEnvelope};

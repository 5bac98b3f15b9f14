//! Editor view state and the controls bound to it.

pub mod edit;
pub mod images;
pub mod mvi;

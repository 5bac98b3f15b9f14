/// Marker trait for reducer-owned view state.
///
/// `Default` is the state a view starts in and returns to when it is reset.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

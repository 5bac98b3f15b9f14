/// Marker trait for values a reducer accepts.
///
/// Intents carry data only. Anything with an effect on the outside world
/// (navigation, persistence, the page) is described separately and run by
/// the caller.
pub trait Intent: Clone + Send + 'static {}

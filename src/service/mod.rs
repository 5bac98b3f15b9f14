//! HTTP access to the publishing platform: search, artworks, articles.

mod artwork;
mod client;
mod error;
mod search;
mod store;

pub use artwork::ArtworkSource;
pub use client::PlatformClient;
pub use error::ServiceError;

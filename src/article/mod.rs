//! Article content model: articles, their sections, and the artwork
//! records that image sections embed.

mod artwork;
mod model;
mod section;

pub use artwork::{ArtistRef, ArtworkImage, ArtworkRecord, DenormalizedArtwork, PartnerRef};
pub use model::Article;
pub use section::{EntryPoint, Section, SectionImage, SectionKind, SectionLayout};

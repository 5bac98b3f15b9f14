use serde::{Deserialize, Serialize};

const PREFERRED_IMAGE_VERSION: &str = "larger";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PartnerRef {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistRef {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// One image attached to an artwork record.
///
/// `image_url` is a template containing `:version`, filled with one of
/// `image_versions`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ArtworkImage {
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub image_versions: Vec<String>,
    #[serde(default)]
    pub original_width: Option<u32>,
    #[serde(default)]
    pub original_height: Option<u32>,
    #[serde(default)]
    pub is_default: bool,
}

impl ArtworkImage {
    fn versioned_url(&self) -> Option<String> {
        let template = self.image_url.as_deref()?;
        let version = self
            .image_versions
            .iter()
            .find(|v| v.as_str() == PREFERRED_IMAGE_VERSION)
            .or_else(|| self.image_versions.first())?;
        Some(template.replace(":version", version))
    }
}

/// Artwork as returned by the artwork service.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ArtworkRecord {
    #[serde(rename = "_id")]
    pub internal_id: String,
    /// Human-readable slug.
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub image_rights: Option<String>,
    #[serde(default)]
    pub partner: Option<PartnerRef>,
    #[serde(default)]
    pub artist: Option<ArtistRef>,
    #[serde(default)]
    pub artists: Vec<ArtistRef>,
    #[serde(default)]
    pub images: Vec<ArtworkImage>,
}

/// Fully resolved artwork, embeddable in an image section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DenormalizedArtwork {
    pub id: String,
    pub slug: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub credit: Option<String>,
    #[serde(default)]
    pub partner: PartnerRef,
    #[serde(default)]
    pub artists: Vec<ArtistRef>,
}

impl ArtworkRecord {
    fn default_image(&self) -> Option<&ArtworkImage> {
        self.images
            .iter()
            .find(|image| image.is_default)
            .or_else(|| self.images.first())
    }

    /// Flatten the record into the shape image sections store.
    ///
    /// The artist list falls back to the single `artist` field when
    /// `artists` is empty.
    pub fn denormalized(&self) -> DenormalizedArtwork {
        let image = self.default_image();
        let artists = if self.artists.is_empty() {
            self.artist.iter().cloned().collect()
        } else {
            self.artists.clone()
        };

        DenormalizedArtwork {
            id: self.internal_id.clone(),
            slug: self.id.clone(),
            title: self.title.clone(),
            date: self.date.clone(),
            image: image.and_then(ArtworkImage::versioned_url),
            width: image.and_then(|i| i.original_width),
            height: image.and_then(|i| i.original_height),
            credit: self.image_rights.clone(),
            partner: self.partner.clone().unwrap_or_default(),
            artists,
        }
    }
}

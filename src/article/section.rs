use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::article::artwork::DenormalizedArtwork;
use crate::error::EditorError;

/// Display layout of a section within the article column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionLayout {
    ColumnWidth,
    OverflowFillwidth,
    /// Full-bleed layout; holds exactly one asset.
    Fillwidth,
    Mini,
    Full,
}

/// How an image set opens: a compact strip or straight into the slideshow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryPoint {
    Mini,
    Full,
}

impl From<EntryPoint> for SectionLayout {
    fn from(entry: EntryPoint) -> Self {
        match entry {
            EntryPoint::Mini => SectionLayout::Mini,
            EntryPoint::Full => SectionLayout::Full,
        }
    }
}

/// One asset inside an image section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SectionImage {
    /// An uploaded image.
    Image {
        url: String,
        width: u32,
        height: u32,
        #[serde(default)]
        caption: String,
    },
    /// A resolved artwork record.
    Artwork(DenormalizedArtwork),
}

impl SectionImage {
    pub fn uploaded(url: impl Into<String>, width: u32, height: u32) -> Self {
        SectionImage::Image {
            url: url.into(),
            width,
            height,
            caption: String::new(),
        }
    }
}

/// The section kinds the editor can create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Embed,
    ImageCollection,
    Text,
    Video,
    ImageSet,
}

impl SectionKind {
    pub const ALL: [SectionKind; 5] = [
        SectionKind::Embed,
        SectionKind::ImageCollection,
        SectionKind::Text,
        SectionKind::Video,
        SectionKind::ImageSet,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionKind::Embed => "embed",
            SectionKind::ImageCollection => "image_collection",
            SectionKind::Text => "text",
            SectionKind::Video => "video",
            SectionKind::ImageSet => "image_set",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionKind {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| EditorError::UnknownSectionType(s.to_string()))
    }
}

/// A structural unit of an article body, tagged by `type` on the wire.
///
/// Attributes the editor does not interpret stay in each variant's `extra`
/// map, and sections of a type the editor does not know are carried as
/// [`Section::Other`], so a stored article survives a load and save
/// unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self", tag = "type", rename_all = "snake_case")]
pub enum Section {
    Embed {
        #[serde(default)]
        url: String,
        layout: SectionLayout,
        #[serde(default)]
        height: String,
        #[serde(flatten)]
        extra: Map<String, Value>,
    },
    ImageCollection {
        #[serde(default)]
        images: Vec<SectionImage>,
        layout: SectionLayout,
        #[serde(flatten)]
        extra: Map<String, Value>,
    },
    Text {
        #[serde(default)]
        body: String,
        #[serde(flatten)]
        extra: Map<String, Value>,
    },
    Video {
        #[serde(default)]
        url: String,
        layout: SectionLayout,
        #[serde(flatten)]
        extra: Map<String, Value>,
    },
    ImageSet {
        #[serde(default)]
        images: Vec<SectionImage>,
        layout: SectionLayout,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        #[serde(flatten)]
        extra: Map<String, Value>,
    },
    /// A section type this editor does not know, kept as raw JSON
    /// including its `type`.
    #[serde(skip)]
    Other(Map<String, Value>),
}

impl Serialize for Section {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Section::Other(raw) => raw.serialize(serializer),
            known => Section::serialize(known, serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Section {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Map::<String, Value>::deserialize(deserializer)?;
        let known = raw
            .get("type")
            .and_then(Value::as_str)
            .is_some_and(|t| t.parse::<SectionKind>().is_ok());
        if !known {
            return Ok(Section::Other(raw));
        }
        Section::deserialize(Value::Object(raw)).map_err(serde::de::Error::custom)
    }
}

impl Section {
    /// Default attribute set for a freshly created section of `kind`.
    pub fn template(kind: SectionKind) -> Self {
        let extra = Map::new();
        match kind {
            SectionKind::Embed => Section::Embed {
                url: String::new(),
                layout: SectionLayout::ColumnWidth,
                height: String::new(),
                extra,
            },
            SectionKind::ImageCollection => Section::ImageCollection {
                images: Vec::new(),
                layout: SectionLayout::OverflowFillwidth,
                extra,
            },
            SectionKind::Text => Section::Text {
                body: String::new(),
                extra,
            },
            SectionKind::Video => Section::Video {
                url: String::new(),
                layout: SectionLayout::ColumnWidth,
                extra,
            },
            SectionKind::ImageSet => Section::ImageSet {
                images: Vec::new(),
                layout: SectionLayout::Mini,
                title: None,
                extra,
            },
        }
    }

    /// Known kind of this section; `None` for [`Section::Other`].
    pub fn kind(&self) -> Option<SectionKind> {
        match self {
            Section::Embed { .. } => Some(SectionKind::Embed),
            Section::ImageCollection { .. } => Some(SectionKind::ImageCollection),
            Section::Text { .. } => Some(SectionKind::Text),
            Section::Video { .. } => Some(SectionKind::Video),
            Section::ImageSet { .. } => Some(SectionKind::ImageSet),
            Section::Other(_) => None,
        }
    }

    /// Wire `type` of the section.
    pub fn type_name(&self) -> &str {
        match self {
            Section::Other(raw) => raw.get("type").and_then(Value::as_str).unwrap_or(""),
            known => known.kind().map_or("", SectionKind::as_str),
        }
    }

    /// Attributes not interpreted by the editor.
    pub fn extra(&self) -> &Map<String, Value> {
        match self {
            Section::Embed { extra, .. }
            | Section::ImageCollection { extra, .. }
            | Section::Text { extra, .. }
            | Section::Video { extra, .. }
            | Section::ImageSet { extra, .. }
            | Section::Other(extra) => extra,
        }
    }

    pub fn layout(&self) -> Option<SectionLayout> {
        match self {
            Section::Embed { layout, .. }
            | Section::ImageCollection { layout, .. }
            | Section::Video { layout, .. }
            | Section::ImageSet { layout, .. } => Some(*layout),
            Section::Text { .. } | Section::Other(_) => None,
        }
    }

    /// Images held by image-bearing sections; `None` for every other kind.
    pub fn images(&self) -> Option<&[SectionImage]> {
        match self {
            Section::ImageCollection { images, .. } | Section::ImageSet { images, .. } => {
                Some(images)
            }
            _ => None,
        }
    }

    pub fn is_image_section(&self) -> bool {
        self.images().is_some()
    }

    pub(crate) fn images_mut(&mut self) -> Result<&mut Vec<SectionImage>, EditorError> {
        let found = self.type_name().to_string();
        match self {
            Section::ImageCollection { images, .. } | Section::ImageSet { images, .. } => {
                Ok(images)
            }
            _ => Err(EditorError::SectionKindMismatch {
                expected: "image",
                found,
            }),
        }
    }

    pub(crate) fn set_layout(&mut self, next: SectionLayout) -> Result<(), EditorError> {
        let found = self.type_name().to_string();
        match self {
            Section::Embed { layout, .. }
            | Section::ImageCollection { layout, .. }
            | Section::Video { layout, .. }
            | Section::ImageSet { layout, .. } => {
                *layout = next;
                Ok(())
            }
            Section::Text { .. } | Section::Other(_) => Err(EditorError::SectionKindMismatch {
                expected: "laid out",
                found,
            }),
        }
    }
}

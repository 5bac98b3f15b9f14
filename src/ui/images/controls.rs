use std::sync::Arc;

use crate::article::{DenormalizedArtwork, EntryPoint, Section, SectionImage, SectionLayout};
use crate::error::EditorError;
use crate::service::{ArtworkSource, ServiceError};
use crate::ui::edit::{ActionSender, EditAction, EditError};
use crate::ui::images::search::{filter_autocomplete, ArtworkSuggestion, SearchEnvelope};

pub const FILLWIDTH_ALERT: &str =
    "Fullscreen layouts accept one asset, please remove extra images or use another layout.";

pub const ARTWORK_NOT_FOUND: &str = "Artwork not found.";

/// Controls for an image section: artwork search, artwork URL input and
/// file upload.
///
/// Every change to the section is sent to the session as an
/// `UPDATE_SECTION` action; problems surface as `ERROR` actions.
pub struct ImagesControls {
    index: usize,
    section: Section,
    is_hero: bool,
    dispatch: ActionSender,
    artworks: Arc<dyn ArtworkSource>,
}

impl ImagesControls {
    /// Bind controls to the image section at `index`.
    pub fn new(
        index: usize,
        section: Section,
        dispatch: ActionSender,
        artworks: Arc<dyn ArtworkSource>,
    ) -> Result<Self, EditorError> {
        if !section.is_image_section() {
            return Err(EditorError::SectionKindMismatch {
                expected: "image",
                found: section.type_name().to_string(),
            });
        }

        Ok(Self {
            index,
            section,
            is_hero: false,
            dispatch,
            artworks,
        })
    }

    /// Hero sections only take uploads; search and URL inputs are hidden.
    pub fn hero(mut self) -> Self {
        self.is_hero = true;
        self
    }

    pub fn is_hero(&self) -> bool {
        self.is_hero
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn section(&self) -> &Section {
        &self.section
    }

    pub fn images(&self) -> &[SectionImage] {
        self.section.images().unwrap_or_default()
    }

    /// Whether search and URL inputs are shown at all.
    pub fn shows_artwork_inputs(&self) -> bool {
        !self.is_hero
    }

    /// A fillwidth section holding an image takes nothing more.
    pub fn inputs_are_disabled(&self) -> bool {
        self.section.layout() == Some(SectionLayout::Fillwidth) && !self.images().is_empty()
    }

    pub fn fillwidth_alert(&self) {
        self.dispatch.dispatch(EditAction::Error {
            error: Some(EditError::new(FILLWIDTH_ALERT)),
        });
    }

    /// Click on the input area. Returns `true` when the inputs are disabled
    /// and the alert was raised.
    pub fn on_disabled_interaction(&self) -> bool {
        if self.inputs_are_disabled() {
            self.fillwidth_alert();
            return true;
        }
        false
    }

    /// Append an image to the section.
    pub fn on_new_image(&mut self, image: SectionImage) {
        if self.on_disabled_interaction() {
            return;
        }

        let mut images = self.images().to_vec();
        images.push(image);
        self.replace_images(images);
    }

    /// Append a freshly uploaded file.
    pub fn on_upload(&mut self, url: impl Into<String>, width: u32, height: u32) {
        self.on_new_image(SectionImage::uploaded(url, width, height));
    }

    /// Replace the image list with an autocomplete selection.
    pub fn on_select(&mut self, images: Vec<SectionImage>) {
        self.replace_images(images);
    }

    pub fn filter_autocomplete(&self, envelope: &SearchEnvelope) -> Vec<Option<ArtworkSuggestion>> {
        filter_autocomplete(envelope)
    }

    /// Resolve an artwork id into an embeddable record.
    ///
    /// On failure an `Artwork not found.` error is dispatched and the
    /// service error is handed back to the caller.
    pub async fn fetch_denormalized_artwork(
        &self,
        id: &str,
    ) -> Result<DenormalizedArtwork, ServiceError> {
        match self.artworks.fetch_artwork(id).await {
            Ok(record) => Ok(record.denormalized()),
            Err(e) => {
                tracing::warn!(id, "Artwork lookup failed: {}", e);
                self.dispatch.dispatch(EditAction::Error {
                    error: Some(EditError::new(ARTWORK_NOT_FOUND)),
                });
                Err(e)
            }
        }
    }

    /// Resolve a selected search suggestion and append it.
    pub async fn add_artwork(&mut self, id: &str) -> Result<(), ServiceError> {
        let artwork = self.fetch_denormalized_artwork(id).await?;
        self.on_new_image(SectionImage::Artwork(artwork));
        Ok(())
    }

    /// Image set title; ignored for other section kinds.
    pub fn set_title(&mut self, value: impl Into<String>) {
        if let Section::ImageSet { title, .. } = &mut self.section {
            let value = value.into();
            *title = (!value.is_empty()).then_some(value);
            self.commit();
        }
    }

    pub fn entry_point(&self) -> Option<EntryPoint> {
        match &self.section {
            Section::ImageSet { layout, .. } if *layout == SectionLayout::Full => {
                Some(EntryPoint::Full)
            }
            Section::ImageSet { .. } => Some(EntryPoint::Mini),
            _ => None,
        }
    }

    /// Image set entry point; ignored for other section kinds.
    pub fn set_entry_point(&mut self, entry: EntryPoint) {
        if !matches!(self.section, Section::ImageSet { .. }) {
            return;
        }
        if self.section.set_layout(entry.into()).is_ok() {
            self.commit();
        }
    }

    /// Called when editing of the section stops. An image section left
    /// without images is removed. Returns `true` if it was.
    pub fn on_unmount(self) -> bool {
        if !self.images().is_empty() {
            return false;
        }
        tracing::debug!(index = self.index, "Removing empty image section");
        self.dispatch.dispatch(EditAction::RemoveSection {
            section_index: self.index,
        });
        true
    }

    fn replace_images(&mut self, images: Vec<SectionImage>) {
        if let Ok(slot) = self.section.images_mut() {
            *slot = images;
            self.commit();
        }
    }

    fn commit(&self) {
        self.dispatch.dispatch(EditAction::UpdateSection {
            section_index: self.index,
            section: self.section.clone(),
        });
    }
}

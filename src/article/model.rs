use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::article::section::Section;
use crate::error::EditorError;

/// Snapshot of an article as held by an edit session.
///
/// Attributes the editor does not interpret are kept in `extra` so a
/// snapshot round-trips through the store unchanged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Article {
    /// Server-assigned id. `None` until the first save.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub published: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_keyword: Option<String>,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Article {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_published(mut self, published: bool) -> Self {
        self.published = published;
        self
    }

    pub fn with_sections(mut self, sections: Vec<Section>) -> Self {
        self.sections = sections;
        self
    }

    /// True when the article has never been persisted.
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    pub fn section(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    /// Insert a section, clamping `index` to the end of the list.
    /// Returns the position the section landed at.
    pub fn insert_section(&mut self, index: usize, section: Section) -> usize {
        let at = index.min(self.sections.len());
        self.sections.insert(at, section);
        at
    }

    pub fn replace_section(&mut self, index: usize, section: Section) -> Result<(), EditorError> {
        let slot = self
            .sections
            .get_mut(index)
            .ok_or(EditorError::SectionOutOfRange(index))?;
        *slot = section;
        Ok(())
    }

    pub fn remove_section(&mut self, index: usize) -> Result<Section, EditorError> {
        if index >= self.sections.len() {
            return Err(EditorError::SectionOutOfRange(index));
        }
        Ok(self.sections.remove(index))
    }
}

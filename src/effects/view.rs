use std::collections::HashMap;

use parking_lot::Mutex;

use crate::config::EditorConfig;

/// CSS `display` values the editor toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    Block,
    None,
}

impl Display {
    pub fn as_css(self) -> &'static str {
        match self {
            Display::Block => "block",
            Display::None => "none",
        }
    }
}

impl From<bool> for Display {
    fn from(visible: bool) -> Self {
        if visible {
            Display::Block
        } else {
            Display::None
        }
    }
}

/// Access to the parts of the page the action layer reads or toggles.
pub trait ViewState: Send + Sync {
    /// Current value of the SEO focus-keyword input, if present.
    fn seo_keyword(&self) -> Option<String>;

    fn set_spinner_visible(&self, visible: bool);
}

#[derive(Debug, Clone, Default)]
struct Element {
    display: Option<Display>,
    value: Option<String>,
}

/// In-memory page model keyed by element id.
///
/// The spinner and SEO input ids come from [`EditorConfig`].
#[derive(Debug)]
pub struct ElementView {
    spinner_id: String,
    seo_input_id: String,
    elements: Mutex<HashMap<String, Element>>,
}

impl ElementView {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            spinner_id: config.spinner_element.clone(),
            seo_input_id: config.seo_keyword_input.clone(),
            elements: Mutex::new(HashMap::new()),
        }
    }

    /// Set the value of an input element, creating it if needed.
    pub fn set_value(&self, id: &str, value: impl Into<String>) {
        self.elements
            .lock()
            .entry(id.to_string())
            .or_default()
            .value = Some(value.into());
    }

    pub fn value(&self, id: &str) -> Option<String> {
        self.elements.lock().get(id).and_then(|e| e.value.clone())
    }

    pub fn display(&self, id: &str) -> Option<Display> {
        self.elements.lock().get(id).and_then(|e| e.display)
    }

    pub fn spinner_display(&self) -> Option<Display> {
        self.display(&self.spinner_id)
    }

    /// Shorthand for filling the configured SEO input.
    pub fn set_seo_keyword(&self, keyword: impl Into<String>) {
        let id = self.seo_input_id.clone();
        self.set_value(&id, keyword);
    }
}

impl ViewState for ElementView {
    fn seo_keyword(&self) -> Option<String> {
        self.value(&self.seo_input_id)
    }

    fn set_spinner_visible(&self, visible: bool) {
        self.elements
            .lock()
            .entry(self.spinner_id.clone())
            .or_default()
            .display = Some(Display::from(visible));
    }
}

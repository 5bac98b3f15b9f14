use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub editor: EditorConfig,
}

/// Platform API access.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Base URL of the platform API (e.g., "https://www.artsy.net").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Page elements the editor reads and toggles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Id of the section loading spinner.
    #[serde(default = "default_spinner_element")]
    pub spinner_element: String,
    /// Id of the SEO focus-keyword input.
    #[serde(default = "default_seo_keyword_input")]
    pub seo_keyword_input: String,
}

fn default_base_url() -> String {
    "https://www.artsy.net".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_spinner_element() -> String {
    "edit-sections-spinner".to_string()
}

fn default_seo_keyword_input() -> String {
    "edit-seo__focus-keyword".to_string()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            spinner_element: default_spinner_element(),
            seo_keyword_input: default_seo_keyword_input(),
        }
    }
}

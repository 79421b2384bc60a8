//! # Client configuration — `flux.toml`
//!
//! Optional TOML file read at startup by native builds (web builds take the
//! API URL from the `FLUX_API_URL` compile-time variable instead). A missing
//! or empty file is equivalent to the default configuration.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "https://api.example.com"   # omit to use same-origin / localhost
//!
//! [search]
//! debounce_ms = 300
//!
//! [editor]
//! default_block = "todo"
//! ```

use serde::{Deserialize, Serialize};

use crate::models::BlockType;

/// Top-level configuration stored in `flux.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub editor: EditorConfig,
}

/// Backend connection settings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Explicit backend base URL. Takes precedence over every fallback.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

/// Search modal settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Idle time after the last keystroke before a query is sent.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u32,
}

fn default_debounce_ms() -> u32 {
    300
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

/// Page editor settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Block type created by "New task": `todo`, `paragraph`, `heading1`..`heading3`.
    #[serde(default = "default_block")]
    pub default_block: String,
}

fn default_block() -> String {
    "todo".to_string()
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            default_block: default_block(),
        }
    }
}

impl EditorConfig {
    /// The configured default block type; unknown names fall back to todo.
    pub fn default_block_type(&self) -> BlockType {
        match self.default_block.as_str() {
            "heading1" => BlockType::Heading1,
            "heading2" => BlockType::Heading2,
            "heading3" => BlockType::Heading3,
            "paragraph" => BlockType::Paragraph,
            _ => BlockType::Todo,
        }
    }
}

impl ClientConfig {
    /// Builder method to set the API base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api.base_url = Some(url.into());
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "flux.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.search.debounce_ms, 300);
        assert_eq!(config.editor.default_block_type(), BlockType::Todo);
        assert!(config.api.base_url.is_none());
    }

    #[test]
    fn test_partial_sections() {
        let config = ClientConfig::from_toml(
            "[api]\nbase_url = \"https://api.example.com\"\n[editor]\ndefault_block = \"paragraph\"\n",
        )
        .unwrap();
        assert_eq!(config.api.base_url.as_deref(), Some("https://api.example.com"));
        assert_eq!(config.search.debounce_ms, 300);
        assert_eq!(config.editor.default_block_type(), BlockType::Paragraph);
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = ClientConfig::default().with_base_url("http://x");
        let text = config.to_toml().unwrap();
        assert_eq!(ClientConfig::from_toml(&text).unwrap(), config);
    }
}

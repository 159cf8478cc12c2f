// ABOUTME: Template host settings
// ABOUTME: Template directory, response content type and index template name

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONTENT_TYPE: &str = "text/html";
pub const DEFAULT_INDEX_TEMPLATE: &str = "twits";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostConfig {
    #[serde(default)]
    pub template_dir: Option<PathBuf>,

    #[serde(default = "default_content_type")]
    pub content_type: String,

    #[serde(default = "default_index_template")]
    pub index_template: String,
}

fn default_content_type() -> String {
    DEFAULT_CONTENT_TYPE.to_string()
}

fn default_index_template() -> String {
    DEFAULT_INDEX_TEMPLATE.to_string()
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            template_dir: None,
            content_type: default_content_type(),
            index_template: default_index_template(),
        }
    }
}

impl HostConfig {
    /// Content type sent with rendered pages, with a charset unless one is configured
    pub fn response_content_type(&self) -> String {
        if self.content_type.to_ascii_lowercase().contains("charset=") {
            self.content_type.clone()
        } else {
            format!("{}; charset=utf-8", self.content_type)
        }
    }
}

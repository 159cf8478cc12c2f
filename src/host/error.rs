// ABOUTME: Error types for the template host
// ABOUTME: Covers context initializer contract violations, template lookup and loading failures

use thiserror::Error;

use crate::template::TemplateError;

#[derive(Error, Debug)]
pub enum HostError {
    #[error("Context does not support the '{capability}' capability required to publish '{key}'")]
    MissingCapability {
        capability: &'static str,
        key: String,
    },

    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("Template directory not found: {0}")]
    TemplateDirNotFound(String),

    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

pub type Result<T> = std::result::Result<T, HostError>;

use thiserror::Error;

use crate::models::mapping::MappingError;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("No {content_type} found for '{key}'")]
    NotFound { content_type: String, key: String },

    #[error("Content store request failed: {0}")]
    Upstream(String),

    #[error("Content store returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Failed to decode content store response: {0}")]
    Decode(String),

    #[error("Invalid content: {0}")]
    Mapping(#[from] MappingError),

    #[error("{0} seasons are flagged as active")]
    AmbiguousActiveSeason(usize),

    #[error("Failed to load content fixture: {0}")]
    Fixture(String),
}

impl ContentError {
    pub fn not_found(content_type: &str, key: impl Into<String>) -> Self {
        ContentError::NotFound {
            content_type: content_type.to_string(),
            key: key.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ContentError::NotFound { .. })
    }
}

impl From<reqwest::Error> for ContentError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ContentError::Decode(e.to_string())
        } else {
            ContentError::Upstream(e.to_string())
        }
    }
}

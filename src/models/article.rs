use serde::{Deserialize, Serialize};

use crate::content::Entry;
use crate::models::mapping::{FieldReader, MappingError};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Article {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub summary: Option<String>,
    pub publish_date: String,
    pub cover_image_id: Option<String>,
    pub body: Option<String>,
}

impl Article {
    pub const CONTENT_TYPE: &'static str = "article";

    pub fn from_entry(entry: &Entry) -> Result<Self, MappingError> {
        let fields = FieldReader::new(entry, Self::CONTENT_TYPE)?;

        Ok(Self {
            id: fields.entry_id(),
            slug: fields.required_str("slug")?,
            title: fields.required_str("title")?,
            summary: fields.optional_str("summary")?,
            publish_date: fields.required_str("publishDate")?,
            cover_image_id: fields.optional_asset_link("coverImage")?,
            body: fields.optional_str("body")?,
        })
    }
}

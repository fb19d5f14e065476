// src/models/mapping.rs
use serde_json::Value;
use thiserror::Error;

use crate::content::{Entry, Link, LinkType};

#[derive(Debug, Error, PartialEq)]
pub enum MappingError {
    #[error("{content_type} {entry_id}: expected content type `{content_type}`, found `{found}`")]
    WrongContentType {
        content_type: &'static str,
        entry_id: String,
        found: String,
    },

    #[error("{content_type} {entry_id}: missing required field `{field}`")]
    MissingField {
        content_type: &'static str,
        entry_id: String,
        field: &'static str,
    },

    #[error("{content_type} {entry_id}: field `{field}` must be {expected}")]
    InvalidField {
        content_type: &'static str,
        entry_id: String,
        field: &'static str,
        expected: &'static str,
    },

    #[error("match {entry_id}: only one side of the score is set")]
    PartialScore { entry_id: String },

    #[error("season {entry_id}: invalid table, {reason}")]
    InvalidTable { entry_id: String, reason: String },
}

/// Typed accessors over an entry's fields, reporting failures against the
/// entry they came from.
pub struct FieldReader<'a> {
    entry: &'a Entry,
    content_type: &'static str,
}

impl<'a> FieldReader<'a> {
    /// Fails unless the entry is of `content_type`. Entries without a
    /// content type link are accepted as-is.
    pub fn new(entry: &'a Entry, content_type: &'static str) -> Result<Self, MappingError> {
        if let Some(found) = entry.content_type_id() {
            if found != content_type {
                return Err(MappingError::WrongContentType {
                    content_type,
                    entry_id: entry.id().to_string(),
                    found: found.to_string(),
                });
            }
        }
        Ok(Self { entry, content_type })
    }

    pub fn entry_id(&self) -> String {
        self.entry.id().to_string()
    }

    pub fn value(&self, field: &str) -> Option<&'a Value> {
        self.entry.field(field)
    }

    fn missing(&self, field: &'static str) -> MappingError {
        MappingError::MissingField {
            content_type: self.content_type,
            entry_id: self.entry_id(),
            field,
        }
    }

    fn invalid(&self, field: &'static str, expected: &'static str) -> MappingError {
        MappingError::InvalidField {
            content_type: self.content_type,
            entry_id: self.entry_id(),
            field,
            expected,
        }
    }

    pub fn required_str(&self, field: &'static str) -> Result<String, MappingError> {
        self.optional_str(field)?.ok_or_else(|| self.missing(field))
    }

    /// Blank strings count as absent.
    pub fn optional_str(&self, field: &'static str) -> Result<Option<String>, MappingError> {
        match self.value(field) {
            None => Ok(None),
            Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.trim().to_string())),
            Some(_) => Err(self.invalid(field, "a string")),
        }
    }

    pub fn optional_bool(&self, field: &'static str) -> Result<Option<bool>, MappingError> {
        match self.value(field) {
            None => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(_) => Err(self.invalid(field, "a boolean")),
        }
    }

    pub fn optional_u32(&self, field: &'static str) -> Result<Option<u32>, MappingError> {
        match self.value(field) {
            None => Ok(None),
            Some(value) => value
                .as_u64()
                .and_then(|n| u32::try_from(n).ok())
                .map(Some)
                .ok_or_else(|| self.invalid(field, "a non-negative integer")),
        }
    }

    fn link(&self, field: &'static str, expected: LinkType) -> Result<Option<String>, MappingError> {
        let Some(value) = self.value(field) else {
            return Ok(None);
        };
        match Link::from_value(value) {
            Some((link_type, id)) if link_type == expected => Ok(Some(id)),
            _ => Err(self.invalid(
                field,
                match expected {
                    LinkType::Entry => "an entry link",
                    LinkType::Asset => "an asset link",
                },
            )),
        }
    }

    pub fn optional_asset_link(&self, field: &'static str) -> Result<Option<String>, MappingError> {
        self.link(field, LinkType::Asset)
    }

    pub fn required_entry_link(&self, field: &'static str) -> Result<String, MappingError> {
        self.link(field, LinkType::Entry)?.ok_or_else(|| self.missing(field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(fields: Value) -> Entry {
        serde_json::from_value(json!({
            "sys": { "id": "e1", "contentType": { "sys": { "id": "team" } } },
            "fields": fields
        }))
        .unwrap()
    }

    #[test]
    fn wrong_content_type_is_rejected() {
        let entry = entry(json!({}));
        let err = FieldReader::new(&entry, "season").err().unwrap();
        assert!(matches!(err, MappingError::WrongContentType { found, .. } if found == "team"));
    }

    #[test]
    fn required_field_reports_name() {
        let entry = entry(json!({ "name": "   " }));
        let reader = FieldReader::new(&entry, "team").unwrap();
        assert_eq!(
            reader.required_str("name"),
            Err(MappingError::MissingField {
                content_type: "team",
                entry_id: "e1".to_string(),
                field: "name"
            })
        );
    }

    #[test]
    fn typed_accessors() {
        let entry = entry(json!({
            "name": " Harbour Town ",
            "flag": true,
            "count": 3,
            "logo": { "sys": { "type": "Link", "linkType": "Asset", "id": "a1" } }
        }));
        let reader = FieldReader::new(&entry, "team").unwrap();
        assert_eq!(reader.required_str("name").unwrap(), "Harbour Town");
        assert_eq!(reader.optional_bool("flag").unwrap(), Some(true));
        assert_eq!(reader.optional_u32("count").unwrap(), Some(3));
        assert_eq!(reader.optional_asset_link("logo").unwrap(), Some("a1".to_string()));
        assert!(reader.required_entry_link("logo").is_err());
        assert!(reader.optional_u32("name").is_err());
    }
}

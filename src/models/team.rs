// src/models/team.rs
use serde::{Deserialize, Serialize};

use crate::content::Entry;
use crate::models::mapping::{FieldReader, MappingError};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub short_name: String,
    pub slug: Option<String>,
    pub logo_id: Option<String>,
    pub is_supported_team: bool,
}

impl Team {
    pub const CONTENT_TYPE: &'static str = "team";

    pub fn from_entry(entry: &Entry) -> Result<Self, MappingError> {
        let fields = FieldReader::new(entry, Self::CONTENT_TYPE)?;
        let name = fields.required_str("name")?;
        let short_name = fields.optional_str("shortName")?.unwrap_or_else(|| name.clone());

        Ok(Self {
            id: fields.entry_id(),
            short_name,
            slug: fields.optional_str("slug")?,
            logo_id: fields.optional_asset_link("logo")?,
            is_supported_team: fields.optional_bool("isSupportedTeam")?.unwrap_or(false),
            name,
        })
    }

    /// Whether a table row refers to this team. Slugs win when both sides
    /// carry one; otherwise names are compared case-insensitively.
    pub fn is_named_by(&self, team_slug: Option<&str>, team_name: &str) -> bool {
        if let (Some(ours), Some(theirs)) = (self.slug.as_deref(), team_slug) {
            return ours == theirs;
        }
        let team_name = team_name.trim();
        self.name.eq_ignore_ascii_case(team_name) || self.short_name.eq_ignore_ascii_case(team_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn team_entry(fields: serde_json::Value) -> Entry {
        serde_json::from_value(json!({
            "sys": { "id": "t1", "contentType": { "sys": { "id": "team" } } },
            "fields": fields
        }))
        .unwrap()
    }

    #[test]
    fn maps_team_with_defaults() {
        let team = Team::from_entry(&team_entry(json!({ "name": "Harbour Town" }))).unwrap();
        assert_eq!(team.short_name, "Harbour Town");
        assert!(!team.is_supported_team);
        assert_eq!(team.logo_id, None);
    }

    #[test]
    fn missing_name_fails_fast() {
        let err = Team::from_entry(&team_entry(json!({ "shortName": "HTFC" }))).unwrap_err();
        assert!(matches!(err, MappingError::MissingField { field: "name", .. }));
    }

    #[test]
    fn standing_reference_matching() {
        let team = Team::from_entry(&team_entry(json!({
            "name": "Harbour Town",
            "shortName": "Harbour",
            "slug": "harbour-town"
        })))
        .unwrap();

        assert!(team.is_named_by(Some("harbour-town"), "anything"));
        assert!(!team.is_named_by(Some("rivals"), "Harbour Town"));
        assert!(team.is_named_by(None, "harbour town"));
        assert!(team.is_named_by(None, "Harbour"));
        assert!(!team.is_named_by(None, "Rivals United"));
    }
}

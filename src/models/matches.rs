// src/models/matches.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::content::Entry;
use crate::models::mapping::{FieldReader, MappingError};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Score {
    pub home: u32,
    pub away: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Match {
    pub id: String,
    pub slug: String,
    pub title: String,
    /// Raw CMS value; parsed when a view-model is assembled
    pub date: String,
    pub location: Option<String>,
    pub competition: Option<String>,
    pub home_team_id: String,
    pub away_team_id: String,
    pub score: Option<Score>,
    pub home_scorers: Vec<String>,
    pub away_scorers: Vec<String>,
    pub hero_image_id: Option<String>,
    pub ticket_link: Option<String>,
    pub report: Option<String>,
}

impl Match {
    pub const CONTENT_TYPE: &'static str = "match";

    pub fn from_entry(entry: &Entry) -> Result<Self, MappingError> {
        let fields = FieldReader::new(entry, Self::CONTENT_TYPE)?;

        let score = match (fields.optional_u32("homeScore")?, fields.optional_u32("awayScore")?) {
            (Some(home), Some(away)) => Some(Score { home, away }),
            (None, None) => None,
            _ => {
                return Err(MappingError::PartialScore {
                    entry_id: fields.entry_id(),
                })
            }
        };

        Ok(Self {
            id: fields.entry_id(),
            slug: fields.required_str("slug")?,
            title: fields.required_str("title")?,
            date: fields.required_str("date")?,
            location: fields.optional_str("location")?,
            competition: fields.optional_str("competition")?,
            home_team_id: fields.required_entry_link("homeTeam")?,
            away_team_id: fields.required_entry_link("awayTeam")?,
            score,
            home_scorers: normalize_scorers(fields.value("homeScorers")),
            away_scorers: normalize_scorers(fields.value("awayScorers")),
            hero_image_id: fields.optional_asset_link("heroImage")?,
            ticket_link: fields.optional_str("ticketLink")?,
            report: fields.optional_str("report")?,
        })
    }

    pub fn is_played(&self) -> bool {
        self.score.is_some()
    }
}

/// Scorers arrive either as `"A, B"` or as `["A", "B"]`. Both become a
/// trimmed list without blanks; anything else is an empty list.
pub fn normalize_scorers(value: Option<&Value>) -> Vec<String> {
    let names: Vec<&str> = match value {
        Some(Value::String(joined)) => joined.split(',').collect(),
        Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect(),
        _ => Vec::new(),
    };

    names
        .into_iter()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

// src/models/season.rs
use serde::{Deserialize, Serialize};

use crate::content::Entry;
use crate::models::mapping::{FieldReader, MappingError};

/// One league-table row as stored in a season's `table` field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Standing {
    pub team: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_slug: Option<String>,
    pub position: u32,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    /// Computed from goals when the content store omits it
    #[serde(default)]
    pub goal_difference: Option<i32>,
    pub points: u32,
}

impl Standing {
    pub fn goal_difference(&self) -> i32 {
        self.goals_for as i32 - self.goals_against as i32
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Season {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub active: bool,
    pub logo_id: Option<String>,
    /// Ordered by position, 1..=n
    pub table: Vec<Standing>,
}

impl Season {
    pub const CONTENT_TYPE: &'static str = "season";

    pub fn from_entry(entry: &Entry) -> Result<Self, MappingError> {
        let fields = FieldReader::new(entry, Self::CONTENT_TYPE)?;
        let entry_id = fields.entry_id();

        let table = match fields.value("table") {
            None => Vec::new(),
            Some(value) => {
                let rows: Vec<Standing> = serde_json::from_value(value.clone()).map_err(|e| {
                    MappingError::InvalidTable {
                        entry_id: entry_id.clone(),
                        reason: e.to_string(),
                    }
                })?;
                validate_table(&entry_id, rows)?
            }
        };

        Ok(Self {
            slug: fields.required_str("slug")?,
            title: fields.required_str("title")?,
            active: fields.optional_bool("active")?.unwrap_or(false),
            logo_id: fields.optional_asset_link("logo")?,
            table,
            id: entry_id,
        })
    }
}

/// Sorts rows by position and checks positions run 1..=n without gaps or
/// repeats, and that goal difference agrees with the goal counts.
fn validate_table(entry_id: &str, mut rows: Vec<Standing>) -> Result<Vec<Standing>, MappingError> {
    rows.sort_by_key(|row| row.position);

    for (index, row) in rows.iter_mut().enumerate() {
        let expected = index as u32 + 1;
        if row.position != expected {
            return Err(MappingError::InvalidTable {
                entry_id: entry_id.to_string(),
                reason: format!("expected position {} but found {}", expected, row.position),
            });
        }

        let computed = row.goal_difference();
        match row.goal_difference {
            Some(stored) if stored != computed => {
                return Err(MappingError::InvalidTable {
                    entry_id: entry_id.to_string(),
                    reason: format!(
                        "{} has goal difference {} but scored {} and conceded {}",
                        row.team, stored, row.goals_for, row.goals_against
                    ),
                });
            }
            _ => row.goal_difference = Some(computed),
        }
    }

    Ok(rows)
}

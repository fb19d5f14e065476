use serde::Serialize;
use std::sync::Arc;

use crate::content::{ContentError, ContentQuery, ContentStore, EntryCollection};
use crate::league::table_window::window;
use crate::models::season::{Season, Standing};
use crate::services::team_service::{TeamRoster, TeamService};
use crate::site::assets::resolve_asset_url;

#[derive(Debug, Clone, Serialize)]
pub struct SeasonView {
    pub slug: String,
    pub title: String,
    pub active: bool,
    pub logo_url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StandingRow {
    #[serde(flatten)]
    pub standing: Standing,
    pub logo_url: Option<String>,
    pub is_supported_team: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct LeagueTableView {
    pub season: SeasonView,
    pub rows: Vec<StandingRow>,
    /// Set when the requested season could not be loaded and the active
    /// season was served instead
    pub fell_back_to_active: bool,
}

/// A season together with the query result it was mapped from.
pub struct SeasonLookup {
    pub season: Season,
    pub collection: EntryCollection,
    pub fell_back_to_active: bool,
}

/// Service responsible for season lookup and league tables
pub struct SeasonService {
    store: Arc<dyn ContentStore>,
}

impl SeasonService {
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }

    /// Get a season by its slug
    pub async fn season_by_slug(&self, slug: &str) -> Result<SeasonLookup, ContentError> {
        let query = ContentQuery::new(Season::CONTENT_TYPE)
            .field_eq("slug", slug)
            .limit(1)
            .include(1);
        let collection = self.store.entries(&query).await?;
        let entry = collection
            .first()
            .ok_or_else(|| ContentError::not_found(Season::CONTENT_TYPE, slug))?;
        let season = Season::from_entry(entry)?;

        Ok(SeasonLookup { season, collection, fell_back_to_active: false })
    }

    /// Get the currently active season. Two active seasons is a content
    /// error rather than a guess.
    pub async fn active_season(&self) -> Result<SeasonLookup, ContentError> {
        let query = ContentQuery::new(Season::CONTENT_TYPE)
            .field_eq("active", true)
            .limit(2)
            .include(1);
        let collection = self.store.entries(&query).await?;

        match collection.items.len() {
            0 => Err(ContentError::not_found(Season::CONTENT_TYPE, "active")),
            1 => {
                let season = Season::from_entry(&collection.items[0])?;
                Ok(SeasonLookup { season, collection, fell_back_to_active: false })
            }
            _ => Err(ContentError::AmbiguousActiveSeason(collection.total.max(2) as usize)),
        }
    }

    /// Season by slug, falling back to the active season once. Without a
    /// slug the active season is served directly.
    #[tracing::instrument(name = "Look up season", skip(self))]
    pub async fn season_or_active(&self, slug: Option<&str>) -> Result<SeasonLookup, ContentError> {
        let Some(slug) = slug else {
            return self.active_season().await;
        };

        match self.season_by_slug(slug).await {
            Ok(lookup) => Ok(lookup),
            Err(e) => {
                tracing::warn!("Season '{}' unavailable ({}), falling back to the active season", slug, e);
                let mut lookup = self.active_season().await?;
                lookup.fell_back_to_active = true;
                Ok(lookup)
            }
        }
    }

    /// Full league table with team crests
    pub async fn league_table(&self, slug: Option<&str>) -> Result<LeagueTableView, ContentError> {
        let team_service = TeamService::new(self.store.clone());
        let (season, roster) = futures::join!(self.season_or_active(slug), team_service.roster());

        let lookup = season?;
        let roster = roster.unwrap_or_else(|e| {
            tracing::warn!("Team lookup failed, rendering table without crests: {}", e);
            TeamRoster::default()
        });

        Ok(build_table_view(&lookup, &roster, &lookup.season.table))
    }

    /// The three rows around the supported team, for the homepage
    pub async fn table_snapshot(&self, slug: Option<&str>) -> Result<LeagueTableView, ContentError> {
        let mut view = self.league_table(slug).await?;
        view.rows = window(&view.rows, |row| row.is_supported_team).to_vec();
        Ok(view)
    }
}

fn build_table_view(lookup: &SeasonLookup, roster: &TeamRoster, rows: &[Standing]) -> LeagueTableView {
    let supported = roster.supported_team();

    let rows = rows
        .iter()
        .map(|standing| {
            let team = roster.team_for(standing);
            StandingRow {
                standing: standing.clone(),
                logo_url: team.and_then(|team| roster.view_of(team).logo_url),
                is_supported_team: match (team, supported) {
                    (Some(team), Some(supported)) => team.id == supported.id,
                    _ => false,
                },
            }
        })
        .collect();

    LeagueTableView {
        season: SeasonView {
            slug: lookup.season.slug.clone(),
            title: lookup.season.title.clone(),
            active: lookup.season.active,
            logo_url: resolve_asset_url(lookup.season.logo_id.as_deref(), &lookup.collection),
        },
        rows,
        fell_back_to_active: lookup.fell_back_to_active,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::FixtureContentStore;
    use serde_json::{json, Value};

    fn standing(team: &str, position: u32) -> Value {
        json!({
            "team": team, "position": position, "played": 4, "won": 2, "drawn": 1, "lost": 1,
            "goalsFor": 6, "goalsAgainst": 4, "points": 7
        })
    }

    fn season(id: &str, slug: &str, active: bool, teams: &[&str]) -> Value {
        let table: Vec<Value> = teams
            .iter()
            .enumerate()
            .map(|(i, team)| standing(team, i as u32 + 1))
            .collect();
        json!({
            "sys": { "id": id, "contentType": { "sys": { "id": "season" } } },
            "fields": { "slug": slug, "title": slug, "active": active, "table": table }
        })
    }

    fn team(id: &str, name: &str, supported: bool) -> Value {
        json!({
            "sys": { "id": id, "contentType": { "sys": { "id": "team" } } },
            "fields": { "name": name, "isSupportedTeam": supported }
        })
    }

    fn service(items: Vec<Value>) -> SeasonService {
        let store = FixtureContentStore::from_json(&json!({ "items": items }).to_string()).unwrap();
        SeasonService::new(Arc::new(store))
    }

    #[tokio::test]
    async fn unknown_slug_falls_back_to_active() {
        let service = service(vec![
            season("s1", "2023-24", false, &["A", "B"]),
            season("s2", "2024-25", true, &["A", "B"]),
        ]);

        let lookup = service.season_or_active(Some("1999-00")).await.unwrap();
        assert_eq!(lookup.season.slug, "2024-25");
        assert!(lookup.fell_back_to_active);

        let lookup = service.season_or_active(Some("2023-24")).await.unwrap();
        assert_eq!(lookup.season.slug, "2023-24");
        assert!(!lookup.fell_back_to_active);
    }

    #[tokio::test]
    async fn failed_fallback_is_surfaced() {
        let service = service(vec![season("s1", "2023-24", false, &["A"])]);
        let err = service.season_or_active(Some("missing")).await.err().unwrap();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn two_active_seasons_are_rejected() {
        let service = service(vec![
            season("s1", "2023-24", true, &["A"]),
            season("s2", "2024-25", true, &["A"]),
        ]);
        let err = service.active_season().await.err().unwrap();
        assert!(matches!(err, ContentError::AmbiguousActiveSeason(2)));
    }

    #[tokio::test]
    async fn snapshot_centres_supported_team() {
        let mut items = vec![season("s1", "2024-25", true, &["A", "B", "C", "Harbour Town", "E"])];
        items.push(team("t1", "Harbour Town", true));
        items.push(team("t2", "B", false));
        let service = service(items);

        let view = service.table_snapshot(None).await.unwrap();
        let positions: Vec<u32> = view.rows.iter().map(|row| row.standing.position).collect();
        assert_eq!(positions, vec![3, 4, 5]);
        assert!(view.rows[1].is_supported_team);
        assert!(!view.rows[0].is_supported_team);

        let full = service.league_table(Some("2024-25")).await.unwrap();
        assert_eq!(full.rows.len(), 5);
    }
}

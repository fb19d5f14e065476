// src/site/views.rs
//! Display-ready records. Built per request from typed content and the
//! includes of the query that fetched it; never stored.

use chrono_tz::Tz;
use serde::Serialize;

use crate::content::EntryCollection;
use crate::models::article::Article;
use crate::models::matches::{Match, Score};
use crate::models::team::Team;
use crate::site::assets::resolve_asset_url;
use crate::site::dates::{format_kickoff, format_match_date, parse_or_warn};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TeamView {
    pub id: String,
    pub name: String,
    pub short_name: String,
    pub slug: Option<String>,
    pub logo_url: Option<String>,
    pub is_supported_team: bool,
}

impl TeamView {
    pub fn from_team(team: &Team, collection: &EntryCollection) -> Self {
        Self {
            id: team.id.clone(),
            name: team.name.clone(),
            short_name: team.short_name.clone(),
            slug: team.slug.clone(),
            logo_url: resolve_asset_url(team.logo_id.as_deref(), collection),
            is_supported_team: team.is_supported_team,
        }
    }

    /// Follows a team link through the includes. A team that is missing
    /// or fails to map is left out rather than failing the page.
    pub fn resolve(team_id: &str, collection: &EntryCollection) -> Option<Self> {
        let Some(entry) = collection.find_entry(team_id) else {
            tracing::debug!("Team {} missing from resolved includes", team_id);
            return None;
        };
        match Team::from_entry(entry) {
            Ok(team) => Some(Self::from_team(&team, collection)),
            Err(e) => {
                tracing::warn!("Skipping linked team {}: {}", team_id, e);
                None
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MatchReport {
    pub slug: String,
    pub title: String,
    /// `dd MMM yyyy`
    pub date: Option<String>,
    /// `HH:mm`
    pub kickoff: Option<String>,
    pub home_team: Option<TeamView>,
    pub away_team: Option<TeamView>,
    pub hero_image_url: Option<String>,
    pub location: Option<String>,
    pub competition: Option<String>,
    pub ticket_link: Option<String>,
    pub score: Option<Score>,
    pub home_scorers: Vec<String>,
    pub away_scorers: Vec<String>,
    pub report: Option<String>,
}

/// Flattens a match and everything it links to.
pub fn assemble_match_report(m: &Match, collection: &EntryCollection, timezone: Tz) -> MatchReport {
    let kickoff = parse_or_warn(&m.date, timezone, &format!("match {}", m.slug));

    MatchReport {
        slug: m.slug.clone(),
        title: m.title.clone(),
        date: kickoff.as_ref().map(format_match_date),
        kickoff: kickoff.as_ref().map(format_kickoff),
        home_team: TeamView::resolve(&m.home_team_id, collection),
        away_team: TeamView::resolve(&m.away_team_id, collection),
        hero_image_url: resolve_asset_url(m.hero_image_id.as_deref(), collection),
        location: m.location.clone(),
        competition: m.competition.clone(),
        ticket_link: m.ticket_link.clone(),
        score: m.score,
        home_scorers: m.home_scorers.clone(),
        away_scorers: m.away_scorers.clone(),
        report: m.report.clone(),
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ArticleView {
    pub slug: String,
    pub title: String,
    pub summary: Option<String>,
    pub published: Option<String>,
    pub cover_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

pub fn assemble_article(article: &Article, collection: &EntryCollection, timezone: Tz, with_body: bool) -> ArticleView {
    let published = parse_or_warn(&article.publish_date, timezone, &format!("article {}", article.slug));

    ArticleView {
        slug: article.slug.clone(),
        title: article.title.clone(),
        summary: article.summary.clone(),
        published: published.as_ref().map(format_match_date),
        cover_image_url: resolve_asset_url(article.cover_image_id.as_deref(), collection),
        body: if with_body { article.body.clone() } else { None },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Entry;
    use chrono_tz::Europe::London;
    use serde_json::json;

    fn collection() -> EntryCollection {
        serde_json::from_value(json!({
            "items": [{
                "sys": { "id": "m1", "contentType": { "sys": { "id": "match" } } },
                "fields": {
                    "slug": "harbour-v-rivals",
                    "title": "Harbour Town v Rivals United",
                    "date": "2024-08-17T15:00",
                    "location": "The Quay",
                    "competition": "League One",
                    "homeTeam": { "sys": { "type": "Link", "linkType": "Entry", "id": "t1" } },
                    "awayTeam": { "sys": { "type": "Link", "linkType": "Entry", "id": "t2" } },
                    "heroImage": { "sys": { "type": "Link", "linkType": "Asset", "id": "hero" } },
                    "homeScore": 3, "awayScore": 1,
                    "homeScorers": "Smith, Jones, Smith"
                }
            }],
            "includes": {
                "Entry": [{
                    "sys": { "id": "t1", "contentType": { "sys": { "id": "team" } } },
                    "fields": {
                        "name": "Harbour Town", "shortName": "Harbour", "isSupportedTeam": true,
                        "logo": { "sys": { "type": "Link", "linkType": "Asset", "id": "crest" } }
                    }
                }],
                "Asset": [
                    { "sys": { "id": "crest" }, "fields": { "file": { "url": "//images.example/crest.png" } } }
                ]
            }
        }))
        .unwrap()
    }

    fn first_match(collection: &EntryCollection) -> Match {
        Match::from_entry(collection.first().unwrap()).unwrap()
    }

    #[test]
    fn report_is_flattened() {
        let collection = collection();
        let report = assemble_match_report(&first_match(&collection), &collection, London);

        assert_eq!(report.date.as_deref(), Some("17 Aug 2024"));
        assert_eq!(report.kickoff.as_deref(), Some("15:00"));
        assert_eq!(report.location.as_deref(), Some("The Quay"));
        assert_eq!(report.score, Some(Score { home: 3, away: 1 }));
        assert_eq!(report.home_scorers, vec!["Smith", "Jones", "Smith"]);

        let home = report.home_team.unwrap();
        assert_eq!(home.name, "Harbour Town");
        assert!(home.is_supported_team);
        assert_eq!(home.logo_url.as_deref(), Some("https://images.example/crest.png"));
    }

    #[test]
    fn missing_references_degrade_to_none() {
        let collection = collection();
        let report = assemble_match_report(&first_match(&collection), &collection, London);

        // t2 and the hero asset were never included
        assert_eq!(report.away_team, None);
        assert_eq!(report.hero_image_url, None);
    }

    #[test]
    fn malformed_date_drops_date_fields_only() {
        let collection = collection();
        let mut m = first_match(&collection);
        m.date = "TBC".to_string();
        let report = assemble_match_report(&m, &collection, London);
        assert_eq!(report.date, None);
        assert_eq!(report.kickoff, None);
        assert_eq!(report.title, "Harbour Town v Rivals United");
    }

    #[test]
    fn unmappable_team_is_skipped() {
        let mut collection = collection();
        let broken: Entry = serde_json::from_value(json!({
            "sys": { "id": "t2", "contentType": { "sys": { "id": "team" } } },
            "fields": { "shortName": "Rivals" }
        }))
        .unwrap();
        collection.includes.entries.push(broken);
        assert_eq!(TeamView::resolve("t2", &collection), None);
    }

    #[test]
    fn article_body_only_when_requested() {
        let article = Article {
            id: "a1".to_string(),
            slug: "welcome".to_string(),
            title: "Welcome".to_string(),
            summary: Some("Hello".to_string()),
            publish_date: "2024-07-01T09:00".to_string(),
            cover_image_id: Some("crest".to_string()),
            body: Some("Long text".to_string()),
        };
        let collection = collection();

        let card = assemble_article(&article, &collection, London, false);
        assert_eq!(card.body, None);
        assert_eq!(card.published.as_deref(), Some("01 Jul 2024"));
        assert_eq!(card.cover_image_url.as_deref(), Some("https://images.example/crest.png"));

        let full = assemble_article(&article, &collection, London, true);
        assert_eq!(full.body.as_deref(), Some("Long text"));
    }
}

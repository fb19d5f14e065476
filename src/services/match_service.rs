use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::Serialize;
use std::sync::Arc;

use crate::content::{ContentError, ContentQuery, ContentStore, EntryCollection};
use crate::league::countdown::{CountdownBreakdown, CountdownService};
use crate::models::matches::Match;
use crate::site::dates::parse_or_warn;
use crate::site::views::{assemble_match_report, MatchReport};

const MATCH_INCLUDE_DEPTH: u8 = 2;
const NEXT_MATCH_PAGE_SIZE: u32 = 20;

#[derive(Debug, Clone, Serialize)]
pub struct NextMatch {
    pub report: MatchReport,
    /// Absent when the fixture's date could not be read
    pub countdown: Option<CountdownBreakdown>,
}

/// Builds match view-models from the content store
pub struct MatchService {
    store: Arc<dyn ContentStore>,
    timezone: Tz,
}

impl MatchService {
    pub fn new(store: Arc<dyn ContentStore>, timezone: Tz) -> Self {
        Self { store, timezone }
    }

    fn assemble_all(&self, collection: &EntryCollection) -> Result<Vec<MatchReport>, ContentError> {
        collection
            .items
            .iter()
            .map(|entry| {
                let m = Match::from_entry(entry)?;
                Ok(assemble_match_report(&m, collection, self.timezone))
            })
            .collect()
    }

    /// Match page for a slug
    #[tracing::instrument(name = "Assemble match report", skip(self))]
    pub async fn match_report(&self, slug: &str) -> Result<MatchReport, ContentError> {
        let query = ContentQuery::new(Match::CONTENT_TYPE)
            .field_eq("slug", slug)
            .limit(1)
            .include(MATCH_INCLUDE_DEPTH);
        let collection = self.store.entries(&query).await?;

        let entry = collection
            .first()
            .ok_or_else(|| ContentError::not_found(Match::CONTENT_TYPE, slug))?;
        let m = Match::from_entry(entry)?;

        Ok(assemble_match_report(&m, &collection, self.timezone))
    }

    /// Unplayed matches, soonest first
    pub async fn fixtures(&self, limit: u32) -> Result<Vec<MatchReport>, ContentError> {
        let query = ContentQuery::new(Match::CONTENT_TYPE)
            .field_exists("homeScore", false)
            .order_by("date", false)
            .limit(limit)
            .include(MATCH_INCLUDE_DEPTH);
        let collection = self.store.entries(&query).await?;
        self.assemble_all(&collection)
    }

    /// Played matches, most recent first
    pub async fn results(&self, limit: u32) -> Result<Vec<MatchReport>, ContentError> {
        let query = ContentQuery::new(Match::CONTENT_TYPE)
            .field_exists("homeScore", true)
            .order_by("date", true)
            .limit(limit)
            .include(MATCH_INCLUDE_DEPTH);
        let collection = self.store.entries(&query).await?;
        self.assemble_all(&collection)
    }

    /// The first unplayed match kicking off after `now`, with a countdown.
    ///
    /// Unplayed fixtures are paged through in date order until one with a
    /// future kickoff turns up, so stale fixtures that never got a score
    /// cannot hide it. Fixtures with unreadable dates are skipped when
    /// choosing; if none has a readable future date, the first unreadable
    /// one is returned without a countdown.
    pub async fn next_match(&self, now: DateTime<Utc>) -> Result<Option<NextMatch>, ContentError> {
        let countdown = CountdownService::new();
        let mut undated: Option<NextMatch> = None;
        let mut skip = 0u32;

        loop {
            let query = ContentQuery::new(Match::CONTENT_TYPE)
                .field_exists("homeScore", false)
                .order_by("date", false)
                .limit(NEXT_MATCH_PAGE_SIZE)
                .skip(skip)
                .include(MATCH_INCLUDE_DEPTH);
            let collection = self.store.entries(&query).await?;

            let mut fixtures = Vec::with_capacity(collection.items.len());
            for entry in &collection.items {
                let m = Match::from_entry(entry)?;
                let kickoff = parse_or_warn(&m.date, self.timezone, &format!("match {}", m.slug))
                    .map(|dt| dt.with_timezone(&Utc));
                fixtures.push((m, kickoff));
            }

            let upcoming = fixtures
                .iter()
                .filter_map(|(m, kickoff)| kickoff.filter(|k| *k > now).map(|k| (m, k)))
                .min_by_key(|(_, kickoff)| *kickoff);

            if let Some((m, kickoff)) = upcoming {
                return Ok(Some(NextMatch {
                    report: assemble_match_report(m, &collection, self.timezone),
                    countdown: Some(countdown.breakdown(kickoff, now)),
                }));
            }

            if undated.is_none() {
                undated = fixtures
                    .iter()
                    .find(|(_, kickoff)| kickoff.is_none())
                    .map(|(m, _)| NextMatch {
                        report: assemble_match_report(m, &collection, self.timezone),
                        countdown: None,
                    });
            }

            let fetched = collection.items.len() as u32;
            skip += fetched;
            if fetched < NEXT_MATCH_PAGE_SIZE || u64::from(skip) >= collection.total {
                break;
            }
        }

        Ok(undated)
    }
}

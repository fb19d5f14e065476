use async_trait::async_trait;
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::path::Path;

use crate::content::entry::Includes;
use crate::content::query::FieldFilter;
use crate::content::{Asset, ContentError, ContentQuery, ContentStore, Entry, EntryCollection, LinkType};

const DEFAULT_PAGE_SIZE: usize = 100;
const DEFAULT_INCLUDE_DEPTH: u8 = 2;

/// In-memory content store answering queries the way the delivery API does.
///
/// The backing document uses the delivery API's response shape: every
/// entry under `items`, assets under `includes.Asset`.
#[derive(Debug, Clone, Default)]
pub struct FixtureContentStore {
    entries: Vec<Entry>,
    assets: Vec<Asset>,
}

impl FixtureContentStore {
    pub fn new(entries: Vec<Entry>, assets: Vec<Asset>) -> Self {
        Self { entries, assets }
    }

    pub fn from_json(document: &str) -> Result<Self, ContentError> {
        let collection: EntryCollection = serde_json::from_str(document)
            .map_err(|e| ContentError::Fixture(e.to_string()))?;
        let mut entries = collection.items;
        entries.extend(collection.includes.entries);
        Ok(Self::new(entries, collection.includes.assets))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ContentError> {
        let path = path.as_ref();
        let document = std::fs::read_to_string(path)
            .map_err(|e| ContentError::Fixture(format!("{}: {}", path.display(), e)))?;
        let store = Self::from_json(&document)?;
        tracing::info!(
            "Loaded content fixture {} ({} entries, {} assets)",
            path.display(),
            store.entries.len(),
            store.assets.len()
        );
        Ok(store)
    }

    fn matches(entry: &Entry, query: &ContentQuery) -> bool {
        if entry.content_type_id() != Some(query.content_type.as_str()) {
            return false;
        }
        query.filters.iter().all(|filter| match filter {
            FieldFilter::Equals { field, value } => entry
                .field(field)
                .map(|v| value_matches(v, value))
                .unwrap_or(false),
            FieldFilter::Exists { field, exists } => entry.field(field).is_some() == *exists,
        })
    }

    fn resolve_includes(&self, items: &[Entry], depth: u8) -> Includes {
        let mut includes = Includes::default();
        let mut seen_entries: HashSet<String> = items.iter().map(|e| e.sys.id.clone()).collect();
        let mut seen_assets: HashSet<String> = HashSet::new();
        let mut frontier: Vec<Entry> = items.to_vec();

        for _ in 0..depth {
            let mut next = Vec::new();
            for entry in &frontier {
                for (link_type, id) in entry.links() {
                    match link_type {
                        LinkType::Entry => {
                            if !seen_entries.insert(id.clone()) {
                                continue;
                            }
                            if let Some(linked) = self.entries.iter().find(|e| e.sys.id == id) {
                                includes.entries.push(linked.clone());
                                next.push(linked.clone());
                            }
                        }
                        LinkType::Asset => {
                            if !seen_assets.insert(id.clone()) {
                                continue;
                            }
                            if let Some(asset) = self.assets.iter().find(|a| a.sys.id == id) {
                                includes.assets.push(asset.clone());
                            }
                        }
                    }
                }
            }
            if next.is_empty() {
                break;
            }
            frontier = next;
        }

        includes
    }
}

fn value_matches(value: &Value, expected: &str) -> bool {
    match value {
        Value::String(s) => s == expected,
        Value::Bool(b) => b.to_string() == expected,
        Value::Number(n) => n.to_string() == expected,
        _ => false,
    }
}

fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(Value::Number(x)), Some(Value::Number(y))) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        _ => Ordering::Equal,
    }
}

#[async_trait]
impl ContentStore for FixtureContentStore {
    async fn entries(&self, query: &ContentQuery) -> Result<EntryCollection, ContentError> {
        let mut matched: Vec<Entry> = self
            .entries
            .iter()
            .filter(|entry| Self::matches(entry, query))
            .cloned()
            .collect();

        if let Some(order) = &query.order {
            matched.sort_by(|a, b| {
                let ordering = compare_values(a.field(&order.field), b.field(&order.field));
                if order.descending { ordering.reverse() } else { ordering }
            });
        }

        let total = matched.len();
        let skip = query.skip.map(|s| s as usize).unwrap_or(0);
        let limit = query.limit.map(|l| l as usize).unwrap_or(DEFAULT_PAGE_SIZE);
        let items: Vec<Entry> = matched.into_iter().skip(skip).take(limit).collect();
        let includes = self.resolve_includes(&items, query.include.unwrap_or(DEFAULT_INCLUDE_DEPTH));

        Ok(EntryCollection {
            items,
            includes,
            total: total as u64,
            skip: skip as u64,
            limit: limit as u64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn store() -> FixtureContentStore {
        FixtureContentStore::from_json(
            &json!({
                "items": [
                    { "sys": { "id": "t1", "contentType": { "sys": { "id": "team" } } },
                      "fields": { "name": "Harbour Town", "logo": { "sys": { "type": "Link", "linkType": "Asset", "id": "a1" } } } },
                    { "sys": { "id": "m1", "contentType": { "sys": { "id": "match" } } },
                      "fields": { "slug": "first", "date": "2024-08-10T15:00",
                                  "homeTeam": { "sys": { "type": "Link", "linkType": "Entry", "id": "t1" } } } },
                    { "sys": { "id": "m2", "contentType": { "sys": { "id": "match" } } },
                      "fields": { "slug": "second", "date": "2024-08-17T15:00", "homeScore": 2, "awayScore": 0 } }
                ],
                "includes": {
                    "Asset": [ { "sys": { "id": "a1" }, "fields": { "file": { "url": "//img/logo.png" } } } ]
                }
            })
            .to_string(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn filters_by_content_type_and_field() {
        let result = store()
            .entries(&ContentQuery::new("match").field_eq("slug", "second"))
            .await
            .unwrap();
        assert_eq!(result.total, 1);
        assert_eq!(result.items[0].sys.id, "m2");
    }

    #[tokio::test]
    async fn exists_filter_and_ordering() {
        let store = store();
        let upcoming = store
            .entries(&ContentQuery::new("match").field_exists("homeScore", false))
            .await
            .unwrap();
        assert_eq!(upcoming.items.len(), 1);
        assert_eq!(upcoming.items[0].sys.id, "m1");

        let newest_first = store
            .entries(&ContentQuery::new("match").order_by("date", true))
            .await
            .unwrap();
        let ids: Vec<&str> = newest_first.items.iter().map(|e| e.id()).collect();
        assert_eq!(ids, vec!["m2", "m1"]);
    }

    #[tokio::test]
    async fn includes_follow_links_to_requested_depth() {
        let store = store();
        let query = ContentQuery::new("match").field_eq("slug", "first");

        let deep = store.entries(&query.clone().include(2)).await.unwrap();
        assert!(deep.find_entry("t1").is_some());
        assert!(deep.find_asset("a1").is_some());

        let shallow = store.entries(&query.include(1)).await.unwrap();
        assert!(shallow.find_entry("t1").is_some());
        assert!(shallow.find_asset("a1").is_none());
    }
}

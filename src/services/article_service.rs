use chrono_tz::Tz;
use std::sync::Arc;

use crate::content::{ContentError, ContentQuery, ContentStore};
use crate::models::article::Article;
use crate::site::views::{assemble_article, ArticleView};

pub struct ArticleService {
    store: Arc<dyn ContentStore>,
    timezone: Tz,
}

impl ArticleService {
    pub fn new(store: Arc<dyn ContentStore>, timezone: Tz) -> Self {
        Self { store, timezone }
    }

    /// Article cards, newest first
    pub async fn latest(&self, limit: u32, skip: u32) -> Result<Vec<ArticleView>, ContentError> {
        let query = ContentQuery::new(Article::CONTENT_TYPE)
            .order_by("publishDate", true)
            .limit(limit)
            .skip(skip)
            .include(1);
        let collection = self.store.entries(&query).await?;

        collection
            .items
            .iter()
            .map(|entry| {
                let article = Article::from_entry(entry)?;
                Ok(assemble_article(&article, &collection, self.timezone, false))
            })
            .collect()
    }

    /// Full article page
    #[tracing::instrument(name = "Assemble article", skip(self))]
    pub async fn article(&self, slug: &str) -> Result<ArticleView, ContentError> {
        let query = ContentQuery::new(Article::CONTENT_TYPE)
            .field_eq("slug", slug)
            .limit(1)
            .include(1);
        let collection = self.store.entries(&query).await?;

        let entry = collection
            .first()
            .ok_or_else(|| ContentError::not_found(Article::CONTENT_TYPE, slug))?;
        let article = Article::from_entry(entry)?;

        Ok(assemble_article(&article, &collection, self.timezone, true))
    }
}

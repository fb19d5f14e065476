use actix_web::{web, HttpResponse, Result};
use serde_json::json;
use std::sync::Arc;

use crate::config::settings::ClubContext;
use crate::content::ContentStore;
use crate::handlers::{content_error_response, PaginationQuery};
use crate::services::ArticleService;

/// Latest news, paginated
pub async fn get_articles(
    query: web::Query<PaginationQuery>,
    store: web::Data<Arc<dyn ContentStore>>,
    club: web::Data<ClubContext>,
) -> Result<HttpResponse> {
    let article_service = ArticleService::new(store.get_ref().clone(), club.timezone);
    let (limit, skip) = (query.limit(), query.skip());

    match article_service.latest(limit, skip).await {
        Ok(articles) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": articles,
            "pagination": {
                "limit": limit,
                "skip": skip
            }
        }))),
        Err(e) => Ok(content_error_response(&e, "Articles")),
    }
}

/// Single article page
#[tracing::instrument(name = "Get article", skip(store, club))]
pub async fn get_article(
    slug: String,
    store: web::Data<Arc<dyn ContentStore>>,
    club: web::Data<ClubContext>,
) -> Result<HttpResponse> {
    let article_service = ArticleService::new(store.get_ref().clone(), club.timezone);

    match article_service.article(&slug).await {
        Ok(article) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": article
        }))),
        Err(e) => Ok(content_error_response(&e, "Article")),
    }
}

use actix_web::{get, web, HttpResponse, Result};
use std::sync::Arc;

use crate::config::settings::ClubContext;
use crate::content::ContentStore;
use crate::handlers::article_handler;
use crate::handlers::PaginationQuery;

/// Latest news
#[get("/articles")]
async fn get_articles(
    query: web::Query<PaginationQuery>,
    store: web::Data<Arc<dyn ContentStore>>,
    club: web::Data<ClubContext>,
) -> Result<HttpResponse> {
    article_handler::get_articles(query, store, club).await
}

/// Single article by slug
#[get("/articles/{slug}")]
async fn get_article(
    path: web::Path<String>,
    store: web::Data<Arc<dyn ContentStore>>,
    club: web::Data<ClubContext>,
) -> Result<HttpResponse> {
    let slug = path.into_inner();
    article_handler::get_article(slug, store, club).await
}

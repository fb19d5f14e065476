use actix_web::{get, web, HttpResponse, Result};
use std::sync::Arc;

use crate::config::settings::ClubContext;
use crate::content::ContentStore;
use crate::handlers::match_handler;
use crate::handlers::PaginationQuery;

/// Next fixture with countdown
#[get("/matches/next")]
async fn get_next_match(
    store: web::Data<Arc<dyn ContentStore>>,
    club: web::Data<ClubContext>,
) -> Result<HttpResponse> {
    match_handler::get_next_match(store, club).await
}

/// Match report by slug
#[get("/matches/{slug}")]
async fn get_match_report(
    path: web::Path<String>,
    store: web::Data<Arc<dyn ContentStore>>,
    club: web::Data<ClubContext>,
) -> Result<HttpResponse> {
    let slug = path.into_inner();
    match_handler::get_match_report(slug, store, club).await
}

/// Upcoming fixtures
#[get("/fixtures")]
async fn get_fixtures(
    query: web::Query<PaginationQuery>,
    store: web::Data<Arc<dyn ContentStore>>,
    club: web::Data<ClubContext>,
) -> Result<HttpResponse> {
    match_handler::get_fixtures(query, store, club).await
}

/// Played matches, most recent first
#[get("/results")]
async fn get_results(
    query: web::Query<PaginationQuery>,
    store: web::Data<Arc<dyn ContentStore>>,
    club: web::Data<ClubContext>,
) -> Result<HttpResponse> {
    match_handler::get_results(query, store, club).await
}

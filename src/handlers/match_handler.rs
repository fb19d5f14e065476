use actix_web::{web, HttpResponse, Result};
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;

use crate::config::settings::ClubContext;
use crate::content::ContentStore;
use crate::handlers::{content_error_response, PaginationQuery};
use crate::services::MatchService;

/// Match report page
#[tracing::instrument(name = "Get match report", skip(store, club))]
pub async fn get_match_report(
    slug: String,
    store: web::Data<Arc<dyn ContentStore>>,
    club: web::Data<ClubContext>,
) -> Result<HttpResponse> {
    let match_service = MatchService::new(store.get_ref().clone(), club.timezone);

    match match_service.match_report(&slug).await {
        Ok(report) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": report
        }))),
        Err(e) => Ok(content_error_response(&e, "Match")),
    }
}

/// Upcoming fixtures
pub async fn get_fixtures(
    query: web::Query<PaginationQuery>,
    store: web::Data<Arc<dyn ContentStore>>,
    club: web::Data<ClubContext>,
) -> Result<HttpResponse> {
    let match_service = MatchService::new(store.get_ref().clone(), club.timezone);

    match match_service.fixtures(query.limit()).await {
        Ok(fixtures) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": fixtures
        }))),
        Err(e) => Ok(content_error_response(&e, "Fixtures")),
    }
}

/// Recent results
pub async fn get_results(
    query: web::Query<PaginationQuery>,
    store: web::Data<Arc<dyn ContentStore>>,
    club: web::Data<ClubContext>,
) -> Result<HttpResponse> {
    let match_service = MatchService::new(store.get_ref().clone(), club.timezone);

    match match_service.results(query.limit()).await {
        Ok(results) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": results
        }))),
        Err(e) => Ok(content_error_response(&e, "Results")),
    }
}

/// Next fixture with kickoff countdown
pub async fn get_next_match(
    store: web::Data<Arc<dyn ContentStore>>,
    club: web::Data<ClubContext>,
) -> Result<HttpResponse> {
    let match_service = MatchService::new(store.get_ref().clone(), club.timezone);

    match match_service.next_match(Utc::now()).await {
        Ok(Some(next)) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": next
        }))),
        Ok(None) => Ok(HttpResponse::NotFound().json(json!({
            "success": false,
            "message": "No upcoming fixtures"
        }))),
        Err(e) => Ok(content_error_response(&e, "Next match")),
    }
}

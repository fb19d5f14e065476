use actix_web::{web, HttpResponse, Result};
use serde_json::json;
use std::sync::Arc;

use crate::content::ContentStore;
use crate::league::seasons::SeasonService;

/// League table for a season, or the active season without one. A failed
/// lookup has already fallen back once, so the page offers a retry.
#[tracing::instrument(name = "Get league table", skip(store))]
pub async fn get_league_table(
    season_slug: Option<String>,
    store: web::Data<Arc<dyn ContentStore>>,
) -> Result<HttpResponse> {
    let season_service = SeasonService::new(store.get_ref().clone());

    match season_service.league_table(season_slug.as_deref()).await {
        Ok(table) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": table
        }))),
        Err(e) => {
            tracing::error!("Failed to load league table: {}", e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "League table is unavailable",
                "retry": true
            })))
        }
    }
}

/// Three rows around the supported team
pub async fn get_table_snapshot(
    season_slug: String,
    store: web::Data<Arc<dyn ContentStore>>,
) -> Result<HttpResponse> {
    let season_service = SeasonService::new(store.get_ref().clone());

    match season_service.table_snapshot(Some(&season_slug)).await {
        Ok(table) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": table
        }))),
        Err(e) => {
            tracing::error!("Failed to load table snapshot for {}: {}", season_slug, e);
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "League table is unavailable",
                "retry": true
            })))
        }
    }
}

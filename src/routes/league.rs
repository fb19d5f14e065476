use actix_web::{get, web, HttpResponse, Result};
use std::sync::Arc;

use crate::content::ContentStore;
use crate::handlers::league_handler;

/// Table of the active season
#[get("/table")]
async fn get_active_table(
    store: web::Data<Arc<dyn ContentStore>>,
) -> Result<HttpResponse> {
    league_handler::get_league_table(None, store).await
}

/// Table of a specific season, falling back to the active one
#[get("/table/{season_slug}")]
async fn get_season_table(
    path: web::Path<String>,
    store: web::Data<Arc<dyn ContentStore>>,
) -> Result<HttpResponse> {
    let season_slug = path.into_inner();
    league_handler::get_league_table(Some(season_slug), store).await
}

/// Homepage snapshot around the supported team
#[get("/table/{season_slug}/snapshot")]
async fn get_table_snapshot(
    path: web::Path<String>,
    store: web::Data<Arc<dyn ContentStore>>,
) -> Result<HttpResponse> {
    let season_slug = path.into_inner();
    league_handler::get_table_snapshot(season_slug, store).await
}

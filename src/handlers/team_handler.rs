use actix_web::{web, HttpResponse, Result};
use serde_json::json;
use std::sync::Arc;

use crate::content::ContentStore;
use crate::handlers::content_error_response;
use crate::services::TeamService;

/// All teams with crests
pub async fn get_all_teams(
    store: web::Data<Arc<dyn ContentStore>>,
) -> Result<HttpResponse> {
    let team_service = TeamService::new(store.get_ref().clone());

    match team_service.roster().await {
        Ok(roster) => {
            let teams = roster.views();
            Ok(HttpResponse::Ok().json(json!({
                "success": true,
                "data": teams,
                "total": teams.len()
            })))
        }
        Err(e) => Ok(content_error_response(&e, "Teams")),
    }
}

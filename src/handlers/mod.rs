use actix_web::HttpResponse;
use serde::Deserialize;
use serde_json::json;

use crate::content::ContentError;

pub mod article_handler;
pub mod backend_health_handler;
pub mod league_handler;
pub mod match_handler;
pub mod poll_handler;
pub mod team_handler;

#[derive(Debug, Deserialize)]
pub struct PaginationQuery {
    pub limit: Option<u32>,
    pub skip: Option<u32>,
}

impl PaginationQuery {
    pub fn limit(&self) -> u32 {
        self.limit.unwrap_or(10).clamp(1, 50)
    }

    pub fn skip(&self) -> u32 {
        self.skip.unwrap_or(0)
    }
}

/// Not-found becomes a 404 page outcome; anything else is logged and
/// reported as a 500.
pub fn content_error_response(error: &ContentError, what: &str) -> HttpResponse {
    match error {
        ContentError::NotFound { .. } => HttpResponse::NotFound().json(json!({
            "success": false,
            "message": format!("{} not found", what)
        })),
        other => {
            tracing::error!("Failed to load {}: {}", what, other);
            HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": format!("Failed to load {}", what)
            }))
        }
    }
}

use actix_web::cookie::{time, Cookie, SameSite};
use actix_web::{web, HttpRequest, HttpResponse, Result};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

use crate::config::poll::PollSettings;
use crate::services::poll_service::PollError;
use crate::services::{PollService, VoteStore};

pub const VOTER_COOKIE: &str = "fan_poll_voter";

#[derive(Debug, Deserialize)]
pub struct CastVoteRequest {
    pub choice: String,
}

fn voter_from_cookie(req: &HttpRequest) -> Option<Uuid> {
    req.cookie(VOTER_COOKIE)
        .and_then(|cookie| Uuid::parse_str(cookie.value()).ok())
}

fn voter_cookie(voter: Uuid, ttl_days: i64) -> Cookie<'static> {
    Cookie::build(VOTER_COOKIE, voter.to_string())
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::days(ttl_days))
        .finish()
}

fn poll_error_response(error: &PollError) -> HttpResponse {
    match error {
        PollError::UnknownPoll(_) => HttpResponse::NotFound().json(json!({
            "success": false,
            "message": error.to_string()
        })),
        PollError::UnknownOption { .. } => HttpResponse::BadRequest().json(json!({
            "success": false,
            "message": error.to_string()
        })),
        other => {
            tracing::error!("Poll request failed: {}", other);
            HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Poll is unavailable"
            }))
        }
    }
}

/// Poll question, plus this visitor's result if they already voted
pub async fn get_poll(
    poll_id: String,
    req: HttpRequest,
    vote_store: web::Data<Arc<dyn VoteStore>>,
    poll_settings: web::Data<PollSettings>,
) -> Result<HttpResponse> {
    let poll_service = PollService::new(vote_store.get_ref().clone(), poll_settings.get_ref().clone());

    match poll_service.poll(&poll_id, voter_from_cookie(&req)).await {
        Ok(poll) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": poll
        }))),
        Err(e) => Ok(poll_error_response(&e)),
    }
}

/// Cast a vote. First-time voters are issued a voter cookie.
#[tracing::instrument(name = "Cast vote", skip(req, vote_store, poll_settings, body))]
pub async fn cast_vote(
    poll_id: String,
    req: HttpRequest,
    body: web::Json<CastVoteRequest>,
    vote_store: web::Data<Arc<dyn VoteStore>>,
    poll_settings: web::Data<PollSettings>,
) -> Result<HttpResponse> {
    let poll_service = PollService::new(vote_store.get_ref().clone(), poll_settings.get_ref().clone());

    let existing_voter = voter_from_cookie(&req);
    let voter = existing_voter.unwrap_or_else(Uuid::new_v4);

    match poll_service.vote(&poll_id, voter, &body.choice).await {
        Ok(poll) => {
            let mut response = HttpResponse::Ok();
            if existing_voter.is_none() {
                response.cookie(voter_cookie(voter, poll_settings.vote_ttl_days()));
            }
            Ok(response.json(json!({
                "success": true,
                "data": poll
            })))
        }
        Err(e) => Ok(poll_error_response(&e)),
    }
}

use actix_web::{get, post, web, HttpRequest, HttpResponse, Result};
use std::sync::Arc;

use crate::config::poll::PollSettings;
use crate::handlers::poll_handler::{self, CastVoteRequest};
use crate::services::VoteStore;

#[get("/{poll_id}")]
async fn get_poll(
    path: web::Path<String>,
    req: HttpRequest,
    vote_store: web::Data<Arc<dyn VoteStore>>,
    poll_settings: web::Data<PollSettings>,
) -> Result<HttpResponse> {
    let poll_id = path.into_inner();
    poll_handler::get_poll(poll_id, req, vote_store, poll_settings).await
}

/// Cast a vote on a poll
#[post("/{poll_id}/vote")]
async fn cast_vote(
    path: web::Path<String>,
    req: HttpRequest,
    body: web::Json<CastVoteRequest>,
    vote_store: web::Data<Arc<dyn VoteStore>>,
    poll_settings: web::Data<PollSettings>,
) -> Result<HttpResponse> {
    let poll_id = path.into_inner();
    poll_handler::cast_vote(poll_id, req, body, vote_store, poll_settings).await
}

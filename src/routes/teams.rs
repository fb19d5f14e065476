use actix_web::{get, web, HttpResponse, Result};
use std::sync::Arc;

use crate::content::ContentStore;
use crate::handlers::team_handler;

#[get("/teams")]
async fn get_all_teams(
    store: web::Data<Arc<dyn ContentStore>>,
) -> Result<HttpResponse> {
    team_handler::get_all_teams(store).await
}

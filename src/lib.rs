use actix_web::{http, web, App, HttpServer};
use actix_web::dev::Server;
use tracing_actix_web::TracingLogger;
use std::net::TcpListener;
use std::sync::Arc;
use actix_cors::Cors;

pub mod config;
pub mod content;
mod routes;
pub mod handlers;
pub mod models;
pub mod utils;
pub mod league;
pub mod services;
pub mod site;
pub mod telemetry;
use crate::routes::init_routes;
use crate::config::poll::PollSettings;
use crate::config::settings::ClubContext;
use crate::content::ContentStore;
use crate::services::VoteStore;

pub fn run(
    listener: TcpListener,
    content_store: Arc<dyn ContentStore>,
    vote_store: Arc<dyn VoteStore>,
    club: ClubContext,
    poll_settings: PollSettings,
    allowed_origins: Vec<String>,
) -> Result<Server, std::io::Error> {
    // Wrap using web::Data, which boils down to an Arc smart pointer
    let content_store_data = web::Data::new(content_store);
    let vote_store_data = web::Data::new(vote_store);
    let club_data = web::Data::new(club);
    let poll_settings_data = web::Data::new(poll_settings);

    let server = HttpServer::new(move || {
        let cors = allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![
                http::header::ACCEPT,
                http::header::CONTENT_TYPE,
            ])
            .supports_credentials()
            .max_age(3600);

        App::new()
            .wrap(TracingLogger::default())
            .wrap(cors)
            // Get a pointer copy and attach it to the application state
            .app_data(content_store_data.clone())
            .app_data(vote_store_data.clone())
            .app_data(club_data.clone())
            .app_data(poll_settings_data.clone())
            .configure(init_routes)
    })
    .listen(listener)?
    .run();

    Ok(server)
}

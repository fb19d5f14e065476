use std::net::TcpListener;
use std::sync::Arc;
use once_cell::sync::Lazy;
use reqwest::Client;

use matchday_site::run;
use matchday_site::config::settings::get_config;
use matchday_site::content::FixtureContentStore;
use matchday_site::services::MemoryVoteStore;
use matchday_site::telemetry::{get_subscriber, init_subscriber};

pub const CONTENT_FIXTURE: &str = "tests/fixtures/content.json";

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(
            subscriber_name,
            default_filter_level,
            std::io::stdout
        );
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(
            subscriber_name,
            default_filter_level,
            std::io::sink
        );
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
}

/// Serves the site from the content fixture with an in-memory vote store,
/// whatever the configured environment says.
pub async fn spawn_app() -> TestApp {
    spawn_app_with_content(CONTENT_FIXTURE).await
}

pub async fn spawn_app_with_content(fixture_path: &str) -> TestApp {
    // The first time `initialize` is invoked the code in `TRACING` is executed.
    // All other invocations will instead skip execution.
    Lazy::force(&TRACING);

    let listener = TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind random port");
    // Get port assigned by the OS
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let configuration = get_config().expect("Failed to read configuration.");
    let club = configuration.club.context().expect("Invalid club settings.");
    let content_store = FixtureContentStore::from_file(fixture_path)
        .expect("Failed to load content fixture.");

    let server = run(
        listener,
        Arc::new(content_store),
        Arc::new(MemoryVoteStore::new()),
        club,
        configuration.poll.clone(),
        configuration.application.allowed_origins.clone(),
    )
        .expect("Failed to bind address");
    // Launch the server as a background task
    let _ = tokio::spawn(server);
    TestApp { address }
}

pub async fn get_json(client: &Client, url: &str) -> (reqwest::StatusCode, serde_json::Value) {
    let response = client
        .get(url)
        .send()
        .await
        .expect("Failed to execute request.");
    let status = response.status();
    let body = response.json::<serde_json::Value>().await.expect("Cannot turn into a json.");
    (status, body)
}

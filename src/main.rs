use std::net::TcpListener;
use std::sync::Arc;

use matchday_site::run;
use matchday_site::config::content::ContentSource;
use matchday_site::config::poll::VoteStoreBackend;
use matchday_site::config::settings::{get_config, Settings};
use matchday_site::content::{ContentError, ContentStore, ContentfulClient, FixtureContentStore};
use matchday_site::services::{MemoryVoteStore, RedisVoteStore, VoteStore};
use matchday_site::telemetry::{get_subscriber, init_subscriber};

fn build_content_store(config: &Settings) -> Result<Arc<dyn ContentStore>, ContentError> {
    match config.content.source {
        ContentSource::Remote => {
            let client = ContentfulClient::new(&config.content)?;
            tracing::info!("Reading content from {}", config.content.base_url);
            Ok(Arc::new(client))
        }
        ContentSource::Fixture => {
            let path = config
                .content
                .fixture_path
                .as_deref()
                .ok_or_else(|| ContentError::Fixture("content.fixture_path is not set".into()))?;
            Ok(Arc::new(FixtureContentStore::from_file(path)?))
        }
    }
}

fn build_vote_store(config: &Settings) -> Result<Arc<dyn VoteStore>, String> {
    match config.poll.store {
        VoteStoreBackend::Memory => Ok(Arc::new(MemoryVoteStore::new())),
        VoteStoreBackend::Redis => {
            let redis = config
                .redis
                .as_ref()
                .ok_or_else(|| "poll.store is redis but no redis section is configured".to_string())?;
            let store = RedisVoteStore::new(redis).map_err(|e| e.to_string())?;
            tracing::info!("Redis vote store created successfully");
            Ok(Arc::new(store))
        }
    }
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Panic if we can't read the config
    let config = get_config().expect("Failed to read the config.");

    let subscriber = get_subscriber(
        "matchday-site".into(),
        config.application.log_level.clone(),
        std::io::stdout
    );
    init_subscriber(subscriber);

    let club = match config.club.context() {
        Ok(club) => club,
        Err(e) => {
            tracing::error!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let content_store = match build_content_store(&config) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("❌ Failed to create content store: {}", e);
            std::process::exit(1);
        }
    };

    let vote_store = match build_vote_store(&config) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("❌ Failed to create vote store: {}", e);
            std::process::exit(1);
        }
    };

    let address = format!("{}:{}", config.application.host, config.application.port);
    let listener = TcpListener::bind(&address)?;
    tracing::info!("✅ {} site listening on {}", club.name, address);

    run(
        listener,
        content_store,
        vote_store,
        club,
        config.poll.clone(),
        config.application.allowed_origins.clone(),
    )?.await
}

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use url::Url;

use crate::config::content::ContentSettings;
use crate::content::{ContentError, ContentQuery, ContentStore, EntryCollection};

/// Delivery API client. Built once at startup and shared read-only.
pub struct ContentfulClient {
    client: Client,
    entries_url: Url,
    access_token: SecretString,
    include_depth: u8,
}

impl ContentfulClient {
    pub fn new(settings: &ContentSettings) -> Result<Self, ContentError> {
        let entries_url = settings
            .entries_url()
            .map_err(|e| ContentError::Upstream(format!("Invalid content base url: {}", e)))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .user_agent(concat!("matchday-site/", env!("CARGO_PKG_VERSION")))
            .build()?;

        tracing::info!("Content store client configured for {}", entries_url);

        Ok(Self {
            client,
            entries_url,
            access_token: settings.access_token.clone(),
            include_depth: settings.include_depth,
        })
    }
}

#[async_trait]
impl ContentStore for ContentfulClient {
    #[tracing::instrument(name = "Query content store", skip(self), fields(query = %query))]
    async fn entries(&self, query: &ContentQuery) -> Result<EntryCollection, ContentError> {
        let mut params = query.to_params();
        if query.include.is_none() {
            params.push(("include".to_string(), self.include_depth.to_string()));
        }

        let response = self
            .client
            .get(self.entries_url.clone())
            .bearer_auth(self.access_token.expose_secret())
            .query(&params)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let message = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            tracing::error!("❌ Content store returned error {}: {}", status, message);
            return Err(ContentError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let collection = response.json::<EntryCollection>().await?;
        tracing::debug!(
            "Fetched {} {} entries ({} total)",
            collection.items.len(),
            query.content_type,
            collection.total
        );
        Ok(collection)
    }
}

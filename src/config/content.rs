use serde::Deserialize;
use secrecy::SecretString;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ContentSource {
    /// Live delivery API
    Remote,
    /// JSON document on disk, same shape as a delivery API response
    Fixture,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ContentSettings {
    pub source: ContentSource,
    pub base_url: String,
    pub space_id: String,
    pub environment: String,
    pub access_token: SecretString,
    #[serde(default = "default_include_depth")]
    pub include_depth: u8,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub fixture_path: Option<String>,
}

fn default_include_depth() -> u8 {
    2
}

fn default_timeout_secs() -> u64 {
    10
}

impl ContentSettings {
    pub fn entries_url(&self) -> Result<url::Url, url::ParseError> {
        let base = url::Url::parse(&self.base_url)?;
        base.join(&format!(
            "spaces/{}/environments/{}/entries",
            self.space_id, self.environment
        ))
    }
}

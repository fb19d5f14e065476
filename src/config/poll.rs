use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum VoteStoreBackend {
    Memory,
    Redis,
}

#[derive(Deserialize, Debug, Clone)]
pub struct PollSettings {
    pub store: VoteStoreBackend,
    #[serde(default = "default_vote_ttl_days")]
    pub vote_ttl_days: i64,
    #[serde(default)]
    pub definitions: Vec<PollDefinition>,
}

/// Longest a vote (and its voter cookie) is kept.
pub const MAX_VOTE_TTL_DAYS: i64 = 366;

fn default_vote_ttl_days() -> i64 {
    30
}

impl PollSettings {
    /// Configured vote lifetime, clamped to `1..=MAX_VOTE_TTL_DAYS`.
    pub fn vote_ttl_days(&self) -> i64 {
        self.vote_ttl_days.clamp(1, MAX_VOTE_TTL_DAYS)
    }
}

#[derive(Deserialize, Debug, Clone, serde::Serialize)]
pub struct PollDefinition {
    pub id: String,
    pub question: String,
    pub options: Vec<String>,
}

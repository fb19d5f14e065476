use async_trait::async_trait;
use chrono::{DateTime, Utc};
use redis::AsyncCommands;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use thiserror::Error;

use crate::config::redis::RedisSettings;

/// What a voter chose and the result they were shown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredVote {
    pub choice: String,
    pub distribution: Vec<u8>,
    pub voted_at: DateTime<Utc>,
}

#[derive(Debug, Error)]
pub enum VoteStoreError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Expiring key-value storage for poll votes.
#[async_trait]
pub trait VoteStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<StoredVote>, VoteStoreError>;
    async fn set(&self, key: &str, vote: &StoredVote, ttl: Duration) -> Result<(), VoteStoreError>;
    async fn expire(&self, key: &str) -> Result<(), VoteStoreError>;
}

/// Inserts between sweeps of expired votes in the memory store.
const SWEEP_INTERVAL: usize = 1024;
/// Ceiling for a memory vote's lifetime when `Instant` arithmetic would overflow.
const MAX_MEMORY_TTL_SECS: u64 = 400 * 86400;

#[derive(Debug, Default)]
struct MemoryVotes {
    entries: HashMap<String, (StoredVote, Instant)>,
    inserts_since_sweep: usize,
}

impl MemoryVotes {
    fn sweep(&mut self, now: Instant) {
        let before = self.entries.len();
        self.entries.retain(|_, (_, expires_at)| *expires_at > now);
        self.inserts_since_sweep = 0;
        tracing::debug!("Swept {} expired votes", before - self.entries.len());
    }
}

/// Process-local store, the default for single-instance deployments.
/// Expired votes are dropped when read and swept periodically on write.
#[derive(Debug, Default)]
pub struct MemoryVoteStore {
    votes: Mutex<MemoryVotes>,
}

impl MemoryVoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    fn held(&self) -> usize {
        self.votes.lock().unwrap_or_else(|poisoned| poisoned.into_inner()).entries.len()
    }
}

#[async_trait]
impl VoteStore for MemoryVoteStore {
    async fn get(&self, key: &str) -> Result<Option<StoredVote>, VoteStoreError> {
        let mut votes = self.votes.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        match votes.entries.get(key) {
            Some((_, expires_at)) if *expires_at <= Instant::now() => {
                votes.entries.remove(key);
                Ok(None)
            }
            Some((vote, _)) => Ok(Some(vote.clone())),
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, vote: &StoredVote, ttl: Duration) -> Result<(), VoteStoreError> {
        let now = Instant::now();
        let mut votes = self.votes.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        votes.inserts_since_sweep += 1;
        if votes.inserts_since_sweep >= SWEEP_INTERVAL {
            votes.sweep(now);
        }
        let expires_at = now.checked_add(ttl).unwrap_or(now + Duration::from_secs(MAX_MEMORY_TTL_SECS));
        votes.entries.insert(key.to_string(), (vote.clone(), expires_at));
        Ok(())
    }

    async fn expire(&self, key: &str) -> Result<(), VoteStoreError> {
        let mut votes = self.votes.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        votes.entries.remove(key);
        Ok(())
    }
}

/// Shared store for multi-instance deployments. Votes are JSON under
/// their key with a Redis-side TTL.
#[derive(Clone, Debug)]
pub struct RedisVoteStore {
    client: Arc<redis::Client>,
}

impl RedisVoteStore {
    pub fn new(settings: &RedisSettings) -> Result<Self, VoteStoreError> {
        let client = match redis::Client::open(settings.get_redis_url().expose_secret()) {
            Ok(client) => {
                tracing::info!("Redis client created successfully");
                client
            }
            Err(e) => {
                tracing::error!("Failed to create Redis client: {}", e);
                return Err(e.into());
            }
        };
        Ok(Self { client: Arc::new(client) })
    }
}

#[async_trait]
impl VoteStore for RedisVoteStore {
    async fn get(&self, key: &str) -> Result<Option<StoredVote>, VoteStoreError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let raw: Option<String> = conn.get(key).await?;
        match raw {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, vote: &StoredVote, ttl: Duration) -> Result<(), VoteStoreError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let raw = serde_json::to_string(vote)?;
        conn.set_ex::<_, _, ()>(key, raw, ttl.as_secs() as usize).await?;
        Ok(())
    }

    async fn expire(&self, key: &str) -> Result<(), VoteStoreError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.del::<_, ()>(key).await?;
        Ok(())
    }
}

use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

use crate::config::poll::{PollDefinition, PollSettings};
use crate::services::vote_store::{StoredVote, VoteStore, VoteStoreError};
use crate::utils::poll_distribution::{generate_distribution, MAX_OPTIONS};

#[derive(Debug, Error)]
pub enum PollError {
    #[error("Poll '{0}' does not exist")]
    UnknownPoll(String),
    #[error("'{choice}' is not an option of poll '{poll_id}'")]
    UnknownOption { poll_id: String, choice: String },
    #[error("Poll '{0}' must have between 1 and {} options", MAX_OPTIONS)]
    InvalidOptionCount(String),
    #[error(transparent)]
    Store(#[from] VoteStoreError),
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OptionResult {
    pub option: String,
    pub percentage: u8,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PollView {
    pub id: String,
    pub question: String,
    pub options: Vec<String>,
    /// Present once this voter has voted
    pub choice: Option<String>,
    pub results: Option<Vec<OptionResult>>,
}

impl PollView {
    fn new(definition: &PollDefinition, vote: Option<StoredVote>) -> Self {
        let (choice, results) = match vote {
            Some(vote) => {
                let results = definition
                    .options
                    .iter()
                    .zip(vote.distribution)
                    .map(|(option, percentage)| OptionResult {
                        option: option.clone(),
                        percentage,
                    })
                    .collect();
                (Some(vote.choice), Some(results))
            }
            None => (None, None),
        };

        Self {
            id: definition.id.clone(),
            question: definition.question.clone(),
            options: definition.options.clone(),
            choice,
            results,
        }
    }
}

/// Fan polls. The result shown is cosmetic: generated on a voter's first
/// vote and replayed to that voter until the vote expires.
pub struct PollService {
    store: Arc<dyn VoteStore>,
    settings: PollSettings,
}

impl PollService {
    pub fn new(store: Arc<dyn VoteStore>, settings: PollSettings) -> Self {
        Self { store, settings }
    }

    fn definition(&self, poll_id: &str) -> Result<&PollDefinition, PollError> {
        self.settings
            .definitions
            .iter()
            .find(|poll| poll.id == poll_id)
            .ok_or_else(|| PollError::UnknownPoll(poll_id.to_string()))
    }

    fn vote_key(poll_id: &str, voter: Uuid) -> String {
        format!("poll:{}:{}", poll_id, voter)
    }

    fn vote_ttl(&self) -> Duration {
        Duration::from_secs(self.settings.vote_ttl_days() as u64 * 86400)
    }

    /// A stored vote that no longer lines up with the poll's options is
    /// dropped so the voter can vote again.
    async fn stored_vote(&self, definition: &PollDefinition, voter: Uuid) -> Result<Option<StoredVote>, PollError> {
        let key = Self::vote_key(&definition.id, voter);
        let Some(vote) = self.store.get(&key).await? else {
            return Ok(None);
        };

        if vote.distribution.len() != definition.options.len() || !definition.options.contains(&vote.choice) {
            tracing::info!("Discarding stale vote on poll {} for voter {}", definition.id, voter);
            self.store.expire(&key).await?;
            return Ok(None);
        }
        Ok(Some(vote))
    }

    pub async fn poll(&self, poll_id: &str, voter: Option<Uuid>) -> Result<PollView, PollError> {
        let definition = self.definition(poll_id)?;
        let vote = match voter {
            Some(voter) => self.stored_vote(definition, voter).await?,
            None => None,
        };
        Ok(PollView::new(definition, vote))
    }

    /// Records a vote. A voter who already voted gets their original
    /// choice and result back unchanged.
    #[tracing::instrument(name = "Cast poll vote", skip(self))]
    pub async fn vote(&self, poll_id: &str, voter: Uuid, choice: &str) -> Result<PollView, PollError> {
        let definition = self.definition(poll_id)?;
        if !definition.options.iter().any(|option| option == choice) {
            return Err(PollError::UnknownOption {
                poll_id: poll_id.to_string(),
                choice: choice.to_string(),
            });
        }

        if let Some(existing) = self.stored_vote(definition, voter).await? {
            return Ok(PollView::new(definition, Some(existing)));
        }

        let distribution = generate_distribution(&mut rand::thread_rng(), definition.options.len())
            .ok_or_else(|| PollError::InvalidOptionCount(poll_id.to_string()))?;
        let vote = StoredVote {
            choice: choice.to_string(),
            distribution,
            voted_at: Utc::now(),
        };
        self.store
            .set(&Self::vote_key(poll_id, voter), &vote, self.vote_ttl())
            .await?;

        tracing::info!("Recorded vote on poll {}", poll_id);
        Ok(PollView::new(definition, Some(vote)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::poll::VoteStoreBackend;
    use crate::services::vote_store::MemoryVoteStore;

    fn settings() -> PollSettings {
        PollSettings {
            store: VoteStoreBackend::Memory,
            vote_ttl_days: 30,
            definitions: vec![PollDefinition {
                id: "motm".to_string(),
                question: "Man of the match?".to_string(),
                options: vec!["Smith".to_string(), "Jones".to_string(), "Brown".to_string()],
            }],
        }
    }

    fn service() -> (PollService, Arc<MemoryVoteStore>) {
        let store = Arc::new(MemoryVoteStore::new());
        (PollService::new(store.clone(), settings()), store)
    }

    #[tokio::test]
    async fn first_vote_generates_results() {
        let (service, _) = service();
        let voter = Uuid::new_v4();

        let before = service.poll("motm", Some(voter)).await.unwrap();
        assert_eq!(before.results, None);

        let after = service.vote("motm", voter, "Jones").await.unwrap();
        let results = after.results.unwrap();
        assert_eq!(after.choice.as_deref(), Some("Jones"));
        assert_eq!(results.len(), 3);
        assert_eq!(results.iter().map(|r| r.percentage as u32).sum::<u32>(), 100);
    }

    #[tokio::test]
    async fn repeat_votes_replay_the_stored_result() {
        let (service, _) = service();
        let voter = Uuid::new_v4();

        let first = service.vote("motm", voter, "Jones").await.unwrap();
        let second = service.vote("motm", voter, "Smith").await.unwrap();
        let read_back = service.poll("motm", Some(voter)).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(first, read_back);
    }

    #[tokio::test]
    async fn stale_vote_is_discarded() {
        let (service, store) = service();
        let voter = Uuid::new_v4();
        let stale = StoredVote {
            choice: "Somebody who left".to_string(),
            distribution: vec![50, 50],
            voted_at: Utc::now(),
        };
        store
            .set(&PollService::vote_key("motm", voter), &stale, Duration::from_secs(60))
            .await
            .unwrap();

        let view = service.poll("motm", Some(voter)).await.unwrap();
        assert_eq!(view.results, None);
        assert_eq!(store.get(&PollService::vote_key("motm", voter)).await.unwrap(), None);
    }

    #[tokio::test]
    async fn unknown_poll_and_option() {
        let (service, _) = service();
        assert!(matches!(
            service.poll("nope", None).await,
            Err(PollError::UnknownPoll(_))
        ));
        assert!(matches!(
            service.vote("motm", Uuid::new_v4(), "Nobody").await,
            Err(PollError::UnknownOption { .. })
        ));
    }

    #[tokio::test]
    async fn huge_configured_ttl_is_clamped() {
        let mut settings = settings();
        settings.vote_ttl_days = i64::MAX;
        let service = PollService::new(Arc::new(MemoryVoteStore::new()), settings);

        assert_eq!(
            service.vote_ttl(),
            Duration::from_secs(crate::config::poll::MAX_VOTE_TTL_DAYS as u64 * 86400)
        );
        let view = service.vote("motm", Uuid::new_v4(), "Brown").await.unwrap();
        assert_eq!(view.choice.as_deref(), Some("Brown"));
    }
}

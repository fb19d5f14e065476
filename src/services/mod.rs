pub mod article_service;
pub mod match_service;
pub mod poll_service;
pub mod team_service;
pub mod vote_store;

pub use article_service::ArticleService;
pub use match_service::MatchService;
pub use poll_service::PollService;
pub use team_service::TeamService;
pub use vote_store::{MemoryVoteStore, RedisVoteStore, VoteStore};

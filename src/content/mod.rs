pub mod contentful;
pub mod entry;
pub mod error;
pub mod fixture;
pub mod query;

use async_trait::async_trait;

pub use contentful::ContentfulClient;
pub use entry::{Asset, Entry, EntryCollection, Link, LinkType};
pub use error::ContentError;
pub use fixture::FixtureContentStore;
pub use query::ContentQuery;

/// Read access to the headless content store.
#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn entries(&self, query: &ContentQuery) -> Result<EntryCollection, ContentError>;
}

//! List trait for fetching collections of entities.

use async_trait::async_trait;

use crate::client::CuratorClient;
use crate::error::Result;

/// List a collection of entities.
///
/// Implement this trait for entity types that can be fetched as a whole
/// collection. The Curator API returns complete collections in one
/// response, so there is no pagination; `Query` selects which collection
/// to fetch when an entity has more than one (e.g. the wanted vs.
/// unwanted tag vocabularies).
///
/// # Example
///
/// ```ignore
/// use curatorapi::{Classification, CuratorClient, List, Tag};
///
/// let client = CuratorClient::from_env()?;
/// let tags = Tag::list(&client, &Classification::Wanted).await?;
/// ```
#[async_trait]
pub trait List: Sized {
    /// Collection selector for this entity.
    type Query: Send + Sync;

    /// List entities in the selected collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    async fn list(client: &CuratorClient, query: &Self::Query) -> Result<Vec<Self>>;
}

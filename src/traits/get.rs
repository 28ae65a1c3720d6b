//! Get trait for fetching single entities.

use async_trait::async_trait;

use crate::client::CuratorClient;
use crate::error::Result;

/// Fetch a single entity by ID.
///
/// Implement this trait for entity types that can be fetched individually
/// by a unique identifier.
///
/// # Example
///
/// ```ignore
/// use curatorapi::{CuratorClient, Image, Get};
///
/// let client = CuratorClient::from_env()?;
/// let image = Image::get(&client, "6419f0f5c1a5e9c6c4e8b2a1").await?;
/// ```
#[async_trait]
pub trait Get: Sized {
    /// The ID type for this entity.
    type Id: ?Sized;

    /// Fetch the entity by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found or the request fails.
    async fn get(client: &CuratorClient, id: &Self::Id) -> Result<Self>;
}

//! Tag model and endpoint implementations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::CuratorClient;
use crate::error::Result;
use crate::traits::List;

/// Vocabulary a tag belongs to.
///
/// Wanted tags are applied to curated images; unwanted tags mark content
/// the pipeline filters out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Wanted,
    Unwanted,
}

impl Classification {
    fn as_segment(self) -> &'static str {
        match self {
            Classification::Wanted => "wanted",
            Classification::Unwanted => "unwanted",
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_segment())
    }
}

/// A label applicable to images.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    /// The tag ID.
    pub id: String,

    /// The tag label.
    pub name: String,

    /// Vocabulary this tag belongs to, when the service includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classification: Option<Classification>,

    /// Source collection the tag was first recorded from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,

    /// When the tag was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<DateTime<Utc>>,
}

/// Payload for creating a tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagCreate {
    /// The tag label.
    pub name: String,
}

/// Payload for associating tags with an image.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagsPush {
    /// The image ID.
    pub id: String,

    /// Source collection of the image.
    pub origin: String,

    /// IDs of the tags to associate.
    pub tag_ids: Vec<String>,
}

/// Payload for dissociating tags from an image.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagsPull {
    /// The image ID.
    pub id: String,

    /// Source collection of the image.
    pub origin: String,

    /// IDs of the tags to dissociate.
    pub tag_ids: Vec<String>,
}

#[async_trait]
impl List for Tag {
    type Query = Classification;

    /// `GET /tags/wanted` or `GET /tags/unwanted`.
    #[tracing::instrument(skip(client))]
    async fn list(client: &CuratorClient, query: &Classification) -> Result<Vec<Self>> {
        let path = format!("/tags/{}", query.as_segment());

        let response = client.get(&path).await?;
        CuratorClient::parse_json(response).await
    }
}

impl Tag {
    /// Create a tag in the given vocabulary.
    ///
    /// `POST /tag/wanted` or `POST /tag/unwanted`. Returns the opaque
    /// success payload.
    #[tracing::instrument(skip(client, params))]
    pub async fn create(
        client: &CuratorClient,
        classification: Classification,
        params: &TagCreate,
    ) -> Result<Value> {
        let path = format!("/tag/{}", classification.as_segment());

        let response = client.post(&path, params).await?;
        CuratorClient::parse_json(response).await
    }

    /// Delete a tag from the given vocabulary.
    ///
    /// `DELETE /tag/wanted/{id}` or `DELETE /tag/unwanted/{id}`.
    #[tracing::instrument(skip(client))]
    pub async fn delete(
        client: &CuratorClient,
        classification: Classification,
        id: &str,
    ) -> Result<Value> {
        let path = format!(
            "/tag/{}/{}",
            classification.as_segment(),
            urlencoding::encode(id)
        );

        let response = client.delete(&path).await?;
        CuratorClient::parse_json(response).await
    }
}

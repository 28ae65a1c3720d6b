//! Image model and endpoint implementations.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::CuratorClient;
use crate::error::Result;
use crate::models::tag::{Tag, TagsPull, TagsPush};
use crate::traits::{Get, List};

/// An image tracked by the Curator service.
///
/// Images are scraped from a source collection (their origin) and carry
/// the stored file metadata plus the tags applied to them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    /// The image ID.
    pub id: String,

    /// Source collection the image was scraped from.
    pub origin: String,

    /// File name within the origin collection.
    pub name: String,

    /// File size in bytes.
    pub size: u64,

    /// IDs of the tags associated with this image.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Payload for updating the stored file metadata of an image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileUpdate {
    /// Source collection of the image.
    pub origin: String,

    /// File name within the origin collection.
    pub name: String,

    /// New file size in bytes.
    pub size: u64,
}

/// Payload for adding an image to the unwanted registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnwantedImage {
    /// The image ID.
    pub id: String,

    /// Source collection of the image.
    pub origin: String,
}

#[async_trait]
impl Get for Image {
    type Id = str;

    /// `GET /image/{id}`.
    #[tracing::instrument(skip(client))]
    async fn get(client: &CuratorClient, id: &str) -> Result<Self> {
        let path = format!("/image/{}", urlencoding::encode(id));

        let response = client.get(&path).await?;
        CuratorClient::parse_json(response).await
    }
}

#[async_trait]
impl List for Image {
    type Query = ();

    /// `GET /images/unwanted`, the unwanted-image registry.
    #[tracing::instrument(skip(client, _query))]
    async fn list(client: &CuratorClient, _query: &()) -> Result<Vec<Self>> {
        let response = client.get("/images/unwanted").await?;
        CuratorClient::parse_json(response).await
    }
}

impl Image {
    /// List the IDs of the images scraped from an origin.
    ///
    /// `GET /images/id/{origin}`. The service returns the id list as
    /// tag-shaped records.
    #[tracing::instrument(skip(client))]
    pub async fn ids_by_origin(client: &CuratorClient, origin: &str) -> Result<Vec<Tag>> {
        let path = format!("/images/id/{}", urlencoding::encode(origin));

        let response = client.get(&path).await?;
        CuratorClient::parse_json(response).await
    }

    /// Associate tags with an image.
    ///
    /// `PUT /image/tags/push`.
    #[tracing::instrument(skip(client, params))]
    pub async fn push_tags(client: &CuratorClient, params: &TagsPush) -> Result<Value> {
        let response = client.put("/image/tags/push", params).await?;
        CuratorClient::parse_json(response).await
    }

    /// Dissociate tags from an image.
    ///
    /// `PUT /image/tags/pull`.
    #[tracing::instrument(skip(client, params))]
    pub async fn pull_tags(client: &CuratorClient, params: &TagsPull) -> Result<Value> {
        let response = client.put("/image/tags/pull", params).await?;
        CuratorClient::parse_json(response).await
    }

    /// Update the stored file metadata of an image.
    ///
    /// `PUT /image/file`.
    #[tracing::instrument(skip(client, params))]
    pub async fn update_file(client: &CuratorClient, params: &FileUpdate) -> Result<Value> {
        let response = client.put("/image/file", params).await?;
        CuratorClient::parse_json(response).await
    }

    /// Fetch the stored file record of an image.
    ///
    /// `GET /image/file/{origin}/{name}`.
    #[tracing::instrument(skip(client))]
    pub async fn get_file(client: &CuratorClient, origin: &str, name: &str) -> Result<Value> {
        let path = format!(
            "/image/file/{}/{}",
            urlencoding::encode(origin),
            urlencoding::encode(name)
        );

        let response = client.get(&path).await?;
        CuratorClient::parse_json(response).await
    }

    /// Delete an image.
    ///
    /// `DELETE /image/{id}`.
    #[tracing::instrument(skip(client))]
    pub async fn delete(client: &CuratorClient, id: &str) -> Result<Value> {
        let path = format!("/image/{}", urlencoding::encode(id));

        let response = client.delete(&path).await?;
        CuratorClient::parse_json(response).await
    }

    /// Add an image to the unwanted registry.
    ///
    /// `POST /image/unwanted`.
    #[tracing::instrument(skip(client, params))]
    pub async fn mark_unwanted(client: &CuratorClient, params: &UnwantedImage) -> Result<Value> {
        let response = client.post("/image/unwanted", params).await?;
        CuratorClient::parse_json(response).await
    }

    /// Remove an entry from the unwanted registry.
    ///
    /// `DELETE /image/unwanted/{id}`.
    #[tracing::instrument(skip(client))]
    pub async fn delete_unwanted(client: &CuratorClient, id: &str) -> Result<Value> {
        let path = format!("/image/unwanted/{}", urlencoding::encode(id));

        let response = client.delete(&path).await?;
        CuratorClient::parse_json(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_deserializes_with_camel_case_fields() {
        let image: Image = serde_json::from_str(
            r#"{"id":"img1","origin":"flickr","name":"cat.jpg","size":2048,"tags":["t1"]}"#,
        )
        .unwrap();
        assert_eq!(image.id, "img1");
        assert_eq!(image.origin, "flickr");
        assert_eq!(image.name, "cat.jpg");
        assert_eq!(image.size, 2048);
        assert_eq!(image.tags, vec!["t1".to_string()]);
    }

    #[test]
    fn test_image_tags_default_to_empty() {
        let image: Image = serde_json::from_str(
            r#"{"id":"img1","origin":"flickr","name":"cat.jpg","size":2048}"#,
        )
        .unwrap();
        assert!(image.tags.is_empty());
    }

    #[test]
    fn test_file_update_serializes_exact_fields() {
        let params = FileUpdate {
            origin: "flickr".to_string(),
            name: "cat.jpg".to_string(),
            size: 4096,
        };
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"origin": "flickr", "name": "cat.jpg", "size": 4096})
        );
    }

    #[test]
    fn test_unwanted_image_serializes_exact_fields() {
        let params = UnwantedImage {
            id: "img1".to_string(),
            origin: "flickr".to_string(),
        };
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json, serde_json::json!({"id": "img1", "origin": "flickr"}));
    }
}

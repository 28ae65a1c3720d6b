//! Unwanted-user model and endpoint implementations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::CuratorClient;
use crate::error::Result;
use crate::traits::List;

/// An account flagged as an unwanted content source.
///
/// The service only tracks flagged users; there is no wanted-user
/// collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// The user ID.
    pub id: String,

    /// Source collection the account belongs to.
    pub origin: String,

    /// Account name within the origin collection.
    pub name: String,

    /// When the user was flagged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<DateTime<Utc>>,
}

/// Payload for flagging a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreate {
    /// Source collection the account belongs to.
    pub origin: String,

    /// Account name within the origin collection.
    pub name: String,
}

#[async_trait]
impl List for User {
    type Query = ();

    /// `GET /users/unwanted`.
    #[tracing::instrument(skip(client, _query))]
    async fn list(client: &CuratorClient, _query: &()) -> Result<Vec<Self>> {
        let response = client.get("/users/unwanted").await?;
        CuratorClient::parse_json(response).await
    }
}

impl User {
    /// Flag a user as unwanted.
    ///
    /// `POST /user/unwanted`.
    #[tracing::instrument(skip(client, params))]
    pub async fn create(client: &CuratorClient, params: &UserCreate) -> Result<Value> {
        let response = client.post("/user/unwanted", params).await?;
        CuratorClient::parse_json(response).await
    }

    /// Remove a user from the unwanted list.
    ///
    /// `DELETE /user/unwanted/{id}`.
    #[tracing::instrument(skip(client))]
    pub async fn delete(client: &CuratorClient, id: &str) -> Result<Value> {
        let path = format!("/user/unwanted/{}", urlencoding::encode(id));

        let response = client.delete(&path).await?;
        CuratorClient::parse_json(response).await
    }
}

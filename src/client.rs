//! Curator API client.
//!
//! Low-level HTTP client that handles configuration and raw requests.
//! Higher-level operations are implemented via traits and inherent
//! methods on entity types.

use std::env;
use std::sync::Arc;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::error::{CuratorError, Result};

const HOST_ENV_VAR: &str = "CURATOR_API_URL";
const USER_AGENT: &str = concat!("curatorapi/", env!("CARGO_PKG_VERSION"));

/// Low-level Curator API client.
///
/// Holds the configured host and issues raw HTTP requests. Entity-specific
/// operations are implemented via the `Get` and `List` traits and inherent
/// methods on model types.
///
/// This struct is cheaply cloneable; clones reference the same underlying
/// connection pool.
///
/// # Example
///
/// ```no_run
/// use curatorapi::CuratorClient;
///
/// # fn example() -> curatorapi::Result<()> {
/// // Create from environment variables
/// let client = CuratorClient::from_env()?;
///
/// // Or configure manually
/// let client = CuratorClient::new("https://curator.example.com/api")?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct CuratorClient {
    http: Client,
    host: Arc<str>,
    authorization: Option<Arc<str>>,
}

impl std::fmt::Debug for CuratorClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CuratorClient")
            .field("host", &self.host)
            .finish_non_exhaustive()
    }
}

impl CuratorClient {
    /// Create a client from environment variables.
    ///
    /// Uses `CURATOR_API_URL` as the base host for all requests.
    ///
    /// # Errors
    ///
    /// Returns an error if `CURATOR_API_URL` is not set or empty.
    pub fn from_env() -> Result<Self> {
        let host = env::var(HOST_ENV_VAR).map_err(|_| {
            CuratorError::ConfigMissing(format!("{HOST_ENV_VAR} environment variable not set"))
        })?;

        Self::new(&host)
    }

    /// Create a new client with the provided host.
    ///
    /// # Arguments
    ///
    /// * `host` - Base URL of the Curator service
    ///   (e.g., `https://curator.example.com/api`)
    ///
    /// # Errors
    ///
    /// Returns an error if the host is empty or not a valid absolute URL.
    pub fn new(host: &str) -> Result<Self> {
        let host = host.trim().trim_end_matches('/');
        if host.is_empty() {
            return Err(CuratorError::ConfigMissing(
                "API host must not be empty".to_string(),
            ));
        }

        // Request URLs are formed as `host + path`, so only validate here.
        Url::parse(host)?;

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(CuratorError::HttpError)?;

        Ok(Self {
            http,
            host: Arc::from(host),
            authorization: None,
        })
    }

    /// Get the configured host.
    pub fn host_name(&self) -> &str {
        &self.host
    }

    /// Store an authorization credential.
    ///
    /// The Curator service does not define an authentication scheme yet;
    /// the credential is held for callers to inspect but is not attached
    /// to any request.
    #[must_use]
    pub fn with_authorization(mut self, credential: &str) -> Self {
        self.authorization = Some(Arc::from(credential));
        self
    }

    /// The stored authorization credential, if any.
    pub fn authorization(&self) -> Option<&str> {
        self.authorization.as_deref()
    }

    /// Make a GET request.
    ///
    /// `path` must begin with `/`.
    #[tracing::instrument(skip(self))]
    pub async fn get(&self, path: &str) -> Result<Response> {
        let response = self
            .http
            .get(self.endpoint(path))
            .send()
            .await
            .map_err(CuratorError::HttpError)?;

        Self::check_status(response).await
    }

    /// Make a POST request with JSON body.
    #[tracing::instrument(skip(self, body))]
    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Response> {
        let response = self
            .http
            .post(self.endpoint(path))
            .json(body)
            .send()
            .await
            .map_err(CuratorError::HttpError)?;

        Self::check_status(response).await
    }

    /// Make a PUT request with JSON body.
    #[tracing::instrument(skip(self, body))]
    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Response> {
        let response = self
            .http
            .put(self.endpoint(path))
            .json(body)
            .send()
            .await
            .map_err(CuratorError::HttpError)?;

        Self::check_status(response).await
    }

    /// Make a DELETE request with no body.
    ///
    /// No `Content-Type` header is sent.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, path: &str) -> Result<Response> {
        let response = self
            .http
            .delete(self.endpoint(path))
            .send()
            .await
            .map_err(CuratorError::HttpError)?;

        Self::check_status(response).await
    }

    /// Make a DELETE request with JSON body.
    ///
    /// Unlike [`delete`](Self::delete), this sends
    /// `Content-Type: application/json`.
    #[tracing::instrument(skip(self, body))]
    pub async fn delete_with_body<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Response> {
        let response = self
            .http
            .delete(self.endpoint(path))
            .json(body)
            .send()
            .await
            .map_err(CuratorError::HttpError)?;

        Self::check_status(response).await
    }

    /// Read a response body and deserialize it as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the body cannot be read or is not valid JSON
    /// for the expected type.
    pub async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T> {
        let body = response.text().await.map_err(CuratorError::HttpError)?;
        Ok(serde_json::from_str(&body)?)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.host, path)
    }

    /// Check response status and convert failures.
    ///
    /// Any status below 300 passes through. For everything else the body
    /// is read and parsed as JSON before classification, so a malformed
    /// error body surfaces as a parse failure instead.
    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status().as_u16();

        if status < 300 {
            return Ok(response);
        }

        let body = response.text().await.map_err(CuratorError::HttpError)?;
        let detail: serde_json::Value = serde_json::from_str(&body)?;
        let body = serde_json::to_string_pretty(&detail)?;

        if status >= 500 {
            Err(CuratorError::ServerError { status, body })
        } else {
            Err(CuratorError::ClientError { status, body })
        }
    }
}

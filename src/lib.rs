//! Curator API client library.
//!
//! A Rust library for interacting with the Curator image-tagging REST
//! API: tag vocabularies (wanted and unwanted), scraped images and their
//! stored files, and the unwanted-user and unwanted-image registries.
//!
//! # Quick Start
//!
//! ```no_run
//! use curatorapi::{Classification, CuratorClient, Get, Image, List, Tag, TagCreate};
//!
//! #[tokio::main]
//! async fn main() -> curatorapi::Result<()> {
//!     // Create client from environment variables
//!     let client = CuratorClient::from_env()?;
//!
//!     // List the wanted tag vocabulary
//!     let tags = Tag::list(&client, &Classification::Wanted).await?;
//!     println!("Found {} wanted tags", tags.len());
//!
//!     // Create a tag
//!     Tag::create(
//!         &client,
//!         Classification::Wanted,
//!         &TagCreate { name: "cat".to_string() },
//!     )
//!     .await?;
//!
//!     // Fetch an image by ID
//!     let image = Image::get(&client, "6419f0f5c1a5e9c6c4e8b2a1").await?;
//!     println!("Image: {} ({} bytes)", image.name, image.size);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Read operations go through two traits:
//!
//! - [`Get`] - Fetch a single entity by ID
//! - [`List`] - Fetch a whole collection (the API is unpaginated)
//!
//! Mutating operations are inherent methods on the entity types
//! ([`Tag`], [`Image`], [`User`]); they return the service's opaque
//! success payload as [`serde_json::Value`].
//!
//! Every call is one HTTP round trip against `host + path`: the client
//! checks the response status (anything at or above 300 is an error,
//! carrying the server's JSON detail), then parses the body into the
//! declared type. Failures propagate unchanged to the caller; the client
//! never retries, times out, or caches.
//!
//! # Configuration
//!
//! The client reads configuration from environment variables:
//!
//! - `CURATOR_API_URL` (required) - Base URL of the Curator service
//!
//! or takes the host directly via [`CuratorClient::new`].

mod client;
mod error;
mod models;
mod traits;

// Re-export core types
pub use client::CuratorClient;
pub use error::{CuratorError, Result};

// Re-export traits
pub use traits::{Get, List};

// Re-export models
pub use models::{
    // Tag types
    Classification,
    Tag,
    TagCreate,
    TagsPull,
    TagsPush,
    // Image types
    FileUpdate,
    Image,
    UnwantedImage,
    // User types
    User,
    UserCreate,
};

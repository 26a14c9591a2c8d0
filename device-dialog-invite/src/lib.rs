//! # device-dialog-invite
//!
//! Network helpers behind the invite dialog: a directory search and an
//! invitation request. Both are single request/response calls that resolve
//! to the service's parsed JSON or reject with a reason string.
//!
//! ## Usage
//! ```ignore
//! use device_dialog_invite::{DirectoryClient, DirectoryConfig};
//!
//! let client = DirectoryClient::new(DirectoryConfig::default())?;
//! let people = client.search_people("https://directory.example.com/search", jwt, "ali").await?;
//! ```

pub mod client;
pub mod config;
pub mod error;

pub use client::DirectoryClient;
pub use config::{DirectoryConfig, DEFAULT_QUERY_TYPES};
pub use error::DirectoryError;

/// One-off directory search with the default configuration.
pub async fn search_people(
    service_url: &str,
    jwt: &str,
    text: &str,
) -> Result<serde_json::Value, DirectoryError> {
    DirectoryClient::new(DirectoryConfig::default())?
        .search_people(service_url, jwt, text)
        .await
}

/// One-off invitation request with the default configuration.
pub async fn invite_people<T: serde::Serialize>(
    invite_service_url: &str,
    invite_url: &str,
    jwt: &str,
    items: &[T],
) -> Result<serde_json::Value, DirectoryError> {
    DirectoryClient::new(DirectoryConfig::default())?
        .invite_people(invite_service_url, invite_url, jwt, items)
        .await
}

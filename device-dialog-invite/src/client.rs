use serde::Serialize;
use serde_json::Value;

use crate::config::DirectoryConfig;
use crate::error::DirectoryError;

/// Body of an invitation request.
#[derive(Serialize)]
struct InviteRequest<'a, T: Serialize> {
    invited: &'a [T],
    url: &'a str,
}

/// Client for the directory search and invitation services.
///
/// Each call issues exactly one HTTP request and resolves or rejects once.
/// There is no retry and no timeout beyond the underlying HTTP client's.
#[derive(Debug, Clone)]
pub struct DirectoryClient {
    http: reqwest::Client,
    config: DirectoryConfig,
    query_types: String,
}

impl DirectoryClient {
    pub fn new(config: DirectoryConfig) -> Result<Self, DirectoryError> {
        config.validate().map_err(DirectoryError::InvalidConfig)?;
        let query_types = serde_json::to_string(&config.query_types)
            .map_err(|e| DirectoryError::InvalidConfig(format!("bad query types: {}", e)))?;
        Ok(Self {
            http: reqwest::Client::new(),
            config,
            query_types,
        })
    }

    pub fn config(&self) -> &DirectoryConfig {
        &self.config
    }

    /// Search the directory at `service_url` for people and rooms matching `text`.
    ///
    /// Issues `GET <service_url>?query=<text>&queryTypes=<types>&jwt=<jwt>`
    /// and returns the parsed JSON response.
    pub async fn search_people(
        &self,
        service_url: &str,
        jwt: &str,
        text: &str,
    ) -> Result<Value, DirectoryError> {
        log::debug!("directory search at {} for {:?}", service_url, text);
        let request = self.http.get(service_url).query(&[
            ("query", text),
            ("queryTypes", self.query_types.as_str()),
            ("jwt", jwt),
        ]);
        send(request).await
    }

    /// Ask the invite service to invite `items` to the conference at `invite_url`.
    ///
    /// Issues `POST <invite_service_url>?token=<jwt>` with body
    /// `{"invited": items, "url": invite_url}`.
    pub async fn invite_people<T: Serialize>(
        &self,
        invite_service_url: &str,
        invite_url: &str,
        jwt: &str,
        items: &[T],
    ) -> Result<Value, DirectoryError> {
        log::debug!(
            "inviting {} item(s) to {} via {}",
            items.len(),
            invite_url,
            invite_service_url
        );
        let body = InviteRequest {
            invited: items,
            url: invite_url,
        };
        let request = self
            .http
            .post(invite_service_url)
            .query(&[("token", jwt)])
            .json(&body);
        send(request).await
    }
}

async fn send(request: reqwest::RequestBuilder) -> Result<Value, DirectoryError> {
    let response = request.send().await.map_err(|e| {
        log::warn!("directory request failed: {}", e);
        DirectoryError::Request(e.to_string())
    })?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        log::warn!("directory service responded with {}", status);
        return Err(DirectoryError::Status {
            status: status.as_u16(),
            body,
        });
    }

    let text = response
        .text()
        .await
        .map_err(|e| DirectoryError::Request(e.to_string()))?;
    serde_json::from_str(&text).map_err(|e| DirectoryError::Decode(e.to_string()))
}

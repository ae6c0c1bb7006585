use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use serde::Deserialize;

use super::FetchError;
use crate::config::GalleryConfig;

/// Kind of a repository entry as reported by the contents API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Dir,
    Symlink,
    Submodule,
    #[serde(other)]
    Other,
}

/// One entry of a folder listing
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContentEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub path: String,
}

/// Result of listing a folder
#[derive(Debug, Clone, PartialEq)]
pub enum Listing {
    Entries(Vec<ContentEntry>),
    /// The folder does not exist on the branch
    NotFound,
}

/// Body shapes the contents API answers with
#[derive(Deserialize)]
#[serde(untagged)]
enum ContentsResponse {
    Entries(Vec<ContentEntry>),
    Error { message: String },
}

/// Something that can list repository folders
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn list(&self, path: &str) -> Result<Listing, FetchError>;
}

/// Contents API client for the configured repository
pub struct GithubContents {
    client: reqwest::Client,
    config: GalleryConfig,
}

impl GithubContents {
    pub fn new(client: reqwest::Client, config: GalleryConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl ContentSource for GithubContents {
    async fn list(&self, path: &str) -> Result<Listing, FetchError> {
        let url = self.config.listing_url(path);
        log::debug!("🔍 Listing {}", url);

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/vnd.github+json")
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(Listing::NotFound);
        }

        let body = response.text().await?;
        parse_listing(status.as_u16(), &body)
    }
}

/// Interpret a contents API body.
///
/// An array is a folder listing. An error object whose message is "Not Found"
/// means the folder does not exist; any other error object is an API failure.
pub fn parse_listing(status: u16, body: &str) -> Result<Listing, FetchError> {
    let parsed: ContentsResponse =
        serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;

    match parsed {
        ContentsResponse::Entries(entries) => Ok(Listing::Entries(entries)),
        ContentsResponse::Error { message } if message == "Not Found" => Ok(Listing::NotFound),
        ContentsResponse::Error { message } => Err(FetchError::Api { status, message }),
    }
}

/// Remote repository access
///
/// This module handles:
/// - Listing folders through the repository contents API (contents.rs)
/// - Fetching and downsizing preview images (preview.rs)
/// - Saving full-resolution wallpapers to disk (download.rs)

pub mod contents;
pub mod download;
pub mod preview;

use thiserror::Error;

/// Errors raised while talking to the remote repository.
/// Messages are kept as strings so errors can travel inside UI messages.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("unexpected response: {0}")]
    Decode(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("image decode failed: {0}")]
    Image(String),

    #[error("write failed: {0}")]
    Io(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Transport(err.to_string())
    }
}

/// Build the shared HTTP client. The contents API rejects requests without a user agent.
pub fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(concat!("wallpaper-gallery/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_default()
}

/// GET a URL and return its body, treating non-success statuses as transport failures
pub(crate) async fn fetch_bytes(client: &reqwest::Client, url: &str) -> Result<Vec<u8>, FetchError> {
    let response = client.get(url).send().await?.error_for_status()?;
    let bytes = response.bytes().await?;
    Ok(bytes.to_vec())
}

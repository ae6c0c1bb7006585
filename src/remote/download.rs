use std::path::PathBuf;

use super::{fetch_bytes, FetchError};

/// Download a wallpaper at full resolution and write it to `destination`
pub async fn save_wallpaper(
    client: reqwest::Client,
    url: String,
    destination: PathBuf,
) -> Result<PathBuf, FetchError> {
    let data = fetch_bytes(&client, &url).await?;

    tokio::fs::write(&destination, &data)
        .await
        .map_err(|e| FetchError::Io(format!("{}: {}", destination.display(), e)))?;

    log::info!(
        "💾 Saved {} ({:.1}MB)",
        destination.display(),
        data.len() as f64 / 1024.0 / 1024.0
    );
    Ok(destination)
}

/// Folder proposed by the save dialog
pub fn default_download_dir() -> PathBuf {
    dirs::download_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Preview generation for remote wallpapers
/// Downloads the full image and downsizes it so the grid never holds 4K textures
use image::GenericImageView;

use super::{fetch_bytes, FetchError};

/// Bounding box of generated previews (square, aspect ratio preserved)
const PREVIEW_SIZE: u32 = 640;

/// Decoded preview pixels, ready to hand to the renderer
#[derive(Debug, Clone)]
pub struct PreviewImage {
    pub width: u32,
    pub height: u32,
    /// RGBA8, row-major
    pub rgba: Vec<u8>,
}

/// Fetch a wallpaper and produce its preview
pub async fn fetch_preview(client: reqwest::Client, url: String) -> Result<PreviewImage, FetchError> {
    let data = fetch_bytes(&client, &url).await?;

    // Decoding a 4K JPEG is CPU-bound
    tokio::task::spawn_blocking(move || decode_preview(&data))
        .await
        .map_err(|e| FetchError::Image(format!("Task join error: {}", e)))?
}

/// Decode image bytes and shrink them to fit the preview box
fn decode_preview(data: &[u8]) -> Result<PreviewImage, FetchError> {
    let img = image::load_from_memory(data).map_err(|e| FetchError::Image(e.to_string()))?;

    let preview = if img.width() > PREVIEW_SIZE || img.height() > PREVIEW_SIZE {
        img.thumbnail(PREVIEW_SIZE, PREVIEW_SIZE)
    } else {
        img
    };

    let (width, height) = preview.dimensions();
    Ok(PreviewImage {
        width,
        height,
        rgba: preview.to_rgba8().into_raw(),
    })
}

/// Gallery configuration
///
/// The gallery only needs to know which repository holds the wallpapers:
/// the owning account, the repository name and the branch. Hosts and the
/// base folder are kept alongside so tests can point at other locations.
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::state::data::Category;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GalleryConfig {
    /// Account that owns the wallpaper repository
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Branch the crawler commits to
    pub branch: String,
    /// Folder holding one sub-folder per capture date
    pub base_path: String,
    /// Contents API host
    pub api_host: String,
    /// Raw file host used for previews and downloads
    pub raw_host: String,
    /// The only image extension the crawler produces
    pub image_extension: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            owner: "wallpaper-gallery".to_string(),
            repo: "daily-unsplash-4k-wallpapers".to_string(),
            branch: "main".to_string(),
            base_path: "wallpapers".to_string(),
            api_host: "https://api.github.com".to_string(),
            raw_host: "https://raw.githubusercontent.com".to_string(),
            image_extension: ".jpg".to_string(),
        }
    }
}

impl GalleryConfig {
    /// Load the configuration, applying the optional override file on top of the defaults.
    ///
    /// The override lives at:
    /// - Linux: ~/.config/wallpaper-gallery/config.json
    /// - macOS: ~/Library/Application Support/wallpaper-gallery/config.json
    /// - Windows: %APPDATA%\wallpaper-gallery\config.json
    pub fn load() -> Self {
        let path = Self::config_path();

        let data = match std::fs::read_to_string(&path) {
            Ok(data) => data,
            Err(_) => return Self::default(),
        };

        match serde_json::from_str(&data) {
            Ok(config) => {
                log::info!("📁 Loaded gallery config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("⚠️  Ignoring malformed config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("wallpaper-gallery")
            .join("config.json")
    }

    /// Contents API URL listing `path` on the configured branch
    pub fn listing_url(&self, path: &str) -> String {
        format!(
            "{}/repos/{}/{}/contents/{}?ref={}",
            self.api_host.trim_end_matches('/'),
            self.owner,
            self.repo,
            path.trim_matches('/'),
            self.branch
        )
    }

    /// Raw content URL for a file path inside the repository
    pub fn raw_url(&self, path: &str) -> String {
        format!(
            "{}/{}/{}/{}/{}",
            self.raw_host.trim_end_matches('/'),
            self.owner,
            self.repo,
            self.branch,
            path.trim_start_matches('/')
        )
    }

    /// Folder listing the wallpapers of one date and category
    pub fn category_path(&self, date: &str, category: Category) -> String {
        format!("{}/{}/{}", self.base_path, date, category.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_url() {
        let config = GalleryConfig {
            owner: "octo".to_string(),
            ..GalleryConfig::default()
        };

        assert_eq!(
            config.listing_url("wallpapers"),
            "https://api.github.com/repos/octo/daily-unsplash-4k-wallpapers/contents/wallpapers?ref=main"
        );
    }

    #[test]
    fn test_raw_url_and_category_path() {
        let config = GalleryConfig {
            owner: "octo".to_string(),
            ..GalleryConfig::default()
        };

        let path = config.category_path("2025-11-20", Category::Mobile);
        assert_eq!(path, "wallpapers/2025-11-20/mobile");
        assert_eq!(
            config.raw_url(&format!("{}/a.jpg", path)),
            "https://raw.githubusercontent.com/octo/daily-unsplash-4k-wallpapers/main/wallpapers/2025-11-20/mobile/a.jpg"
        );
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config: GalleryConfig =
            serde_json::from_str(r#"{ "owner": "octo", "branch": "gh-pages" }"#).unwrap();

        assert_eq!(config.owner, "octo");
        assert_eq!(config.branch, "gh-pages");
        assert_eq!(config.repo, GalleryConfig::default().repo);
        assert_eq!(config.image_extension, ".jpg");
    }
}

use super::WallpaperLoadError;
use crate::config::GalleryConfig;
use crate::remote::contents::{ContentEntry, ContentSource, EntryKind, Listing};
use crate::state::data::{Category, WallpaperEntry};

/// List the wallpapers published for one date and category, sorted by file name.
///
/// A folder that does not exist yields an empty list: not every date has
/// both categories. Without a date nothing is requested.
pub async fn load_wallpapers(
    source: &dyn ContentSource,
    config: &GalleryConfig,
    date: &str,
    category: Category,
) -> Result<Vec<WallpaperEntry>, WallpaperLoadError> {
    if date.is_empty() {
        return Ok(Vec::new());
    }

    let path = config.category_path(date, category);

    let entries = match source.list(&path).await? {
        Listing::Entries(entries) => entries,
        Listing::NotFound => {
            log::info!("📂 No {} wallpapers for {}", category, date);
            return Ok(Vec::new());
        }
    };

    let wallpapers = wallpapers_from_entries(config, &entries);
    log::info!("🖼️  Loaded {} {} wallpapers for {}", wallpapers.len(), category, date);
    for wallpaper in &wallpapers {
        log::debug!("   {}", wallpaper.remote_path);
    }

    Ok(wallpapers)
}

/// Keep image files with the configured extension, ordered by file name
pub fn wallpapers_from_entries(config: &GalleryConfig, entries: &[ContentEntry]) -> Vec<WallpaperEntry> {
    let mut images: Vec<&ContentEntry> = entries
        .iter()
        .filter(|entry| entry.kind == EntryKind::File)
        .filter(|entry| entry.name.ends_with(&config.image_extension))
        .collect();

    // Byte-wise, so "B.jpg" sorts before "a.jpg"
    images.sort_by(|a, b| a.name.cmp(&b.name));

    images
        .into_iter()
        .map(|entry| {
            let url = config.raw_url(&entry.path);
            WallpaperEntry {
                file_name: entry.name.clone(),
                remote_path: entry.path.clone(),
                preview_url: url.clone(),
                download_url: url,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::testing::{dir, file, StubSource};
    use crate::remote::FetchError;

    const FOLDER: &str = "wallpapers/2025-11-20/desktop";

    fn names(wallpapers: &[WallpaperEntry]) -> Vec<&str> {
        wallpapers.iter().map(|w| w.file_name.as_str()).collect()
    }

    #[tokio::test]
    async fn test_filters_and_sorts_by_name() {
        let source = StubSource::new().with(
            FOLDER,
            Ok(Listing::Entries(vec![
                file(FOLDER, "b.jpg"),
                file(FOLDER, "a.jpg"),
                file(FOLDER, "a.png"),
            ])),
        );

        let wallpapers = load_wallpapers(&source, &GalleryConfig::default(), "2025-11-20", Category::Desktop)
            .await
            .unwrap();

        assert_eq!(names(&wallpapers), ["a.jpg", "b.jpg"]);
    }

    #[test]
    fn test_sort_is_case_sensitive_and_skips_folders() {
        let entries = vec![
            file(FOLDER, "desktop_10.jpg"),
            file(FOLDER, "desktop_02.jpg"),
            file(FOLDER, "Zebra.jpg"),
            dir(FOLDER, "nested.jpg"),
            file(FOLDER, "photo.JPG"),
            file(FOLDER, "notes.jpg.txt"),
        ];

        let wallpapers = wallpapers_from_entries(&GalleryConfig::default(), &entries);

        assert_eq!(names(&wallpapers), ["Zebra.jpg", "desktop_02.jpg", "desktop_10.jpg"]);
    }

    #[test]
    fn test_urls_point_at_raw_content() {
        let config = GalleryConfig {
            owner: "octo".to_string(),
            ..GalleryConfig::default()
        };

        let wallpapers = wallpapers_from_entries(&config, &[file(FOLDER, "desktop_01.jpg")]);
        let wallpaper = &wallpapers[0];

        assert_eq!(wallpaper.remote_path, "wallpapers/2025-11-20/desktop/desktop_01.jpg");
        assert_eq!(
            wallpaper.download_url,
            "https://raw.githubusercontent.com/octo/daily-unsplash-4k-wallpapers/main/wallpapers/2025-11-20/desktop/desktop_01.jpg"
        );
        assert_eq!(wallpaper.preview_url, wallpaper.download_url);
    }

    #[tokio::test]
    async fn test_missing_folder_is_empty_not_error() {
        let source = StubSource::new();

        let wallpapers = load_wallpapers(&source, &GalleryConfig::default(), "2025-11-20", Category::Mobile)
            .await
            .unwrap();

        assert!(wallpapers.is_empty());
        assert_eq!(source.call_count(), 1);
    }

    #[tokio::test]
    async fn test_empty_date_makes_no_request() {
        let source = StubSource::new();

        let wallpapers = load_wallpapers(&source, &GalleryConfig::default(), "", Category::Desktop)
            .await
            .unwrap();

        assert!(wallpapers.is_empty());
        assert_eq!(source.call_count(), 0);
    }

    #[tokio::test]
    async fn test_transport_failure_is_wallpaper_error() {
        let failure = FetchError::Decode("expected value at line 1".to_string());
        let source = StubSource::new().with(FOLDER, Err(failure.clone()));

        let err = load_wallpapers(&source, &GalleryConfig::default(), "2025-11-20", Category::Desktop)
            .await
            .unwrap_err();

        assert_eq!(err, WallpaperLoadError(failure));
    }

    #[tokio::test]
    async fn test_repeated_loads_are_identical() {
        let source = StubSource::new().with(
            FOLDER,
            Ok(Listing::Entries(vec![file(FOLDER, "b.jpg"), file(FOLDER, "a.jpg")])),
        );
        let config = GalleryConfig::default();

        let first = load_wallpapers(&source, &config, "2025-11-20", Category::Desktop).await.unwrap();
        let second = load_wallpapers(&source, &config, "2025-11-20", Category::Desktop).await.unwrap();

        assert_eq!(first, second);
    }
}

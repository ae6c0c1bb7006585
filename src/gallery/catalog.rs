use chrono::NaiveDate;

use super::CatalogLoadError;
use crate::config::GalleryConfig;
use crate::remote::contents::{ContentEntry, ContentSource, EntryKind, Listing};
use crate::state::data::DateEntry;

/// Load all capture dates, newest first.
///
/// An empty result means the repository holds no dated folders yet; this
/// includes the base folder itself not existing.
pub async fn load_date_catalog(
    source: &dyn ContentSource,
    config: &GalleryConfig,
) -> Result<Vec<DateEntry>, CatalogLoadError> {
    let entries = match source.list(&config.base_path).await? {
        Listing::Entries(entries) => entries,
        Listing::NotFound => {
            log::warn!("⚠️  Base folder '{}' not found", config.base_path);
            Vec::new()
        }
    };

    let catalog = catalog_from_entries(&entries);
    log::info!("📅 Found {} wallpaper dates", catalog.len());

    Ok(catalog)
}

/// Keep dated folders and sort them newest first
pub fn catalog_from_entries(entries: &[ContentEntry]) -> Vec<DateEntry> {
    let mut dates: Vec<NaiveDate> = entries
        .iter()
        .filter(|entry| entry.kind == EntryKind::Dir)
        .filter_map(|entry| parse_folder_date(&entry.name))
        .collect();

    dates.sort_unstable_by(|a, b| b.cmp(a));
    dates.dedup();

    dates
        .into_iter()
        .map(|date| DateEntry {
            name: date.format("%Y-%m-%d").to_string(),
            display_label: date.format("%b %-d, %Y").to_string(),
        })
        .collect()
}

/// Parse a folder name of the exact form YYYY-MM-DD that is also a real calendar day
fn parse_folder_date(name: &str) -> Option<NaiveDate> {
    let bytes = name.as_bytes();
    if bytes.len() != 10 {
        return None;
    }

    let well_formed = bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        _ => b.is_ascii_digit(),
    });
    if !well_formed {
        return None;
    }

    NaiveDate::parse_from_str(name, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::testing::{dir, file, StubSource};
    use crate::remote::FetchError;

    fn names(catalog: &[DateEntry]) -> Vec<&str> {
        catalog.iter().map(|entry| entry.name.as_str()).collect()
    }

    #[test]
    fn test_only_dated_folders_newest_first() {
        let entries = vec![
            dir("wallpapers", "2025-11-19"),
            dir("wallpapers", "2025-11-20"),
            dir("wallpapers", "notadate"),
            dir("wallpapers", "2024-12-31"),
            file("wallpapers", "2025-11-21"),
            dir("wallpapers", "2025-1-05"),
            dir("wallpapers", "2025-13-40"),
            dir("wallpapers", "2025-11-20x"),
        ];

        let catalog = catalog_from_entries(&entries);

        assert_eq!(names(&catalog), ["2025-11-20", "2025-11-19", "2024-12-31"]);
    }

    #[test]
    fn test_display_labels() {
        let catalog = catalog_from_entries(&[dir("wallpapers", "2025-11-05")]);
        assert_eq!(catalog[0].display_label, "Nov 5, 2025");
        assert_eq!(catalog[0].to_string(), "Nov 5, 2025");
    }

    #[test]
    fn test_sorted_strictly_descending() {
        let entries: Vec<_> = ["2023-02-28", "2025-01-01", "2024-02-29", "2025-01-01", "2024-10-09"]
            .iter()
            .map(|name| dir("wallpapers", name))
            .collect();

        let catalog = catalog_from_entries(&entries);

        assert_eq!(catalog.len(), 4);
        assert!(catalog.windows(2).all(|pair| pair[0].name > pair[1].name));
    }

    #[tokio::test]
    async fn test_load_catalog_excludes_non_dates() {
        let source = StubSource::new().with(
            "wallpapers",
            Ok(Listing::Entries(vec![
                dir("wallpapers", "2025-11-19"),
                dir("wallpapers", "2025-11-20"),
                dir("wallpapers", "notadate"),
            ])),
        );

        let catalog = load_date_catalog(&source, &GalleryConfig::default()).await.unwrap();

        assert_eq!(names(&catalog), ["2025-11-20", "2025-11-19"]);
        assert_eq!(source.call_count(), 1);
    }

    #[tokio::test]
    async fn test_no_dated_folders_is_empty_not_error() {
        let source = StubSource::new().with(
            "wallpapers",
            Ok(Listing::Entries(vec![dir("wallpapers", "drafts")])),
        );

        let catalog = load_date_catalog(&source, &GalleryConfig::default()).await.unwrap();
        assert!(catalog.is_empty());

        // Missing base folder behaves the same
        let catalog = load_date_catalog(&StubSource::new(), &GalleryConfig::default())
            .await
            .unwrap();
        assert!(catalog.is_empty());
    }

    #[tokio::test]
    async fn test_transport_failure_is_catalog_error() {
        let failure = FetchError::Transport("connection refused".to_string());
        let source = StubSource::new().with("wallpapers", Err(failure.clone()));

        let err = load_date_catalog(&source, &GalleryConfig::default()).await.unwrap_err();
        assert_eq!(err, CatalogLoadError(failure));
    }
}

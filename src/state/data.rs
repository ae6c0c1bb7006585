/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the remote loaders and the UI layer.
use std::fmt;

/// Device-orientation bucket a wallpaper was cropped for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    Desktop,
    Mobile,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Desktop, Category::Mobile];

    /// Folder name in the repository
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Desktop => "desktop",
            Category::Mobile => "mobile",
        }
    }

    /// Capitalized name for display
    pub fn display_name(self) -> &'static str {
        match self {
            Category::Desktop => "Desktop",
            Category::Mobile => "Mobile",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the date catalog stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogStatus {
    Loading,
    Ready,
    /// The repository has no dated folders
    Empty,
    /// The listing could not be fetched
    Failed,
}

/// One capture date available in the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateEntry {
    /// Folder name (e.g., "2025-11-20")
    pub name: String,
    /// Human-readable label (e.g., "Nov 20, 2025")
    pub display_label: String,
}

// The date selector shows labels, not folder names
impl fmt::Display for DateEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_label)
    }
}

/// A single wallpaper image found under a date/category folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WallpaperEntry {
    /// Filename only (e.g., "desktop_01.jpg")
    pub file_name: String,
    /// Path inside the repository
    pub remote_path: String,
    /// Raw URL used for the preview
    pub preview_url: String,
    /// Raw URL used for the full-resolution download
    pub download_url: String,
}

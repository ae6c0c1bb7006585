/// Gallery loaders
///
/// - catalog.rs: discovers the available capture dates
/// - wallpapers.rs: lists the wallpapers of one date and category
/// - theme_label.rs: cosmetic theme text shown above a loaded grid
///
/// Both loaders only return data; populating the window is the caller's job.

pub mod catalog;
pub mod theme_label;
pub mod wallpapers;

use thiserror::Error;

use crate::remote::FetchError;

/// The date catalog could not be fetched or decoded
#[derive(Debug, Clone, PartialEq, Error)]
#[error("failed to load date list: {0}")]
pub struct CatalogLoadError(#[from] pub FetchError);

/// A wallpaper listing could not be fetched or decoded
#[derive(Debug, Clone, PartialEq, Error)]
#[error("failed to load wallpapers: {0}")]
pub struct WallpaperLoadError(#[from] pub FetchError);

/// Cosmetic theme text shown above a loaded grid.
///
/// The crawler does not record which search theme produced a date's
/// wallpapers, so the default provider picks one at random.
use rand::seq::SliceRandom;

use crate::state::data::Category;

const THEMES: [&str; 9] = [
    "Serene Nature Landscapes",
    "Vibrant City Skylines",
    "Mystical Night Skies",
    "Lush Forest Trails",
    "Calm Ocean Waves",
    "Majestic Mountain Peaks",
    "Minimalist Architecture",
    "Colorful Sunset Horizons",
    "Starry Galaxies",
];

pub trait ThemeLabelProvider: Send + Sync {
    fn label(&self, date: &str, category: Category) -> String;
}

/// Random pick from a fixed list; no relation to the actual images
#[derive(Debug, Default)]
pub struct RandomThemeLabels;

impl ThemeLabelProvider for RandomThemeLabels {
    fn label(&self, _date: &str, _category: Category) -> String {
        THEMES
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(THEMES[0])
            .to_string()
    }
}

/// Always the same label
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct FixedThemeLabel(pub String);

#[cfg(test)]
impl ThemeLabelProvider for FixedThemeLabel {
    fn label(&self, _date: &str, _category: Category) -> String {
        self.0.clone()
    }
}

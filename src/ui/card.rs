use iced::widget::{button, column, container, image, row, text};
use iced::{Alignment, ContentFit, Element, Length};

use crate::state::data::{Category, WallpaperEntry};
use crate::Message;

/// Card width in the grid
pub const CARD_WIDTH: f32 = 300.0;
/// Height of the preview area; previews are cropped to fill it
const PREVIEW_HEIGHT: f32 = 200.0;

/// Everything a grid card displays for one wallpaper
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WallpaperCard {
    /// Original file name, keys the preview and the download
    pub file_name: String,
    /// Text under the preview
    pub caption: String,
    /// Shown in place of the preview until it arrives, e.g., "desktop wallpaper - 2025-11-20"
    pub alt_text: String,
    pub preview_url: String,
    pub download_url: String,
    /// File name proposed when saving: "{date}_{file_name}"
    pub download_name: String,
    /// e.g., "4K Desktop"
    pub category_label: String,
}

impl WallpaperCard {
    pub fn new(date: &str, category: Category, entry: &WallpaperEntry) -> Self {
        Self {
            file_name: entry.file_name.clone(),
            caption: entry.file_name.clone(),
            alt_text: format!("{} wallpaper - {}", category.as_str(), date),
            preview_url: entry.preview_url.clone(),
            download_url: entry.download_url.clone(),
            download_name: format!("{}_{}", date, entry.file_name),
            category_label: format!("4K {}", category.display_name()),
        }
    }
}

/// One card per wallpaper, in listing order
pub fn build_cards(date: &str, category: Category, entries: &[WallpaperEntry]) -> Vec<WallpaperCard> {
    entries
        .iter()
        .map(|entry| WallpaperCard::new(date, category, entry))
        .collect()
}

/// Render a card. `preview` is None until the downsized image has arrived.
pub fn view<'a>(card: &'a WallpaperCard, preview: Option<&'a image::Handle>) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match preview {
        Some(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(PREVIEW_HEIGHT))
            .content_fit(ContentFit::Cover)
            .into(),
        None => container(text(&card.alt_text).size(12))
            .width(Length::Fill)
            .height(Length::Fixed(PREVIEW_HEIGHT))
            .center_x(Length::Fill)
            .center_y(Length::Fixed(PREVIEW_HEIGHT))
            .into(),
    };

    let caption = column![
        text(&card.caption).size(14),
        text(&card.category_label).size(12),
    ]
    .spacing(4)
    .width(Length::Fill);

    let footer = row![
        caption,
        button(text("Download").size(13))
            .on_press(Message::DownloadRequested(card.file_name.clone()))
            .style(button::primary)
            .padding([6, 12]),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    container(column![picture, footer].spacing(10))
        .width(Length::Fixed(CARD_WIDTH))
        .padding(10)
        .style(container::rounded_box)
        .into()
}

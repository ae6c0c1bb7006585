use iced::widget::{button, column, container, horizontal_space, pick_list, row, text};
use iced::{Alignment, Element, Length};

use crate::state::data::{CatalogStatus, Category, DateEntry};
use crate::Message;

/// Top bar: date selector, category toggle and dark-mode switch
pub fn header<'a>(
    catalog: &'a [DateEntry],
    status: CatalogStatus,
    selected: Option<&'a DateEntry>,
    category: Category,
    dark_mode: bool,
) -> Element<'a, Message> {
    let dates = pick_list(catalog, selected, Message::DateSelected)
        .placeholder(date_placeholder(status))
        .width(Length::Fixed(200.0));

    let categories = Category::ALL
        .into_iter()
        .fold(row![].spacing(6), |buttons, item| {
            buttons.push(category_button(item, category))
        });

    let theme_toggle = button(text(if dark_mode { "Light Mode" } else { "Dark Mode" }).size(14))
        .on_press(Message::ThemeToggled)
        .style(button::text);

    row![
        text("Daily 4K Wallpapers").size(28),
        horizontal_space(),
        dates,
        categories,
        theme_toggle,
    ]
    .spacing(16)
    .align_y(Alignment::Center)
    .into()
}

/// Text of the date selector while nothing is selected.
/// Only an empty catalog reads as "no wallpapers"; a failed load leaves the selector blank.
pub fn date_placeholder(status: CatalogStatus) -> &'static str {
    match status {
        CatalogStatus::Loading => "Loading dates...",
        CatalogStatus::Ready => "Select a date",
        CatalogStatus::Empty => "No wallpapers found",
        CatalogStatus::Failed => "",
    }
}

/// Exactly one category button carries the primary style
fn category_button<'a>(category: Category, selected: Category) -> Element<'a, Message> {
    let style = if category == selected {
        button::primary
    } else {
        button::secondary
    };

    button(text(category.display_name()))
        .on_press(Message::CategorySelected(category))
        .style(style)
        .padding([8, 16])
        .into()
}

/// Full-width message shown in place of the grid
pub fn banner<'a>(message: &'a str, is_error: bool) -> Element<'a, Message> {
    let label = if is_error {
        text(message).size(18).style(text::danger)
    } else {
        text(message).size(18)
    };

    container(label)
        .width(Length::Fill)
        .padding(48)
        .center_x(Length::Fill)
        .into()
}

/// Error banner with the underlying cause in smaller print
pub fn error_banner<'a>(message: &'a str, detail: &'a str) -> Element<'a, Message> {
    let content = column![
        text(message).size(18).style(text::danger),
        text(detail).size(12),
    ]
    .spacing(6)
    .align_x(Alignment::Center);

    container(content)
        .width(Length::Fill)
        .padding(48)
        .center_x(Length::Fill)
        .into()
}

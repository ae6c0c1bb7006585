use iced::widget::{column, container, image, scrollable, text};
use iced::{Element, Length, Task, Theme};
use iced_aw::Wrap;
use rfd::FileDialog;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

mod config;
mod gallery;
mod remote;
mod state;
mod ui;

use config::GalleryConfig;
use gallery::catalog::load_date_catalog;
use gallery::theme_label::{RandomThemeLabels, ThemeLabelProvider};
use gallery::wallpapers::load_wallpapers;
use gallery::{CatalogLoadError, WallpaperLoadError};
use remote::contents::{ContentSource, GithubContents};
use remote::preview::{fetch_preview, PreviewImage};
use remote::FetchError;
use state::data::{CatalogStatus, Category, DateEntry, WallpaperEntry};
use state::selection::{RenderTicket, SelectionState};
use ui::card::{self, WallpaperCard};

/// What the grid area currently shows
#[derive(Debug, Clone, PartialEq)]
enum GridState {
    /// Nothing requested yet (no date selected)
    Idle,
    Loading,
    Ready(Vec<WallpaperCard>),
    /// The date/category folder is missing or holds no images
    Empty,
    /// Listing failed; holds the error text
    Failed(String),
}

/// Main application state
struct Gallery {
    config: GalleryConfig,
    /// Lists repository folders
    source: Arc<dyn ContentSource>,
    /// Picks the cosmetic theme text
    labels: Arc<dyn ThemeLabelProvider>,
    /// Shared client for previews and downloads
    http: reqwest::Client,
    /// Dates available, newest first
    catalog: Vec<DateEntry>,
    catalog_status: CatalogStatus,
    selection: SelectionState,
    grid: GridState,
    /// Downsized previews of the current grid, keyed by file name
    previews: HashMap<String, image::Handle>,
    theme_label: Option<String>,
    dark_mode: bool,
    /// Download feedback
    status: Option<String>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// Date catalog finished loading
    CatalogLoaded(Result<Vec<DateEntry>, CatalogLoadError>),
    /// User picked a date
    DateSelected(DateEntry),
    /// User clicked a category button
    CategorySelected(Category),
    /// A wallpaper listing finished loading
    WallpapersLoaded(RenderTicket, Result<Vec<WallpaperEntry>, WallpaperLoadError>),
    /// A card preview finished loading (ticket, file name, result)
    PreviewLoaded(RenderTicket, String, Result<PreviewImage, FetchError>),
    /// User clicked the download button of a card (file name)
    DownloadRequested(String),
    /// Background download completed
    DownloadFinished(Result<PathBuf, FetchError>),
    /// User clicked the dark-mode switch
    ThemeToggled,
}

impl Gallery {
    /// Create the gallery against the configured repository and start loading the catalog
    fn new() -> (Self, Task<Message>) {
        let config = GalleryConfig::load();
        let http = remote::http_client();
        let source = Arc::new(GithubContents::new(http.clone(), config.clone()));

        log::info!(
            "🎨 Wallpaper Gallery browsing {}/{}@{}",
            config.owner,
            config.repo,
            config.branch
        );

        let gallery = Self::with_parts(config, source, Arc::new(RandomThemeLabels), http);
        let task = gallery.load_catalog();

        (gallery, task)
    }

    /// Build the gallery from explicit collaborators
    fn with_parts(
        config: GalleryConfig,
        source: Arc<dyn ContentSource>,
        labels: Arc<dyn ThemeLabelProvider>,
        http: reqwest::Client,
    ) -> Self {
        Self {
            config,
            source,
            labels,
            http,
            catalog: Vec::new(),
            catalog_status: CatalogStatus::Loading,
            selection: SelectionState::new(),
            grid: GridState::Idle,
            previews: HashMap::new(),
            theme_label: None,
            dark_mode: false,
            status: None,
        }
    }

    fn load_catalog(&self) -> Task<Message> {
        let source = Arc::clone(&self.source);
        let config = self.config.clone();

        Task::perform(
            async move { load_date_catalog(source.as_ref(), &config).await },
            Message::CatalogLoaded,
        )
    }

    /// Request the wallpapers of the current selection.
    /// Does nothing while no date is selected.
    fn request_render(&mut self) -> Task<Message> {
        let Some(ticket) = self.selection.begin_render() else {
            return Task::none();
        };

        self.grid = GridState::Loading;
        self.previews.clear();
        self.theme_label = None;

        let source = Arc::clone(&self.source);
        let config = self.config.clone();
        let request = ticket.clone();

        Task::perform(
            async move { load_wallpapers(source.as_ref(), &config, &request.date, request.category).await },
            move |result| Message::WallpapersLoaded(ticket.clone(), result),
        )
    }

    /// One preview fetch per card, tagged with the ticket that produced the cards
    fn request_previews(&self, ticket: &RenderTicket, cards: &[WallpaperCard]) -> Task<Message> {
        let tasks: Vec<Task<Message>> = cards
            .iter()
            .map(|card| {
                let client = self.http.clone();
                let url = card.preview_url.clone();
                let ticket = ticket.clone();
                let file_name = card.file_name.clone();

                Task::perform(fetch_preview(client, url), move |result| {
                    Message::PreviewLoaded(ticket.clone(), file_name.clone(), result)
                })
            })
            .collect();

        Task::batch(tasks)
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CatalogLoaded(Ok(catalog)) => {
                self.selection.apply_catalog(&catalog);
                self.catalog = catalog;

                if self.catalog.is_empty() {
                    self.catalog_status = CatalogStatus::Empty;
                    self.grid = GridState::Idle;
                    return Task::none();
                }

                self.catalog_status = CatalogStatus::Ready;
                self.request_render()
            }
            Message::CatalogLoaded(Err(err)) => {
                log::error!("❌ {}", err);
                self.catalog.clear();
                self.selection.apply_catalog(&[]);
                self.catalog_status = CatalogStatus::Failed;
                self.grid = GridState::Idle;
                Task::none()
            }
            Message::DateSelected(entry) => {
                if !self.selection.select_date(&entry.name, &self.catalog) {
                    log::warn!("⚠️  Ignoring unknown date {}", entry.name);
                    return Task::none();
                }
                self.request_render()
            }
            Message::CategorySelected(category) => {
                self.selection.select_category(category);
                self.request_render()
            }
            Message::WallpapersLoaded(ticket, result) => {
                if !self.selection.is_current(&ticket) {
                    log::debug!(
                        "Dropping stale listing #{} for {}/{}",
                        ticket.sequence,
                        ticket.date,
                        ticket.category
                    );
                    return Task::none();
                }

                match result {
                    Ok(entries) if entries.is_empty() => {
                        self.grid = GridState::Empty;
                        Task::none()
                    }
                    Ok(entries) => {
                        let cards = card::build_cards(&ticket.date, ticket.category, &entries);
                        let previews = self.request_previews(&ticket, &cards);

                        self.theme_label = Some(self.labels.label(&ticket.date, ticket.category));
                        self.grid = GridState::Ready(cards);
                        previews
                    }
                    Err(err) => {
                        log::error!("❌ {}", err);
                        self.grid = GridState::Failed(err.to_string());
                        Task::none()
                    }
                }
            }
            Message::PreviewLoaded(ticket, file_name, result) => {
                if !self.selection.is_current(&ticket) {
                    return Task::none();
                }

                match result {
                    Ok(preview) => {
                        let handle = image::Handle::from_rgba(preview.width, preview.height, preview.rgba);
                        self.previews.insert(file_name, handle);
                    }
                    Err(err) => {
                        log::warn!("⚠️  Preview failed for {}: {}", file_name, err);
                    }
                }
                Task::none()
            }
            Message::DownloadRequested(file_name) => {
                let GridState::Ready(cards) = &self.grid else {
                    return Task::none();
                };
                let Some(card) = cards.iter().find(|card| card.file_name == file_name) else {
                    log::warn!("⚠️  {} is no longer in the grid", file_name);
                    return Task::none();
                };

                // Show the native save dialog, proposing "{date}_{file}"
                let extension = self.config.image_extension.trim_start_matches('.').to_string();
                let destination = FileDialog::new()
                    .set_title("Save Wallpaper")
                    .set_directory(remote::download::default_download_dir())
                    .set_file_name(card.download_name.as_str())
                    .add_filter("Image", &[extension.as_str()])
                    .save_file();

                let Some(destination) = destination else {
                    return Task::none();
                };

                self.status = Some(format!("Downloading {}...", card.download_name));

                Task::perform(
                    remote::download::save_wallpaper(self.http.clone(), card.download_url.clone(), destination),
                    Message::DownloadFinished,
                )
            }
            Message::DownloadFinished(result) => {
                self.status = Some(match result {
                    Ok(path) => format!("✅ Saved to {}", path.display()),
                    Err(err) => {
                        log::error!("❌ Download failed: {}", err);
                        format!("Download failed: {}", err)
                    }
                });
                Task::none()
            }
            Message::ThemeToggled => {
                self.dark_mode = !self.dark_mode;
                Task::none()
            }
        }
    }

    fn selected_entry(&self) -> Option<&DateEntry> {
        self.catalog
            .iter()
            .find(|entry| entry.name == self.selection.selected_date())
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let header = ui::controls::header(
            &self.catalog,
            self.catalog_status,
            self.selected_entry(),
            self.selection.selected_category(),
            self.dark_mode,
        );

        let body: Element<Message> = match (&self.catalog_status, &self.grid) {
            (CatalogStatus::Loading, _) => ui::controls::banner("Loading dates...", false),
            (CatalogStatus::Failed, _) => ui::controls::banner("Failed to load date list", true),
            (CatalogStatus::Empty, _) => ui::controls::banner("No wallpapers found", false),
            (CatalogStatus::Ready, GridState::Idle) => ui::controls::banner("Select a date", false),
            (CatalogStatus::Ready, GridState::Loading) => {
                ui::controls::banner("Loading wallpapers...", false)
            }
            (CatalogStatus::Ready, GridState::Empty) => {
                ui::controls::banner("No wallpapers found for this date", false)
            }
            (CatalogStatus::Ready, GridState::Failed(detail)) => {
                ui::controls::error_banner("Failed to load wallpapers", detail)
            }
            (CatalogStatus::Ready, GridState::Ready(cards)) => {
                let elements = cards
                    .iter()
                    .map(|item| card::view(item, self.previews.get(&item.file_name)))
                    .collect();

                scrollable(Wrap::with_elements(elements).spacing(16.0).line_spacing(16.0))
                    .height(Length::Fill)
                    .into()
            }
        };

        let mut content = column![header].spacing(20).padding(30);

        if let Some(label) = &self.theme_label {
            content = content.push(text(format!("Today's theme: {}", label)).size(16));
        }
        if let Some(status) = &self.status {
            content = content.push(text(status).size(14));
        }

        container(content.push(body))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        if self.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("wallpaper_gallery=info,warn"))
        .init();

    iced::application("Wallpaper Gallery", Gallery::update, Gallery::view)
        .theme(Gallery::theme)
        .centered()
        .run_with(Gallery::new)
}

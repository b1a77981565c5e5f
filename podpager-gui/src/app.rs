use iced::widget::{button, column, container, row, scrollable, text};
use iced::{Element, Length, Task};
use podpager_core::{
    FlagSurface, PagerEvent, Paginator, PodcastEntry, PodcastListing, default_listing_path,
    format_controls, format_date, format_page_summary, parse_listing_file,
};
use rfd::AsyncFileDialog;
use std::path::PathBuf;

const ITEM_WIDTH: f32 = 600.0;

#[derive(Debug, Clone)]
pub enum Message {
    // Page navigation
    PrevPage,
    NextPage,
    GoToPage(usize),

    // Listing lifecycle
    OpenListing,
    ListingPicked(Option<PathBuf>),
    ListingLoaded(Result<(PathBuf, PodcastListing), String>),
}

pub struct AppState {
    display_text: String,
    error_message: Option<String>,
    is_loading: bool,
    listing: PodcastListing,
    paginator: Paginator<FlagSurface>,
}

impl AppState {
    pub fn new() -> Self {
        let listing = PodcastListing::default();
        let paginator = build_paginator(&listing);
        Self {
            display_text: "Open a podcast listing to start browsing.".to_string(),
            error_message: None,
            is_loading: false,
            listing,
            paginator,
        }
    }
}

fn build_paginator(listing: &PodcastListing) -> Paginator<FlagSurface> {
    let surface = FlagSurface::new(listing.len());
    let items = surface.items();
    Paginator::initialize(surface, items)
}

async fn read_listing(path: PathBuf) -> Result<(PathBuf, PodcastListing), String> {
    let contents = tokio::fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    let listing = parse_listing_file(&path, &contents)
        .map_err(|e| format!("Failed to parse {}: {}", path.display(), e))?;
    Ok((path, listing))
}

/// Listing to load at startup. An explicit path is always tried; the data
/// directory listing only when it exists, since a fresh install has none yet.
fn initial_listing_path(arg: Option<PathBuf>, default: Option<PathBuf>) -> Option<PathBuf> {
    if arg.is_some() {
        return arg;
    }
    match default {
        Some(path) if path.exists() => Some(path),
        Some(path) => {
            log::info!("No listing at {} yet", path.display());
            None
        }
        None => None,
    }
}

pub fn initialize() -> (AppState, Task<Message>) {
    let mut state = AppState::new();
    let default = match default_listing_path() {
        Ok(path) => Some(path),
        Err(e) => {
            log::warn!("No default listing location: {}", e);
            None
        }
    };
    match initial_listing_path(std::env::args().nth(1).map(PathBuf::from), default) {
        Some(path) => {
            state.is_loading = true;
            (state, Task::perform(read_listing(path), Message::ListingLoaded))
        }
        None => (state, Task::none()),
    }
}

pub fn update(state: &mut AppState, message: Message) -> Task<Message> {
    match message {
        Message::PrevPage => state.paginator.handle(PagerEvent::Previous),
        Message::NextPage => state.paginator.handle(PagerEvent::Next),
        Message::GoToPage(page) => state.paginator.handle(PagerEvent::Page(page)),
        Message::OpenListing => {
            return Task::perform(
                async {
                    AsyncFileDialog::new()
                        .add_filter("Listing Files", &["json", "toml"])
                        .pick_file()
                        .await
                        .map(|handle| handle.path().to_path_buf())
                },
                Message::ListingPicked,
            );
        }
        Message::ListingPicked(path) => {
            if let Some(path) = path {
                state.is_loading = true;
                state.error_message = None;
                return Task::perform(read_listing(path), Message::ListingLoaded);
            }
            state.display_text = "Open cancelled.".to_string();
        }
        Message::ListingLoaded(result) => {
            state.is_loading = false;
            match result {
                Ok((path, listing)) => {
                    log::debug!(
                        "GUI loaded {} podcasts from {}",
                        listing.len(),
                        path.display()
                    );
                    state.paginator = build_paginator(&listing);
                    state.listing = listing;
                    state.display_text = format!("Loaded {}", path.display());
                    state.error_message = None;
                }
                Err(error) => {
                    log::error!("{}", error);
                    state.error_message = Some(error);
                }
            }
        }
    }
    Task::none()
}

fn entry_view<'a>(entry: &PodcastEntry) -> Element<'a, Message> {
    let title = if entry.explicit {
        format!("{} (explicit)", entry.title)
    } else {
        entry.title.clone()
    };
    let mut lines = column![text(title).size(18)].spacing(4);
    if let Some(author) = &entry.author {
        lines = lines.push(text(format!("by {}", author)).size(14));
    }
    if let Some(description) = &entry.description {
        lines = lines.push(text(description.clone()).size(14));
    }
    if !entry.categories.is_empty() {
        lines = lines.push(text(entry.categories.join(", ")).size(12));
    }
    if let Some(owner) = &entry.owner {
        let contact = match &owner.name {
            Some(name) => format!("Managed by {} <{}>", name, owner.email),
            None => format!("Managed by {}", owner.email),
        };
        lines = lines.push(text(contact).size(12));
    }
    lines = lines.push(text(format!("Language: {}", entry.language)).size(12));
    if let Some(date) = entry.updated.and_then(format_date) {
        lines = lines.push(text(format!("Updated {}", date)).size(12));
    }
    lines = lines.push(
        text(entry.link.clone())
            .size(12)
            .color(iced::Color::from_rgb(0.3, 0.3, 0.6)),
    );

    container(lines)
        .style(|_theme| container::Style {
            background: Some(iced::Color::from_rgb(0.98, 0.98, 0.98).into()),
            border: iced::Border {
                color: iced::Color::from_rgb(0.5, 0.5, 0.5),
                width: 1.0,
                radius: 4.0.into(),
            },
            ..Default::default()
        })
        .padding(8)
        .width(Length::Fixed(ITEM_WIDTH))
        .into()
}

pub fn view(state: &AppState) -> Element<Message> {
    let surface = state.paginator.surface();
    let snapshot = state.paginator.snapshot();

    let header = row![
        text(
            state
                .listing
                .title
                .clone()
                .unwrap_or_else(|| "Podcasts".to_string())
        )
        .size(24),
        button("Open listing")
            .on_press_maybe(if state.is_loading {
                None
            } else {
                Some(Message::OpenListing)
            })
            .padding(5),
    ]
    .spacing(20);

    // Only the items the paginator marked visible
    let items: Vec<Element<Message>> = state
        .listing
        .podcasts
        .iter()
        .zip(surface.visible.iter())
        .filter(|(_, visible)| **visible)
        .map(|(entry, _)| entry_view(entry))
        .collect();

    let mut controls: Vec<Element<Message>> = Vec::new();
    controls.push(
        button("Previous")
            .on_press_maybe(if surface.prev_enabled {
                Some(Message::PrevPage)
            } else {
                None
            })
            .padding(5)
            .into(),
    );
    for page_button in state.paginator.page_buttons() {
        let active = surface
            .active
            .get(page_button.handle)
            .copied()
            .unwrap_or(false);
        let control = button(text(page_button.page.to_string()))
            .on_press(Message::GoToPage(page_button.page))
            .padding(5);
        let control = if active {
            control.style(button::primary)
        } else {
            control.style(button::secondary)
        };
        controls.push(control.into());
    }
    controls.push(
        button("Next")
            .on_press_maybe(if surface.next_enabled {
                Some(Message::NextPage)
            } else {
                None
            })
            .padding(5)
            .into(),
    );

    let status_section = column![
        text(format_page_summary(&snapshot)).size(14),
        text(format_controls(&snapshot))
            .font(iced::Font::MONOSPACE)
            .size(12),
    ]
    .spacing(4);

    let error_section = if let Some(error) = &state.error_message {
        column![text(format!("Error: {}", error)).color(iced::Color::from_rgb(0.8, 0.1, 0.1))]
    } else {
        column![]
    };

    let content = column![
        header,
        column(items).spacing(10),
        row(controls).spacing(5),
        status_section,
        error_section,
        text(state.display_text.clone()).size(12),
    ]
    .spacing(20)
    .padding(20);

    scrollable(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

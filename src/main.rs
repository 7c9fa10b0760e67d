use iced::widget::image::Handle;
use iced::widget::scrollable::AbsoluteOffset;
use iced::widget::{column, scrollable, text};
use iced::{Element, Task, Theme};
use tracing_subscriber::EnvFilter;

mod config;
mod debounce;
mod state;
mod tmdb;
mod ui;

use config::{Config, RowMode, TmdbConfig};
use state::posters::{self, PosterCache};
use tmdb::{RawTitle, TmdbClient};
use ui::optimized_row::OptimizedRow;
use ui::slow_row::SlowRow;

/// The three independently-mounted row sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowId {
    Trending,
    Popular,
    Recommended,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// The search box changed; fires on every keystroke
    QueryChanged(String),
    /// A row's trending fetch finished
    RowFetched(RowId, Result<Vec<RawTitle>, String>),
    /// A debounce timer elapsed for the given row and generation
    DebounceElapsed(RowId, u64),
    /// Artwork for the given url finished downloading
    PosterLoaded(String, Result<Handle, String>),
    /// The user scrolled a carousel
    RowScrolled(RowId, AbsoluteOffset),
    /// Carousel chevron presses
    ScrollLeft(RowId),
    ScrollRight(RowId),
}

/// One row section, in whichever implementation the mode flag selected.
enum RowInstance {
    Slow(SlowRow),
    Optimized(OptimizedRow),
}

impl RowInstance {
    fn new(mode: RowMode, initial_query: &str) -> Self {
        match mode {
            RowMode::Slow => RowInstance::Slow(SlowRow::new()),
            RowMode::Optimized => RowInstance::Optimized(OptimizedRow::new(initial_query)),
        }
    }

    fn fetched(&mut self, result: Result<Vec<RawTitle>, String>, tmdb: &TmdbConfig) -> Vec<String> {
        match self {
            RowInstance::Slow(row) => row.fetched(result, tmdb),
            RowInstance::Optimized(row) => row.fetched(result, tmdb),
        }
    }

    fn view(&self, id: RowId, query: &str, posters: &PosterCache) -> Element<'static, Message> {
        match self {
            RowInstance::Slow(row) => row.view(query, posters),
            // The optimized row filters by its own debounced copy of the
            // query, not the live one.
            RowInstance::Optimized(row) => row.view(id, posters),
        }
    }
}

/// Main application state
struct Showdeck {
    client: TmdbClient,
    /// Current search query, updated on every keystroke
    query: String,
    posters: PosterCache,
    trending: RowInstance,
    popular: RowInstance,
    recommended: RowInstance,
}

impl Showdeck {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        // If this fails, we panic because the app cannot run unconfigured.
        let config = Config::from_env()
            .expect("Failed to load configuration. Check the environment and .env file.");

        let mode = config.performance.mode;
        println!("🎬 Showdeck starting in {:?} mode", mode);

        let client = TmdbClient::new(config.tmdb.clone());

        let mut app = Showdeck {
            client: client.clone(),
            query: String::new(),
            posters: PosterCache::new(),
            // Three fully separate instances: separate fetch, separate state.
            trending: RowInstance::new(mode, ""),
            popular: RowInstance::new(mode, ""),
            recommended: RowInstance::new(mode, ""),
        };

        let hero = app.request_artwork(vec![ui::banner::HERO_BACKDROP_URL.to_string()]);

        let startup = Task::batch(vec![
            fetch_row(client.clone(), RowId::Trending),
            fetch_row(client.clone(), RowId::Popular),
            fetch_row(client, RowId::Recommended),
            hero,
        ]);

        (app, startup)
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::QueryChanged(query) => {
                self.query = query;

                // Only the trending section is wired to the search box. The
                // optimized row opens a debounce window here; the slow row
                // just reads the live value on every redraw.
                match &mut self.trending {
                    RowInstance::Optimized(row) => {
                        let (_generation, timer) = row.query_changed();
                        Task::perform(timer, |generation| {
                            Message::DebounceElapsed(RowId::Trending, generation)
                        })
                    }
                    RowInstance::Slow(_) => Task::none(),
                }
            }
            Message::RowFetched(id, result) => {
                let tmdb = self.client.config().clone();
                let urls = self.row_mut(id).fetched(result, &tmdb);
                self.request_artwork(urls)
            }
            Message::DebounceElapsed(id, generation) => {
                let query = match id {
                    RowId::Trending => self.query.clone(),
                    _ => String::new(),
                };
                if let RowInstance::Optimized(row) = self.row_mut(id) {
                    row.debounce_settled(generation, &query);
                }
                Task::none()
            }
            Message::PosterLoaded(url, result) => {
                self.posters.complete(url, result);
                Task::none()
            }
            Message::RowScrolled(id, offset) => {
                if let RowInstance::Optimized(row) = self.row_mut(id) {
                    row.scrolled(offset);
                }
                Task::none()
            }
            Message::ScrollLeft(id) => match self.row(id) {
                RowInstance::Optimized(row) => row.scroll_left(),
                RowInstance::Slow(_) => Task::none(),
            },
            Message::ScrollRight(id) => match self.row(id) {
                RowInstance::Optimized(row) => row.scroll_right(),
                RowInstance::Slow(_) => Task::none(),
            },
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let content = column![
            ui::banner::view(&self.query, self.posters.get(ui::banner::HERO_BACKDROP_URL)),
            section(
                "Trending Now",
                self.trending.view(RowId::Trending, &self.query, &self.posters),
            ),
            section(
                "Popular",
                self.popular.view(RowId::Popular, "", &self.posters),
            ),
            section(
                "Recommended",
                self.recommended.view(RowId::Recommended, "", &self.posters),
            ),
        ]
        .spacing(28);

        scrollable(content).into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn row(&self, id: RowId) -> &RowInstance {
        match id {
            RowId::Trending => &self.trending,
            RowId::Popular => &self.popular,
            RowId::Recommended => &self.recommended,
        }
    }

    fn row_mut(&mut self, id: RowId) -> &mut RowInstance {
        match id {
            RowId::Trending => &mut self.trending,
            RowId::Popular => &mut self.popular,
            RowId::Recommended => &mut self.recommended,
        }
    }

    /// Start downloads for any artwork urls the cache has not seen yet.
    fn request_artwork(&mut self, urls: Vec<String>) -> Task<Message> {
        let fresh = self.posters.mark_pending(urls);

        let downloads: Vec<Task<Message>> = fresh
            .into_iter()
            .map(|url| {
                let client = self.client.clone();
                let key = url.clone();
                Task::perform(posters::load_poster(client, url), move |result| {
                    Message::PosterLoaded(key.clone(), result)
                })
            })
            .collect();

        Task::batch(downloads)
    }
}

/// Kick off one row's trending fetch.
///
/// Nothing coordinates or deduplicates these across the three sections;
/// each performs its own round trip to the same endpoint.
fn fetch_row(client: TmdbClient, id: RowId) -> Task<Message> {
    tracing::info!(row = ?id, "Fetching trending shows");

    Task::perform(
        async move { client.trending_week().await.map_err(|e| e.to_string()) },
        move |result| Message::RowFetched(id, result),
    )
}

fn section(title: &'static str, body: Element<'static, Message>) -> Element<'static, Message> {
    column![text(title).size(22), body]
        .spacing(12)
        .padding([0.0, 24.0])
        .into()
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("showdeck=info")),
        )
        .init();

    iced::application("Showdeck", Showdeck::update, Showdeck::view)
        .theme(Showdeck::theme)
        .window_size(iced::Size::new(1280.0, 860.0))
        .centered()
        .run_with(Showdeck::new)
}

use iced::widget::{scrollable, text, Row};
use iced::{Color, Element, Length};

use crate::config::TmdbConfig;
use crate::state::posters::PosterCache;
use crate::state::show::{self, Show};
use crate::tmdb::RawTitle;
use crate::Message;

use super::card;

/// The deliberately inefficient row implementation.
///
/// On load it inflates the mapped list 100x, and every redraw re-filters
/// the whole inflated dataset with the live, undebounced query. Both are
/// the point of the demo, not oversights.
pub struct SlowRow {
    shows: Vec<Show>,
    loading: bool,
}

impl SlowRow {
    pub fn new() -> Self {
        SlowRow {
            shows: Vec::new(),
            loading: true,
        }
    }

    /// Handle the trending fetch result.
    ///
    /// Returns the poster urls worth prefetching. There is no failure arm
    /// that resolves `loading`: if the request fails, the placeholder stays
    /// up for good. Known limitation, kept to match the behavior this
    /// variant demonstrates.
    pub fn fetched(
        &mut self,
        result: Result<Vec<RawTitle>, String>,
        tmdb: &TmdbConfig,
    ) -> Vec<String> {
        match result {
            Ok(raw) => {
                let mapped: Vec<Show> = raw.iter().map(|r| Show::from_raw(r, tmdb)).collect();
                let urls = mapped.iter().filter_map(|s| s.poster_url.clone()).collect();

                self.shows = show::inflate(&mapped);
                self.loading = false;

                tracing::info!(
                    variant = "slow",
                    mapped = mapped.len(),
                    inflated = self.shows.len(),
                    "Trending shows loaded"
                );

                urls
            }
            Err(err) => {
                tracing::warn!(%err, variant = "slow", "Trending fetch failed");
                Vec::new()
            }
        }
    }

    /// Filter the full inflated dataset. Called from `view`, so it runs on
    /// every redraw.
    fn visible(&self, query: &str) -> Vec<Show> {
        tracing::debug!(
            query,
            total = self.shows.len(),
            variant = "slow",
            "Filtering shows on redraw"
        );
        show::filter(&self.shows, query)
    }

    pub fn view(&self, query: &str, posters: &PosterCache) -> Element<'static, Message> {
        if self.loading {
            return text("Loading…")
                .size(14)
                .color(Color::from_rgb8(0x9a, 0x9a, 0xa5))
                .into();
        }

        let cards: Vec<Element<'static, Message>> = self
            .visible(query)
            .iter()
            .map(|s| card::view(s, s.poster_url.as_deref().and_then(|u| posters.get(u))))
            .collect();

        scrollable(Row::with_children(cards).spacing(12))
            .direction(scrollable::Direction::Horizontal(
                scrollable::Scrollbar::new(),
            ))
            .width(Length::Fill)
            .into()
    }
}

impl Default for SlowRow {
    fn default() -> Self {
        Self::new()
    }
}

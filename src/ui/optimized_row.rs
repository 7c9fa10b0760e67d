use std::future::Future;
use std::time::Duration;

use iced::widget::scrollable::AbsoluteOffset;
use iced::widget::{button, row, scrollable, text, Row};
use iced::{Alignment, Color, Element, Length, Task};

use crate::config::TmdbConfig;
use crate::debounce::Debouncer;
use crate::state::posters::PosterCache;
use crate::state::show::{self, Show};
use crate::tmdb::RawTitle;
use crate::{Message, RowId};

use super::card;

/// How long the query must stay unchanged before the row refilters.
const DEBOUNCE_DELAY: Duration = Duration::from_millis(300);

/// Distance one chevron press scrolls the carousel, in logical pixels.
const SCROLL_STEP: f32 = 520.0;

/// The optimized row implementation.
///
/// The filtered list is memoized: it is recomputed when the fetch lands and
/// when the debounced query settles, never per redraw. Input changes reach
/// the filter only after they have been stable for [`DEBOUNCE_DELAY`].
pub struct OptimizedRow {
    shows: Vec<Show>,
    filtered: Vec<Show>,
    loading: bool,
    debouncer: Debouncer,
    debounced_query: String,
    scroll_id: scrollable::Id,
    scroll_offset: f32,
}

impl OptimizedRow {
    pub fn new(initial_query: &str) -> Self {
        OptimizedRow {
            shows: Vec::new(),
            filtered: Vec::new(),
            loading: true,
            debouncer: Debouncer::new(DEBOUNCE_DELAY),
            // The debounced value starts at the live value; there is no
            // artificial delay before the first filter.
            debounced_query: initial_query.to_string(),
            scroll_id: scrollable::Id::unique(),
            scroll_offset: 0.0,
        }
    }

    /// Handle the trending fetch result. Returns poster urls to prefetch.
    pub fn fetched(
        &mut self,
        result: Result<Vec<RawTitle>, String>,
        tmdb: &TmdbConfig,
    ) -> Vec<String> {
        match result {
            Ok(raw) => {
                self.shows = raw.iter().map(|r| Show::from_raw(r, tmdb)).collect();
                let urls = self
                    .shows
                    .iter()
                    .filter_map(|s| s.poster_url.clone())
                    .collect();

                self.refilter();
                self.loading = false;

                tracing::info!(
                    variant = "optimized",
                    shows = self.shows.len(),
                    "Trending shows loaded"
                );

                urls
            }
            Err(err) => {
                tracing::warn!(%err, variant = "optimized", "Trending fetch failed");
                // Loading still resolves; the row just renders empty.
                self.loading = false;
                Vec::new()
            }
        }
    }

    /// The live query changed; open a new debounce window.
    pub fn query_changed(&mut self) -> (u64, impl Future<Output = u64> + Send + 'static) {
        self.debouncer.schedule()
    }

    /// A debounce timer completed. Stale generations are dropped; the
    /// current one adopts the query and refilters.
    pub fn debounce_settled(&mut self, generation: u64, query: &str) -> bool {
        if !self.debouncer.settle(generation) {
            return false;
        }
        if self.debounced_query != query {
            self.debounced_query = query.to_string();
            self.refilter();
        }
        true
    }

    /// The only place the filtered list is recomputed.
    fn refilter(&mut self) {
        tracing::debug!(
            query = %self.debounced_query,
            variant = "optimized",
            "Recomputing filtered shows"
        );
        self.filtered = show::filter(&self.shows, &self.debounced_query);
    }

    pub fn scrolled(&mut self, offset: AbsoluteOffset) {
        self.scroll_offset = offset.x;
    }

    pub fn scroll_left(&self) -> Task<Message> {
        self.scroll_by(-SCROLL_STEP)
    }

    pub fn scroll_right(&self) -> Task<Message> {
        self.scroll_by(SCROLL_STEP)
    }

    fn scroll_by(&self, delta: f32) -> Task<Message> {
        let target = (self.scroll_offset + delta).max(0.0);
        scrollable::scroll_to(
            self.scroll_id.clone(),
            AbsoluteOffset { x: target, y: 0.0 },
        )
    }

    pub fn view(&self, id: RowId, posters: &PosterCache) -> Element<'static, Message> {
        if self.loading {
            return text("Loading…")
                .size(14)
                .color(Color::from_rgb8(0x9a, 0x9a, 0xa5))
                .into();
        }

        let cards: Vec<Element<'static, Message>> = self
            .filtered
            .iter()
            .map(|s| card::view(s, s.poster_url.as_deref().and_then(|u| posters.get(u))))
            .collect();

        let strip = scrollable(Row::with_children(cards).spacing(12))
            .id(self.scroll_id.clone())
            .direction(scrollable::Direction::Horizontal(
                scrollable::Scrollbar::new(),
            ))
            .on_scroll(move |viewport| Message::RowScrolled(id, viewport.absolute_offset()))
            .width(Length::Fill);

        row![
            chevron("‹", Message::ScrollLeft(id)),
            strip,
            chevron("›", Message::ScrollRight(id)),
        ]
        .spacing(4)
        .align_y(Alignment::Center)
        .into()
    }
}

fn chevron(label: &'static str, press: Message) -> Element<'static, Message> {
    button(text(label).size(28))
        .style(button::text)
        .on_press(press)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> TmdbConfig {
        TmdbConfig {
            base_url: "https://api.themoviedb.org/3".to_string(),
            api_key: "test_key".to_string(),
            image_base_url: "https://image.tmdb.org/t/p/w500".to_string(),
        }
    }

    fn anaconda_page() -> Vec<RawTitle> {
        vec![
            RawTitle {
                id: 1,
                title: "Anaconda".to_string(),
                poster_path: Some("/a.jpg".to_string()),
                backdrop_path: None,
                release_date: Some("1997-04-11".to_string()),
            },
            RawTitle {
                id: 2,
                title: "Anacondas".to_string(),
                poster_path: None,
                backdrop_path: None,
                release_date: None,
            },
        ]
    }

    #[test]
    fn test_debounced_query_starts_at_the_initial_value() {
        let row = OptimizedRow::new("anaconda");
        assert_eq!(row.debounced_query, "anaconda");
    }

    #[test]
    fn test_fetch_failure_resolves_loading_with_empty_result() {
        let mut row = OptimizedRow::new("");

        row.fetched(Err("connection refused".to_string()), &test_config());

        assert!(!row.loading);
        assert!(row.filtered.is_empty());
    }

    #[test]
    fn test_fetch_success_fills_the_memoized_list() {
        let mut row = OptimizedRow::new("");

        row.fetched(Ok(anaconda_page()), &test_config());

        assert!(!row.loading);
        assert_eq!(row.filtered.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_anaconda_search_end_to_end() {
        let mut row = OptimizedRow::new("");
        row.fetched(Ok(anaconda_page()), &test_config());

        // Query arrives in the wrong case; the filter must not care.
        let (generation, timer) = row.query_changed();
        timer.await;
        assert!(row.debounce_settled(generation, "ANACONDA"));

        assert_eq!(row.filtered.len(), 2);

        let anaconda = &row.filtered[0];
        assert_eq!(anaconda.year, Some(1997));
        assert_eq!(
            anaconda.poster_url,
            Some("https://image.tmdb.org/t/p/w500/a.jpg".to_string())
        );

        let anacondas = &row.filtered[1];
        assert_eq!(anacondas.year, None);
        assert_eq!(anacondas.poster_url, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_filtered_list_waits_for_the_debounce_to_settle() {
        let mut row = OptimizedRow::new("");
        row.fetched(Ok(anaconda_page()), &test_config());
        assert_eq!(row.filtered.len(), 2);

        // Three changes within 100ms of each other; only the last survives.
        let (gen_1, _timer_1) = row.query_changed();
        tokio::time::advance(Duration::from_millis(100)).await;
        let (gen_2, _timer_2) = row.query_changed();
        tokio::time::advance(Duration::from_millis(100)).await;
        let (gen_3, timer_3) = row.query_changed();

        // Nothing has settled yet; the memoized list is untouched.
        assert_eq!(row.filtered.len(), 2);

        assert!(!row.debounce_settled(gen_1, "ana"));
        assert!(!row.debounce_settled(gen_2, "anac"));
        assert_eq!(row.filtered.len(), 2);

        timer_3.await;
        assert!(row.debounce_settled(gen_3, "anacondas"));
        assert_eq!(row.filtered.len(), 1);
        assert_eq!(row.filtered[0].title, "Anacondas");
    }
}

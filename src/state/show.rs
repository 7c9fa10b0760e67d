use chrono::{Datelike, NaiveDate};

use crate::config::TmdbConfig;
use crate::tmdb::RawTitle;

/// Backdrops always use the original-size rendition, independent of the
/// configured poster size.
pub const BACKDROP_IMAGE_BASE: &str = "https://image.tmdb.org/t/p/original";

/// How many copies the slow variant's inflated dataset holds.
pub const INFLATION_COPIES: i64 = 100;

/// Id stride between copies. Keeps inflated ids distinct for TMDB's
/// non-negative ids; a demo-only transform, not a general technique.
const INFLATION_ID_STRIDE: i64 = 250;

/// A title ready for display, derived from a [`RawTitle`].
#[derive(Debug, Clone, PartialEq)]
pub struct Show {
    pub id: i64,
    pub title: String,
    /// `Some` iff the raw record had a poster path.
    pub poster_url: Option<String>,
    /// `Some` iff the raw record had a backdrop path. Mapped uniformly but
    /// only the slow variant's original counterpart carried it; cards never
    /// render it.
    pub backdrop_url: Option<String>,
    /// Calendar year of the release date; `None` when missing or unparseable.
    pub year: Option<i32>,
}

impl Show {
    pub fn from_raw(raw: &RawTitle, tmdb: &TmdbConfig) -> Self {
        Show {
            id: raw.id,
            title: raw.title.clone(),
            poster_url: raw
                .poster_path
                .as_ref()
                .map(|path| format!("{}{}", tmdb.image_base_url, path)),
            backdrop_url: raw
                .backdrop_path
                .as_ref()
                .map(|path| format!("{}{}", BACKDROP_IMAGE_BASE, path)),
            year: raw.release_date.as_deref().and_then(release_year),
        }
    }
}

fn release_year(date: &str) -> Option<i32> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .map(|d| d.year())
}

/// Case-insensitive substring filter on the display title.
/// An empty query matches every show.
pub fn filter(shows: &[Show], query: &str) -> Vec<Show> {
    let needle = query.to_lowercase();
    shows
        .iter()
        .filter(|show| show.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Synthetically enlarge a mapped list for the slow variant: 100 copies,
/// with copy `k` remapping every id to `id * 250 + k`.
pub fn inflate(shows: &[Show]) -> Vec<Show> {
    let mut inflated = Vec::with_capacity(shows.len() * INFLATION_COPIES as usize);

    for copy in 0..INFLATION_COPIES {
        for show in shows {
            let mut duplicate = show.clone();
            duplicate.id = show.id * INFLATION_ID_STRIDE + copy;
            inflated.push(duplicate);
        }
    }

    inflated
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn test_config() -> TmdbConfig {
        TmdbConfig {
            base_url: "https://api.themoviedb.org/3".to_string(),
            api_key: "test_key".to_string(),
            image_base_url: "https://image.tmdb.org/t/p/w500".to_string(),
        }
    }

    fn raw(id: i64, title: &str) -> RawTitle {
        RawTitle {
            id,
            title: title.to_string(),
            poster_path: None,
            backdrop_path: None,
            release_date: None,
        }
    }

    #[test]
    fn test_year_from_release_date() {
        let mut record = raw(1, "Anaconda");
        record.release_date = Some("1997-04-11".to_string());

        let show = Show::from_raw(&record, &test_config());
        assert_eq!(show.year, Some(1997));
    }

    #[test]
    fn test_year_absent_when_date_missing_or_unparseable() {
        let config = test_config();

        let record = raw(1, "Anacondas");
        assert_eq!(Show::from_raw(&record, &config).year, None);

        let mut record = raw(1, "Anacondas");
        record.release_date = Some(String::new());
        assert_eq!(Show::from_raw(&record, &config).year, None);

        let mut record = raw(1, "Anacondas");
        record.release_date = Some("not-a-date".to_string());
        assert_eq!(Show::from_raw(&record, &config).year, None);
    }

    #[test]
    fn test_poster_url_present_iff_poster_path_present() {
        let config = test_config();

        let mut record = raw(1, "Anaconda");
        record.poster_path = Some("/a.jpg".to_string());
        assert_eq!(
            Show::from_raw(&record, &config).poster_url,
            Some("https://image.tmdb.org/t/p/w500/a.jpg".to_string())
        );

        let record = raw(2, "Anacondas");
        assert_eq!(Show::from_raw(&record, &config).poster_url, None);
    }

    #[test]
    fn test_backdrop_url_uses_original_size_origin() {
        let mut record = raw(1, "Anaconda");
        record.backdrop_path = Some("/b.jpg".to_string());

        let show = Show::from_raw(&record, &test_config());
        assert_eq!(
            show.backdrop_url,
            Some("https://image.tmdb.org/t/p/original/b.jpg".to_string())
        );
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let config = test_config();
        let shows: Vec<Show> = [
            raw(1, "Anaconda"),
            raw(2, "Anacondas"),
            raw(3, "The Matrix"),
        ]
        .iter()
        .map(|r| Show::from_raw(r, &config))
        .collect();

        let matched = filter(&shows, "ANACONDA");
        assert_eq!(matched.len(), 2);
        assert!(matched.iter().all(|s| s.title.starts_with("Anaconda")));

        let matched = filter(&shows, "matrix");
        assert_eq!(matched.len(), 1);
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let config = test_config();
        let shows: Vec<Show> = [raw(1, "Anaconda"), raw(2, "The Matrix")]
            .iter()
            .map(|r| Show::from_raw(r, &config))
            .collect();

        assert_eq!(filter(&shows, "").len(), 2);
    }

    #[test]
    fn test_inflation_produces_100x_with_distinct_ids() {
        let config = test_config();
        let shows: Vec<Show> = [raw(7, "Anaconda"), raw(11, "The Matrix")]
            .iter()
            .map(|r| Show::from_raw(r, &config))
            .collect();

        let inflated = inflate(&shows);
        assert_eq!(inflated.len(), 200);

        // Copy k of original id n carries id n*250+k.
        assert_eq!(inflated[0].id, 7 * 250);
        assert_eq!(inflated[1].id, 11 * 250);
        assert_eq!(inflated[2].id, 7 * 250 + 1);
        assert_eq!(inflated[199].id, 11 * 250 + 99);

        let ids: HashSet<i64> = inflated.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), inflated.len());
    }
}

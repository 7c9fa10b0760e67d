use serde::Deserialize;

/// One page of the trending endpoint. Pagination fields are ignored; the
/// app only ever reads the first page.
#[derive(Debug, Deserialize)]
pub struct TrendingPage {
    pub results: Vec<RawTitle>,
}

/// A media title as TMDB returns it.
///
/// `id` and `title` are assumed present; the optional fields are routinely
/// null or missing in real responses and degrade to `None`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTitle {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    /// ISO date string, e.g. "1997-04-11". TMDB also emits "" here.
    #[serde(default)]
    pub release_date: Option<String>,
}

use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// Loaded once at startup and handed by value to the components that need
/// it; nothing reads configuration from ambient process state afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    pub tmdb: TmdbConfig,
    pub performance: PerformanceConfig,
}

/// TMDB endpoint settings.
///
/// Not validated at load: a missing or invalid API key only surfaces later
/// as a failed trending fetch.
#[derive(Debug, Clone)]
pub struct TmdbConfig {
    /// API base URL, e.g. `https://api.themoviedb.org/3`
    pub base_url: String,
    /// API key appended to every request
    pub api_key: String,
    /// Base URL for poster artwork, e.g. `https://image.tmdb.org/t/p/w500`
    pub image_base_url: String,
}

/// Selects which row implementation all three sections render.
#[derive(Debug, Clone)]
pub struct PerformanceConfig {
    pub mode: RowMode,
}

/// The two row implementations: a deliberately inefficient one and its fix.
/// There is no runtime toggle; the mode is fixed for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowMode {
    Slow,
    #[default]
    Optimized,
}

/// Wire shape for envy: flat fields matching `TMDB_BASE_URL`,
/// `TMDB_API_KEY`, `TMDB_IMAGE_BASE_URL` and `ROW_MODE`.
#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default = "default_base_url")]
    tmdb_base_url: String,

    #[serde(default)]
    tmdb_api_key: String,

    #[serde(default = "default_image_base_url")]
    tmdb_image_base_url: String,

    #[serde(default)]
    row_mode: RowMode,
}

fn default_base_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_image_base_url() -> String {
    "https://image.tmdb.org/t/p/w500".to_string()
}

impl Config {
    /// Load configuration from environment variables, honoring a `.env` file
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let raw = envy::from_env::<RawConfig>()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

        Ok(Config {
            tmdb: TmdbConfig {
                base_url: raw.tmdb_base_url,
                api_key: raw.tmdb_api_key,
                image_base_url: raw.tmdb_image_base_url,
            },
            performance: PerformanceConfig { mode: raw.row_mode },
        })
    }
}

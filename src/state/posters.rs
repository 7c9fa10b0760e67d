use std::collections::HashMap;

use iced::widget::image::Handle;
use image::imageops::FilterType;
use tokio::task;

use crate::tmdb::TmdbClient;

/// Decode target for poster artwork, 2x the on-screen card size so hidpi
/// displays stay sharp.
const POSTER_DECODE_WIDTH: u32 = 320;
const POSTER_DECODE_HEIGHT: u32 = 480;

#[derive(Debug)]
enum PosterEntry {
    Pending,
    Ready(Handle),
    Failed,
}

/// App-wide cache of decoded artwork, keyed by URL.
///
/// Rows share it so each distinct image is downloaded once, however many
/// row instances reference it. A failed download stays failed; cards fall
/// back to the placeholder block.
#[derive(Debug, Default)]
pub struct PosterCache {
    entries: HashMap<String, PosterEntry>,
}

impl PosterCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the given urls pending and return the ones not seen before,
    /// i.e. the ones the caller should start downloads for.
    pub fn mark_pending(&mut self, urls: impl IntoIterator<Item = String>) -> Vec<String> {
        let mut fresh = Vec::new();
        for url in urls {
            if !self.entries.contains_key(&url) {
                self.entries.insert(url.clone(), PosterEntry::Pending);
                fresh.push(url);
            }
        }
        fresh
    }

    /// Record the outcome of a download started via `mark_pending`.
    pub fn complete(&mut self, url: String, result: Result<Handle, String>) {
        let entry = match result {
            Ok(handle) => PosterEntry::Ready(handle),
            Err(err) => {
                tracing::debug!(%url, %err, "Poster load failed");
                PosterEntry::Failed
            }
        };
        self.entries.insert(url, entry);
    }

    pub fn get(&self, url: &str) -> Option<&Handle> {
        match self.entries.get(url) {
            Some(PosterEntry::Ready(handle)) => Some(handle),
            _ => None,
        }
    }
}

/// Download and decode one piece of artwork.
pub async fn load_poster(client: TmdbClient, url: String) -> Result<Handle, String> {
    let bytes = client
        .fetch_image(&url)
        .await
        .map_err(|e| e.to_string())?;

    // Decoding and resizing is CPU-bound; keep it off the event loop.
    task::spawn_blocking(move || decode_poster(&bytes))
        .await
        .map_err(|e| format!("Task join error: {}", e))?
}

fn decode_poster(bytes: &[u8]) -> Result<Handle, String> {
    let decoded =
        image::load_from_memory(bytes).map_err(|e| format!("Failed to decode image: {}", e))?;

    let resized = decoded.resize(POSTER_DECODE_WIDTH, POSTER_DECODE_HEIGHT, FilterType::Lanczos3);
    let rgba = resized.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(Handle::from_rgba(width, height, rgba.into_raw()))
}

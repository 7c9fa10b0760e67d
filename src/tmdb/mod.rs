/// TMDB API integration
///
/// This module covers everything that crosses the wire:
/// - Raw record shapes as TMDB returns them (records.rs)
/// - The HTTP client for trending lists and artwork (client.rs)

pub mod client;
pub mod records;

pub use client::{TmdbClient, TmdbError};
pub use records::RawTitle;

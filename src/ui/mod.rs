/// UI building blocks
///
/// - Hero banner with the search box (banner.rs)
/// - A single title card (card.rs)
/// - The two row implementations the mode flag picks between
///   (slow_row.rs, optimized_row.rs)

pub mod banner;
pub mod card;
pub mod optimized_row;
pub mod slow_row;

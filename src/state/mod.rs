/// State management module
///
/// This module holds the data side of the app:
/// - Display records and the derive pipeline shared by both row
///   implementations (show.rs)
/// - The app-wide artwork cache and loader (posters.rs)

pub mod posters;
pub mod show;

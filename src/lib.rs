// Character Catalog - Core Library
// Headless catalog core shared by the TUI, the one-shot CLI and the web server

pub mod error;
pub mod record;
pub mod store;
pub mod filter;
pub mod render;
pub mod screen;
pub mod commands;
pub mod html;
pub mod text;
pub mod config;
pub mod logging;

#[cfg(feature = "server")]
pub mod server;

// Re-export commonly used types
pub use error::LoadError;
pub use record::{ApproximateAge, Record};
pub use store::{CatalogSource, CatalogStore, FileSource, InlineSource};
pub use filter::{
    filter_by_category, filter_by_text, filter_category, matches_keywords,
    Category, OTHER_WORLD_KEYWORDS,
};
pub use render::{Card, CardContainer, CardImage, Display};
pub use screen::{Screen, ScreenController, ScreenState};
pub use commands::{Action, Browser, LOAD_FAILURE_MESSAGE};
pub use config::Config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Tafsir Explainer - verse explanations from translation and commentary
// Core library functionality

pub mod api;
pub mod cli;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use models::tafsir::{TafsirBundle, TafsirSource};
pub use models::verse::VerseRef;
pub use services::explainer::Explainer;
pub use utils::config::AppConfig;
pub use utils::error::AppError;

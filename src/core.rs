pub mod library;
pub mod preferences;

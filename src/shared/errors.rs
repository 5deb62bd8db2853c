//! Error type for the preference storage boundary.
//!
//! Reading preferences never surface errors to the user: reads fall back to
//! defaults and failed writes degrade to in-memory-only state. The error type
//! exists so the storage layer can report *why* a write was dropped.

use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    /// The durable store could not be opened or saved.
    #[error("Storage error: {0}")]
    Storage(String),

    /// A value could not be serialized for the store file.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<tauri_plugin_store::Error> for AppError {
    fn from(err: tauri_plugin_store::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

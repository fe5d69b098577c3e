//! Error types for the rubberband-core library.
//!
//! Most of the engine is infallible: pointer events that do not apply to
//! the current state are ignored rather than reported. The variants here
//! cover construction preconditions, misuse of the selection box, and the
//! ambient concerns (configuration, persistence, the interactive host).

use thiserror::Error;

/// Errors that can occur within the rubberband-core library.
#[derive(Error, Debug)]
pub enum SelectError {
    /// The container handed to `bind` is not a live element of the surface.
    #[error("Container is not an element of the surface")]
    UnknownContainer,

    /// The selection box was updated while no drag was in progress.
    #[error("No active selection box")]
    NoActiveBox,

    /// Configuration-related errors (invalid environment values).
    #[error("Configuration error: {0}")]
    Config(String),

    /// UI-related errors (window creation, event loop failure).
    #[error("UI error: {0}")]
    Ui(String),

    /// Standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SelectError {
    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates a UI error with the given message.
    pub fn ui(msg: impl Into<String>) -> Self {
        Self::Ui(msg.into())
    }
}

/// A convenient alias for Result with [`SelectError`].
pub type Result<T> = std::result::Result<T, SelectError>;

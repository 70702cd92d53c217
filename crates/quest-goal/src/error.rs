// error.rs — Error types for the goal subsystem.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during goal operations.
///
/// All of these are recoverable: the shell prints the message and keeps
/// going. Nothing here aborts the process.
#[derive(Debug, Error)]
pub enum GoalError {
    /// The requested goal kind is not one of Simple/Eternal/Checklist.
    #[error("unknown goal kind: {0}")]
    InvalidVariant(String),

    /// A checklist goal was requested without its target count or bonus.
    #[error("checklist goals need a target count and bonus points")]
    MissingParameters,

    /// No goal with the given name exists in the manager.
    #[error("goal not found: {0}")]
    GoalNotFound(String),

    /// The save file does not exist.
    #[error("save file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// A save-file line could not be parsed. Carries the 1-based line number.
    #[error("parse failure at line {line}: {reason}")]
    ParseFailure { line: usize, reason: String },

    /// A file I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    IoError {
        path: String,
        source: std::io::Error,
    },

    /// Failed to serialize an event record.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

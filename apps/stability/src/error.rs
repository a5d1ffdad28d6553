//! # Error Module
//!
//! Errors surfaced by the server and CLI.

use crate::webhook::WebhookError;
use stability_core::CoreError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from the Stability Calculator binary.
#[derive(Debug, Error)]
pub enum AppError {
    /// The build output directory does not exist.
    #[error("build output directory not found at {} (build the frontend first)", .0.display())]
    DistMissing(PathBuf),

    /// File or socket I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid scoring input.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The ratings format name was not recognized.
    #[error("unknown ratings format: {0} (expected json or text)")]
    UnknownFormat(String),

    /// A line of a text ratings file could not be parsed.
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    /// The survey response could not be delivered.
    #[error("Failed to save survey response. Please try again.")]
    SubmissionFailed(#[source] WebhookError),

    /// The analysis request could not be delivered.
    #[error("Failed to submit analysis request. Please try again.")]
    AnalysisRequestFailed(#[source] WebhookError),

    /// The webhook client could not be constructed.
    #[error(transparent)]
    Webhook(#[from] WebhookError),
}

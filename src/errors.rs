//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError so that command
//! handlers can propagate with `?` and `main` reports a single message.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database not available: {0}")]
    DbUnavailable(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-MM-DD or YYYYMMDD)")]
    InvalidDate(String),

    #[error("Invalid name: {0}")]
    InvalidName(String),

    #[error("Invalid version string: {0}")]
    InvalidVersion(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("No birthday found for {0} on {1}")]
    NotFound(String, String),

    #[error("Operation failed: {0}")]
    OperationFailed(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Update errors
    // ---------------------------
    #[error("Update error: {0}")]
    Update(String),

    #[error("Manifest error: {0}")]
    Manifest(#[from] serde_json::Error),

    // ---------------------------
    // Backup errors
    // ---------------------------
    #[error("Backup error: {0}")]
    Backup(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;

//! Unified application error type.
//! All modules (source, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

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
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid month: {0}")]
    InvalidMonth(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid booking status: {0}")]
    InvalidStatus(String),

    // ---------------------------
    // Layout errors
    // ---------------------------
    #[error("Invalid interval: {0}")]
    InvalidInterval(String),

    #[error("Invalid month frame: {0}")]
    InvalidFrame(String),

    // ---------------------------
    // Booking source errors
    // ---------------------------
    #[error("Malformed booking payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("Booking source error: {0}")]
    Source(String),

    #[error("Invalid booking {0}: {1}")]
    InvalidBooking(String, String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;

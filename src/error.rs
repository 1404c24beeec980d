// src/error.rs
use std::io;

use thiserror::Error;

/// Everything the library can fail with. Per-page and per-photo failures are
/// logged and skipped by the stages themselves; what reaches the caller as an
/// `Error` ends the run.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} for {url}")]
    Status { status: u16, url: String },

    #[error("browser error: {0}")]
    Browser(String),

    #[error("invalid selector `{0}`")]
    Selector(String),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("config error in {path}: {message}")]
    Config { path: String, message: String },
}

impl Error {
    pub fn browser(e: impl std::fmt::Display) -> Self {
        Error::Browser(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

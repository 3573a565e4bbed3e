//! Error handling for the application

use thiserror::Error;

/// Application errors
///
/// Per-source sampling failures are deliberately absent: a sampler that
/// fails returns an empty observation list and logs the cause, so missing
/// data degrades confidence instead of surfacing as an error.
#[derive(Error, Debug)]
pub enum RadarError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("notification error: {0}")]
    Notify(String),
}

pub type Result<T> = std::result::Result<T, RadarError>;

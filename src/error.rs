/// Error types for the InstaKgram client
///
/// Each concern gets its own enum so callers can match on exactly the
/// failures they are able to recover from.

use std::path::PathBuf;
use thiserror::Error;

/// Rejected edits to the post being composed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComposerError {
    #[error("You can select up to {limit} images at a time ({selected} selected)")]
    TooManyImages { selected: usize, limit: usize },

    #[error("Caption is limited to {limit} characters ({attempted} attempted)")]
    CaptionTooLong { attempted: usize, limit: usize },
}

/// Failures while turning an image file into a preview
///
/// Carried inside UI messages, so the sources are flattened to strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("Failed to open {path}: {message}")]
    Open { path: PathBuf, message: String },

    #[error("Failed to decode {path}: {message}")]
    Decode { path: PathBuf, message: String },

    #[error("Preview worker failed: {0}")]
    Worker(String),
}

/// Failures while loading or saving the settings file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read settings from {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed settings in {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write settings to {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize settings")]
    Serialize(#[source] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("Unknown route: {0}")]
    Unknown(String),
}

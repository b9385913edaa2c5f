// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP error: {status} {url}")]
    Http { status: u16, url: String },

    #[error("config {path}:{line}: {msg}")]
    Config { path: PathBuf, line: usize, msg: String },

    #[error("invalid value for `{key}`: {value}")]
    InvalidSetting { key: String, value: String },

    #[error("input not found: {0}")]
    MissingInput(PathBuf),

    #[error("no list data for any configured year")]
    NoData,
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io { path: path.into(), source }
    }

    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Error::Json { path: path.into(), source }
    }
}

// File: src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Failure of the tagging backend for one block of text.
#[derive(Debug, Error)]
pub enum TaggingError {
    #[error("text contains no taggable words")]
    EmptyText,

    #[error("tagger failed: {0}")]
    Backend(String),
}

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("source '{identifier}' not found at {}", path.display())]
    SourceNotFound { identifier: String, path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("identifier '{identifier}' resolves to the identifier list {}", path.display())]
    ListIsSource { identifier: String, path: PathBuf },

    #[error(transparent)]
    Tagging(#[from] TaggingError),
}

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error(transparent)]
    Corpus(#[from] CorpusError),

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("count snapshot error: {0}")]
    Snapshot(#[from] bincode::Error),
}

impl From<TaggingError> for LexiconError {
    fn from(err: TaggingError) -> Self {
        LexiconError::Corpus(CorpusError::Tagging(err))
    }
}

/// Errors raised by the remote content sources and their file writers.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("page not found: {0}")]
    PageNotFound(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

//! Structured error types for the vector runner

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VectorError {
    #[error("reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("hex decode error: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("crypto operation failed: {0}")]
    Crypto(String),

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("no handler for {algorithm} / {test_type}")]
    NoHandler { algorithm: String, test_type: String },

    #[error("invalid input accepted")]
    UnexpectedSuccess,

    #[error("mismatch - expected: {expected}, got: {actual}")]
    Mismatch { expected: String, actual: String },

    #[error("invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, VectorError>;

impl From<streamcore_algorithms::Error> for VectorError {
    fn from(e: streamcore_algorithms::Error) -> Self {
        VectorError::Crypto(e.to_string())
    }
}

impl From<streamcore_api::Error> for VectorError {
    fn from(e: streamcore_api::Error) -> Self {
        VectorError::Crypto(e.to_string())
    }
}

//! Error types

use crate::symbols::StreamKey;
use std::fmt::Display;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Token is one character longer than a base symbol, but that character
    /// is not an SI prefix
    #[error("Prefix of '{token}' is not a valid SI prefix")]
    UnknownPrefix { token: String },

    #[error("Symbol '{token}' cannot be parsed. Try '{accepted}' (possibly with prefixes).")]
    UnknownSymbol { token: String, accepted: String },

    #[error("Invalid quantity literal '{input}': {reason}")]
    InvalidLiteral { input: String, reason: String },

    #[error("{seconds} s cannot be represented as a duration")]
    DurationOutOfRange { seconds: f64 },

    #[error("Unknown stream key {key}")]
    UnknownStream { key: StreamKey },

    #[error("Failed to read symbol configuration {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed symbol configuration: {0}")]
    ConfigFormat(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid_literal(input: &str, reason: impl Display) -> Self {
        Self::InvalidLiteral {
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

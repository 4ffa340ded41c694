//! Typed failures for an update run.
//!
//! The workflow never exits the process; it hands one of these back to `main`,
//! which prints it and picks the exit status.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("Invalid date. Use YYYY-MM-DD.")]
    InvalidDate,

    #[error("input ended before all values were entered")]
    Cancelled,

    #[error("{} is not valid JSON. Fix it or delete it to start fresh.", .path.display())]
    MalformedStore {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} must hold a JSON array of week records. Fix it or delete it to start fresh.", .path.display())]
    NotAnArray { path: PathBuf },

    #[error("{action} {}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("serialize data set")]
    Serialize(#[source] serde_json::Error),

    #[error("read operator input")]
    Prompt(#[source] io::Error),
}

impl UpdateError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        UpdateError::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

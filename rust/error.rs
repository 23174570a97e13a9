use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("No PDF library found")]
    NoBackend,

    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{backend} could not read {}: {message}", path.display())]
    Backend {
        backend: &'static str,
        path: PathBuf,
        message: String,
    },

    #[error("failed to extract text from page {number}: {message}")]
    Page { number: u32, message: String },
}

impl ExtractError {
    /// True when no PDF reader could be loaded at all, as opposed to a
    /// failure while reading the document itself.
    pub fn is_capability_unavailable(&self) -> bool {
        matches!(self, Self::NoBackend)
    }
}

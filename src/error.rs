//! Error types shared by the state controller, media loading and configuration.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Everything that can go wrong while designing a case.
///
/// The type is `Clone` so results can ride inside iced messages.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// The selected file could not be read from disk
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: Arc<io::Error>,
    },

    /// An id that is not part of the phone model catalog
    #[error("unknown phone model '{0}'")]
    UnknownModel(String),

    /// Data URI payload that is not valid base64
    #[error("invalid data URI: {0}")]
    InvalidDataUri(String),
}

impl Error {
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Read {
            path: path.into(),
            source: Arc::new(source),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

use std::path::PathBuf;

use marquee_core::MovieId;

/// All errors that can be returned by a MovieStore implementation.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// `replace` addressed an identity with no current record.
    #[error("movie not found: {id}")]
    NotFound { id: MovieId },

    /// The store handle was closed; no further operations are accepted.
    #[error("movie store is closed")]
    Closed,

    /// Reading or writing the backing file failed.
    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Every identity has been handed out.
    #[error("movie ids exhausted")]
    IdsExhausted,

    /// The backing file exists but does not hold a valid movie table.
    #[error("corrupt movie store {}: {message}", .path.display())]
    Corrupt { path: PathBuf, message: String },
}

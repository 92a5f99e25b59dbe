//! Errors from the file-backed parts of the crate.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type of every fallible operation in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures of the file-backed collaborators, and words they refuse. The tree itself never fails.
#[derive(Error, Debug)]
pub enum Error {
    /// The source text couldn't be opened or read.
    #[error("could not read source text {}", .path.display())]
    Source {
        /// The source file.
        path: PathBuf,
        /// What went wrong.
        #[source]
        source: io::Error,
    },

    /// A word handed to the dictionary was empty or contained whitespace. The mirror holds one
    /// word per line so such a word could never be removed from it again.
    #[error("{word:?} is not a single word")]
    InvalidWord {
        /// What was passed in.
        word: String,
    },

    /// Reading, appending to or writing the mirror failed.
    #[error("mirror {} I/O failed", .path.display())]
    Mirror {
        /// The mirror file.
        path: PathBuf,
        /// What went wrong.
        #[source]
        source: io::Error,
    },

    /// A rewritten mirror couldn't be moved over the old one.
    #[error("could not replace mirror {}", .path.display())]
    Persist {
        /// The mirror file.
        path: PathBuf,
        /// What went wrong. The temporary file is removed when this is dropped.
        #[source]
        source: tempfile::PersistError,
    },
}

use std::path::PathBuf;
use thiserror::Error;

/// The primary error type for all operations in the `detab` application.
///
/// Every variant is fatal: the binary prints a single tagged diagnostic line
/// and exits nonzero, so none of these are ever recovered from mid-run.
#[derive(Error, Debug)]
pub enum Error {
    /// No file or directory argument was supplied.
    #[error("please appoint a file or dir to convert")]
    ArgumentMissing,

    /// The supplied path does not exist on the filesystem.
    #[error("file does not exist: {}", .0.display())]
    PathNotFound(PathBuf),

    /// A file could not be opened for reading or for writing.
    #[error("failed to open {}: {source}", path.display())]
    FileOpen {
        path: PathBuf,
        source: std::io::Error,
    },

    /// An error related to file system I/O after a successful open.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An error from the `walkdir` crate, which is used for directory traversal.
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// A convenient type alias for `Result<T, detab::errors::Error>`.
pub type Result<T> = std::result::Result<T, Error>;

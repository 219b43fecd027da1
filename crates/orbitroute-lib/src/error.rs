use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the orbitroute library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Connection records could not be located at the resolved path.
    #[error("network file not found at {path}")]
    NetworkNotFound { path: PathBuf },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for CSV reader errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

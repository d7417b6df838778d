//! Error types for orfscan

use thiserror::Error;

use std::path::PathBuf;

/// Result type alias for orfscan operations
pub type Result<T> = std::result::Result<T, OrfError>;

/// Errors that abort an orfscan run
#[derive(Debug, Error)]
pub enum OrfError {
    /// Input file does not exist
    #[error("ERROR: file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Any other failure while reading the input
    #[error("ERROR: cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failure while creating or writing the output
    #[error("ERROR: cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A triplet outside {A,C,G,T}^3 was read during translation
    #[error("ERROR: codon -> {codon:?} at position {position} is not a valid codon!")]
    InvalidCodon { codon: String, position: usize },

    #[error("ERROR: cannot build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

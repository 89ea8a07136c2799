//! Error types for gtscan

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for gtscan operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Input path is missing or cannot be opened
    #[error("cannot read {}: {source}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Neither FASTA nor FASTQ, or a malformed first record
    #[error("invalid sequence file {}: {msg}", path.display())]
    Format { path: PathBuf, msg: String },

    /// File (or its first record) carries no sequence
    #[error("no sequence found in {}", path.display())]
    EmptyFile { path: PathBuf },

    /// Zero window/step or an empty analysis range
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A zero-length window reached the composition calculator. This is a bug.
    #[error("internal error: zero-length window at position {start}")]
    DegenerateWindow { start: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("plot rendering failed: {0}")]
    Render(String),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

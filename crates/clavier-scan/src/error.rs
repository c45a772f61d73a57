//! Error types for directory scanning.

use thiserror::Error;

/// Errors that can occur while scanning a music directory.
///
/// Tag-read failures never surface here: the scanner degrades them to a
/// placeholder-titled track so one unreadable file cannot sink a scan.
#[derive(Debug, Error)]
pub enum ScanError {
    /// A filesystem operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An audio file's tags or properties could not be read.
    #[error("tag read error: {0}")]
    Tag(#[from] lofty::error::LoftyError),
}

/// Convenience alias for scan results.
pub type ScanResult<T> = std::result::Result<T, ScanError>;

//! Error types for the triage library

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the triage library
#[derive(Error, Debug)]
pub enum Error {
    /// PDF parsing error from lopdf
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Pages were requested from a document that is still encrypted
    #[error("File has not been decrypted: {0}")]
    NotDecrypted(String),

    /// The process logger was already installed
    #[error("Failed to install log capture: {0}")]
    Logger(#[from] log::SetLoggerError),
}

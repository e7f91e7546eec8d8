//! Error types for the analyzer

use thiserror::Error;

/// Errors that can occur during a review run
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// Neither a document nor a query was supplied
    #[error("Input error: {0}")]
    Input(String),

    /// Document container support is missing from this build
    #[error("Document container support is not available")]
    ContainerUnavailable,

    /// Document bytes are not a valid container
    #[error("Parse error: {0}")]
    Parse(String),

    /// Text extraction failed; the review stops here
    #[error("Failed to extract document text: {0}")]
    Extraction(String),

    /// Reference corpus could not be read
    #[error("Retrieval error: {0}")]
    Retrieval(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

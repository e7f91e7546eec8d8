//! Corpagent Document Container
//!
//! Implements the `DocumentContainer` trait from `corpagent-domain` for
//! WordprocessingML (`.docx`) files.
//!
//! A `.docx` file is a zip archive; the body lives in `word/document.xml`.
//! Reading flattens body paragraphs and top-level tables to text. Appending
//! rewrites only `word/document.xml` and copies every other entry verbatim.
//!
//! The format support sits behind the `docx` cargo feature (on by default).
//! Builds without it still link, but report the capability as unavailable.
//!
//! # Examples
//!
//! ```
//! use corpagent_docx::DocxContainer;
//! use corpagent_domain::traits::DocumentContainer;
//! use corpagent_domain::{AppendBlock, ContainerContent};
//!
//! # fn main() -> Result<(), corpagent_docx::ContainerError> {
//! let container = DocxContainer::new();
//! let content = ContainerContent {
//!     paragraphs: vec!["Board Resolution".to_string()],
//!     tables: vec![],
//! };
//! let bytes = container.create(&content)?;
//! let marked = container.append(&bytes, &[AppendBlock::Paragraph("Reviewed".to_string())])?;
//! let read_back = container.read(&marked)?;
//! assert_eq!(read_back.paragraphs, vec!["Board Resolution", "Reviewed"]);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

#[cfg(feature = "docx")]
mod reader;
#[cfg(feature = "docx")]
mod writer;

use corpagent_domain::traits::DocumentContainer;
use corpagent_domain::{AppendBlock, ContainerContent};
use thiserror::Error;

/// Path of the main document part inside the archive
pub const DOCUMENT_PART: &str = "word/document.xml";

/// Errors that can occur during container operations
#[derive(Error, Debug)]
pub enum ContainerError {
    /// Format support was not compiled in
    #[error("Document container support is not available in this build")]
    Unavailable,

    /// Bytes are not a valid container
    #[error("Invalid document container: {0}")]
    Parse(String),

    /// Reading or writing the archive failed
    #[error("I/O error: {0}")]
    Io(String),
}

#[cfg(feature = "docx")]
impl From<zip::result::ZipError> for ContainerError {
    fn from(e: zip::result::ZipError) -> Self {
        match e {
            zip::result::ZipError::Io(io) => ContainerError::Io(io.to_string()),
            other => ContainerError::Parse(other.to_string()),
        }
    }
}

#[cfg(feature = "docx")]
impl From<quick_xml::Error> for ContainerError {
    fn from(e: quick_xml::Error) -> Self {
        ContainerError::Parse(format!("malformed XML: {}", e))
    }
}

impl From<std::io::Error> for ContainerError {
    fn from(e: std::io::Error) -> Self {
        ContainerError::Io(e.to_string())
    }
}

/// `.docx` implementation of the document-container capability
#[derive(Debug, Clone, Copy, Default)]
pub struct DocxContainer;

impl DocxContainer {
    /// Create a new container handle
    pub fn new() -> Self {
        Self
    }

    /// Build a new minimal `.docx` holding `content`
    ///
    /// Tables are written after all paragraphs, which is also the order
    /// `read` reports them in.
    pub fn create(&self, content: &ContainerContent) -> Result<Vec<u8>, ContainerError> {
        #[cfg(feature = "docx")]
        {
            writer::create_document(content)
        }
        #[cfg(not(feature = "docx"))]
        {
            let _ = content;
            Err(ContainerError::Unavailable)
        }
    }
}

impl DocumentContainer for DocxContainer {
    type Error = ContainerError;

    fn is_available(&self) -> bool {
        cfg!(feature = "docx")
    }

    fn read(&self, bytes: &[u8]) -> Result<ContainerContent, Self::Error> {
        #[cfg(feature = "docx")]
        {
            reader::read_document(bytes)
        }
        #[cfg(not(feature = "docx"))]
        {
            let _ = bytes;
            Err(ContainerError::Unavailable)
        }
    }

    fn append(&self, bytes: &[u8], blocks: &[AppendBlock]) -> Result<Vec<u8>, Self::Error> {
        #[cfg(feature = "docx")]
        {
            writer::append_blocks(bytes, blocks)
        }
        #[cfg(not(feature = "docx"))]
        {
            let _ = (bytes, blocks);
            Err(ContainerError::Unavailable)
        }
    }
}

//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the review logic and the
//! outside capabilities it consumes. Implementations live in other crates.

use crate::{AppendBlock, CompletionResult, ContainerContent};

/// Trait for text-generation services
///
/// Implemented by the infrastructure layer (corpagent-llm)
pub trait CompletionProvider {
    /// Error type for completion operations
    type Error;

    /// Generate a completion for `prompt`, with optional side context
    fn complete(&self, prompt: &str, context: Option<&str>) -> Result<CompletionResult, Self::Error>;

    /// Short name used in logs
    fn name(&self) -> &str;
}

/// Trait for reading and writing structured document containers
///
/// Implemented by the infrastructure layer (corpagent-docx)
pub trait DocumentContainer {
    /// Error type for container operations
    type Error;

    /// Whether the capability is usable in this build
    fn is_available(&self) -> bool;

    /// Read paragraphs and tables out of container bytes
    fn read(&self, bytes: &[u8]) -> Result<ContainerContent, Self::Error>;

    /// Produce new container bytes with `blocks` appended to the body
    ///
    /// The input bytes are never modified.
    fn append(&self, bytes: &[u8], blocks: &[AppendBlock]) -> Result<Vec<u8>, Self::Error>;
}

//! Corpagent Domain Layer
//!
//! Value types and capability traits shared by every other corpagent crate.
//! It has no external dependencies: it describes what a review run produces
//! and which outside capabilities it relies on, nothing more.
//!
//! ## Key Concepts
//!
//! - **Document Type**: one label from a closed taxonomy (incorporation, employment contract, ...)
//! - **Finding Set**: the aggregate result of one review run
//! - **Citation**: a reference snippet retrieved by keyword overlap
//! - **Completion Result**: untrusted display text from a text-generation service
//! - **Document Container**: the structured file format the reviewed document lives in
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Trait definitions for all external interactions
//! - Infrastructure implementations live in other crates

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod citation;
pub mod completion;
pub mod container;
pub mod doc_type;
pub mod finding;
pub mod traits;

// Re-exports for convenience
pub use citation::CitationMatch;
pub use completion::{CompletionResult, CompletionSource};
pub use container::{AppendBlock, ContainerContent};
pub use doc_type::DocType;
pub use finding::{FindingSet, Notes};

//! Content exchanged with the document-container capability

/// Flat text content read out of a document container
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerContent {
    /// Body paragraphs in document order
    pub paragraphs: Vec<String>,

    /// Tables in document order: rows of cells
    pub tables: Vec<Vec<Vec<String>>>,
}

/// A block appended to the end of a document container
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppendBlock {
    /// Hard page break
    PageBreak,

    /// Plain paragraph of text
    Paragraph(String),
}

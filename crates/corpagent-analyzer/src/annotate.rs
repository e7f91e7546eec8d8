//! Review notes written back into the document

use crate::error::AnalyzerError;
use corpagent_domain::traits::DocumentContainer;
use corpagent_domain::{AppendBlock, Notes};

/// Heading placed above the appended notes
pub const REVIEW_HEADER: &str = "=== Automated Review Notes ===";

/// Blocks appended for a set of notes
///
/// A page break, the header, then one `"<category>: <note>"` paragraph per entry.
pub fn review_blocks(notes: &Notes) -> Vec<AppendBlock> {
    let mut blocks = Vec::with_capacity(notes.len() + 2);
    blocks.push(AppendBlock::PageBreak);
    blocks.push(AppendBlock::Paragraph(REVIEW_HEADER.to_string()));
    blocks.extend(
        notes
            .iter()
            .map(|(category, note)| AppendBlock::Paragraph(format!("{}: {}", category, note))),
    );
    blocks
}

/// Produce a marked-up copy of the document
///
/// `bytes` is only read; the result is a new buffer.
pub fn annotate<C>(container: &C, bytes: &[u8], notes: &Notes) -> Result<Vec<u8>, AnalyzerError>
where
    C: DocumentContainer,
    C::Error: std::fmt::Display,
{
    if !container.is_available() {
        return Err(AnalyzerError::ContainerUnavailable);
    }

    container
        .append(bytes, &review_blocks(notes))
        .map_err(|e| AnalyzerError::Parse(e.to_string()))
}

//! Document text extraction

use crate::error::AnalyzerError;
use corpagent_domain::traits::DocumentContainer;
use corpagent_domain::ContainerContent;

/// Delimiter placed between the cells of a table row
pub const CELL_DELIMITER: &str = " | ";

/// Pull flat text out of container bytes
///
/// Paragraphs come first, then every table row with its cells joined by
/// [`CELL_DELIMITER`]. Parts are separated by newlines.
pub fn extract_text<C>(container: &C, bytes: &[u8]) -> Result<String, AnalyzerError>
where
    C: DocumentContainer,
    C::Error: std::fmt::Display,
{
    if !container.is_available() {
        return Err(AnalyzerError::ContainerUnavailable);
    }

    let content = container
        .read(bytes)
        .map_err(|e| AnalyzerError::Parse(e.to_string()))?;
    Ok(flatten(&content))
}

/// Render container content as text lines
pub fn flatten(content: &ContainerContent) -> String {
    let rows = content
        .tables
        .iter()
        .flat_map(|table| table.iter())
        .map(|row| row.join(CELL_DELIMITER));

    content
        .paragraphs
        .iter()
        .cloned()
        .chain(rows)
        .collect::<Vec<_>>()
        .join("\n")
}

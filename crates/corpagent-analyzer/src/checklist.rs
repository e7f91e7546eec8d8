//! Required-section audit

use crate::rules::checklist_for;
use corpagent_domain::DocType;

/// List checklist sections absent from the text, in checklist order
///
/// Only document types with a checklist can have missing sections; every
/// other type yields an empty list.
pub fn missing_sections(text: &str, doc_type: DocType) -> Vec<String> {
    let checklist = checklist_for(doc_type);
    if checklist.is_empty() {
        return Vec::new();
    }

    let lower = text.to_lowercase();
    checklist
        .iter()
        .filter(|item| !lower.contains(&item.to_lowercase()))
        .map(|item| item.to_string())
        .collect()
}

//! Static rule tables
//!
//! Keyword taxonomy, section checklist and red-flag lexicon. Everything here
//! is read-only and built once per process.

use corpagent_domain::DocType;
use regex::Regex;
use std::sync::LazyLock;

/// Keywords scored per document type, in tie-break order
pub const KEYWORD_TAXONOMY: [(DocType, &[&str]); 3] = [
    (
        DocType::Incorporation,
        &[
            "resolution",
            "incorporation",
            "memorandum",
            "articles of association",
            "board resolution",
        ],
    ),
    (
        DocType::EmploymentContract,
        &[
            "employment",
            "employee",
            "employer",
            "salary",
            "probation",
            "termination",
        ],
    ),
    (
        DocType::Agreement,
        &["agreement", "party", "witnesseth", "whereas"],
    ),
];

/// Sections every incorporation filing is expected to mention
pub const INCORPORATION_CHECKLIST: [&str; 5] = [
    "memorandum of association",
    "articles of association",
    "board resolution",
    "shareholder agreement",
    "registered address",
];

/// Vague or risky contractual phrasing
///
/// Repeated entries are reported once.
pub const RED_FLAG_LEXICON: [&str; 9] = [
    "power of attorney",
    "undisclosed beneficiary",
    "subject to approval",
    "without prejudice",
    "as necessary",
    "to be decided",
    "to be determined",
    "sole discretion",
    "undisclosed beneficiary",
];

/// Flag reported when the text contains a 0-100 range
pub const PERCENT_RANGE_FLAG: &str = "suspicious percentage range 0-100";

/// Literal `0-100`, whitespace allowed around the hyphen
pub static PERCENT_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b0\s*-\s*100\b").expect("valid percent range pattern")
});

/// Required sections for a document type (empty when none are defined)
pub fn checklist_for(doc_type: DocType) -> &'static [&'static str] {
    match doc_type {
        DocType::Incorporation => &INCORPORATION_CHECKLIST,
        DocType::EmploymentContract | DocType::Agreement | DocType::Unknown => &[],
    }
}

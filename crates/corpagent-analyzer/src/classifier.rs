//! Keyword-scoring document classifier

use crate::rules::KEYWORD_TAXONOMY;
use corpagent_domain::DocType;
use tracing::debug;

/// Assign a document type by keyword hits
///
/// Each type scores one point per keyword found anywhere in the lower-cased
/// text, no matter how often it repeats. The highest score wins; ties go to
/// the type listed first. A best score of zero means `Unknown`.
pub fn classify(text: &str) -> DocType {
    let lower = text.to_lowercase();

    let mut best = DocType::Unknown;
    let mut best_score = 0usize;
    for (doc_type, keywords) in KEYWORD_TAXONOMY.iter() {
        let score = keywords.iter().filter(|kw| lower.contains(*kw)).count();
        debug!("{} scored {}", doc_type, score);
        if score > best_score {
            best = *doc_type;
            best_score = score;
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_text_is_unknown() {
        assert_eq!(classify(""), DocType::Unknown);
        assert_eq!(classify("the quick brown fox"), DocType::Unknown);
    }

    #[test]
    fn test_case_is_ignored() {
        assert_eq!(classify("MEMORANDUM OF ASSOCIATION"), DocType::Incorporation);
        assert_eq!(classify("The Employee shall receive a Salary"), DocType::EmploymentContract);
    }

    #[test]
    fn test_repeated_keyword_counts_once() {
        // agreement: "agreement" x3 = 1 point; employment: "employee", "salary" = 2 points
        let text = "agreement agreement agreement employee salary";
        assert_eq!(classify(text), DocType::EmploymentContract);
    }

    #[test]
    fn test_tie_goes_to_first_type() {
        // one hit each for incorporation, employment_contract and agreement
        assert_eq!(classify("incorporation salary whereas"), DocType::Incorporation);
        // one hit each for employment_contract and agreement
        assert_eq!(classify("probation witnesseth"), DocType::EmploymentContract);
    }

    #[test]
    fn test_substring_matches_count() {
        // "resolutions" contains "resolution"
        assert_eq!(classify("resolutions were passed"), DocType::Incorporation);
    }

    fn exclusive_keywords() -> Vec<(DocType, &'static str)> {
        // keywords that are not substrings of any other type's keywords
        vec![
            (DocType::Incorporation, "memorandum"),
            (DocType::Incorporation, "incorporation"),
            (DocType::EmploymentContract, "salary"),
            (DocType::EmploymentContract, "probation"),
            (DocType::Agreement, "witnesseth"),
            (DocType::Agreement, "whereas"),
        ]
    }

    proptest! {
        #[test]
        fn prop_single_type_keyword_selects_that_type(
            index in 0usize..6,
            prefix in "[0-9 .,;]{0,20}",
            suffix in "[0-9 .,;]{0,20}",
        ) {
            let (expected, keyword) = exclusive_keywords()[index];
            let text = format!("{}{}{}", prefix, keyword, suffix);
            prop_assert_eq!(classify(&text), expected);
        }

        #[test]
        fn prop_keyword_free_text_is_unknown(text in "[0-9 .,;:!?-]{0,200}") {
            prop_assert_eq!(classify(&text), DocType::Unknown);
        }
    }
}

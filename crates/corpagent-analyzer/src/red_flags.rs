//! Red-flag phrase detection

use crate::rules::{PERCENT_RANGE, PERCENT_RANGE_FLAG, RED_FLAG_LEXICON};

/// Find risky phrasing in the text
///
/// Lexicon phrases are matched against the lower-cased text and reported in
/// lexicon order, once each. The `0-100` range check runs on the raw text
/// and, when it hits, adds [`PERCENT_RANGE_FLAG`] last.
pub fn detect_red_flags(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();

    let mut found: Vec<String> = Vec::new();
    for phrase in RED_FLAG_LEXICON.iter() {
        if lower.contains(phrase) && !found.iter().any(|f| f == phrase) {
            found.push(phrase.to_string());
        }
    }

    if PERCENT_RANGE.is_match(text) {
        found.push(PERCENT_RANGE_FLAG.to_string());
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phrases_in_lexicon_order() {
        let flags = detect_red_flags("This is subject to approval at sole discretion");
        assert_eq!(flags, vec!["subject to approval", "sole discretion"]);

        let flags = detect_red_flags("At our SOLE DISCRETION, subject to approval");
        assert_eq!(flags, vec!["subject to approval", "sole discretion"]);
    }

    #[test]
    fn test_repeated_lexicon_entry_reported_once() {
        let flags = detect_red_flags("An undisclosed beneficiary holds the shares.");
        assert_eq!(flags, vec!["undisclosed beneficiary"]);
    }

    #[test]
    fn test_percent_range_variants() {
        assert_eq!(detect_red_flags("ownership 0-100"), vec![PERCENT_RANGE_FLAG]);
        assert_eq!(detect_red_flags("ownership 0 - 100"), vec![PERCENT_RANGE_FLAG]);
        assert!(detect_red_flags("ownership 0100").is_empty());
        assert!(detect_red_flags("ownership 20-100").is_empty());
    }

    #[test]
    fn test_percent_flag_comes_last() {
        let flags = detect_red_flags("0-100% to be determined");
        assert_eq!(flags, vec!["to be determined", PERCENT_RANGE_FLAG]);
    }

    #[test]
    fn test_clean_text_has_no_flags() {
        assert!(detect_red_flags("The company is incorporated in ADGM.").is_empty());
        assert!(detect_red_flags("").is_empty());
    }

    #[test]
    fn test_flags_only_come_from_lexicon_or_range() {
        let text = RED_FLAG_LEXICON.join(" ") + " 0 - 100";
        for flag in detect_red_flags(&text) {
            assert!(RED_FLAG_LEXICON.contains(&flag.as_str()) || flag == PERCENT_RANGE_FLAG);
        }
    }
}

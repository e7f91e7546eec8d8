//! Reference citation retrieval by keyword overlap

use crate::config::AnalyzerConfig;
use crate::error::AnalyzerError;
use corpagent_domain::CitationMatch;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Paragraphs of reference material
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceCorpus {
    paragraphs: Vec<String>,
}

impl ReferenceCorpus {
    /// Split raw text into paragraphs on blank lines
    ///
    /// Paragraphs are trimmed, empty ones dropped, and only the first
    /// `max_paragraphs` kept.
    pub fn from_text(text: &str, max_paragraphs: usize) -> Self {
        let normalized = text.replace("\r\n", "\n");
        let paragraphs = normalized
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .take(max_paragraphs)
            .map(str::to_string)
            .collect();
        Self { paragraphs }
    }

    /// Read a corpus file
    ///
    /// A missing file is an empty corpus, not an error.
    pub fn load(path: &Path, max_paragraphs: usize) -> Result<Self, AnalyzerError> {
        if !path.exists() {
            debug!("Reference corpus {} not found, using empty corpus", path.display());
            return Ok(Self::default());
        }

        let text = fs::read_to_string(path)
            .map_err(|e| AnalyzerError::Retrieval(format!("{}: {}", path.display(), e)))?;
        Ok(Self::from_text(&text, max_paragraphs))
    }

    /// Paragraphs in corpus order
    pub fn paragraphs(&self) -> &[String] {
        &self.paragraphs
    }

    /// Number of paragraphs
    pub fn len(&self) -> usize {
        self.paragraphs.len()
    }

    /// Whether the corpus has no paragraphs
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// Rank paragraphs by overlap with `text`
    ///
    /// A paragraph scores one point per distinct query word of at least
    /// `min_word_len` characters that occurs anywhere inside it. Zero scores
    /// are dropped; ties keep corpus order.
    pub fn rank(
        &self,
        text: &str,
        top_k: usize,
        min_word_len: usize,
        snippet_chars: usize,
    ) -> Vec<CitationMatch> {
        let lower = text.to_lowercase();
        let vocabulary: HashSet<&str> = lower
            .split_whitespace()
            .filter(|w| w.chars().count() >= min_word_len)
            .collect();

        if vocabulary.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<(usize, &String)> = self
            .paragraphs
            .iter()
            .filter_map(|p| {
                let lower_p = p.to_lowercase();
                let score = vocabulary.iter().filter(|w| lower_p.contains(**w)).count();
                (score > 0).then_some((score, p))
            })
            .collect();

        // sort_by is stable, so equal scores stay in corpus order
        scored.sort_by(|a, b| b.0.cmp(&a.0));

        scored
            .into_iter()
            .take(top_k)
            .map(|(score, p)| CitationMatch::new(score, p.chars().take(snippet_chars).collect::<String>()))
            .collect()
    }
}

/// Load the configured corpus and rank it against `text`
pub fn retrieve_citations(
    text: &str,
    config: &AnalyzerConfig,
) -> Result<Vec<CitationMatch>, AnalyzerError> {
    let corpus = ReferenceCorpus::load(&config.reference_path, config.max_corpus_paragraphs)?;
    let matches = corpus.rank(text, config.top_k, config.min_word_len, config.snippet_chars);
    debug!(
        "Ranked {} reference paragraphs, kept {}",
        corpus.len(),
        matches.len()
    );
    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn rank(corpus: &ReferenceCorpus, text: &str, top_k: usize) -> Vec<CitationMatch> {
        corpus.rank(text, top_k, 5, 800)
    }

    #[test]
    fn test_paragraph_split_trims_and_drops_empty() {
        let corpus = ReferenceCorpus::from_text("  first para  \n\n\n\nsecond\nstill second\n\n   \n\nthird", 500);
        assert_eq!(corpus.paragraphs(), &["first para", "second\nstill second", "third"]);
    }

    #[test]
    fn test_crlf_files_split_too() {
        let corpus = ReferenceCorpus::from_text("one\r\n\r\ntwo", 500);
        assert_eq!(corpus.len(), 2);
    }

    #[test]
    fn test_corpus_cap() {
        let text = (0..10).map(|i| format!("para {}", i)).collect::<Vec<_>>().join("\n\n");
        let corpus = ReferenceCorpus::from_text(&text, 4);
        assert_eq!(corpus.len(), 4);
        assert_eq!(corpus.paragraphs()[3], "para 3");
    }

    #[test]
    fn test_missing_file_is_empty_corpus() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.txt");
        let corpus = ReferenceCorpus::load(&path, 500).unwrap();
        assert!(corpus.is_empty());

        let config = AnalyzerConfig::default().with_reference_path(&path);
        assert!(retrieve_citations("registered office shareholders", &config).unwrap().is_empty());
    }

    #[test]
    fn test_empty_corpus_returns_nothing() {
        let corpus = ReferenceCorpus::default();
        assert!(rank(&corpus, "shareholder resolution", 3).is_empty());
    }

    #[test]
    fn test_scores_count_distinct_long_words() {
        let corpus = ReferenceCorpus::from_text("The registered office must be in ADGM.", 500);
        // "registered" twice counts once; "office" counts; "must"/"the" are too short
        let matches = rank(&corpus, "registered registered office must the", 3);
        assert_eq!(matches, vec![CitationMatch::new(2, "The registered office must be in ADGM.")]);
    }

    #[test]
    fn test_word_match_is_substring_not_token() {
        let corpus = ReferenceCorpus::from_text("Shareholders' agreements are optional.", 500);
        let matches = rank(&corpus, "agreement", 3);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].score, 1);
    }

    #[test]
    fn test_punctuation_stays_part_of_word() {
        let corpus = ReferenceCorpus::from_text("Directors are appointed by resolution", 500);
        assert!(rank(&corpus, "directors,", 3).is_empty());
        assert_eq!(rank(&corpus, "directors", 3).len(), 1);
    }

    #[test]
    fn test_sorted_descending_with_stable_ties() {
        let corpus = ReferenceCorpus::from_text(
            "alpha only here\n\nbravo only here\n\nalpha and bravo and charlie\n\nnothing relevant\n\nalpha again",
            500,
        );
        let matches = rank(&corpus, "alpha bravo charlie", 10);
        let snippets: Vec<&str> = matches.iter().map(|m| m.snippet.as_str()).collect();
        assert_eq!(
            snippets,
            vec!["alpha and bravo and charlie", "alpha only here", "bravo only here", "alpha again"]
        );
        assert!(matches.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_top_k_truncates() {
        let corpus = ReferenceCorpus::from_text("alpha 1\n\nalpha 2\n\nalpha 3\n\nalpha 4", 500);
        let matches = rank(&corpus, "alpha", 3);
        assert_eq!(matches.len(), 3);
        assert_eq!(matches[2].snippet, "alpha 3");
    }

    #[test]
    fn test_snippet_truncated_by_characters() {
        let long = format!("alpha {}", "é".repeat(1000));
        let corpus = ReferenceCorpus::from_text(&long, 500);
        let matches = corpus.rank("alpha", 3, 5, 800);
        assert_eq!(matches[0].snippet.chars().count(), 800);
    }

    #[test]
    fn test_retrieve_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "Every company must maintain a registered office.\n\n\
             Shareholder resolutions require a majority.\n\n\
             Unrelated text."
        )
        .unwrap();

        let config = AnalyzerConfig::default().with_reference_path(file.path());
        let matches = retrieve_citations("The registered office and shareholder details", &config).unwrap();
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].score, 2);
        assert!(matches[0].snippet.contains("registered office"));
        assert_eq!(matches[1].score, 1);
    }

    #[test]
    fn test_unreadable_corpus_is_an_error() {
        // a directory exists but cannot be read as a file
        let dir = tempfile::tempdir().unwrap();
        let config = AnalyzerConfig::default().with_reference_path(dir.path());
        assert!(matches!(
            retrieve_citations("shareholder", &config),
            Err(AnalyzerError::Retrieval(_))
        ));
    }
}

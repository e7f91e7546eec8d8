//! Aggregate findings of one review run

use crate::DocType;

/// Free-form notes keyed by category, kept in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notes {
    entries: Vec<(String, String)>,
}

impl Notes {
    /// Create an empty notes mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the note for a category
    ///
    /// An existing category keeps its position and has its text replaced.
    pub fn insert(&mut self, category: impl Into<String>, note: impl Into<String>) {
        let category = category.into();
        let note = note.into();
        match self.entries.iter_mut().find(|(k, _)| *k == category) {
            Some(entry) => entry.1 = note,
            None => self.entries.push((category, note)),
        }
    }

    /// Look up the note for a category
    pub fn get(&self, category: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == category)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over `(category, note)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of categories
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no notes have been recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Notes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut notes = Notes::new();
        for (k, v) in iter {
            notes.insert(k, v);
        }
        notes
    }
}

/// Everything the heuristic checks found for one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindingSet {
    /// Assigned document type
    pub doc_type: DocType,

    /// Required sections absent from the text, in checklist order
    pub missing_sections: Vec<String>,

    /// Risk phrases found, in lexicon order
    pub red_flags: Vec<String>,

    /// Human-readable notes per category
    pub notes: Notes,
}

impl FindingSet {
    /// Create a finding set with no notes
    pub fn new(doc_type: DocType, missing_sections: Vec<String>, red_flags: Vec<String>) -> Self {
        Self {
            doc_type,
            missing_sections,
            red_flags,
            notes: Notes::new(),
        }
    }

    /// Attach notes
    pub fn with_notes(mut self, notes: Notes) -> Self {
        self.notes = notes;
        self
    }

    /// Whether any check raised an issue
    pub fn has_issues(&self) -> bool {
        !self.missing_sections.is_empty() || !self.red_flags.is_empty()
    }
}

impl Default for FindingSet {
    fn default() -> Self {
        Self::new(DocType::Unknown, Vec::new(), Vec::new())
    }
}

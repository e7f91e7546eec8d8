//! Prompt construction for review suggestions

/// Builds the prompt sent to the completion service
pub struct PromptBuilder {
    text: String,
    char_limit: usize,
}

impl PromptBuilder {
    /// Create a new prompt builder
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            char_limit: 4000,
        }
    }

    /// Cap the document text at `char_limit` characters
    pub fn with_char_limit(mut self, char_limit: usize) -> Self {
        self.char_limit = char_limit;
        self
    }

    /// Build the complete review prompt
    pub fn build(&self) -> String {
        let excerpt: String = self.text.chars().take(self.char_limit).collect();

        let mut prompt = String::with_capacity(REVIEW_INSTRUCTIONS.len() + excerpt.len() + 1);
        prompt.push_str(REVIEW_INSTRUCTIONS);
        prompt.push('\n');
        prompt.push_str(&excerpt);
        prompt
    }
}

const REVIEW_INSTRUCTIONS: &str = "You are an assistant that reviews corporate legal documents for ADGM compliance.
Given the document text below, provide (1) a short summary of main issues, and (2) three practical suggestions to fix them. Output as JSON with keys: summary, suggestions.
Document text:";

/// Join citation snippets into side context for the prompt
pub fn citation_context<'a>(snippets: impl IntoIterator<Item = &'a str>) -> String {
    snippets.into_iter().collect::<Vec<_>>().join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_includes_instructions_and_text() {
        let prompt = PromptBuilder::new("Articles of Association").build();
        assert!(prompt.starts_with("You are an assistant that reviews corporate legal documents"));
        assert!(prompt.contains("keys: summary, suggestions"));
        assert!(prompt.ends_with("Document text:\nArticles of Association"));
    }

    #[test]
    fn test_prompt_text_is_capped_by_characters() {
        let text = "ß".repeat(5000);
        let prompt = PromptBuilder::new(text).with_char_limit(4000).build();
        let excerpt = prompt.rsplit("Document text:\n").next().unwrap();
        assert_eq!(excerpt.chars().count(), 4000);
    }

    #[test]
    fn test_citation_context_joins_with_blank_line() {
        assert_eq!(citation_context(["a", "b"]), "a\n\nb");
        assert_eq!(citation_context(Vec::<&str>::new()), "");
    }
}

//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use corpagent_analyzer::AnalysisOutcome;
use corpagent_domain::CitationMatch;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Citation snippets are cut to this many characters in tables.
const TABLE_SNIPPET_CHARS: usize = 120;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// The selected output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format the result of a review run.
    pub fn format_outcome(&self, outcome: &AnalysisOutcome) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&outcome.to_json())?),
            OutputFormat::Table => Ok(self.format_outcome_table(outcome)),
            OutputFormat::Text => Ok(self.format_outcome_text(outcome)),
        }
    }

    /// Report, citations and suggestions as plain text.
    fn format_outcome_text(&self, outcome: &AnalysisOutcome) -> String {
        let mut sections = vec![outcome.report()];

        sections.push(self.heading("Top Citations:"));
        if outcome.citations.is_empty() {
            sections.push("  None".to_string());
        }
        for (rank, citation) in outcome.citations.iter().enumerate() {
            sections.push(format!("  {}. [score {}] {}", rank + 1, citation.score, citation.snippet));
        }

        sections.push(self.heading(&format!(
            "Suggestions ({}):",
            outcome.completion.source.as_str()
        )));
        sections.push(indent(&outcome.completion.text));
        for suggestion in &outcome.completion.suggestions {
            sections.push(format!("  - {}", suggestion));
        }

        sections.join("\n")
    }

    /// Findings and citations as tables.
    fn format_outcome_table(&self, outcome: &AnalysisOutcome) -> String {
        let findings = &outcome.findings;

        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        builder.push_record(["Document Type".to_string(), findings.doc_type.to_string()]);
        builder.push_record(["Missing Sections".to_string(), findings.missing_sections.join("\n")]);
        builder.push_record(["Red Flags".to_string(), findings.red_flags.join("\n")]);
        for (key, value) in findings.notes.iter() {
            builder.push_record([key.to_string(), value.to_string()]);
        }
        let mut summary = builder.build();
        summary
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        let mut output = vec![summary.to_string()];
        output.push(self.format_citations_table(&outcome.citations));
        output.push(self.heading(&format!(
            "Suggestions ({}):",
            outcome.completion.source.as_str()
        )));
        output.push(indent(&outcome.completion.text));
        output.join("\n")
    }

    fn format_citations_table(&self, citations: &[CitationMatch]) -> String {
        if citations.is_empty() {
            return self.colorize("No reference citations found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["#", "Score", "Snippet"]);
        for (rank, citation) in citations.iter().enumerate() {
            builder.push_record([
                (rank + 1).to_string(),
                citation.score.to_string(),
                shorten(&citation.snippet, TABLE_SNIPPET_CHARS),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn heading(&self, text: &str) -> String {
        self.colorize(text, "cyan")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

fn indent(text: &str) -> String {
    text.lines()
        .map(|line| format!("  {}", line))
        .collect::<Vec<_>>()
        .join("\n")
}

fn shorten(text: &str, max_chars: usize) -> String {
    let flat = text.replace('\n', " ");
    if flat.chars().count() <= max_chars {
        return flat;
    }
    let mut cut: String = flat.chars().take(max_chars).collect();
    cut.push('…');
    cut
}

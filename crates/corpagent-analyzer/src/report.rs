//! Plain-text and JSON renderings of findings

use corpagent_domain::{CitationMatch, CompletionResult, FindingSet};
use serde_json::{json, Map, Value};

/// Render a deterministic plain-text report
///
/// ```text
/// Document Type: incorporation
/// Missing Sections: registered address
/// Red Flags: None
/// Notes:
///   Missing sections: registered address
/// ```
pub fn format_report(findings: &FindingSet) -> String {
    let mut lines = Vec::with_capacity(4 + findings.notes.len());
    lines.push(format!("Document Type: {}", findings.doc_type));
    lines.push(format!("Missing Sections: {}", join_or_none(&findings.missing_sections)));
    lines.push(format!("Red Flags: {}", join_or_none(&findings.red_flags)));
    lines.push("Notes:".to_string());
    for (key, value) in findings.notes.iter() {
        lines.push(format!("  {}: {}", key, value));
    }
    lines.join("\n")
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "None".to_string()
    } else {
        items.join(", ")
    }
}

/// Findings as a JSON object, notes in insertion order
pub fn summary_json(findings: &FindingSet) -> Value {
    let notes: Map<String, Value> = findings
        .notes
        .iter()
        .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
        .collect();

    json!({
        "doc_type": findings.doc_type.as_str(),
        "missing_sections": findings.missing_sections,
        "red_flags": findings.red_flags,
        "notes": notes,
    })
}

/// Citations as a JSON array
pub fn citations_json(citations: &[CitationMatch]) -> Value {
    Value::Array(
        citations
            .iter()
            .map(|c| json!({ "score": c.score, "snippet": c.snippet }))
            .collect(),
    )
}

/// Completion result as a JSON object
pub fn completion_json(completion: &CompletionResult) -> Value {
    let mut value = json!({
        "text": completion.text,
        "source": completion.source.as_str(),
    });
    if !completion.suggestions.is_empty() {
        value["suggestions"] = json!(completion.suggestions);
    }
    if let Some(ts) = completion.timestamp {
        value["timestamp"] = json!(ts);
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use corpagent_domain::{CompletionSource, DocType, Notes};

    fn findings() -> FindingSet {
        let notes: Notes = [
            ("Missing sections", "board resolution, registered address"),
            ("Red flags", "sole discretion"),
        ]
        .into_iter()
        .collect();
        FindingSet::new(
            DocType::Incorporation,
            vec!["board resolution".to_string(), "registered address".to_string()],
            vec!["sole discretion".to_string()],
        )
        .with_notes(notes)
    }

    #[test]
    fn test_report_layout() {
        let report = format_report(&findings());
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Document Type: incorporation",
                "Missing Sections: board resolution, registered address",
                "Red Flags: sole discretion",
                "Notes:",
                "  Missing sections: board resolution, registered address",
                "  Red flags: sole discretion",
            ]
        );
    }

    #[test]
    fn test_report_defaults_to_none() {
        let report = format_report(&FindingSet::default());
        assert_eq!(
            report,
            "Document Type: unknown\nMissing Sections: None\nRed Flags: None\nNotes:"
        );
    }

    #[test]
    fn test_report_is_deterministic() {
        assert_eq!(format_report(&findings()), format_report(&findings()));
    }

    #[test]
    fn test_summary_json_keeps_note_order() {
        let value = summary_json(&findings());
        assert_eq!(value["doc_type"], "incorporation");
        assert_eq!(value["red_flags"], json!(["sole discretion"]));

        let keys: Vec<&String> = value["notes"].as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["Missing sections", "Red flags"]);
    }

    #[test]
    fn test_completion_json_omits_empty_fields() {
        let value = completion_json(&CompletionResult::text("hi", CompletionSource::Live));
        assert_eq!(value, json!({ "text": "hi", "source": "live" }));
    }

    #[test]
    fn test_citations_json() {
        let value = citations_json(&[CitationMatch::new(2, "snippet")]);
        assert_eq!(value, json!([{ "score": 2, "snippet": "snippet" }]));
    }
}

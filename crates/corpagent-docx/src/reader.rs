//! Flattening `word/document.xml` to paragraphs and tables

use crate::{ContainerError, DOCUMENT_PART};
use corpagent_domain::ContainerContent;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::io::{Cursor, Read};
use tracing::debug;

/// Read the main document part out of archive bytes
pub(crate) fn document_xml(bytes: &[u8]) -> Result<String, ContainerError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
    let mut part = archive
        .by_name(DOCUMENT_PART)
        .map_err(|_| ContainerError::Parse(format!("missing {}", DOCUMENT_PART)))?;

    let mut xml = String::new();
    part.read_to_string(&mut xml)
        .map_err(|e| ContainerError::Parse(format!("{} is not UTF-8 text: {}", DOCUMENT_PART, e)))?;
    Ok(xml)
}

/// Extract body paragraphs and top-level tables from `.docx` bytes
pub(crate) fn read_document(bytes: &[u8]) -> Result<ContainerContent, ContainerError> {
    let xml = document_xml(bytes)?;
    let content = parse_body(&xml)?;
    debug!(
        "Read {} paragraphs and {} tables",
        content.paragraphs.len(),
        content.tables.len()
    );
    Ok(content)
}

/// Walk the document XML
///
/// Paragraphs inside a table belong to the enclosing top-level cell; nested
/// tables fold into that cell as extra paragraphs. Text-box content
/// (`w:txbxContent`) is not part of the body text and is skipped.
fn parse_body(xml: &str) -> Result<ContainerContent, ContainerError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(false);

    let mut content = ContainerContent::default();

    let mut table_depth = 0usize;
    let mut paragraph_depth = 0usize;
    let mut run_depth = 0usize;
    let mut in_text = false;
    let mut text_box_depth = 0usize;

    let mut paragraph = String::new();
    let mut cell: Vec<String> = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut table: Vec<Vec<String>> = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) if e.name().as_ref() == b"w:txbxContent" => text_box_depth += 1,
            Event::End(e) if e.name().as_ref() == b"w:txbxContent" => {
                text_box_depth = text_box_depth.saturating_sub(1)
            }
            Event::Eof => break,
            _ if text_box_depth > 0 => {}
            Event::Start(e) => match e.name().as_ref() {
                b"w:tbl" => {
                    table_depth += 1;
                    if table_depth == 1 {
                        table = Vec::new();
                    }
                }
                b"w:tr" if table_depth == 1 => row = Vec::new(),
                b"w:tc" if table_depth == 1 => cell = Vec::new(),
                b"w:p" => {
                    if paragraph_depth == 0 {
                        paragraph.clear();
                    }
                    paragraph_depth += 1;
                }
                b"w:r" => run_depth += 1,
                b"w:t" => in_text = true,
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:tab" if run_depth > 0 && paragraph_depth > 0 => paragraph.push('\t'),
                b"w:br" if run_depth > 0 && paragraph_depth > 0 && is_line_break(&e) => paragraph.push('\n'),
                b"w:cr" if run_depth > 0 && paragraph_depth > 0 => paragraph.push('\n'),
                b"w:p" if paragraph_depth == 0 => {
                    if table_depth == 0 {
                        content.paragraphs.push(String::new());
                    } else {
                        cell.push(String::new());
                    }
                }
                _ => {}
            },
            Event::Text(t) => {
                if in_text && paragraph_depth > 0 {
                    let text = t
                        .unescape()
                        .map_err(|e| ContainerError::Parse(format!("bad text node: {}", e)))?;
                    paragraph.push_str(&text);
                }
            }
            Event::CData(t) => {
                if in_text && paragraph_depth > 0 {
                    paragraph.push_str(&String::from_utf8_lossy(&t));
                }
            }
            Event::End(e) => match e.name().as_ref() {
                b"w:t" => in_text = false,
                b"w:r" => run_depth = run_depth.saturating_sub(1),
                b"w:p" => {
                    paragraph_depth = paragraph_depth.saturating_sub(1);
                    if paragraph_depth == 0 {
                        let text = std::mem::take(&mut paragraph);
                        if table_depth == 0 {
                            content.paragraphs.push(text);
                        } else {
                            cell.push(text);
                        }
                    }
                }
                b"w:tc" if table_depth == 1 => row.push(std::mem::take(&mut cell).join("\n")),
                b"w:tr" if table_depth == 1 => table.push(std::mem::take(&mut row)),
                b"w:tbl" => {
                    if table_depth == 1 {
                        content.tables.push(std::mem::take(&mut table));
                    }
                    table_depth = table_depth.saturating_sub(1);
                }
                _ => {}
            },
            _ => {}
        }
    }

    Ok(content)
}

/// Page and column breaks carry no text; only text-wrapping breaks do
fn is_line_break(e: &BytesStart) -> bool {
    match e.try_get_attribute("w:type") {
        Ok(Some(attr)) => attr.value.as_ref() == b"textWrapping",
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrap(body: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{}</w:body></w:document>"#,
            body
        )
    }

    #[test]
    fn test_paragraph_runs_are_concatenated() {
        let xml = wrap(r#"<w:p><w:r><w:t>Board </w:t></w:r><w:r><w:t xml:space="preserve">Resolution</w:t></w:r></w:p>"#);
        let content = parse_body(&xml).unwrap();
        assert_eq!(content.paragraphs, vec!["Board Resolution"]);
        assert!(content.tables.is_empty());
    }

    #[test]
    fn test_tabs_breaks_and_entities() {
        let xml = wrap(r#"<w:p><w:pPr><w:tabs><w:tab w:val="left" w:pos="720"/></w:tabs></w:pPr><w:r><w:t>A</w:t><w:tab/><w:t>B &amp; C</w:t><w:br/><w:t>D</w:t></w:r></w:p>"#);
        let content = parse_body(&xml).unwrap();
        assert_eq!(content.paragraphs, vec!["A\tB & C\nD"]);
    }

    #[test]
    fn test_page_break_has_no_text() {
        let xml = wrap(r#"<w:p><w:r><w:t>A</w:t><w:br w:type="page"/><w:t>B</w:t></w:r></w:p>"#);
        let content = parse_body(&xml).unwrap();
        assert_eq!(content.paragraphs, vec!["AB"]);
    }

    #[test]
    fn test_empty_paragraphs_are_kept() {
        let xml = wrap(r#"<w:p/><w:p><w:pPr/></w:p><w:p><w:r><w:t>x</w:t></w:r></w:p>"#);
        let content = parse_body(&xml).unwrap();
        assert_eq!(content.paragraphs, vec!["", "", "x"]);
    }

    #[test]
    fn test_table_cells_are_separated_from_paragraphs() {
        let xml = wrap(concat!(
            r#"<w:p><w:r><w:t>Intro</w:t></w:r></w:p>"#,
            r#"<w:tbl><w:tr>"#,
            r#"<w:tc><w:p><w:r><w:t>Name</w:t></w:r></w:p></w:tc>"#,
            r#"<w:tc><w:p><w:r><w:t>Line 1</w:t></w:r></w:p><w:p><w:r><w:t>Line 2</w:t></w:r></w:p></w:tc>"#,
            r#"</w:tr></w:tbl>"#,
            r#"<w:p><w:r><w:t>Outro</w:t></w:r></w:p>"#,
        ));
        let content = parse_body(&xml).unwrap();
        assert_eq!(content.paragraphs, vec!["Intro", "Outro"]);
        assert_eq!(content.tables, vec![vec![vec!["Name".to_string(), "Line 1\nLine 2".to_string()]]]);
    }

    #[test]
    fn test_nested_table_folds_into_outer_cell() {
        let xml = wrap(concat!(
            r#"<w:tbl><w:tr><w:tc>"#,
            r#"<w:p><w:r><w:t>outer</w:t></w:r></w:p>"#,
            r#"<w:tbl><w:tr><w:tc><w:p><w:r><w:t>inner</w:t></w:r></w:p></w:tc></w:tr></w:tbl>"#,
            r#"<w:p/>"#,
            r#"</w:tc></w:tr></w:tbl>"#,
        ));
        let content = parse_body(&xml).unwrap();
        assert_eq!(content.tables.len(), 1);
        assert_eq!(content.tables[0], vec![vec!["outer\ninner\n".to_string()]]);
    }

    #[test]
    fn test_text_box_content_is_skipped() {
        let text_box = r#"<w:txbxContent><w:p><w:r><w:t>Boxed</w:t></w:r></w:p></w:txbxContent>"#;
        let xml = wrap(&format!(
            concat!(
                r#"<w:p><w:r><w:t>Before </w:t></w:r>"#,
                r#"<w:r><mc:AlternateContent>"#,
                r#"<mc:Choice Requires="wps"><w:drawing><wps:txbx>{text_box}</wps:txbx></w:drawing></mc:Choice>"#,
                r#"<mc:Fallback><w:pict><v:textbox>{text_box}</v:textbox></w:pict></mc:Fallback>"#,
                r#"</mc:AlternateContent></w:r>"#,
                r#"<w:r><w:t>after</w:t></w:r></w:p>"#,
            ),
            text_box = text_box
        ));
        let content = parse_body(&xml).unwrap();
        assert_eq!(content.paragraphs, vec!["Before after"]);
    }

    #[test]
    fn test_malformed_xml_is_a_parse_error() {
        let result = parse_body("<w:document><w:body><w:p></w:body>");
        assert!(matches!(result, Err(ContainerError::Parse(_))));
    }

    #[test]
    fn test_non_zip_bytes_are_a_parse_error() {
        let result = read_document(b"this is not a zip archive");
        assert!(matches!(result, Err(ContainerError::Parse(_))));
    }
}

//! Appending blocks to `.docx` bodies and building new documents

use crate::reader::document_xml;
use crate::{ContainerError, DOCUMENT_PART};
use corpagent_domain::{AppendBlock, ContainerContent};
use quick_xml::escape::escape;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Write};
use tracing::debug;
use zip::write::SimpleFileOptions;
use zip::CompressionMethod;

const WORD_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/></Types>"#;

const ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;

/// Copy the archive, splicing `blocks` onto the end of the body
pub(crate) fn append_blocks(bytes: &[u8], blocks: &[AppendBlock]) -> Result<Vec<u8>, ContainerError> {
    let xml = document_xml(bytes)?;
    let updated = splice_blocks(&xml, blocks)?;

    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));

    for index in 0..archive.len() {
        let entry = archive.by_index(index)?;
        if entry.name() == DOCUMENT_PART {
            let name = entry.name().to_string();
            drop(entry);
            writer.start_file(name, deflated())?;
            writer.write_all(updated.as_bytes())?;
        } else {
            writer.raw_copy_file(entry)?;
        }
    }

    let out = writer.finish()?.into_inner();
    debug!("Appended {} blocks ({} bytes written)", blocks.len(), out.len());
    Ok(out)
}

/// Build a minimal `.docx` from scratch
pub(crate) fn create_document(content: &ContainerContent) -> Result<Vec<u8>, ContainerError> {
    let mut body = String::new();
    for paragraph in &content.paragraphs {
        body.push_str(&paragraph_xml(paragraph));
    }
    for table in &content.tables {
        body.push_str("<w:tbl>");
        for row in table {
            body.push_str("<w:tr>");
            for cell in row {
                body.push_str("<w:tc>");
                body.push_str(&paragraph_xml(cell));
                body.push_str("</w:tc>");
            }
            body.push_str("</w:tr>");
        }
        body.push_str("</w:tbl>");
    }

    let document = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="{}"><w:body>{}<w:sectPr/></w:body></w:document>"#,
        WORD_NS, body
    );

    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    for (name, data) in [
        ("[Content_Types].xml", CONTENT_TYPES),
        ("_rels/.rels", ROOT_RELS),
        (DOCUMENT_PART, document.as_str()),
    ] {
        writer.start_file(name, deflated())?;
        writer.write_all(data.as_bytes())?;
    }
    Ok(writer.finish()?.into_inner())
}

fn deflated() -> SimpleFileOptions {
    SimpleFileOptions::default().compression_method(CompressionMethod::Deflated)
}

/// Insert block XML before the body's own `w:sectPr`, or before `</w:body>`
fn splice_blocks(xml: &str, blocks: &[AppendBlock]) -> Result<String, ContainerError> {
    let insert_at = body_insert_offset(xml)?;

    let mut out = String::with_capacity(xml.len() + blocks.len() * 96);
    out.push_str(&xml[..insert_at]);
    for block in blocks {
        out.push_str(&block_xml(block));
    }
    out.push_str(&xml[insert_at..]);
    Ok(out)
}

/// Byte offset where appended body content belongs
///
/// Only a `w:sectPr` that is a direct child of `w:body` counts; section
/// properties inside paragraphs or tracked changes are nested deeper.
fn body_insert_offset(xml: &str) -> Result<usize, ContainerError> {
    let mut reader = Reader::from_str(xml);

    let mut depth = 0usize;
    let mut body_depth: Option<usize> = None;
    let mut sect_pr: Option<usize> = None;

    loop {
        let offset = reader.buffer_position() as usize;
        match reader.read_event()? {
            Event::Start(e) => {
                depth += 1;
                match e.name().as_ref() {
                    b"w:body" if body_depth.is_none() => body_depth = Some(depth),
                    b"w:sectPr" if body_depth.is_some_and(|d| depth == d + 1) => sect_pr = Some(offset),
                    _ => {}
                }
            }
            Event::Empty(e) => {
                if e.name().as_ref() == b"w:sectPr" && body_depth == Some(depth) {
                    sect_pr = Some(offset);
                }
            }
            Event::End(e) => {
                if e.name().as_ref() == b"w:body" && body_depth == Some(depth) {
                    return Ok(sect_pr.unwrap_or(offset));
                }
                depth = depth.saturating_sub(1);
            }
            Event::Eof => {
                return Err(ContainerError::Parse("document has no w:body element".to_string()))
            }
            _ => {}
        }
    }
}

fn block_xml(block: &AppendBlock) -> String {
    match block {
        AppendBlock::PageBreak => r#"<w:p><w:r><w:br w:type="page"/></w:r></w:p>"#.to_string(),
        AppendBlock::Paragraph(text) => paragraph_xml(text),
    }
}

fn paragraph_xml(text: &str) -> String {
    format!(
        r#"<w:p><w:r><w:t xml:space="preserve">{}</w:t></w:r></w:p>"#,
        escape(text)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::read_document;

    #[test]
    fn test_splice_before_trailing_sect_pr() {
        let xml = "<w:body><w:p/><w:sectPr><w:pgSz/></w:sectPr></w:body>";
        let out = splice_blocks(xml, &[AppendBlock::Paragraph("x".to_string())]).unwrap();
        assert!(out.ends_with(r#"<w:t xml:space="preserve">x</w:t></w:r></w:p><w:sectPr><w:pgSz/></w:sectPr></w:body>"#));
    }

    #[test]
    fn test_splice_skips_paragraph_level_sect_pr() {
        let xml = "<w:body><w:p><w:pPr><w:sectPr/></w:pPr></w:p></w:body>";
        let out = splice_blocks(xml, &[AppendBlock::PageBreak]).unwrap();
        assert!(out.ends_with(r#"</w:pPr></w:p><w:p><w:r><w:br w:type="page"/></w:r></w:p></w:body>"#));
    }

    #[test]
    fn test_splice_ignores_sect_pr_inside_tracked_change() {
        let xml = concat!(
            r#"<w:body><w:p/><w:sectPr><w:pgSz/>"#,
            r#"<w:sectPrChange w:id="1"><w:sectPr/></w:sectPrChange>"#,
            r#"</w:sectPr></w:body>"#,
        );
        let out = splice_blocks(xml, &[AppendBlock::Paragraph("x".to_string())]).unwrap();
        assert_eq!(
            out,
            concat!(
                r#"<w:body><w:p/><w:p><w:r><w:t xml:space="preserve">x</w:t></w:r></w:p>"#,
                r#"<w:sectPr><w:pgSz/><w:sectPrChange w:id="1"><w:sectPr/></w:sectPrChange></w:sectPr></w:body>"#,
            )
        );
    }

    #[test]
    fn test_splice_before_empty_body_sect_pr() {
        let xml = r#"<w:document><w:body><w:p/><w:sectPr/></w:body></w:document>"#;
        let out = splice_blocks(xml, &[AppendBlock::PageBreak]).unwrap();
        assert_eq!(
            out,
            r#"<w:document><w:body><w:p/><w:p><w:r><w:br w:type="page"/></w:r></w:p><w:sectPr/></w:body></w:document>"#
        );
    }

    #[test]
    fn test_splice_without_body_fails() {
        let result = splice_blocks("<w:document/>", &[AppendBlock::PageBreak]);
        assert!(matches!(result, Err(ContainerError::Parse(_))));
    }

    #[test]
    fn test_paragraph_text_is_escaped() {
        assert_eq!(
            paragraph_xml("a < b & c"),
            r#"<w:p><w:r><w:t xml:space="preserve">a &lt; b &amp; c</w:t></w:r></w:p>"#
        );
    }

    #[test]
    fn test_create_then_read() {
        let content = ContainerContent {
            paragraphs: vec!["Memorandum of Association".to_string(), "Tom & Jerry".to_string()],
            tables: vec![vec![
                vec!["Shareholder".to_string(), "Shares".to_string()],
                vec!["Alice".to_string(), "100".to_string()],
            ]],
        };
        let bytes = create_document(&content).unwrap();
        assert_eq!(read_document(&bytes).unwrap(), content);
    }

    #[test]
    fn test_append_keeps_original_and_other_parts() {
        let original = create_document(&ContainerContent {
            paragraphs: vec!["Body".to_string()],
            tables: vec![],
        })
        .unwrap();
        let snapshot = original.clone();

        let marked = append_blocks(
            &original,
            &[AppendBlock::PageBreak, AppendBlock::Paragraph("Note".to_string())],
        )
        .unwrap();

        assert_eq!(original, snapshot);
        let content = read_document(&marked).unwrap();
        assert_eq!(content.paragraphs, vec!["Body", "", "Note"]);

        let mut archive = zip::ZipArchive::new(Cursor::new(marked.as_slice())).unwrap();
        assert!(archive.by_name("[Content_Types].xml").is_ok());
        assert!(archive.by_name("_rels/.rels").is_ok());
    }
}

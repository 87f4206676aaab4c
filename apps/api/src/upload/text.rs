//! Document text extraction for uploaded resumes.
//!
//! PDF extraction delegates to `pdf-extract`. A DOCX file is a ZIP
//! container, so the main document part is read with `zip` and the
//! WordprocessingML markup reduced to plain text.

use std::io::{Cursor, Read};

use lazy_static::lazy_static;
use regex::Regex;
use tracing::warn;

use crate::errors::AppError;

lazy_static! {
    static ref XML_TAG_RE: Regex = Regex::new(r"<[^>]*>").unwrap();
}

pub fn extract_pdf_text(data: &[u8]) -> Result<String, AppError> {
    pdf_extract::extract_text_from_mem(data).map_err(|e| {
        warn!("PDF extraction failed: {e}");
        AppError::Document("PDF文件解析失败，请确保文件未损坏".to_string())
    })
}

pub fn extract_docx_text(data: &[u8]) -> Result<String, AppError> {
    docx_document_xml(data)
        .map(|xml| document_xml_to_text(&xml))
        .map_err(|e| {
            warn!("DOCX extraction failed: {e}");
            AppError::Document("DOCX文件解析失败，请确保文件未损坏".to_string())
        })
}

/// Pulls `word/document.xml` out of the DOCX container.
fn docx_document_xml(data: &[u8]) -> anyhow::Result<String> {
    let mut archive = zip::ZipArchive::new(Cursor::new(data))?;
    let mut entry = archive.by_name("word/document.xml")?;
    let mut xml = String::new();
    entry.read_to_string(&mut xml)?;
    Ok(xml)
}

/// Reduces WordprocessingML to plain text: paragraph ends become newlines,
/// tabs and breaks become whitespace, remaining tags are stripped, the
/// basic XML entities are decoded, and blank lines collapse.
fn document_xml_to_text(xml: &str) -> String {
    let text = xml
        .replace("</w:p>", "\n")
        .replace("<w:tab/>", "\t")
        .replace("<w:br/>", "\n");

    let text = XML_TAG_RE.replace_all(&text, "");

    // &amp; last, so "&amp;lt;" doesn't double-decode
    let text = text
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&");

    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Builds a minimal DOCX container around the given document XML.
/// Shared by the upload handler tests.
#[cfg(test)]
pub(crate) fn docx_bytes(document_xml: &str) -> Vec<u8> {
    use std::io::Write;

    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = zip::ZipWriter::new(&mut cursor);
        writer
            .start_file("word/document.xml", zip::write::SimpleFileOptions::default())
            .unwrap();
        writer.write_all(document_xml.as_bytes()).unwrap();
        writer.finish().unwrap();
    }
    cursor.into_inner()
}

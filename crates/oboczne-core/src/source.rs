//! Reading dictionary files and extracting plain text from documents.
//!
//! Document text is the concatenation of paragraph texts in document order,
//! joined by single spaces. For DOCX that means every `w:p` directly under
//! `w:body`; paragraphs inside tables and text boxes are not part of the
//! body text.

use std::io::{Cursor, Read};
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use thiserror::Error;

use crate::error::{Error, Result};

const DOCX_MAIN_PART: &str = "word/document.xml";
const UTF8_BOM: char = '\u{feff}';

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Encoding error: {0}")]
    Encoding(String),
    #[error("Invalid document container: {0}")]
    Container(#[from] zip::result::ZipError),
    #[error("Malformed document XML: {0}")]
    Xml(#[from] quick_xml::Error),
}

pub type ExtractResult<T> = std::result::Result<T, ExtractError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    PlainText,
    Docx,
}

impl DocumentFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "txt" | "text" => Some(Self::PlainText),
            "docx" => Some(Self::Docx),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> ExtractResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| ExtractError::UnsupportedFormat("no extension".into()))?;

        Self::from_extension(ext).ok_or_else(|| ExtractError::UnsupportedFormat(ext.into()))
    }
}

pub trait Extractor: Send + Sync {
    fn supported_formats(&self) -> &[DocumentFormat];

    fn can_extract(&self, format: DocumentFormat) -> bool {
        self.supported_formats().contains(&format)
    }

    fn extract_bytes(&self, data: &[u8], format: DocumentFormat) -> ExtractResult<String>;

    /// Plain text of the document at `path`; every failure is a
    /// [`Error::DocumentUnavailable`].
    fn extract_file(&self, path: &Path) -> Result<String> {
        let text = DocumentFormat::from_path(path)
            .and_then(|format| {
                if !self.can_extract(format) {
                    return Err(ExtractError::UnsupportedFormat(format!("{format:?}")));
                }
                let data = std::fs::read(path)?;
                self.extract_bytes(&data, format)
            })
            .map_err(|e| Error::document(path, e))?;

        tracing::debug!(
            "Extracted {} characters from {}",
            text.chars().count(),
            path.display()
        );
        Ok(text)
    }
}

pub struct PlainTextExtractor;

impl PlainTextExtractor {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for PlainTextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor for PlainTextExtractor {
    fn supported_formats(&self) -> &[DocumentFormat] {
        &[DocumentFormat::PlainText]
    }

    /// Each non-blank line is a paragraph.
    fn extract_bytes(&self, data: &[u8], _format: DocumentFormat) -> ExtractResult<String> {
        let text = decode_utf8(data).map_err(ExtractError::Encoding)?;
        let paragraphs: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
        Ok(paragraphs.join(" "))
    }
}

pub struct DocxExtractor;

impl DocxExtractor {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for DocxExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor for DocxExtractor {
    fn supported_formats(&self) -> &[DocumentFormat] {
        &[DocumentFormat::Docx]
    }

    fn extract_bytes(&self, data: &[u8], _format: DocumentFormat) -> ExtractResult<String> {
        let mut archive = zip::ZipArchive::new(Cursor::new(data))?;
        let mut xml = String::new();
        archive.by_name(DOCX_MAIN_PART)?.read_to_string(&mut xml)?;

        Ok(body_paragraphs(&xml)?.join(" "))
    }
}

fn body_paragraphs(xml: &str) -> ExtractResult<Vec<String>> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<Vec<u8>> = Vec::new();
    let mut paragraphs = Vec::new();
    let mut current = String::new();

    loop {
        match reader.read_event()? {
            Event::Start(ref e) => stack.push(e.name().as_ref().to_vec()),
            Event::Empty(ref e) => {
                if is_body_paragraph(e, &stack) {
                    paragraphs.push(String::new());
                } else if in_body_run(&stack) {
                    match e.name().as_ref() {
                        b"w:tab" => current.push('\t'),
                        b"w:br" if is_text_wrapping_break(e) => current.push('\n'),
                        b"w:cr" => current.push('\n'),
                        _ => {}
                    }
                }
            }
            Event::Text(ref e) => {
                let in_text = stack.last().is_some_and(|n| n == b"w:t");
                if in_text && in_body_run(&stack[..stack.len() - 1]) {
                    current.push_str(&e.unescape().map_err(quick_xml::Error::from)?);
                }
            }
            Event::End(ref e) => {
                stack.pop();
                if e.name().as_ref() == b"w:p" && stack.last().is_some_and(|n| n == b"w:body") {
                    paragraphs.push(std::mem::take(&mut current));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}

fn is_body_paragraph(e: &BytesStart<'_>, parents: &[Vec<u8>]) -> bool {
    e.name().as_ref() == b"w:p" && parents.last().is_some_and(|n| n == b"w:body")
}

/// Page and column breaks carry no text; only line breaks (the default
/// `w:type="textWrapping"`) become a newline.
fn is_text_wrapping_break(e: &BytesStart<'_>) -> bool {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.as_ref() == b"w:type")
        .map_or(true, |attr| attr.value.as_ref() == b"textWrapping")
}

/// `parents` ends with a run of a body paragraph, optionally inside a hyperlink:
/// `w:body / w:p / [w:hyperlink /] w:r`.
fn in_body_run(parents: &[Vec<u8>]) -> bool {
    let Some(body) = parents.iter().rposition(|n| n == b"w:body") else {
        return false;
    };
    match &parents[body + 1..] {
        [p, r] => p == b"w:p" && r == b"w:r",
        [p, link, r] => p == b"w:p" && link == b"w:hyperlink" && r == b"w:r",
        _ => false,
    }
}

/// Dispatches to the first extractor that supports the document's format.
pub struct CompositeExtractor {
    extractors: Vec<Box<dyn Extractor>>,
}

impl CompositeExtractor {
    #[must_use]
    pub fn new() -> Self {
        Self {
            extractors: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_extractor(mut self, extractor: Box<dyn Extractor>) -> Self {
        self.extractors.push(extractor);
        self
    }

    fn find_extractor(&self, format: DocumentFormat) -> Option<&dyn Extractor> {
        self.extractors
            .iter()
            .find(|e| e.can_extract(format))
            .map(|e| e.as_ref())
    }
}

impl Default for CompositeExtractor {
    fn default() -> Self {
        Self::new()
            .with_extractor(Box::new(PlainTextExtractor::new()))
            .with_extractor(Box::new(DocxExtractor::new()))
    }
}

impl Extractor for CompositeExtractor {
    fn supported_formats(&self) -> &[DocumentFormat] {
        &[DocumentFormat::PlainText, DocumentFormat::Docx]
    }

    fn can_extract(&self, format: DocumentFormat) -> bool {
        self.find_extractor(format).is_some()
    }

    fn extract_bytes(&self, data: &[u8], format: DocumentFormat) -> ExtractResult<String> {
        let extractor = self
            .find_extractor(format)
            .ok_or_else(|| ExtractError::UnsupportedFormat(format!("{format:?}")))?;

        extractor.extract_bytes(data, format)
    }
}

/// Plain text of a plain-text or DOCX document.
pub fn read_document(path: &Path) -> Result<String> {
    CompositeExtractor::default().extract_file(path)
}

pub fn read_dictionary(path: &Path) -> Result<String> {
    let data = std::fs::read(path).map_err(|e| Error::dictionary(path, e))?;
    let text = decode_utf8(&data).map_err(|e| Error::dictionary(path, e))?;

    tracing::debug!("Read dictionary {} ({} bytes)", path.display(), data.len());
    Ok(text)
}

fn decode_utf8(data: &[u8]) -> std::result::Result<String, String> {
    let text = std::str::from_utf8(data).map_err(|e| format!("invalid UTF-8: {e}"))?;
    Ok(text.strip_prefix(UTF8_BOM).unwrap_or(text).to_string())
}

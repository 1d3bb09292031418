// src/extractors/text.rs

use crate::utils::error::ExtractError;
use std::fs;
use std::path::Path;

/// The supported CV document formats. Anything else is rejected up front
/// with `ExtractError::UnsupportedFormat` before any I/O happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Txt,
}

impl DocumentFormat {
    /// Detects the format from the file extension, case-insensitive.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            "txt" => Some(Self::Txt),
            _ => None,
        }
    }
}

/// Extracts the flat text of a single CV document.
///
/// Each format is flattened unit-by-unit (PDF pages, DOCX paragraphs,
/// text lines) in document order, units separated by a newline. A unit
/// that yields no text contributes an empty line; a decode failure is an
/// error, never a silently truncated result.
pub fn extract_text(path: &Path) -> Result<String, ExtractError> {
    let format = DocumentFormat::from_path(path)
        .ok_or_else(|| ExtractError::UnsupportedFormat(path.display().to_string()))?;

    tracing::debug!("Extracting text from {} ({:?})", path.display(), format);

    match format {
        DocumentFormat::Pdf => extract_text_from_pdf(path),
        DocumentFormat::Docx => extract_text_from_docx(path),
        DocumentFormat::Txt => Ok(fs::read_to_string(path)?),
    }
}

/// PDF extraction: one text chunk per page, in page order.
fn extract_text_from_pdf(path: &Path) -> Result<String, ExtractError> {
    let doc = lopdf::Document::load(path)
        .map_err(|e| ExtractError::Pdf(format!("{}: {}", path.display(), e)))?;

    let mut pages = Vec::new();
    for (page_num, _page_id) in doc.get_pages() {
        let content = doc
            .extract_text(&[page_num])
            .map_err(|e| ExtractError::Pdf(format!("{} page {}: {}", path.display(), page_num, e)))?;
        pages.push(content);
    }

    Ok(pages.join("\n"))
}

/// DOCX extraction: walk the paragraph tree down to its text runs, one
/// line per paragraph. Empty paragraphs keep their line so later
/// line-based matching sees the same vertical structure the document has.
fn extract_text_from_docx(path: &Path) -> Result<String, ExtractError> {
    let bytes = fs::read(path)?;
    let docx = docx_rs::read_docx(&bytes)
        .map_err(|e| ExtractError::Docx(format!("{}: {:?}", path.display(), e)))?;

    let mut paragraphs = Vec::new();
    for child in &docx.document.children {
        if let docx_rs::DocumentChild::Paragraph(para) = child {
            paragraphs.push(paragraph_text(para));
        }
    }

    Ok(paragraphs.join("\n"))
}

/// Concatenates the text runs of one paragraph, including runs wrapped in
/// hyperlinks (email addresses are routinely autoformatted as links) and
/// tracked-change insertions. Runs are parts of the same sentence, so no
/// separator between them.
fn paragraph_text(para: &docx_rs::Paragraph) -> String {
    let mut text = String::new();
    for child in &para.children {
        match child {
            docx_rs::ParagraphChild::Run(run) => push_run_text(run, &mut text),
            docx_rs::ParagraphChild::Hyperlink(link) => {
                for linked in &link.children {
                    if let docx_rs::ParagraphChild::Run(run) = linked {
                        push_run_text(run, &mut text);
                    }
                }
            }
            docx_rs::ParagraphChild::Insert(ins) => {
                for inserted in &ins.children {
                    if let docx_rs::InsertChild::Run(run) = inserted {
                        push_run_text(run, &mut text);
                    }
                }
            }
            _ => {}
        }
    }
    text
}

fn push_run_text(run: &docx_rs::Run, out: &mut String) {
    for child in &run.children {
        if let docx_rs::RunChild::Text(t) = child {
            out.push_str(&t.text);
        }
    }
}

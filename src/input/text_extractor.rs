//! Text extraction from various file formats

use crate::error::{Result, ResumeParserError};
use pulldown_cmark::{Event, Parser, Tag};
use std::future::Future;
use std::path::Path;
use tokio::fs;

pub trait TextExtractor: Sync {
    /// Raw text from an in-memory document
    fn extract_bytes(&self, bytes: &[u8]) -> Result<String>;

    /// Raw text from a file. The file is read in one go and released before
    /// the bytes are parsed, whatever the outcome.
    fn extract(&self, path: &Path) -> impl Future<Output = Result<String>> + Send {
        async move {
            let bytes = fs::read(path).await?;
            self.extract_bytes(&bytes).map_err(|e| match e {
                ResumeParserError::PdfExtraction(msg) => ResumeParserError::PdfExtraction(format!(
                    "Failed to extract text from PDF '{}': {}",
                    path.display(),
                    msg
                )),
                ResumeParserError::DocxExtraction(msg) => ResumeParserError::DocxExtraction(
                    format!("Failed to extract text from DOCX '{}': {}", path.display(), msg),
                ),
                other => other,
            })
        }
    }
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    #[cfg(feature = "pdf")]
    fn extract_bytes(&self, bytes: &[u8]) -> Result<String> {
        pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| ResumeParserError::PdfExtraction(e.to_string()))
    }

    #[cfg(not(feature = "pdf"))]
    fn extract_bytes(&self, _bytes: &[u8]) -> Result<String> {
        Err(ResumeParserError::MissingCapability(
            "PDF support is not available; rebuild with the `pdf` feature".to_string(),
        ))
    }
}

pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    #[cfg(feature = "docx")]
    fn extract_bytes(&self, bytes: &[u8]) -> Result<String> {
        let docx = docx_rs::read_docx(bytes)
            .map_err(|e| ResumeParserError::DocxExtraction(e.to_string()))?;
        Ok(docx_text::document_text(&docx))
    }

    #[cfg(not(feature = "docx"))]
    fn extract_bytes(&self, _bytes: &[u8]) -> Result<String> {
        Err(ResumeParserError::MissingCapability(
            "DOCX support is not available; rebuild with the `docx` feature".to_string(),
        ))
    }
}

#[cfg(feature = "docx")]
mod docx_text {
    use docx_rs::{
        DocumentChild, Docx, Paragraph, ParagraphChild, Run, RunChild, Table, TableCellContent,
        TableChild, TableRowChild,
    };

    /// One line per paragraph, one line per table row with cells joined by " | "
    pub(super) fn document_text(docx: &Docx) -> String {
        let mut lines = Vec::new();
        for child in &docx.document.children {
            match child {
                DocumentChild::Paragraph(paragraph) => lines.push(paragraph_text(paragraph)),
                DocumentChild::Table(table) => table_lines(table, &mut lines),
                _ => {}
            }
        }
        lines.join("\n")
    }

    fn paragraph_text(paragraph: &Paragraph) -> String {
        let mut buffer = String::new();
        for child in &paragraph.children {
            paragraph_child_text(child, &mut buffer);
        }
        buffer
    }

    fn paragraph_child_text(child: &ParagraphChild, buffer: &mut String) {
        match child {
            ParagraphChild::Run(run) => run_text(run, buffer),
            ParagraphChild::Hyperlink(link) => {
                for link_child in &link.children {
                    paragraph_child_text(link_child, buffer);
                }
            }
            _ => {}
        }
    }

    fn run_text(run: &Run, buffer: &mut String) {
        for child in &run.children {
            match child {
                RunChild::Text(text) => buffer.push_str(&text.text),
                RunChild::Tab(_) => buffer.push('\t'),
                RunChild::Break(_) => buffer.push('\n'),
                _ => {}
            }
        }
    }

    fn table_lines(table: &Table, lines: &mut Vec<String>) {
        for row in &table.rows {
            let TableChild::TableRow(row) = row;
            let cells: Vec<String> = row
                .cells
                .iter()
                .map(|cell| {
                    let TableRowChild::TableCell(cell) = cell;
                    cell.children
                        .iter()
                        .filter_map(|content| match content {
                            TableCellContent::Paragraph(paragraph) => Some(paragraph_text(paragraph)),
                            _ => None,
                        })
                        .collect::<Vec<_>>()
                        .join(" ")
                })
                .filter(|text| !text.trim().is_empty())
                .collect();
            lines.push(cells.join(" | "));
        }
    }
}

/// UTF-8 text with invalid byte sequences dropped
fn decode_ignoring_invalid(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    /// Invalid UTF-8 sequences are skipped, never reported
    fn extract_bytes(&self, bytes: &[u8]) -> Result<String> {
        Ok(decode_ignoring_invalid(bytes))
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    fn extract_bytes(&self, bytes: &[u8]) -> Result<String> {
        let markdown = decode_ignoring_invalid(bytes);
        Ok(Self::markdown_to_text(&markdown))
    }
}

impl MarkdownExtractor {
    /// Drop markup, keep one line per block and render list items as "- "
    /// bullets. Link targets follow their text as "text (url)".
    pub fn markdown_to_text(markdown: &str) -> String {
        let mut text = String::new();
        let mut link_starts = Vec::new();

        for event in Parser::new(markdown) {
            match event {
                Event::Start(Tag::Item) => text.push_str("\n- "),
                Event::Start(Tag::Link(..)) => link_starts.push(text.len()),
                Event::End(Tag::Link(_, destination, _)) => {
                    let start = link_starts.pop().unwrap_or(text.len());
                    if !destination.is_empty() && text[start..] != *destination {
                        text.push_str(&format!(" ({})", destination));
                    }
                }
                Event::Text(content) | Event::Code(content) => text.push_str(&content),
                Event::SoftBreak | Event::HardBreak | Event::Rule => text.push('\n'),
                Event::End(tag) if Self::is_block(&tag) => text.push('\n'),
                _ => {}
            }
        }

        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn is_block(tag: &Tag<'_>) -> bool {
        matches!(
            tag,
            Tag::Paragraph
                | Tag::Heading(..)
                | Tag::Item
                | Tag::BlockQuote
                | Tag::CodeBlock(_)
                | Tag::TableRow
                | Tag::TableHead
        )
    }
}

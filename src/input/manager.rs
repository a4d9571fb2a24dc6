//! Input manager for handling different file types

use crate::error::{Result, ResumeParserError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{
    DocxExtractor, MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor,
};
use log::info;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub struct InputManager {
    cache: HashMap<PathBuf, String>,
    enable_cache: bool,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    /// Raw text of a résumé or job description file
    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        if self.enable_cache {
            if let Some(cached_text) = self.cache.get(path) {
                info!("Using cached text for: {}", path.display());
                return Ok(cached_text.clone());
            }
        }

        if !path.exists() {
            return Err(ResumeParserError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let file_type = FileType::from_path(path);
        let text = match file_type {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path).await?
            }
            FileType::Docx => {
                info!("Extracting text from DOCX: {}", path.display());
                DocxExtractor.extract(path).await?
            }
            FileType::Text => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path).await?
            }
            FileType::Markdown => {
                info!("Processing markdown file: {}", path.display());
                MarkdownExtractor.extract(path).await?
            }
            FileType::Doc => return Err(Self::legacy_doc_error()),
            FileType::Unknown => return Err(Self::unsupported_format_error(path)),
        };

        if self.enable_cache {
            self.cache.insert(path.to_path_buf(), text.clone());
        }

        Ok(text)
    }

    /// Raw text of an in-memory document with a declared type
    pub fn extract_from_bytes(bytes: &[u8], file_type: FileType) -> Result<String> {
        match file_type {
            FileType::Pdf => PdfExtractor.extract_bytes(bytes),
            FileType::Docx => DocxExtractor.extract_bytes(bytes),
            FileType::Text => PlainTextExtractor.extract_bytes(bytes),
            FileType::Markdown => MarkdownExtractor.extract_bytes(bytes),
            FileType::Doc => Err(Self::legacy_doc_error()),
            FileType::Unknown => Err(ResumeParserError::UnsupportedFormat(
                "Unsupported file type".to_string(),
            )),
        }
    }

    fn unsupported_format_error(path: &Path) -> ResumeParserError {
        let extension = path
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_else(|| "(none)".to_string());
        ResumeParserError::UnsupportedFormat(format!(
            "Unsupported file type {} for: {}",
            extension,
            path.display()
        ))
    }

    fn legacy_doc_error() -> ResumeParserError {
        ResumeParserError::UnsupportedLegacyFormat(
            ".doc not supported; please convert to .docx".to_string(),
        )
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

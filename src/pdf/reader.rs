use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::error::Error;

/// Extracts plain text from PDF bytes, one string per page in page order.
pub trait PageExtractor {
    fn extract_pages(&self, bytes: &[u8]) -> Result<Vec<String>>;
}

/// Page extraction backed by the `pdf-extract` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfExtract;

impl PageExtractor for PdfExtract {
    fn extract_pages(&self, bytes: &[u8]) -> Result<Vec<String>> {
        pdf_extract::extract_text_from_mem_by_pages(bytes).context("Failed to extract text from PDF")
    }
}

/// Reads a PDF file into one newline-joined document text.
pub struct DocumentReader<E = PdfExtract> {
    extractor: E,
}

impl DocumentReader {
    pub const fn new() -> Self {
        Self {
            extractor: PdfExtract,
        }
    }
}

impl Default for DocumentReader {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: PageExtractor> DocumentReader<E> {
    pub const fn with_extractor(extractor: E) -> Self {
        Self { extractor }
    }

    /// Reads `path` and joins the text of every page with `\n`.
    ///
    /// A document without any non-whitespace text is reported as
    /// [`Error::EmptyDocument`] rather than an empty success.
    pub fn read(&self, path: &Path) -> Result<String, Error> {
        let document_error = |source: anyhow::Error| Error::DocumentRead {
            path: path.to_path_buf(),
            source: source.into(),
        };

        let bytes = fs::read(path)
            .with_context(|| format!("Failed to open file: {}", path.display()))
            .map_err(document_error)?;

        let pages = self.extractor.extract_pages(&bytes).map_err(document_error)?;
        debug!(pages = pages.len(), bytes = bytes.len(), "extracted PDF pages");

        let text = pages.join("\n");
        if text.trim().is_empty() {
            return Err(Error::EmptyDocument {
                path: path.to_path_buf(),
            });
        }

        info!(pages = pages.len(), chars = text.chars().count(), "read document");
        Ok(text)
    }
}

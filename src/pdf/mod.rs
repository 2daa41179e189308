//! PDF text extraction.

mod reader;

pub use reader::{DocumentReader, PageExtractor, PdfExtract};

//! # pdf-translator - PDF Translation CLI
//!
//! `pdf-translator` extracts the text of a PDF document, translates it chunk by
//! chunk through an OpenAI-compatible chat endpoint, and writes the result to
//! a text file.
//!
//! ## Quick Start
//!
//! ```bash
//! # Translate to Chinese (default), writing translated_report.txt
//! pdf-translator report.pdf --api-key sk-...
//!
//! # Japanese, smaller chunks, explicit output
//! pdf-translator --pdf-path report.pdf --to ja --chunk-size 1000 -o out.txt
//! ```
//!
//! ## Configuration
//!
//! Every option can also come from the environment, optionally through a
//! `.env` file. Priority is CLI > environment > built-in default:
//!
//! ```text
//! PDFT_API_KEY=sk-...        # falls back to OPENAI_API_KEY
//! PDFT_MODEL=gpt-4o-mini
//! PDFT_CHUNK_SIZE=2000
//! PDFT_TO=zh
//! PDFT_ENDPOINT=https://api.openai.com
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Settings resolution.
pub mod config;

/// Error kinds for each stage of a run.
pub mod error;

/// Output file writing.
pub mod fs;

/// Global output configuration (quiet mode, colors).
pub mod output;

/// Path validation and default output naming.
pub mod paths;

/// PDF text extraction.
pub mod pdf;

/// Chunked translation over OpenAI-compatible APIs.
pub mod translation;

/// Terminal UI components (progress bar, colors).
pub mod ui;

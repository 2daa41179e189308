use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{DEFAULT_ENV_FILE, ResolveOptions};

#[derive(Parser, Debug)]
#[command(name = "pdf-translator")]
#[command(about = "Translate the text of a PDF document with an AI chat model")]
#[command(version)]
pub struct Args {
    /// PDF file to translate
    #[arg(value_name = "PDF", conflicts_with = "pdf_path")]
    pub file: Option<String>,

    /// PDF file to translate (alternative to the positional argument)
    #[arg(long)]
    pub pdf_path: Option<String>,

    /// Output file path (default: translated_<input>.txt next to the input)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Model name
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Maximum number of characters sent per request
    #[arg(long)]
    pub chunk_size: Option<usize>,

    /// API key for the chat endpoint
    #[arg(long)]
    pub api_key: Option<String>,

    /// Target language code (ISO 639-1, e.g., zh, ja, en)
    #[arg(short = 't', long = "to")]
    pub to: Option<String>,

    /// OpenAI-compatible API endpoint URL
    #[arg(short = 'e', long)]
    pub endpoint: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Dotenv file loaded before reading environment variables
    #[arg(long, default_value = DEFAULT_ENV_FILE)]
    pub env_file: PathBuf,

    /// Suppress progress and status output
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging on stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Args {
    /// CLI values that take part in settings resolution.
    pub fn resolve_options(&self) -> ResolveOptions {
        ResolveOptions {
            api_key: self.api_key.clone(),
            pdf_path: self.pdf_path.clone().or_else(|| self.file.clone()),
            chunk_size: self.chunk_size,
            model: self.model.clone(),
            output: self.output.clone(),
            to: self.to.clone(),
            endpoint: self.endpoint.clone(),
            timeout_secs: self.timeout,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List supported target language codes
    Languages,
}

use std::path::PathBuf;
use tracing::info;

use crate::config::Settings;
use crate::error::Result;
use crate::fs::write_output;
use crate::pdf::{DocumentReader, PageExtractor};
use crate::status;
use crate::translation::{ChatBackend, ChatClient, ChunkTranslator, ProgressObserver};
use crate::ui::{ChunkProgress, Style};

/// Runs the full pipeline against the real PDF extractor and chat endpoint.
///
/// Returns the path the translation was written to.
pub async fn run_translate(settings: &Settings) -> Result<PathBuf> {
    let client = ChatClient::new(settings)?;
    let reader = DocumentReader::new();
    let progress = ChunkProgress::new();

    let output_path = translate_document(settings, &reader, &client, &progress).await;
    progress.finish();
    output_path
}

/// Reads, translates and writes one document.
///
/// Stages run strictly in order and the first failure ends the run. Nothing
/// is written unless every chunk was translated.
pub async fn translate_document<E, B, O>(
    settings: &Settings,
    reader: &DocumentReader<E>,
    backend: &B,
    observer: &O,
) -> Result<PathBuf>
where
    E: PageExtractor,
    B: ChatBackend,
    O: ProgressObserver,
{
    status!(
        "{} {}",
        Style::label("Reading PDF:"),
        Style::value(settings.input_path.display())
    );
    let text = reader.read(&settings.input_path)?;

    status!("\nStarting translation...");
    status!("{} {}", Style::label("Using model:"), Style::value(&settings.model));
    status!(
        "{} {} characters",
        Style::label("Chunk size:"),
        Style::value(settings.chunk_size)
    );

    let translated = ChunkTranslator::new(backend, settings)
        .translate(&text, observer)
        .await?;

    status!("\nSaving translation...");
    let output_path = settings.output_path();
    write_output(&output_path, &translated)?;
    info!(path = %output_path.display(), "translation written");

    Ok(output_path)
}

use tracing::{debug, info};

use super::chunker::split_chunks;
use super::client::ChatBackend;
use super::language::language_name;
use super::message::ChatMessage;
use super::prompt::{build_chunk_prompt, build_system_prompt};
use crate::config::Settings;
use crate::error::{Error, Result};

/// Receives progress events while chunks are translated.
///
/// Indices are 1-based.
pub trait ProgressObserver {
    fn on_chunk_started(&self, _index: usize, _total: usize) {}

    fn on_chunk_translated(&self, index: usize, total: usize);
}

/// Translates document text chunk by chunk over one growing conversation.
///
/// Every request resends the system instruction plus all previous chunks and
/// their translations, so the model keeps terminology consistent across the
/// document. Chunk `i + 1` is only built once the reply to chunk `i` arrived.
pub struct ChunkTranslator<'a, B> {
    backend: &'a B,
    settings: &'a Settings,
}

impl<'a, B: ChatBackend> ChunkTranslator<'a, B> {
    pub const fn new(backend: &'a B, settings: &'a Settings) -> Self {
        Self { backend, settings }
    }

    /// Translates `text`, returning the chunk translations joined by `\n`.
    ///
    /// The first failing chunk aborts the whole run; translations gathered so
    /// far are dropped.
    pub async fn translate(
        &self,
        text: &str,
        observer: &impl ProgressObserver,
    ) -> Result<String> {
        if self.settings.api_key.trim().is_empty() {
            return Err(Error::NotConfigured);
        }

        let chunks = split_chunks(text, self.settings.chunk_size);
        let total = chunks.len();
        info!(chunks = total, chunk_size = self.settings.chunk_size, "starting translation");

        let target = language_name(&self.settings.target_language)
            .unwrap_or(self.settings.target_language.as_str());
        let mut messages = vec![ChatMessage::system(build_system_prompt(target))];
        let mut translations = Vec::with_capacity(total);

        for (i, chunk) in chunks.into_iter().enumerate() {
            let index = i + 1;
            observer.on_chunk_started(index, total);

            messages.push(ChatMessage::user(build_chunk_prompt(index, chunk)));

            let translation = self
                .backend
                .complete(&self.settings.model, &messages)
                .await
                .map_err(|e| Error::Translation {
                    index,
                    total,
                    source: e.into(),
                })?;

            debug!(index, total, chars = translation.chars().count(), "chunk translated");

            messages.push(ChatMessage::assistant(translation.clone()));
            translations.push(translation);

            observer.on_chunk_translated(index, total);
        }

        Ok(translations.join("\n"))
    }
}

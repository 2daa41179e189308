mod chunker;
mod client;
mod language;
mod message;
mod prompt;
mod translator;

pub use chunker::split_chunks;
pub use client::{ChatBackend, ChatClient};
pub use language::{
    DEFAULT_TARGET_LANGUAGE, SUPPORTED_LANGUAGES, language_name, print_languages,
    validate_language,
};
pub use message::{ChatMessage, Role};
pub use translator::{ChunkTranslator, ProgressObserver};

//! Subcommand implementations.

/// Translation pipeline handler.
pub mod translate;

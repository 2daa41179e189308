use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

use crate::output;
use crate::translation::ProgressObserver;

/// Console progress for chunk translation.
///
/// Draws a bar on stdout while a terminal is attached and prints a
/// `Translated chunk i/n` line as each chunk completes. The bar appears with
/// the first chunk and clears itself after the last one or when dropped.
pub struct ChunkProgress {
    progress_bar: ProgressBar,
}

impl ChunkProgress {
    #[allow(clippy::unwrap_used)]
    pub fn new() -> Self {
        let target = if output::is_quiet() {
            ProgressDrawTarget::hidden()
        } else {
            ProgressDrawTarget::stdout()
        };
        let progress_bar = ProgressBar::with_draw_target(None, target);
        // unwrap is safe: template string is a compile-time constant
        progress_bar.set_style(
            ProgressStyle::with_template("{spinner} [{bar:30}] {pos}/{len} {msg}")
                .unwrap()
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "✓"])
                .progress_chars("=> "),
        );

        Self { progress_bar }
    }

    pub fn finish(&self) {
        self.progress_bar.finish_and_clear();
    }
}

impl ProgressObserver for ChunkProgress {
    fn on_chunk_started(&self, index: usize, total: usize) {
        if index == 1 {
            self.progress_bar.set_length(total as u64);
            self.progress_bar
                .enable_steady_tick(Duration::from_millis(80));
        }
        self.progress_bar
            .set_message(format!("translating chunk {index}/{total}"));
    }

    fn on_chunk_translated(&self, index: usize, total: usize) {
        self.progress_bar.inc(1);
        let line = format!("Translated chunk {index}/{total}");
        if self.progress_bar.is_hidden() {
            crate::status!("{line}");
        } else {
            self.progress_bar.println(line);
        }
        if index == total {
            self.progress_bar.finish_and_clear();
        }
    }
}

impl Default for ChunkProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ChunkProgress {
    fn drop(&mut self) {
        self.progress_bar.finish_and_clear();
    }
}

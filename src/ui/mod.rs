//! Terminal UI components (progress bar, colors).

mod progress;
mod style;

pub use progress::ChunkProgress;
pub use style::Style;

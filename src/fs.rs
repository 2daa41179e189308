//! Output file writing.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::Error;

/// Writes content to a file atomically using a temp file and rename.
///
/// The temp file lives in the target's directory so the rename stays on one
/// filesystem. An interrupted run leaves either the old file or nothing, never
/// a truncated translation.
pub fn atomic_write(path: &Path, content: &str) -> io::Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path.file_name().unwrap_or_default().to_string_lossy();
    let temp_path = parent.join(format!(".{file_name}.tmp"));

    if let Err(e) = fs::write(&temp_path, content) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    fs::rename(&temp_path, path).inspect_err(|_| {
        let _ = fs::remove_file(&temp_path);
    })
}

/// Writes the translated text as UTF-8, creating or replacing `path`.
pub fn write_output(path: &Path, text: &str) -> Result<(), Error> {
    atomic_write(path, text).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}

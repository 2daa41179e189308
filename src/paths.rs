//! Path rules for input validation and default output naming.

use std::path::{Path, PathBuf};

/// Prefix inserted before the input stem when deriving the output file name.
pub const OUTPUT_PREFIX: &str = "translated_";

/// Extension of the derived output file.
pub const OUTPUT_EXTENSION: &str = "txt";

/// Returns `true` if the path names a PDF file (`.pdf` suffix).
pub fn is_pdf_path(path: &str) -> bool {
    path.ends_with(".pdf")
}

/// Derives the default output path for an input PDF.
///
/// The output sits next to the input and is named
/// `translated_<stem>.txt`:
///
/// - `report.pdf` → `translated_report.txt`
/// - `docs/paper.v2.pdf` → `docs/translated_paper.v2.txt`
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map_or_else(|| "output".into(), |s| s.to_string_lossy());
    let file_name = format!("{OUTPUT_PREFIX}{stem}.{OUTPUT_EXTENSION}");

    match input.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(file_name),
        _ => PathBuf::from(file_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path_bare_file() {
        assert_eq!(
            default_output_path(Path::new("report.pdf")),
            PathBuf::from("translated_report.txt")
        );
    }

    #[test]
    fn test_default_output_path_keeps_directory() {
        assert_eq!(
            default_output_path(Path::new("docs/papers/paper.v2.pdf")),
            PathBuf::from("docs/papers/translated_paper.v2.txt")
        );
    }

    #[test]
    fn test_default_output_path_absolute() {
        assert_eq!(
            default_output_path(Path::new("/tmp/in.pdf")),
            PathBuf::from("/tmp/translated_in.txt")
        );
    }

    #[test]
    fn test_is_pdf_path() {
        assert!(is_pdf_path("report.pdf"));
        assert!(is_pdf_path("dir/a.b.pdf"));
        assert!(!is_pdf_path("report.PDF")); // Case sensitive
        assert!(!is_pdf_path("report.txt"));
        assert!(!is_pdf_path("pdf"));
    }
}

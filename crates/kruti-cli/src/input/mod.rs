//! Input Adapter: one flattened logical string per document.
//!
//! The engine never sees container formats; this module extracts plain text
//! from `.txt`, `.docx` and `.pdf` files. Unknown formats are an explicit
//! error, never silent empty output.

mod docx;
mod pdf;

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("unsupported input format: {0}")]
    UnsupportedFormat(String),

    #[error("not valid UTF-8: {0}")]
    Utf8(String),

    #[error("DOCX error: {0}")]
    Docx(String),

    #[error("PDF error: {0}")]
    Pdf(String),
}

/// Extensions the adapter can flatten into text.
pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["txt", "docx", "pdf"];

pub fn is_supported(path: &Path) -> bool {
    extension_of(path).is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext.as_str()))
}

fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
}

/// Extract the document's logical text, dispatching on file extension.
///
/// Word-processor paragraphs are joined by newline; PDF page text is
/// concatenated in page order.
pub fn extract_text(path: &Path) -> Result<String, InputError> {
    let ext = extension_of(path)
        .ok_or_else(|| InputError::UnsupportedFormat(path.display().to_string()))?;
    debug!(path = %path.display(), ext = %ext, "extracting document text");
    match ext.as_str() {
        "txt" => read_txt(path),
        "docx" => docx::extract_text(path),
        "pdf" => pdf::extract_text(path),
        _ => Err(InputError::UnsupportedFormat(path.display().to_string())),
    }
}

fn read_txt(path: &Path) -> Result<String, InputError> {
    let bytes = fs::read(path)?;
    String::from_utf8(bytes).map_err(|e| InputError::Utf8(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_extensions() {
        assert!(is_supported(Path::new("a.txt")));
        assert!(is_supported(Path::new("b.DOCX")));
        assert!(is_supported(Path::new("c.pdf")));
        assert!(!is_supported(Path::new("d.log")));
        assert!(!is_supported(Path::new("noext")));
    }

    #[test]
    fn test_unsupported_is_explicit_error() {
        let err = extract_text(Path::new("report.odt")).unwrap_err();
        assert!(matches!(err, InputError::UnsupportedFormat(_)));

        let err = extract_text(Path::new("noext")).unwrap_err();
        assert!(matches!(err, InputError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_txt_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.txt");
        fs::write(&path, "fÆ क±\nदूसरी पंक्ति").unwrap();
        assert_eq!(extract_text(&path).unwrap(), "fÆ क±\nदूसरी पंक्ति");
    }

    #[test]
    fn test_txt_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.txt");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();
        let err = extract_text(&path).unwrap_err();
        assert!(matches!(err, InputError::Utf8(_)));
    }
}

//! PDF text extraction, concatenated in page order.

use std::path::Path;

use lopdf::Document;
use tracing::debug;

use super::InputError;

pub(super) fn extract_text(path: &Path) -> Result<String, InputError> {
    let document = Document::load(path)
        .map_err(|e| InputError::Pdf(format!("failed to open {}: {e}", path.display())))?;

    // get_pages keys are 1-indexed page numbers in a BTreeMap, so iteration
    // order is page order.
    let pages: Vec<u32> = document.get_pages().keys().copied().collect();
    debug!(path = %path.display(), pages = pages.len(), "PDF loaded");

    let mut text = String::new();
    for page in pages {
        let page_text = document
            .extract_text(&[page])
            .map_err(|e| InputError::Pdf(format!("page {page}: {e}")))?;
        text.push_str(&page_text);
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_pdf_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.pdf");
        std::fs::write(&path, "not a pdf").unwrap();

        let err = extract_text(&path).unwrap_err();
        assert!(matches!(err, InputError::Pdf(_)));
    }
}

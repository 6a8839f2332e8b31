//! DOCX text extraction.
//!
//! A `.docx` file is a ZIP container; the document text lives in
//! `word/document.xml` as `<w:t>` runs grouped into `<w:p>` paragraphs.
//! The runs carry plain character data with at most the five predefined XML
//! entities, so string scanning is enough here.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::InputError;

pub(super) fn extract_text(path: &Path) -> Result<String, InputError> {
    let file = File::open(path)?;
    let mut archive = zip::ZipArchive::new(file).map_err(|e| InputError::Docx(e.to_string()))?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| InputError::Docx(format!("word/document.xml: {e}")))?
        .read_to_string(&mut xml)?;

    Ok(paragraph_text(&xml))
}

/// Pull the run text out of the document XML, joining paragraphs with `\n`.
fn paragraph_text(xml: &str) -> String {
    let mut paragraphs: Vec<String> = Vec::new();
    for chunk in xml.split("</w:p>") {
        if !chunk.contains("<w:p>") && !chunk.contains("<w:p ") {
            continue;
        }
        let mut para = String::new();
        for segment in chunk.split("<w:t").skip(1) {
            // Only a real <w:t> or <w:t attr...> tag, not <w:tab/> etc.
            if !segment.starts_with('>') && !segment.starts_with(' ') {
                continue;
            }
            let Some(gt) = segment.find('>') else { continue };
            let rest = &segment[gt + 1..];
            let Some(end) = rest.find("</w:t>") else { continue };
            para.push_str(&decode_entities(&rest[..end]));
        }
        paragraphs.push(para);
    }
    paragraphs.join("\n")
}

fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

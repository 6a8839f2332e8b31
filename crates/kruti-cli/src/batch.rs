//! Directory and ZIP batch conversion.
//!
//! One independent engine call per document, no cross-document state: a
//! failing file is reported and the rest of the batch continues.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, warn};

use kruti_core::convert_to_bytes;

use crate::input::{self, InputError};

#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("ZIP error: {0}")]
    Zip(String),

    #[error("no convertible documents in {0}")]
    NoDocuments(String),
}

/// Outcome of one document in a batch run.
#[derive(Debug, Serialize)]
pub struct DocumentReport {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DocumentReport {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Convert every eligible document in `dir` (sorted by name), writing
/// `<stem>.txt` files under `out_dir`.
pub fn process_dir(dir: &Path, out_dir: &Path) -> Result<Vec<DocumentReport>, BatchError> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && input::is_supported(path))
        .collect();
    files.sort();

    if files.is_empty() {
        return Err(BatchError::NoDocuments(dir.display().to_string()));
    }

    fs::create_dir_all(out_dir)?;

    let mut reports = Vec::with_capacity(files.len());
    for path in files {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        match convert_document(&path, out_dir) {
            Ok(output) => {
                debug!(name = %name, output = %output.display(), "converted");
                reports.push(DocumentReport {
                    name,
                    output: Some(output),
                    error: None,
                });
            }
            Err(e) => {
                warn!(name = %name, error = %e, "skipping document");
                reports.push(DocumentReport {
                    name,
                    output: None,
                    error: Some(e.to_string()),
                });
            }
        }
    }
    Ok(reports)
}

fn convert_document(path: &Path, out_dir: &Path) -> Result<PathBuf, InputError> {
    let text = input::extract_text(path)?;
    let bytes = convert_to_bytes(&text);
    let stem = path.file_stem().unwrap_or_default().to_string_lossy();
    let out_path = out_dir.join(format!("{stem}.txt"));
    fs::write(&out_path, bytes)?;
    Ok(out_path)
}

/// Expand `zip_path` into a staging directory and run the directory batch
/// over the eligible entries. Entries are staged by basename only (zip-slip
/// safe); directories and ineligible entries are skipped.
pub fn process_zip(zip_path: &Path, out_dir: &Path) -> Result<Vec<DocumentReport>, BatchError> {
    let file = fs::File::open(zip_path)?;
    let mut archive = zip::ZipArchive::new(file).map_err(|e| BatchError::Zip(e.to_string()))?;

    let staging = tempfile::tempdir()?;
    let mut staged = 0usize;
    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .map_err(|e| BatchError::Zip(e.to_string()))?;
        if entry.is_dir() {
            continue;
        }
        let raw_name = entry.name().to_string();
        let Some(basename) = Path::new(&raw_name).file_name() else {
            continue;
        };
        let staged_path = staging.path().join(basename);
        if !input::is_supported(&staged_path) {
            continue;
        }
        let mut out = fs::File::create(&staged_path)?;
        io::copy(&mut entry, &mut out)?;
        staged += 1;
    }

    if staged == 0 {
        return Err(BatchError::NoDocuments(zip_path.display().to_string()));
    }

    process_dir(staging.path(), out_dir)
}

//! File ingestion and batch processing around the conversion engine.
//!
//! The engine (`kruti_core`) takes one flattened logical string per document;
//! this crate supplies it: per-format text extraction (`input`), independent
//! per-document batch runs over directories and ZIP archives (`batch`), and
//! the `kru2uni` binary.

pub mod batch;
pub mod input;

//! Corpus loading from a directory of JSON documents.
//!
//! Every `*.json` file holds either one source document object or an array of
//! them. Malformed entries and unreadable files are logged and skipped; if no
//! document survives, the built-in seed corpus is used instead.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use super::models::SourceDocument;
use super::{PassageIndex, seed_index};
use crate::text::ChunkingConfig;
use crate::{KnowledgeError, Result};

/// Outcome of a corpus load
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadReport {
    pub files_read: usize,
    pub documents_loaded: usize,
    pub documents_skipped: usize,
    pub used_seed: bool,
}

/// Build a passage index from `corpus_dir`, falling back to the seed corpus
#[inline]
pub fn load_corpus(
    corpus_dir: &Path,
    chunking: ChunkingConfig,
) -> Result<(PassageIndex, LoadReport)> {
    let mut report = LoadReport::default();
    let mut index = PassageIndex::with_chunking(chunking);

    if corpus_dir.is_dir() {
        for path in list_json_files(corpus_dir)? {
            let entries = match read_entries(&path) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!("Skipping corpus file {}: {:#}", path.display(), e);
                    continue;
                }
            };
            report.files_read += 1;

            for (position, entry) in entries.into_iter().enumerate() {
                let ingested = serde_json::from_value::<SourceDocument>(entry)
                    .map_err(|e| KnowledgeError::Ingestion(e.to_string()))
                    .and_then(|document| index.ingest(document).map(|_| ()));

                match ingested {
                    Ok(()) => report.documents_loaded += 1,
                    Err(e) => {
                        warn!(
                            "Skipping document #{} in {}: {}",
                            position,
                            path.display(),
                            e
                        );
                        report.documents_skipped += 1;
                    }
                }
            }
        }
    } else {
        info!("Corpus directory {} not found", corpus_dir.display());
    }

    if report.documents_loaded == 0 {
        info!("No corpus documents loaded, using built-in seed corpus");
        index = seed_index(chunking)?;
        report.documents_loaded = index.documents().len();
        report.used_seed = true;
    }

    let stats = index.stats();
    info!(
        "Corpus ready: {} documents, {} passages, {} categories ({} skipped)",
        stats.document_count, stats.passage_count, stats.category_count, report.documents_skipped
    );

    Ok((index, report))
}

/// `*.json` files directly inside `dir`, sorted by path
fn list_json_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read corpus directory: {}", dir.display()))?;

    for entry in entries {
        let path = entry?.path();
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if path.is_file() && is_json {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// Raw document entries of one corpus file
fn read_entries(path: &Path) -> anyhow::Result<Vec<Value>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read corpus file: {}", path.display()))?;
    let value: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse corpus file: {}", path.display()))?;

    match value {
        Value::Array(entries) => Ok(entries),
        Value::Object(_) => Ok(vec![value]),
        other => anyhow::bail!(
            "expected a document object or array, found {}",
            json_kind(&other)
        ),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

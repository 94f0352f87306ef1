
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Terminator appended after every sentence segment
const SEGMENT_TERMINATOR: &str = ". ";

/// Configuration for passage chunking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkingConfig {
    /// Maximum passage length in characters before a new passage is started
    pub max_length: usize,
    /// Number of trailing characters of a closed passage carried into the next one
    pub overlap: usize,
}

impl Default for ChunkingConfig {
    #[inline]
    fn default() -> Self {
        Self {
            max_length: 500,
            overlap: 50,
        }
    }
}

/// Split a document body into ordered, overlapping passages.
///
/// The body is cut into sentence segments on `.`, `!` and `?` (delimiters are
/// dropped and replaced by a synthetic `". "`). Segments accumulate until the
/// next one would push the buffer past `max_length`; the buffer is then closed
/// and the next passage starts with the last `overlap` characters of the closed
/// passage. A single segment longer than `max_length` is kept whole.
#[inline]
pub fn chunk_text(body: &str, config: &ChunkingConfig) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for segment in split_segments(body) {
        let segment_len = segment.chars().count();

        if current_len + segment_len > config.max_length && !current.is_empty() {
            let closed = current.trim_end().to_string();
            let overlap_text = tail_chars(&closed, config.overlap);

            current = if overlap_text.is_empty() {
                format!("{}{}", segment, SEGMENT_TERMINATOR)
            } else {
                format!("{} {}{}", overlap_text, segment, SEGMENT_TERMINATOR)
            };
            chunks.push(closed);
        } else {
            current.push_str(segment);
            current.push_str(SEGMENT_TERMINATOR);
        }

        current_len = current.chars().count();
    }

    let trailing = current.trim_end();
    if !trailing.trim_start().is_empty() {
        chunks.push(trailing.to_string());
    }

    debug!(
        "Chunked {} chars into {} passages (max_length {}, overlap {})",
        body.chars().count(),
        chunks.len(),
        config.max_length,
        config.overlap
    );

    chunks
}

/// Split text into trimmed, non-empty sentence segments
fn split_segments(body: &str) -> impl Iterator<Item = &str> {
    body.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
}

/// The last `count` characters of `text`
fn tail_chars(text: &str, count: usize) -> &str {
    let skip = text.chars().count().saturating_sub(count);
    text.char_indices()
        .nth(skip)
        .and_then(|(idx, _)| text.get(idx..))
        .unwrap_or_default()
}

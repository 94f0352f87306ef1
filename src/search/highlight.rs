//! Query term highlighting.
//!
//! Produces a structured match list per query term; passage text itself is
//! never rewritten.

use fancy_regex::Regex;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::Result;

/// Matches of one query term inside a passage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub term: String,
    pub count: usize,
    /// Character offsets of each match start
    pub offsets: Vec<usize>,
}

/// Case-insensitive whole-word matches of each distinct term in `text`.
///
/// Terms without matches are left out.
#[inline]
pub fn compute_highlights<S: AsRef<str>>(text: &str, terms: &[S]) -> Result<Vec<Highlight>> {
    let mut highlights = Vec::new();

    for term in terms.iter().map(AsRef::<str>::as_ref).unique() {
        let offsets = match_offsets(text, term)?;
        if !offsets.is_empty() {
            highlights.push(Highlight {
                term: term.to_string(),
                count: offsets.len(),
                offsets,
            });
        }
    }

    Ok(highlights)
}

fn match_offsets(text: &str, term: &str) -> Result<Vec<usize>> {
    if term.is_empty() {
        return Ok(Vec::new());
    }

    // Case folding never maps `İ` to `i`, so accept it explicitly
    let escaped = fancy_regex::escape(term).replace('i', "[iİ]");
    let pattern = Regex::new(&format!(r"(?i)\b{}\b", escaped))?;
    let mut offsets = Vec::new();

    for found in pattern.find_iter(text) {
        let found = found?;
        let offset = text
            .get(..found.start())
            .map_or(0, |prefix| prefix.chars().count());
        offsets.push(offset);
    }

    Ok(offsets)
}

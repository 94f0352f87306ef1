//! Answer context assembly.
//!
//! Gathers the best passages for a question into a single context string for
//! a downstream generator. No text is generated here.

use serde::{Deserialize, Serialize};

use super::{SearchOptions, SearchResult, search};
use crate::Result;
use crate::index::PassageIndex;

pub const ANSWER_MAX_RESULTS: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerContext {
    pub context_text: String,
    pub search_results: Vec<SearchResult>,
    pub has_relevant_info: bool,
}

/// Assemble context for `question` from the top three passages
#[inline]
pub fn answer<S: AsRef<str>>(
    index: &PassageIndex,
    question: &str,
    supplementary: &[S],
) -> Result<AnswerContext> {
    answer_with_limit(index, question, supplementary, ANSWER_MAX_RESULTS)
}

/// Assemble context for `question` from at most `max_results` passages.
///
/// Passage bodies are joined by blank lines; supplementary lines follow after
/// one more blank line, joined by single newlines.
#[inline]
pub fn answer_with_limit<S: AsRef<str>>(
    index: &PassageIndex,
    question: &str,
    supplementary: &[S],
    max_results: usize,
) -> Result<AnswerContext> {
    let options = SearchOptions::default().with_max_results(max_results);
    let search_results = search(index, question, &options)?;

    let passages = search_results
        .iter()
        .map(|result| result.passage.content.as_str())
        .collect::<Vec<_>>()
        .join("\n\n");
    let extra = supplementary
        .iter()
        .map(AsRef::<str>::as_ref)
        .collect::<Vec<_>>()
        .join("\n");

    let context_text = match (passages.is_empty(), supplementary.is_empty()) {
        (_, true) => passages,
        (true, false) => extra,
        (false, false) => format!("{}\n\n{}", passages, extra),
    };

    Ok(AnswerContext {
        has_relevant_info: !search_results.is_empty(),
        context_text,
        search_results,
    })
}

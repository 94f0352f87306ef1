// Retrieval module
// Scores passages against a query and assembles answer context

pub mod answer;
pub mod highlight;


use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::index::{Passage, PassageIndex};
use crate::text::{cosine_similarity, tokenize, vectorize};
use crate::{KnowledgeError, Result};

pub use answer::{AnswerContext, answer};
pub use highlight::{Highlight, compute_highlights};

pub const DEFAULT_MAX_RESULTS: usize = 5;
pub const DEFAULT_MIN_SCORE: f64 = 0.1;

/// Filters and limits applied to a search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Restrict to passages of exactly this category
    pub category: Option<String>,
    pub max_results: usize,
    /// Passages scoring below this are dropped
    pub min_score: f64,
}

impl Default for SearchOptions {
    #[inline]
    fn default() -> Self {
        Self {
            category: None,
            max_results: DEFAULT_MAX_RESULTS,
            min_score: DEFAULT_MIN_SCORE,
        }
    }
}

impl SearchOptions {
    #[inline]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[inline]
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    #[inline]
    pub fn with_min_score(mut self, min_score: f64) -> Self {
        self.min_score = min_score;
        self
    }
}

/// A scored passage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub passage_id: String,
    pub passage: Passage,
    pub score: f64,
    pub highlights: Vec<Highlight>,
}

/// Reject blank queries before any work is done
#[inline]
pub fn validate_query(query: &str) -> Result<()> {
    if query.trim().is_empty() {
        return Err(KnowledgeError::Validation(
            "query cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Rank indexed passages by cosine similarity to `query`.
///
/// Results below `min_score` are dropped, the rest are sorted by descending
/// score (ties keep index order) and truncated to `max_results`.
#[inline]
pub fn search(
    index: &PassageIndex,
    query: &str,
    options: &SearchOptions,
) -> Result<Vec<SearchResult>> {
    validate_query(query)?;

    let query_terms = tokenize(query);
    let query_vector = vectorize(&query_terms);

    let mut scored: Vec<(&Passage, f64)> = index
        .passages()
        .iter()
        .filter(|passage| {
            options
                .category
                .as_deref()
                .is_none_or(|category| passage.category == category)
        })
        .map(|passage| (passage, cosine_similarity(&query_vector, &passage.vector)))
        .filter(|(_, score)| *score >= options.min_score)
        .collect();

    scored.sort_by(|(_, a), (_, b)| b.total_cmp(a));
    scored.truncate(options.max_results);

    let results = scored
        .into_iter()
        .map(|(passage, score)| {
            Ok(SearchResult {
                passage_id: passage.id.clone(),
                highlights: compute_highlights(&passage.content, &query_terms)?,
                passage: passage.clone(),
                score,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(
        "Search '{}' (category {:?}) matched {} passages",
        query,
        options.category,
        results.len()
    );

    Ok(results)
}

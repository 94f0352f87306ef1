//! Knowledge base lifecycle.
//!
//! A [`KnowledgeBase`] is constructed explicitly at startup and handed to its
//! callers. It starts uninitialized; loading a corpus builds a complete
//! [`PassageIndex`] off to the side and publishes it by swapping an `Arc`, so
//! readers only ever see a fully built generation. Queries issued before the
//! first load fail with [`KnowledgeError::NotInitialized`].


use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use tracing::info;

use crate::config::Config;
use crate::index::{IndexStats, LoadReport, Passage, PassageIndex, load_corpus};
use crate::search::answer::{ANSWER_MAX_RESULTS, answer_with_limit};
use crate::search::{AnswerContext, SearchOptions, SearchResult, search, validate_query};
use crate::{KnowledgeError, Result};

pub struct KnowledgeBase {
    current: RwLock<Option<Arc<PassageIndex>>>,
    generation: AtomicU64,
    answer_max_results: usize,
}

impl Default for KnowledgeBase {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl KnowledgeBase {
    /// Create an uninitialized knowledge base
    #[inline]
    pub fn new() -> Self {
        Self {
            current: RwLock::new(None),
            generation: AtomicU64::new(0),
            answer_max_results: ANSWER_MAX_RESULTS,
        }
    }

    /// Create a knowledge base serving an already built index
    #[inline]
    pub fn from_index(index: PassageIndex) -> Self {
        let knowledge = Self::new();
        knowledge.install(index);
        knowledge
    }

    /// Create and load a knowledge base from configuration
    #[inline]
    pub fn from_config(config: &Config) -> Result<(Self, LoadReport)> {
        let knowledge = Self::new().with_answer_max_results(config.search.answer_max_results);
        let report = knowledge.reload(config)?;
        Ok((knowledge, report))
    }

    #[inline]
    pub fn with_answer_max_results(mut self, answer_max_results: usize) -> Self {
        self.answer_max_results = answer_max_results;
        self
    }

    /// Build a fresh index from the configured corpus and swap it in
    #[inline]
    pub fn reload(&self, config: &Config) -> Result<LoadReport> {
        let (index, report) = load_corpus(&config.corpus_dir(), config.chunking)?;
        self.install(index);
        Ok(report)
    }

    /// Publish `index` as the current generation, returning its number
    #[inline]
    pub fn install(&self, index: PassageIndex) -> u64 {
        let index = Arc::new(index);
        let mut current = self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *current = Some(index);
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        drop(current);

        info!("Installed knowledge index generation {}", generation);
        generation
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Number of indexes installed so far
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// The current index generation
    #[inline]
    pub fn snapshot(&self) -> Result<Arc<PassageIndex>> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .ok_or(KnowledgeError::NotInitialized)
    }

    #[inline]
    pub fn search(&self, query: &str, options: &SearchOptions) -> Result<Vec<SearchResult>> {
        validate_query(query)?;
        let index = self.snapshot()?;
        search(&index, query, options)
    }

    #[inline]
    pub fn answer<S: AsRef<str>>(&self, question: &str, context: &[S]) -> Result<AnswerContext> {
        validate_query(question)?;
        let index = self.snapshot()?;
        answer_with_limit(&index, question, context, self.answer_max_results)
    }

    #[inline]
    pub fn categories(&self) -> Result<Vec<String>> {
        Ok(self.snapshot()?.categories())
    }

    /// Passages of `category`; an unknown category yields an empty list
    #[inline]
    pub fn passages_by_category(&self, category: &str) -> Result<Vec<Passage>> {
        Ok(self
            .snapshot()?
            .passages_by_category(category)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Passages of `category`, failing with `NotFound` when there are none
    #[inline]
    pub fn require_category(&self, category: &str) -> Result<Vec<Passage>> {
        let passages = self.passages_by_category(category)?;
        if passages.is_empty() {
            return Err(KnowledgeError::NotFound(format!(
                "category '{}'",
                category
            )));
        }
        Ok(passages)
    }

    #[inline]
    pub fn stats(&self) -> Result<IndexStats> {
        Ok(self.snapshot()?.stats())
    }
}

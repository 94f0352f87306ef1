
use chrono::{DateTime, Utc};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::text::TermVector;
use crate::{KnowledgeError, Result};

/// Source document as supplied by an external corpus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDocument {
    pub title: String,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
}

/// An ingested knowledge unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub title: String,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub passage_count: usize,
}

/// A bounded slice of a document, the unit of retrieval
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Passage {
    pub id: String,
    pub document_id: String,
    pub title: String,
    pub category: String,
    pub tags: Vec<String>,
    pub index: usize,
    pub content: String,
    #[serde(skip)]
    pub vector: TermVector,
}

/// Corpus-level counters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndexStats {
    pub document_count: usize,
    pub passage_count: usize,
    pub category_count: usize,
    pub avg_passages_per_document: f64,
}

impl SourceDocument {
    #[inline]
    pub fn new(title: &str, content: &str, category: &str, tags: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            content: content.to_string(),
            category: category.to_string(),
            tags: tags.iter().map(|t| (*t).to_string()).collect(),
        }
    }

    /// Reject documents that cannot form a meaningful index entry
    #[inline]
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(KnowledgeError::Ingestion(
                "document title cannot be empty".to_string(),
            ));
        }

        if self.category.trim().is_empty() {
            return Err(KnowledgeError::Ingestion(format!(
                "document '{}' has an empty category",
                self.title
            )));
        }

        if self.content.trim().is_empty() {
            return Err(KnowledgeError::Ingestion(format!(
                "document '{}' has no content",
                self.title
            )));
        }

        Ok(())
    }

    /// Tags trimmed, blanks dropped, duplicates removed keeping first occurrence
    #[inline]
    pub fn normalized_tags(&self) -> Vec<String> {
        self.tags
            .iter()
            .map(|tag| tag.trim())
            .filter(|tag| !tag.is_empty())
            .unique()
            .map(str::to_string)
            .collect()
    }
}

impl Passage {
    /// Passage identifiers are derived from the owning document and ordinal
    #[inline]
    pub fn make_id(document_id: &str, index: usize) -> String {
        format!("{}_chunk_{}", document_id, index)
    }
}

impl IndexStats {
    #[inline]
    pub fn new(document_count: usize, passage_count: usize, category_count: usize) -> Self {
        let avg_passages_per_document = if document_count == 0 {
            0.0
        } else {
            passage_count as f64 / document_count as f64
        };

        Self {
            document_count,
            passage_count,
            category_count,
            avg_passages_per_document,
        }
    }
}

// Passage index module
// Owns the corpus: documents, their passages and each passage's term vector

pub mod loader;
pub mod models;
pub mod seed;


use std::collections::HashMap;

use chrono::Utc;
use itertools::Itertools;
use tracing::debug;
use uuid::Uuid;

use crate::text::{ChunkingConfig, chunk_text, tokenize, vectorize};
use crate::{KnowledgeError, Result};

pub use loader::{LoadReport, load_corpus};
pub use models::{Document, IndexStats, Passage, SourceDocument};
pub use seed::seed_documents;

/// In-memory corpus of documents and their derived passages.
///
/// Documents and passages live in two owned tables; passages refer back to
/// their document by id only.
#[derive(Debug, Clone, Default)]
pub struct PassageIndex {
    documents: Vec<Document>,
    passages: Vec<Passage>,
    document_positions: HashMap<String, usize>,
    passage_positions: HashMap<String, usize>,
    chunking: ChunkingConfig,
}

impl PassageIndex {
    /// Create an empty index with default chunking
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty index that chunks documents with `chunking`
    #[inline]
    pub fn with_chunking(chunking: ChunkingConfig) -> Self {
        Self {
            chunking,
            ..Self::default()
        }
    }

    #[inline]
    pub fn chunking(&self) -> &ChunkingConfig {
        &self.chunking
    }

    /// Chunk, vectorize and store a document.
    ///
    /// Re-ingesting the same source creates a second document with fresh
    /// identifiers; there is no deduplication.
    #[inline]
    pub fn ingest(&mut self, source: SourceDocument) -> Result<&Document> {
        source.validate()?;

        let chunks = chunk_text(&source.content, &self.chunking);
        if chunks.is_empty() {
            return Err(KnowledgeError::Ingestion(format!(
                "document '{}' produced no passages",
                source.title
            )));
        }

        let document_id = Uuid::new_v4().to_string();
        let passage_count = chunks.len();
        let tags = source.normalized_tags();
        let title = source.title.trim().to_string();
        let category = source.category.trim().to_string();

        for (index, content) in chunks.into_iter().enumerate() {
            let vector = vectorize(&tokenize(&content));
            let passage = Passage {
                id: Passage::make_id(&document_id, index),
                document_id: document_id.clone(),
                title: title.clone(),
                category: category.clone(),
                tags: tags.clone(),
                index,
                content,
                vector,
            };
            self.passage_positions
                .insert(passage.id.clone(), self.passages.len());
            self.passages.push(passage);
        }

        debug!(
            "Ingested document '{}' ({}) into {} passages",
            title, category, passage_count
        );

        let document = Document {
            id: document_id.clone(),
            title,
            content: source.content,
            category,
            tags,
            created_at: Utc::now(),
            passage_count,
        };
        let position = self.documents.len();
        self.document_positions.insert(document_id, position);
        self.documents.push(document);

        Ok(&self.documents[position])
    }

    /// Distinct categories across stored passages, in first-seen order
    #[inline]
    pub fn categories(&self) -> Vec<String> {
        self.passages
            .iter()
            .map(|p| p.category.as_str())
            .unique()
            .map(str::to_string)
            .collect()
    }

    /// Passages whose category equals `category`, in insertion order
    #[inline]
    pub fn passages_by_category(&self, category: &str) -> Vec<&Passage> {
        self.passages
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    #[inline]
    pub fn stats(&self) -> IndexStats {
        IndexStats::new(
            self.documents.len(),
            self.passages.len(),
            self.categories().len(),
        )
    }

    #[inline]
    pub fn document(&self, id: &str) -> Option<&Document> {
        self.document_positions
            .get(id)
            .and_then(|&position| self.documents.get(position))
    }

    #[inline]
    pub fn passage(&self, id: &str) -> Option<&Passage> {
        self.passage_positions
            .get(id)
            .and_then(|&position| self.passages.get(position))
    }

    #[inline]
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    #[inline]
    pub fn passages(&self) -> &[Passage] {
        &self.passages
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// Build an index from the built-in seed corpus
#[inline]
pub fn seed_index(chunking: ChunkingConfig) -> Result<PassageIndex> {
    let mut index = PassageIndex::with_chunking(chunking);
    for document in seed_documents() {
        index.ingest(document)?;
    }
    Ok(index)
}

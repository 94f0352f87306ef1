// Text processing module
// Tokenization, passage segmentation and term weighting

pub mod chunking;
pub mod tokenizer;
pub mod weights;

pub use chunking::{ChunkingConfig, chunk_text};
pub use tokenizer::tokenize;
pub use weights::{TermVector, cosine_similarity, vectorize};

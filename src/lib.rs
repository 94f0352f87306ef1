use thiserror::Error;

pub type Result<T> = std::result::Result<T, KnowledgeError>;

#[derive(Error, Debug)]
pub enum KnowledgeError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Knowledge base is not initialized; load a corpus before querying")]
    NotInitialized,

    #[error("Ingestion error: {0}")]
    Ingestion(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Highlight pattern error: {0}")]
    Highlight(#[from] fancy_regex::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

pub mod commands;
pub mod config;
pub mod index;
pub mod knowledge;
pub mod search;
pub mod text;

//! Crate-level error types.

use thiserror::Error;

use crate::persistence::PersistenceError;
use crate::{DocId, TopicId};

/// Errors surfaced by topic model loading and queries.
#[derive(Debug, Error)]
pub enum TopicModelError {
    /// Missing or malformed configuration (detected before any model I/O).
    #[error("configuration error: {0}")]
    Config(String),

    /// Checkpoint file could not be written, found, or decoded.
    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    /// Document id past the end of the document-topic table.
    #[error("document id {doc_id} out of bounds (model has {num_docs} documents)")]
    DocIdOutOfBounds { doc_id: DocId, num_docs: usize },

    /// Topic id past the end of the topic-term table.
    #[error("topic id {topic_id} out of bounds (model has {num_topics} topics)")]
    TopicIdOutOfBounds { topic_id: TopicId, num_topics: usize },
}

/// Result type for topic model operations.
pub type Result<T> = std::result::Result<T, TopicModelError>;

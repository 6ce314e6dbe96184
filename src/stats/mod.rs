//! Probability primitives shared by training and query sides.

mod multinomial;

pub use multinomial::Multinomial;

/// Per-topic distributions over vocabulary terms ("phi").
///
/// Invariant: `topics.len() == num_topics`; every row is a distribution
/// over term ids `[0, num_words)`.
#[derive(Debug, Clone, PartialEq)]
pub struct TopicTermTable {
    /// Declared vocabulary size. Rows may be shorter when trailing
    /// probabilities are zero; lookups past a row's support read as 0.
    pub num_words: u64,
    /// One distribution per topic, indexed by topic id.
    pub topics: Vec<Multinomial>,
}

impl TopicTermTable {
    pub fn num_topics(&self) -> usize {
        self.topics.len()
    }
}

/// Per-document distributions over topics ("theta").
///
/// Invariant: `docs.len() == num_docs`; every row is a distribution over
/// topic ids `[0, num_topics)`.
#[derive(Debug, Clone, PartialEq)]
pub struct DocTopicTable {
    /// Declared topic count, mirrored from the phi header for symmetry.
    pub num_topics: u64,
    /// One distribution per document, indexed by document id.
    pub docs: Vec<Multinomial>,
}

impl DocTopicTable {
    pub fn num_docs(&self) -> usize {
        self.docs.len()
    }
}

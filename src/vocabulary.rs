//! Term text resolution.
//!
//! The vocabulary belongs to the host system's forward index; the query
//! engine only holds a shared read-only handle to it and never enumerates
//! or mutates it.

use std::io::{BufRead, BufReader, Read};

use crate::TermId;

/// Resolves term identifiers to display text.
///
/// `None` means the id has no known surface form; callers substitute empty
/// text rather than failing the query.
pub trait Vocabulary: Send + Sync {
    fn term_text(&self, term: TermId) -> Option<String>;
}

/// In-memory vocabulary where the term id is the position in the list.
#[derive(Debug, Clone, Default)]
pub struct VecVocabulary {
    terms: Vec<String>,
}

impl VecVocabulary {
    pub fn new(terms: Vec<String>) -> Self {
        Self { terms }
    }

    /// Read one term per line, line number = term id.
    pub fn from_lines<R: Read>(reader: R) -> std::io::Result<Self> {
        let terms = BufReader::new(reader)
            .lines()
            .collect::<std::io::Result<Vec<_>>>()?;
        Ok(Self { terms })
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl Vocabulary for VecVocabulary {
    fn term_text(&self, term: TermId) -> Option<String> {
        self.terms.get(term as usize).cloned()
    }
}

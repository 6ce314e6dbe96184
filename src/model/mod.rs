//! Read-only query engine over a loaded checkpoint pair.

pub mod topk;

use std::io::Read;
use std::sync::Arc;

use tracing::info;

use crate::config::LdaConfig;
use crate::error::{Result, TopicModelError};
use crate::persistence::{codec, CheckpointStore, Label};
use crate::progress::{LogProgress, Progress};
use crate::stats::Multinomial;
use crate::vocabulary::Vocabulary;
use crate::{DocId, TermId, TopicId};

use topk::TopK;

/// Number of terms [`TopicModel::top_terms`] returns.
pub const DEFAULT_TOP_K: usize = 10;

/// A vocabulary term with its probability under some topic.
///
/// `text` is empty when the vocabulary cannot resolve the id; the id is
/// still returned so callers can fall back to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    pub id: TermId,
    pub text: String,
    pub probability: f64,
}

/// A topic with its probability under some document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Topic {
    pub id: TopicId,
    pub probability: f64,
}

/// Immutable query surface over one loaded snapshot pair.
///
/// Owns both in-memory tables exclusively and holds a shared handle to the
/// external vocabulary for term text resolution. No method mutates state,
/// so one instance can serve concurrent readers without locking.
pub struct TopicModel {
    vocabulary: Arc<dyn Vocabulary>,
    num_topics: usize,
    num_words: usize,
    num_docs: usize,
    phi: Vec<Multinomial>,
    theta: Vec<Multinomial>,
}

impl std::fmt::Debug for TopicModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TopicModel")
            .field("num_topics", &self.num_topics)
            .field("num_words", &self.num_words)
            .field("num_docs", &self.num_docs)
            .field("phi", &self.phi)
            .field("theta", &self.theta)
            .finish_non_exhaustive()
    }
}

impl TopicModel {
    /// Decode a model from open theta/phi streams.
    ///
    /// Phi is decoded first (it declares `num_topics` and `num_words`),
    /// then theta. Fails without constructing anything if either stream is
    /// truncated or unreadable.
    pub fn load<T: Read, P: Read>(
        theta: T,
        phi: P,
        vocabulary: Arc<dyn Vocabulary>,
        progress: Option<&dyn Progress>,
    ) -> Result<Self> {
        Self::load_named(
            theta,
            phi,
            "document topic probabilities",
            "topic term probabilities",
            vocabulary,
            progress,
        )
    }

    /// Resolve and decode the snapshot named by an `[lda]` configuration.
    pub fn from_config(config: &LdaConfig, vocabulary: Arc<dyn Vocabulary>) -> Result<Self> {
        let store = CheckpointStore::new(&config.model_prefix);
        let label = Label::from(config.result_file.as_str());
        let (theta, phi) = store.resolve(&label)?;

        let progress = LogProgress::new("checkpoint records");
        let model = Self::load_named(
            theta,
            phi,
            &store.theta_path(&label).display().to_string(),
            &store.phi_path(&label).display().to_string(),
            vocabulary,
            Some(&progress),
        )?;
        info!(
            label = %label,
            topics = model.num_topics,
            words = model.num_words,
            docs = model.num_docs,
            "topic model loaded"
        );
        Ok(model)
    }

    fn load_named<T: Read, P: Read>(
        mut theta: T,
        mut phi: P,
        theta_name: &str,
        phi_name: &str,
        vocabulary: Arc<dyn Vocabulary>,
        progress: Option<&dyn Progress>,
    ) -> Result<Self> {
        let phi_table = codec::read_topic_term(&mut phi, phi_name, progress)?;
        let theta_table = codec::read_doc_topic(&mut theta, theta_name, progress)?;

        Ok(Self {
            vocabulary,
            num_topics: phi_table.num_topics(),
            num_words: phi_table.num_words as usize,
            num_docs: theta_table.num_docs(),
            phi: phi_table.topics,
            theta: theta_table.docs,
        })
    }

    pub fn num_topics(&self) -> usize {
        self.num_topics
    }

    pub fn num_words(&self) -> usize {
        self.num_words
    }

    pub fn num_docs(&self) -> usize {
        self.num_docs
    }

    /// The stored topic distribution of one document.
    pub fn topic_distribution(&self, doc: DocId) -> Result<&Multinomial> {
        self.theta
            .get(usize::try_from(doc).unwrap_or(usize::MAX))
            .ok_or(TopicModelError::DocIdOutOfBounds {
                doc_id: doc,
                num_docs: self.num_docs,
            })
    }

    /// The topic distribution of one document as `(topic, probability)`
    /// entries in ascending topic id order.
    pub fn topics(&self, doc: DocId) -> Result<Vec<Topic>> {
        let dist = self.topic_distribution(doc)?;
        Ok((0..self.num_topics as TopicId)
            .map(|id| Topic {
                id,
                probability: dist.probability(id),
            })
            .collect())
    }

    /// P(term | topic). Returns 0 (not an error) for a term id past the
    /// distribution's support; sparse producers may omit zero outcomes.
    pub fn term_probability(&self, topic: TopicId, term: TermId) -> Result<f64> {
        Ok(self.topic_term(topic)?.probability(term))
    }

    /// P(topic | doc), symmetric to [`Self::term_probability`].
    pub fn topic_probability(&self, doc: DocId, topic: TopicId) -> Result<f64> {
        if usize::try_from(topic).map_or(true, |t| t >= self.num_topics) {
            return Err(TopicModelError::TopicIdOutOfBounds {
                topic_id: topic,
                num_topics: self.num_topics,
            });
        }
        Ok(self.topic_distribution(doc)?.probability(topic))
    }

    /// Up to `k` terms with highest probability under the topic, descending
    /// by probability, ties by ascending term id. `k` past the vocabulary
    /// size returns all terms sorted.
    pub fn top_k(&self, topic: TopicId, k: usize) -> Result<Vec<Term>> {
        let dist = self.topic_term(topic)?;

        let mut selector = TopK::new(k.min(self.num_words));
        for term in 0..self.num_words as TermId {
            selector.push(term, dist.probability(term));
        }

        Ok(selector
            .into_sorted()
            .into_iter()
            .map(|(id, probability)| Term {
                id,
                text: self.vocabulary.term_text(id).unwrap_or_default(),
                probability,
            })
            .collect())
    }

    /// [`Self::top_k`] with the default k of 10.
    pub fn top_terms(&self, topic: TopicId) -> Result<Vec<Term>> {
        self.top_k(topic, DEFAULT_TOP_K)
    }

    fn topic_term(&self, topic: TopicId) -> Result<&Multinomial> {
        self.phi
            .get(usize::try_from(topic).unwrap_or(usize::MAX))
            .ok_or(TopicModelError::TopicIdOutOfBounds {
                topic_id: topic,
                num_topics: self.num_topics,
            })
    }
}

//! Capability interface for inference strategies.
//!
//! Concrete samplers (serial/parallel Gibbs, CVB, SCVB0) live with the
//! host training system; this crate consumes the distributions they
//! converge on. The default methods materialize those distributions into
//! tables and hand them to the checkpoint store, so any implementation
//! gets the snapshot lifecycle for free.

use crate::error::Result;
use crate::persistence::{CheckpointStore, Label};
use crate::stats::{DocTopicTable, Multinomial, TopicTermTable};
use crate::{DocId, TermId, TopicId};

pub trait Inference {
    /// Advance the sampler by up to `iterations` sweeps. May stop early on
    /// convergence; the criterion belongs to the implementation.
    fn run(&mut self, iterations: u64) -> Result<()>;

    /// P(term | topic) under the current state.
    fn term_topic_probability(&self, term: TermId, topic: TopicId) -> f64;

    /// P(topic | doc) under the current state.
    fn doc_topic_probability(&self, doc: DocId, topic: TopicId) -> f64;

    fn num_topics(&self) -> usize;

    fn num_words(&self) -> usize;

    fn num_docs(&self) -> usize;

    /// Materialize the per-topic term distributions for checkpointing.
    fn topic_term_table(&self) -> TopicTermTable {
        let num_words = self.num_words() as u64;
        let topics = (0..self.num_topics() as TopicId)
            .map(|topic| {
                Multinomial::new(
                    (0..num_words)
                        .map(|term| self.term_topic_probability(term, topic))
                        .collect(),
                )
            })
            .collect();
        TopicTermTable { num_words, topics }
    }

    /// Materialize the per-document topic distributions for checkpointing.
    fn doc_topic_table(&self) -> DocTopicTable {
        let num_topics = self.num_topics() as u64;
        let docs = (0..self.num_docs() as DocId)
            .map(|doc| {
                Multinomial::new(
                    (0..num_topics)
                        .map(|topic| self.doc_topic_probability(doc, topic))
                        .collect(),
                )
            })
            .collect();
        DocTopicTable { num_topics, docs }
    }

    /// Write the current state as a labeled snapshot.
    fn save(&self, store: &CheckpointStore, label: &Label) -> Result<()> {
        store.write(label, &self.doc_topic_table(), &self.topic_term_table())?;
        Ok(())
    }
}

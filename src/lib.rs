//! topica: checkpoint persistence and read-only queries for topic models.
//!
//! A topic model trained by iterative inference (Gibbs sampling, collapsed
//! variational Bayes, ...) boils down to two large probability tables:
//!
//! - **phi**: per-topic distributions over vocabulary terms
//! - **theta**: per-document distributions over topics
//!
//! This crate owns the lifecycle of those tables once inference has produced
//! them:
//!
//! - `stats/`: the [`stats::Multinomial`] distribution and the two tables
//! - `persistence/`: the binary checkpoint codec and the on-disk snapshot
//!   store (`<prefix>/<label>.theta.bin` + `<prefix>/<label>.phi.bin`)
//! - `model/`: the immutable [`TopicModel`] query engine (top-k terms,
//!   per-document topic distributions, point probabilities)
//! - `inference`: the capability trait concrete samplers implement; the
//!   samplers themselves live with the host training system
//!
//! A loaded [`TopicModel`] never mutates after construction and is safe to
//! share across threads for concurrent read-only queries.

pub mod config;
pub mod error;
pub mod inference;
pub mod model;
pub mod persistence;
pub mod progress;
pub mod stats;
pub mod vocabulary;

pub use error::{Result, TopicModelError};
pub use model::{Term, Topic, TopicModel};

/// Identifier of a latent topic, dense in `[0, num_topics)`.
pub type TopicId = u64;

/// Identifier of a vocabulary term, dense in `[0, num_words)`.
pub type TermId = u64;

/// Identifier of a document, dense in `[0, num_docs)`.
pub type DocId = u64;

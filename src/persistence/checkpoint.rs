//! Snapshot naming and on-disk lifecycle for trained models.

use std::fmt;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::persistence::codec;
use crate::persistence::error::{PersistenceError, PersistenceResult};
use crate::stats::{DocTopicTable, TopicTermTable};

/// Logical name of one snapshot under the model prefix directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Label {
    /// The snapshot written when training completes.
    Final,
    /// A periodic snapshot taken after the given training iteration.
    Iteration(u64),
    /// A caller-chosen name.
    Named(String),
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Final => write!(f, "final"),
            Label::Iteration(n) => write!(f, "results-{n}"),
            Label::Named(name) => write!(f, "{name}"),
        }
    }
}

impl From<&str> for Label {
    fn from(name: &str) -> Self {
        match name {
            "final" => Label::Final,
            other => Label::Named(other.to_string()),
        }
    }
}

/// Maps snapshot labels to theta/phi file pairs under one directory.
///
/// The store reacts only to explicit `write`/`resolve` calls; the
/// save-period policy that decides *when* to snapshot belongs to the
/// training driver.
#[derive(Debug, Clone)]
pub struct CheckpointStore {
    prefix: PathBuf,
}

impl CheckpointStore {
    pub fn new(prefix: impl Into<PathBuf>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &Path {
        &self.prefix
    }

    /// Path of the document-topic file for a label.
    pub fn theta_path(&self, label: &Label) -> PathBuf {
        self.prefix.join(format!("{label}.theta.bin"))
    }

    /// Path of the topic-term file for a label.
    pub fn phi_path(&self, label: &Label) -> PathBuf {
        self.prefix.join(format!("{label}.phi.bin"))
    }

    /// Whether both files of the pair exist.
    pub fn exists(&self, label: &Label) -> bool {
        self.theta_path(label).exists() && self.phi_path(label).exists()
    }

    /// Write both tables under the given label, creating the prefix
    /// directory if absent.
    ///
    /// Not transactional: a crash between the theta and phi writes leaves
    /// a mismatched pair on disk.
    pub fn write(
        &self,
        label: &Label,
        theta: &DocTopicTable,
        phi: &TopicTermTable,
    ) -> PersistenceResult<()> {
        fs::create_dir_all(&self.prefix)?;

        let theta_path = self.theta_path(label);
        let mut theta_file = BufWriter::new(File::create(&theta_path)?);
        codec::write_doc_topic(&mut theta_file, theta)?;
        theta_file.flush()?;
        debug!(path = %theta_path.display(), docs = theta.num_docs(), "wrote document topic probabilities");

        let phi_path = self.phi_path(label);
        let mut phi_file = BufWriter::new(File::create(&phi_path)?);
        codec::write_topic_term(&mut phi_file, phi)?;
        phi_file.flush()?;
        debug!(path = %phi_path.display(), topics = phi.num_topics(), "wrote topic term probabilities");

        info!(label = %label, prefix = %self.prefix.display(), "checkpoint written");
        Ok(())
    }

    /// Open the `(theta, phi)` readers for a label.
    ///
    /// Fails before any decoding if either file is absent; the error names
    /// every missing path.
    pub fn resolve(&self, label: &Label) -> PersistenceResult<(BufReader<File>, BufReader<File>)> {
        let theta_path = self.theta_path(label);
        let phi_path = self.phi_path(label);

        let missing: Vec<PathBuf> = [&theta_path, &phi_path]
            .into_iter()
            .filter(|p| !p.exists())
            .cloned()
            .collect();
        if !missing.is_empty() {
            return Err(PersistenceError::MissingFiles { paths: missing });
        }

        let theta = BufReader::new(File::open(&theta_path)?);
        let phi = BufReader::new(File::open(&phi_path)?);
        Ok((theta, phi))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::Multinomial;
    use tempfile::TempDir;

    fn sample_pair() -> (DocTopicTable, TopicTermTable) {
        let theta = DocTopicTable {
            num_topics: 2,
            docs: vec![
                Multinomial::new(vec![0.9, 0.1]),
                Multinomial::new(vec![0.2, 0.8]),
            ],
        };
        let phi = TopicTermTable {
            num_words: 3,
            topics: vec![
                Multinomial::new(vec![0.5, 0.3, 0.2]),
                Multinomial::new(vec![0.1, 0.2, 0.7]),
            ],
        };
        (theta, phi)
    }

    #[test]
    fn label_file_names() {
        let store = CheckpointStore::new("/models/lda");
        assert_eq!(
            store.theta_path(&Label::Final),
            PathBuf::from("/models/lda/final.theta.bin")
        );
        assert_eq!(
            store.phi_path(&Label::Iteration(12)),
            PathBuf::from("/models/lda/results-12.phi.bin")
        );
        assert_eq!(
            store.phi_path(&Label::Named("best".to_string())),
            PathBuf::from("/models/lda/best.phi.bin")
        );
    }

    #[test]
    fn label_from_str() {
        assert_eq!(Label::from("final"), Label::Final);
        assert_eq!(Label::from("best"), Label::Named("best".to_string()));
    }

    #[test]
    fn write_creates_prefix_directory() {
        let dir = TempDir::new().unwrap();
        let prefix = dir.path().join("nested").join("lda-model");
        let store = CheckpointStore::new(&prefix);

        let (theta, phi) = sample_pair();
        store.write(&Label::Final, &theta, &phi).unwrap();

        assert!(store.exists(&Label::Final));
        assert!(prefix.join("final.theta.bin").is_file());
        assert!(prefix.join("final.phi.bin").is_file());
    }

    #[test]
    fn resolve_roundtrip() {
        let dir = TempDir::new().unwrap();
        let store = CheckpointStore::new(dir.path());

        let (theta, phi) = sample_pair();
        store.write(&Label::Iteration(3), &theta, &phi).unwrap();

        let (mut theta_in, mut phi_in) = store.resolve(&Label::Iteration(3)).unwrap();
        let theta_back = codec::read_doc_topic(&mut theta_in, "theta", None).unwrap();
        let phi_back = codec::read_topic_term(&mut phi_in, "phi", None).unwrap();
        assert_eq!(theta_back, theta);
        assert_eq!(phi_back, phi);
    }

    #[test]
    fn resolve_names_missing_theta_path() {
        let dir = TempDir::new().unwrap();
        let store = CheckpointStore::new(dir.path());

        let (theta, phi) = sample_pair();
        store.write(&Label::Final, &theta, &phi).unwrap();
        fs::remove_file(store.theta_path(&Label::Final)).unwrap();

        let err = store.resolve(&Label::Final).unwrap_err();
        match err {
            PersistenceError::MissingFiles { paths } => {
                assert_eq!(paths, vec![store.theta_path(&Label::Final)]);
            }
            other => panic!("expected MissingFiles, got {other:?}"),
        }
    }

    #[test]
    fn resolve_names_both_paths_when_both_absent() {
        let dir = TempDir::new().unwrap();
        let store = CheckpointStore::new(dir.path());

        let err = store.resolve(&Label::Final).unwrap_err();
        match err {
            PersistenceError::MissingFiles { paths } => {
                assert_eq!(
                    paths,
                    vec![
                        store.theta_path(&Label::Final),
                        store.phi_path(&Label::Final)
                    ]
                );
                let message = format!(
                    "{}",
                    PersistenceError::MissingFiles { paths }
                );
                assert!(message.contains("final.theta.bin"));
                assert!(message.contains("final.phi.bin"));
            }
            other => panic!("expected MissingFiles, got {other:?}"),
        }
    }
}

//! Configuration surface: the `[lda]` table of a TOML config file.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, TopicModelError};

/// Training and snapshot settings read from the `[lda]` table.
///
/// Only `model-prefix` is required. The hyperparameters are carried as
/// snapshot metadata for the training side; the query engine needs just
/// the prefix and the result-file label.
#[derive(Debug, Clone, Deserialize)]
pub struct LdaConfig {
    /// Directory holding the snapshot files.
    #[serde(rename = "model-prefix")]
    pub model_prefix: PathBuf,

    /// Snapshot label to load, e.g. "final" or "results-12".
    #[serde(rename = "result-file", default = "default_result_file")]
    pub result_file: String,

    #[serde(default = "default_topics")]
    pub topics: u64,

    #[serde(default = "default_alpha")]
    pub alpha: f64,

    #[serde(default = "default_beta")]
    pub beta: f64,

    #[serde(rename = "max-iters", default)]
    pub max_iters: Option<u64>,

    /// Snapshot every N iterations; defaults to never.
    #[serde(rename = "save-period", default = "default_save_period")]
    pub save_period: u64,

    #[serde(default)]
    pub seed: Option<u64>,

    /// Inference method name ("gibbs", "pargibbs", "cvb", "scvb");
    /// interpreted by the training driver, opaque here.
    #[serde(default)]
    pub inference: Option<String>,
}

fn default_result_file() -> String {
    "final".to_string()
}

fn default_topics() -> u64 {
    10
}

fn default_alpha() -> f64 {
    0.1
}

fn default_beta() -> f64 {
    0.1
}

fn default_save_period() -> u64 {
    u64::MAX
}

impl LdaConfig {
    /// Parse the `[lda]` table out of a full configuration document.
    /// `source` names the document in error messages.
    pub fn from_toml_str(raw: &str, source: &str) -> Result<Self> {
        let value: toml::Value = toml::from_str(raw)
            .map_err(|e| TopicModelError::Config(format!("cannot parse {source}: {e}")))?;

        let lda = value.get("lda").ok_or_else(|| {
            TopicModelError::Config(format!("missing [lda] configuration group in {source}"))
        })?;

        // Checked explicitly so the error names the key, not a serde path.
        if lda.get("model-prefix").is_none() {
            return Err(TopicModelError::Config(format!(
                "missing model-prefix key in {source}"
            )));
        }

        lda.clone()
            .try_into()
            .map_err(|e| TopicModelError::Config(format!("invalid [lda] table in {source}: {e}")))
    }

    /// Read and parse a configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            TopicModelError::Config(format!(
                "cannot read configuration file {}: {e}",
                path.display()
            ))
        })?;
        Self::from_toml_str(&raw, &path.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_table() {
        let cfg = LdaConfig::from_toml_str(
            r#"
            [lda]
            model-prefix = "/models/lda"
            result-file = "results-12"
            topics = 25
            alpha = 0.5
            beta = 0.01
            max-iters = 1000
            save-period = 100
            seed = 42
            inference = "gibbs"
            "#,
            "test.toml",
        )
        .unwrap();

        assert_eq!(cfg.model_prefix, PathBuf::from("/models/lda"));
        assert_eq!(cfg.result_file, "results-12");
        assert_eq!(cfg.topics, 25);
        assert_eq!(cfg.alpha, 0.5);
        assert_eq!(cfg.beta, 0.01);
        assert_eq!(cfg.max_iters, Some(1000));
        assert_eq!(cfg.save_period, 100);
        assert_eq!(cfg.seed, Some(42));
        assert_eq!(cfg.inference.as_deref(), Some("gibbs"));
    }

    #[test]
    fn defaults_apply() {
        let cfg = LdaConfig::from_toml_str(
            "[lda]\nmodel-prefix = \"lda-model\"\n",
            "test.toml",
        )
        .unwrap();
        assert_eq!(cfg.result_file, "final");
        assert_eq!(cfg.topics, 10);
        assert_eq!(cfg.alpha, 0.1);
        assert_eq!(cfg.beta, 0.1);
        assert_eq!(cfg.max_iters, None);
        assert_eq!(cfg.save_period, u64::MAX);
        assert_eq!(cfg.seed, None);
    }

    #[test]
    fn missing_group_is_config_error() {
        let err = LdaConfig::from_toml_str("[index]\npath = \"x\"\n", "conf.toml").unwrap_err();
        match err {
            TopicModelError::Config(message) => {
                assert!(message.contains("[lda]"));
                assert!(message.contains("conf.toml"));
            }
            other => panic!("expected Config, got {other:?}"),
        }
    }

    #[test]
    fn missing_prefix_is_config_error() {
        let err = LdaConfig::from_toml_str("[lda]\ntopics = 5\n", "conf.toml").unwrap_err();
        match err {
            TopicModelError::Config(message) => {
                assert!(message.contains("model-prefix"));
            }
            other => panic!("expected Config, got {other:?}"),
        }
    }
}

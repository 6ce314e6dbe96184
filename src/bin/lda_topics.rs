//! Print the highest-probability terms of each topic in a saved model.
//!
//! Reads the `[lda]` table of the given configuration file, resolves the
//! configured snapshot, and writes the top 10 terms per topic to stdout.
//! Exits 0 on success, 1 with a message on stderr when the configuration
//! is incomplete or the snapshot files are absent or corrupt.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::warn;

use topica::config::LdaConfig;
use topica::model::DEFAULT_TOP_K;
use topica::vocabulary::{VecVocabulary, Vocabulary};
use topica::TopicModel;

#[derive(Parser, Debug)]
#[command(name = "lda-topics", about = "Show top terms per topic of a saved LDA model")]
struct Cli {
    /// TOML configuration file with an [lda] table
    config: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli) -> topica::Result<()> {
    let config = LdaConfig::from_file(&cli.config)?;
    let vocabulary = load_vocabulary(&config);
    let model = TopicModel::from_config(&config, vocabulary)?;

    for topic in 0..model.num_topics() as u64 {
        println!("Topic {topic}:");
        for term in model.top_k(topic, DEFAULT_TOP_K)? {
            let text = if term.text.is_empty() {
                term.id.to_string()
            } else {
                term.text
            };
            println!("  {text} ({:.6})", term.probability);
        }
        println!();
    }
    Ok(())
}

/// Best-effort vocabulary: `<model-prefix>/vocab.txt` with one term per
/// line if present, otherwise term ids are printed bare.
fn load_vocabulary(config: &LdaConfig) -> Arc<dyn Vocabulary> {
    let path = config.model_prefix.join("vocab.txt");
    if !path.exists() {
        return Arc::new(VecVocabulary::default());
    }
    match std::fs::File::open(&path).and_then(VecVocabulary::from_lines) {
        Ok(vocab) => Arc::new(vocab),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "cannot read vocabulary, printing term ids");
            Arc::new(VecVocabulary::default())
        }
    }
}

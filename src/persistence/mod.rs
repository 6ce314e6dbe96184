//! Disk persistence for topic model checkpoints.
//!
//! A snapshot is a labeled pair of binary files under the model prefix
//! directory:
//!
//! ```text
//! <prefix>/
//! ├── final.theta.bin        # document-topic table
//! ├── final.phi.bin          # topic-term table
//! ├── results-100.theta.bin  # periodic snapshot after iteration 100
//! └── results-100.phi.bin
//! ```
//!
//! The codec is deterministic and detects truncated input; writing the two
//! files of a pair is **not** transactional. A crash between the theta and
//! phi writes leaves a mismatched pair, and concurrent write/resolve calls
//! against one label must be serialized by the caller.

pub mod checkpoint;
pub mod codec;
pub mod error;

pub use checkpoint::{CheckpointStore, Label};
pub use error::{PersistenceError, PersistenceResult};

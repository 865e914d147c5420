//! sr_io — the engine's only I/O crate.
//!
//! - `loader`: dataset JSON reading with structural shape checks
//! - `canonical_json`: sorted-key compact bytes and atomic file writes
//! - `hasher`: SHA-256 hex digests over bytes, files, and canonical values
//!
//! Shared error type (`IoError`) with `From` conversions used across modules.

#![forbid(unsafe_code)]

use sr_core::errors::InvalidInputError;
use thiserror::Error;

pub mod canonical_json;
pub mod hasher;
pub mod loader;

/// Unified error for sr_io.
#[derive(Debug, Error)]
pub enum IoError {
    /// Filesystem / path errors (open, create_dir_all, rename, fsync, …).
    #[error("io/path error: {0}")]
    Path(String),

    /// JSON (de)serialization errors with a JSON-Pointer-ish location hint.
    #[error("json error at {pointer}: {msg}")]
    Json { pointer: String, msg: String },

    /// Structural shape defect of the dataset container.
    #[error(transparent)]
    Shape(#[from] InvalidInputError),
}

pub type IoResult<T> = Result<T, IoError>;

impl From<std::io::Error> for IoError {
    fn from(e: std::io::Error) -> Self {
        IoError::Path(e.to_string())
    }
}

impl From<serde_json::Error> for IoError {
    fn from(e: serde_json::Error) -> Self {
        // serde_json does not keep a pointer; report root and let callers
        // enrich at higher layers.
        IoError::Json {
            pointer: "/".to_string(),
            msg: e.to_string(),
        }
    }
}

pub mod prelude {
    //! Lightweight re-exports so downstream crates can do `use sr_io::prelude::*`.

    pub use crate::canonical_json::{to_canonical_bytes, write_canonical_file};
    pub use crate::hasher::{sha256_canonical, sha256_file, sha256_hex};
    pub use crate::loader::{dataset_from_slice, dataset_from_str, load_dataset};
    pub use crate::{IoError, IoResult};
}

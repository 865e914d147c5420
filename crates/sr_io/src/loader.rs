//! Dataset loading: parse → shape check → typed.
//!
//! The shape check runs on the raw `serde_json::Value` so that "missing
//! container", "collection absent", and "collection not an array" surface as
//! the engine's own `InvalidInputError` defects rather than opaque serde
//! messages. Emptiness is left to the pipeline's validate stage; record-level
//! malformations are tolerated per the permissive-skip policy.

use std::fs;
use std::path::Path;

use serde_json::Value;
use sr_core::entities::Dataset;
use sr_core::errors::{Collection, InputDefect, InvalidInputError};

use crate::{IoError, IoResult};

const COLLECTIONS: [Collection; 3] = [
    Collection::Sellers,
    Collection::Products,
    Collection::PurchaseRecords,
];

/// Read and shape-check a dataset file.
pub fn load_dataset<P: AsRef<Path>>(path: P) -> IoResult<Dataset> {
    let bytes = fs::read(path.as_ref())?;
    dataset_from_slice(&bytes)
}

/// Parse and shape-check a dataset from raw bytes.
pub fn dataset_from_slice(bytes: &[u8]) -> IoResult<Dataset> {
    let root: Value = serde_json::from_slice(bytes)?;
    dataset_from_value(root)
}

/// Parse and shape-check a dataset from a string.
pub fn dataset_from_str(s: &str) -> IoResult<Dataset> {
    let root: Value = serde_json::from_str(s)?;
    dataset_from_value(root)
}

/// Shape-check an already-parsed JSON value, then deserialize it.
pub fn dataset_from_value(root: Value) -> IoResult<Dataset> {
    check_shape(&root)?;
    let dataset: Dataset = serde_json::from_value(root)?;
    Ok(dataset)
}

/// Structural checks the typed model cannot express: object root, and each
/// collection key present as an array.
fn check_shape(root: &Value) -> Result<(), InvalidInputError> {
    let Some(obj) = root.as_object() else {
        return Err(InvalidInputError::new(InputDefect::MissingContainer));
    };
    for collection in COLLECTIONS {
        match obj.get(collection.key()) {
            Some(Value::Array(_)) => {}
            _ => {
                return Err(InvalidInputError::new(InputDefect::NotASequence(
                    collection,
                )))
            }
        }
    }
    Ok(())
}

//! Immutable, shareable collection of decoded train records.

use std::ops::Deref;
use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::domain::TrainRecord;

use super::convert::decode_records;
use super::error::{DecodeError, LoadError};

/// The decoded dataset.
///
/// Records are stored behind an `Arc<[TrainRecord]>`: cloning a `Dataset`
/// is cheap and never copies records, and since nothing can mutate the
/// slice after construction, any number of queries may read it at once.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Arc<[TrainRecord]>,
}

impl Dataset {
    /// Build a dataset from already-decoded records.
    pub fn from_records(records: Vec<TrainRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    /// Decode a dataset from raw JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, DecodeError> {
        decode_records(bytes).map(Self::from_records)
    }

    /// Read and decode a dataset file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let dataset = Self::from_slice(&bytes)?;
        info!(path = %path.display(), records = dataset.len(), "loaded dataset");
        Ok(dataset)
    }

    /// Returns the records in dataset order.
    pub fn records(&self) -> &[TrainRecord] {
        &self.records
    }
}

impl Deref for Dataset {
    type Target = [TrainRecord];

    fn deref(&self) -> &Self::Target {
        &self.records
    }
}

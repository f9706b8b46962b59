//! Data model for the precomputed vector index

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A single passage of the corpus with its precomputed embedding
///
/// The serde field names match the persisted index file: an array of objects
/// with a `text` string and a `values` array of floats.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorRecord {
    pub text: String,
    pub values: Vec<f32>,
}

/// The immutable in-memory corpus index
///
/// Construction validates the structural invariants once, so every consumer
/// can rely on a non-empty index with one uniform embedding dimensionality.
/// Record order is preserved from the index file and never changes within a
/// process lifetime, which keeps ranking tie-breaks deterministic.
#[derive(Debug, Clone)]
pub struct VectorIndex {
    records: Vec<VectorRecord>,
    dimension: usize,
}

impl VectorIndex {
    /// Build an index from decoded records, validating structural invariants
    pub fn new(records: Vec<VectorRecord>) -> Result<Self> {
        let first = records
            .first()
            .ok_or_else(|| Error::IndexUnavailable("index contains no records".to_string()))?;

        let dimension = first.values.len();
        if dimension == 0 {
            return Err(Error::IndexUnavailable(
                "index records have zero-dimensional embeddings".to_string(),
            ));
        }

        for (i, record) in records.iter().enumerate() {
            if record.values.len() != dimension {
                return Err(Error::IndexUnavailable(format!(
                    "record {} has dimension {}, expected {}",
                    i,
                    record.values.len(),
                    dimension
                )));
            }
        }

        Ok(Self { records, dimension })
    }

    /// Records in their original file order
    pub fn records(&self) -> &[VectorRecord] {
        &self.records
    }

    /// Embedding dimensionality shared by all records
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of indexed passages
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// A passage scored against one query, produced fresh per query
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredMatch {
    pub text: String,
    pub score: f32,
}

//! Index loading and process-wide caching

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::OnceCell;

use dqa_core::{Error, Result, VectorIndex, VectorRecord};

/// Loads the serialized index from disk once and caches it for the process
/// lifetime
///
/// The cache is populated at most once even under concurrent first access:
/// `OnceCell::get_or_try_init` runs a single read while other callers wait,
/// and all of them converge on the same `Arc` or the same failure. A failed
/// read leaves the cell empty, so a later call retries the read after the
/// operator has repaired the index file.
pub struct IndexLoader {
    path: PathBuf,
    cache: OnceCell<Arc<VectorIndex>>,
}

impl IndexLoader {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            cache: OnceCell::new(),
        }
    }

    /// Return the cached index, reading it from disk on first use
    pub async fn load(&self) -> Result<Arc<VectorIndex>> {
        let index = self.cache.get_or_try_init(|| self.read_index()).await?;
        Ok(Arc::clone(index))
    }

    async fn read_index(&self) -> Result<Arc<VectorIndex>> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            Error::IndexUnavailable(format!("cannot read {}: {e}", self.path.display()))
        })?;

        // Anything other than an array of {text, values} objects is a
        // malformed index, reported up front instead of failing mid-ranking.
        let records: Vec<VectorRecord> = serde_json::from_str(&raw).map_err(|e| {
            Error::IndexUnavailable(format!("malformed index {}: {e}", self.path.display()))
        })?;

        let index = VectorIndex::new(records)?;
        tracing::info!(
            records = index.len(),
            dimension = index.dimension(),
            path = %self.path.display(),
            "loaded vector index"
        );

        Ok(Arc::new(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn index_file(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_load_valid_index() {
        let file = index_file(
            r#"[
                {"text": "first passage", "values": [1.0, 0.0]},
                {"text": "second passage", "values": [0.0, 1.0]}
            ]"#,
        );

        let loader = IndexLoader::new(file.path());
        let index = loader.load().await.unwrap();

        assert_eq!(index.len(), 2);
        assert_eq!(index.dimension(), 2);
    }

    #[tokio::test]
    async fn test_missing_file_is_unavailable() {
        let dir = TempDir::new().unwrap();
        let loader = IndexLoader::new(dir.path().join("nope.json"));

        let err = loader.load().await.unwrap_err();
        assert!(matches!(err, Error::IndexUnavailable(_)));
    }

    #[tokio::test]
    async fn test_malformed_json_is_unavailable() {
        let file = index_file("{ not json");
        let loader = IndexLoader::new(file.path());

        let err = loader.load().await.unwrap_err();
        assert!(matches!(err, Error::IndexUnavailable(_)));
    }

    #[tokio::test]
    async fn test_non_array_top_level_is_unavailable() {
        let file = index_file(r#"{"text": "a", "values": [1.0]}"#);
        let loader = IndexLoader::new(file.path());

        let err = loader.load().await.unwrap_err();
        assert!(matches!(err, Error::IndexUnavailable(_)));
    }

    #[tokio::test]
    async fn test_empty_array_is_unavailable() {
        let file = index_file("[]");
        let loader = IndexLoader::new(file.path());

        let err = loader.load().await.unwrap_err();
        assert!(matches!(err, Error::IndexUnavailable(_)));
    }

    #[tokio::test]
    async fn test_repeated_loads_share_the_cached_index() {
        let file = index_file(r#"[{"text": "a", "values": [1.0, 0.0]}]"#);
        let loader = IndexLoader::new(file.path());

        let first = loader.load().await.unwrap();
        let second = loader.load().await.unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn test_concurrent_first_loads_share_the_cached_index() {
        let file = index_file(r#"[{"text": "a", "values": [1.0, 0.0]}]"#);
        let loader = Arc::new(IndexLoader::new(file.path()));

        let (a, b) = tokio::join!(loader.load(), loader.load());
        assert!(Arc::ptr_eq(&a.unwrap(), &b.unwrap()));
    }

    #[tokio::test]
    async fn test_failed_load_retries_after_repair() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("database.json");
        let loader = IndexLoader::new(&path);

        assert!(loader.load().await.is_err());

        std::fs::write(&path, r#"[{"text": "a", "values": [1.0]}]"#).unwrap();
        let index = loader.load().await.unwrap();
        assert_eq!(index.len(), 1);
    }
}

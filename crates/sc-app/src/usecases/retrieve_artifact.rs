use std::sync::Arc;

use sc_core::artifact::{ArtifactRecord, BlobTag, RetrieveError};
use sc_core::ids::FileId;
use sc_core::ports::{ArtifactRepositoryPort, BlobStorePort};
use tracing::warn;

/// A successfully resolved artifact: the metadata record plus the transformed
/// bytes exactly as the codec produced them at ingestion time.
#[derive(Debug, Clone)]
pub struct RetrievedArtifact {
    pub record: ArtifactRecord,
    pub bytes: Vec<u8>,
}

/// Resolve a `file_id` to its stored transformed artifact.
pub struct RetrieveArtifactUseCase {
    artifact_repo: Arc<dyn ArtifactRepositoryPort>,
    blob_store: Arc<dyn BlobStorePort>,
}

impl RetrieveArtifactUseCase {
    pub fn new(
        artifact_repo: Arc<dyn ArtifactRepositoryPort>,
        blob_store: Arc<dyn BlobStorePort>,
    ) -> Self {
        Self {
            artifact_repo,
            blob_store,
        }
    }

    /// Read-only: never mutates storage or metadata. A record whose blob has
    /// gone missing is reported to the caller as not-found, and logged as a
    /// consistency warning since ingestion makes that state impossible under
    /// normal operation.
    pub async fn execute(&self, file_id: &FileId) -> Result<RetrievedArtifact, RetrieveError> {
        let record = self
            .artifact_repo
            .find_by_id(file_id)
            .await
            .map_err(RetrieveError::Repository)?
            .ok_or_else(|| RetrieveError::NotFound(file_id.clone()))?;

        match self
            .blob_store
            .read(file_id, BlobTag::Transformed)
            .await
            .map_err(RetrieveError::Storage)?
        {
            Some(bytes) => Ok(RetrievedArtifact { record, bytes }),
            None => {
                warn!(
                    file_id = %file_id,
                    "artifact record exists but its transformed blob is missing from storage"
                );
                Err(RetrieveError::NotFound(file_id.clone()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::path::PathBuf;
    use std::sync::Mutex;

    struct FixedArtifactRepository {
        record: Option<ArtifactRecord>,
    }

    #[async_trait]
    impl ArtifactRepositoryPort for FixedArtifactRepository {
        async fn insert(&self, _record: &ArtifactRecord) -> anyhow::Result<()> {
            Ok(())
        }

        async fn find_by_id(&self, file_id: &FileId) -> anyhow::Result<Option<ArtifactRecord>> {
            Ok(self
                .record
                .clone()
                .filter(|record| &record.file_id == file_id))
        }
    }

    #[derive(Default)]
    struct InMemoryBlobStore {
        blobs: Mutex<HashMap<(String, &'static str), Vec<u8>>>,
    }

    impl InMemoryBlobStore {
        fn with_transformed(file_id: &FileId, bytes: &[u8]) -> Self {
            let store = Self::default();
            store.blobs.lock().unwrap().insert(
                (file_id.to_string(), BlobTag::Transformed.as_str()),
                bytes.to_vec(),
            );
            store
        }
    }

    #[async_trait]
    impl BlobStorePort for InMemoryBlobStore {
        async fn put(
            &self,
            file_id: &FileId,
            tag: BlobTag,
            bytes: &[u8],
        ) -> anyhow::Result<PathBuf> {
            self.blobs
                .lock()
                .unwrap()
                .insert((file_id.to_string(), tag.as_str()), bytes.to_vec());
            Ok(PathBuf::from(format!("{file_id}/{tag}.bin")))
        }

        async fn read(&self, file_id: &FileId, tag: BlobTag) -> anyhow::Result<Option<Vec<u8>>> {
            Ok(self
                .blobs
                .lock()
                .unwrap()
                .get(&(file_id.to_string(), tag.as_str()))
                .cloned())
        }
    }

    fn record_for(file_id: &FileId) -> ArtifactRecord {
        ArtifactRecord::new(file_id.clone(), "a.txt".to_string(), 500, 250, 1_722_000_000_000)
    }

    #[tokio::test]
    async fn retrieve_returns_transformed_bytes_and_record() {
        let file_id = FileId::new();
        let uc = RetrieveArtifactUseCase::new(
            Arc::new(FixedArtifactRepository {
                record: Some(record_for(&file_id)),
            }),
            Arc::new(InMemoryBlobStore::with_transformed(&file_id, b"squeezed")),
        );

        let artifact = uc.execute(&file_id).await.unwrap();

        assert_eq!(artifact.bytes, b"squeezed");
        assert_eq!(artifact.record.file_id, file_id);
        assert_eq!(artifact.record.download_name(), "compressed_a.txt");
    }

    #[tokio::test]
    async fn retrieve_is_idempotent() {
        let file_id = FileId::new();
        let uc = RetrieveArtifactUseCase::new(
            Arc::new(FixedArtifactRepository {
                record: Some(record_for(&file_id)),
            }),
            Arc::new(InMemoryBlobStore::with_transformed(&file_id, b"squeezed")),
        );

        let first = uc.execute(&file_id).await.unwrap();
        let second = uc.execute(&file_id).await.unwrap();

        assert_eq!(first.bytes, second.bytes);
    }

    #[tokio::test]
    async fn unknown_file_id_is_not_found() {
        let uc = RetrieveArtifactUseCase::new(
            Arc::new(FixedArtifactRepository { record: None }),
            Arc::new(InMemoryBlobStore::default()),
        );

        let result = uc.execute(&FileId::new()).await;

        assert!(matches!(result, Err(RetrieveError::NotFound(_))));
    }

    #[tokio::test]
    async fn missing_blob_despite_record_is_not_found() {
        let file_id = FileId::new();
        let uc = RetrieveArtifactUseCase::new(
            Arc::new(FixedArtifactRepository {
                record: Some(record_for(&file_id)),
            }),
            // Store has no blob for this id: metadata and storage diverged.
            Arc::new(InMemoryBlobStore::default()),
        );

        let result = uc.execute(&file_id).await;

        assert!(matches!(result, Err(RetrieveError::NotFound(_))));
    }
}

use std::sync::Arc;

use sc_core::artifact::{ArtifactRecord, BlobTag, IngestError};
use sc_core::ids::FileId;
use sc_core::ports::{ArtifactRepositoryPort, BlobStorePort, ClockPort, CodecPort};
use tracing::{debug_span, Instrument};

/// Ingest one upload: store the original bytes, run the codec, store the
/// transformed bytes, then commit the metadata record.
///
/// The record insert is the durability commit point. Any earlier failure
/// aborts the workflow with at most orphaned blobs on disk and no record, so
/// a committed record never references a blob that was not written.
pub struct IngestArtifactUseCase {
    blob_store: Arc<dyn BlobStorePort>,
    artifact_repo: Arc<dyn ArtifactRepositoryPort>,
    codec: Arc<dyn CodecPort>,
    clock: Arc<dyn ClockPort>,
    max_upload_bytes: u64,
}

impl IngestArtifactUseCase {
    pub fn new(
        blob_store: Arc<dyn BlobStorePort>,
        artifact_repo: Arc<dyn ArtifactRepositoryPort>,
        codec: Arc<dyn CodecPort>,
        clock: Arc<dyn ClockPort>,
        max_upload_bytes: u64,
    ) -> Self {
        Self {
            blob_store,
            artifact_repo,
            codec,
            clock,
            max_upload_bytes,
        }
    }

    pub async fn execute(
        &self,
        original_name: &str,
        bytes: Vec<u8>,
    ) -> Result<ArtifactRecord, IngestError> {
        // Both input checks run before anything touches storage.
        let size = bytes.len() as u64;
        if size > self.max_upload_bytes {
            return Err(IngestError::PayloadTooLarge {
                size,
                limit: self.max_upload_bytes,
            });
        }
        if bytes.is_empty() {
            return Err(IngestError::EmptyFile);
        }

        let file_id = FileId::new();
        let span = debug_span!(
            "app.artifact.ingest",
            file_id = %file_id,
            original_name,
            size_bytes = bytes.len(),
        );
        async {
            self.blob_store
                .put(&file_id, BlobTag::Original, &bytes)
                .await
                .map_err(IngestError::StorageWrite)?;

            let transformed = self
                .codec
                .compress(&bytes)
                .await
                .map_err(IngestError::Codec)?;

            self.blob_store
                .put(&file_id, BlobTag::Transformed, &transformed)
                .await
                .map_err(IngestError::StorageWrite)?;

            let record = ArtifactRecord::new(
                file_id,
                original_name.to_string(),
                bytes.len() as i64,
                transformed.len() as i64,
                self.clock.now_ms(),
            );

            // Commit point: the record lands only after both blobs are durable.
            self.artifact_repo
                .insert(&record)
                .await
                .map_err(IngestError::Repository)?;

            Ok(record)
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::path::PathBuf;
    use std::sync::Mutex;

    const TEST_LIMIT: u64 = 1024;

    #[derive(Default)]
    struct InMemoryBlobStore {
        blobs: Mutex<HashMap<(String, &'static str), Vec<u8>>>,
        fail_on: Option<BlobTag>,
    }

    impl InMemoryBlobStore {
        fn failing_on(tag: BlobTag) -> Self {
            Self {
                fail_on: Some(tag),
                ..Self::default()
            }
        }

        fn blob_count(&self) -> usize {
            self.blobs.lock().unwrap().len()
        }

        fn blob(&self, file_id: &FileId, tag: BlobTag) -> Option<Vec<u8>> {
            self.blobs
                .lock()
                .unwrap()
                .get(&(file_id.to_string(), tag.as_str()))
                .cloned()
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
            if self.fail_on == Some(tag) {
                return Err(anyhow!("disk full"));
            }
            self.blobs
                .lock()
                .unwrap()
                .insert((file_id.to_string(), tag.as_str()), bytes.to_vec());
            Ok(PathBuf::from(format!("{file_id}/{tag}.bin")))
        }

        async fn read(&self, file_id: &FileId, tag: BlobTag) -> anyhow::Result<Option<Vec<u8>>> {
            Ok(self.blob(file_id, tag))
        }
    }

    #[derive(Default)]
    struct InMemoryArtifactRepository {
        records: Mutex<Vec<ArtifactRecord>>,
    }

    impl InMemoryArtifactRepository {
        fn record_count(&self) -> usize {
            self.records.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl ArtifactRepositoryPort for InMemoryArtifactRepository {
        async fn insert(&self, record: &ArtifactRecord) -> anyhow::Result<()> {
            self.records.lock().unwrap().push(record.clone());
            Ok(())
        }

        async fn find_by_id(&self, file_id: &FileId) -> anyhow::Result<Option<ArtifactRecord>> {
            Ok(self
                .records
                .lock()
                .unwrap()
                .iter()
                .find(|r| &r.file_id == file_id)
                .cloned())
        }
    }

    /// Keeps the first half of the input, so sizes and ratio are observable.
    struct HalvingCodec;

    #[async_trait]
    impl CodecPort for HalvingCodec {
        async fn compress(&self, input: &[u8]) -> anyhow::Result<Vec<u8>> {
            Ok(input[..input.len() / 2].to_vec())
        }
    }

    struct FailingCodec;

    #[async_trait]
    impl CodecPort for FailingCodec {
        async fn compress(&self, _input: &[u8]) -> anyhow::Result<Vec<u8>> {
            Err(anyhow!("codec exploded"))
        }
    }

    struct FixedClock(i64);

    impl ClockPort for FixedClock {
        fn now_ms(&self) -> i64 {
            self.0
        }
    }

    fn usecase(
        store: Arc<InMemoryBlobStore>,
        repo: Arc<InMemoryArtifactRepository>,
        codec: Arc<dyn CodecPort>,
    ) -> IngestArtifactUseCase {
        IngestArtifactUseCase::new(
            store,
            repo,
            codec,
            Arc::new(FixedClock(1_722_000_000_000)),
            TEST_LIMIT,
        )
    }

    #[tokio::test]
    async fn ingest_records_sizes_ratio_and_timestamp() {
        let store = Arc::new(InMemoryBlobStore::default());
        let repo = Arc::new(InMemoryArtifactRepository::default());
        let uc = usecase(store.clone(), repo.clone(), Arc::new(HalvingCodec));

        let record = uc.execute("a.txt", vec![7u8; 500]).await.unwrap();

        assert_eq!(record.original_name, "a.txt");
        assert_eq!(record.original_size, 500);
        assert_eq!(record.transformed_size, 250);
        assert!((record.ratio - 0.5).abs() < f64::EPSILON);
        assert_eq!(record.created_at_ms, 1_722_000_000_000);

        // Both blobs were written under the issued id, and the transformed
        // blob is exactly the codec output.
        assert_eq!(
            store.blob(&record.file_id, BlobTag::Original),
            Some(vec![7u8; 500])
        );
        assert_eq!(
            store.blob(&record.file_id, BlobTag::Transformed),
            Some(vec![7u8; 250])
        );
        assert_eq!(repo.record_count(), 1);
    }

    #[tokio::test]
    async fn oversized_upload_is_rejected_before_any_write() {
        let store = Arc::new(InMemoryBlobStore::default());
        let repo = Arc::new(InMemoryArtifactRepository::default());
        let uc = usecase(store.clone(), repo.clone(), Arc::new(HalvingCodec));

        let result = uc
            .execute("big.bin", vec![0u8; TEST_LIMIT as usize + 1])
            .await;

        assert!(matches!(
            result,
            Err(IngestError::PayloadTooLarge { size, limit })
                if size == TEST_LIMIT + 1 && limit == TEST_LIMIT
        ));
        assert_eq!(store.blob_count(), 0);
        assert_eq!(repo.record_count(), 0);
    }

    #[tokio::test]
    async fn empty_upload_is_rejected() {
        let store = Arc::new(InMemoryBlobStore::default());
        let repo = Arc::new(InMemoryArtifactRepository::default());
        let uc = usecase(store.clone(), repo.clone(), Arc::new(HalvingCodec));

        let result = uc.execute("empty.txt", Vec::new()).await;

        assert!(matches!(result, Err(IngestError::EmptyFile)));
        assert_eq!(store.blob_count(), 0);
        assert_eq!(repo.record_count(), 0);
    }

    #[tokio::test]
    async fn transformed_write_failure_commits_no_record() {
        let store = Arc::new(InMemoryBlobStore::failing_on(BlobTag::Transformed));
        let repo = Arc::new(InMemoryArtifactRepository::default());
        let uc = usecase(store.clone(), repo.clone(), Arc::new(HalvingCodec));

        let result = uc.execute("a.txt", vec![1u8; 100]).await;

        assert!(matches!(result, Err(IngestError::StorageWrite(_))));
        // The original blob is orphaned collateral; the invariant is that no
        // record was committed.
        assert_eq!(repo.record_count(), 0);
    }

    #[tokio::test]
    async fn original_write_failure_commits_nothing() {
        let store = Arc::new(InMemoryBlobStore::failing_on(BlobTag::Original));
        let repo = Arc::new(InMemoryArtifactRepository::default());
        let uc = usecase(store.clone(), repo.clone(), Arc::new(HalvingCodec));

        let result = uc.execute("a.txt", vec![1u8; 100]).await;

        assert!(matches!(result, Err(IngestError::StorageWrite(_))));
        assert_eq!(store.blob_count(), 0);
        assert_eq!(repo.record_count(), 0);
    }

    #[tokio::test]
    async fn codec_failure_commits_no_record() {
        let store = Arc::new(InMemoryBlobStore::default());
        let repo = Arc::new(InMemoryArtifactRepository::default());
        let uc = usecase(store.clone(), repo.clone(), Arc::new(FailingCodec));

        let result = uc.execute("a.txt", vec![1u8; 100]).await;

        assert!(matches!(result, Err(IngestError::Codec(_))));
        assert_eq!(repo.record_count(), 0);
    }

    #[tokio::test]
    async fn identical_inputs_get_distinct_ids() {
        let store = Arc::new(InMemoryBlobStore::default());
        let repo = Arc::new(InMemoryArtifactRepository::default());
        let uc = usecase(store.clone(), repo.clone(), Arc::new(HalvingCodec));

        let first = uc.execute("same.txt", vec![9u8; 64]).await.unwrap();
        let second = uc.execute("same.txt", vec![9u8; 64]).await.unwrap();

        assert_ne!(first.file_id, second.file_id);
        assert_eq!(repo.record_count(), 2);
    }
}

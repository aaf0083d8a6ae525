use anyhow::Result;
use async_trait::async_trait;

use crate::artifact::ArtifactRecord;
use crate::ids::FileId;

/// Durable artifact metadata. Append-only: no update or delete operation.
#[async_trait]
pub trait ArtifactRepositoryPort: Send + Sync {
    async fn insert(&self, record: &ArtifactRecord) -> Result<()>;

    async fn find_by_id(&self, file_id: &FileId) -> Result<Option<ArtifactRecord>>;
}

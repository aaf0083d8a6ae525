use anyhow::Result;
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;

use crate::artifact::BlobTag;
use crate::ids::FileId;

/// Byte-exact blob storage addressed by `(file_id, tag)`.
///
/// Implementations must derive storage names as a pure function of the id and
/// tag, so ingestion and retrieval resolve the same location without any
/// coordination between them.
#[async_trait]
pub trait BlobStorePort: Send + Sync {
    /// Write the full byte sequence, all-or-nothing. Returns the storage path.
    async fn put(&self, file_id: &FileId, tag: BlobTag, bytes: &[u8]) -> Result<PathBuf>;

    /// Read a blob back. `Ok(None)` means no blob exists under this address.
    async fn read(&self, file_id: &FileId, tag: BlobTag) -> Result<Option<Vec<u8>>>;
}

#[async_trait]
impl<T: BlobStorePort + ?Sized> BlobStorePort for Arc<T> {
    async fn put(&self, file_id: &FileId, tag: BlobTag, bytes: &[u8]) -> Result<PathBuf> {
        (**self).put(file_id, tag, bytes).await
    }

    async fn read(&self, file_id: &FileId, tag: BlobTag) -> Result<Option<Vec<u8>>> {
        (**self).read(file_id, tag).await
    }
}

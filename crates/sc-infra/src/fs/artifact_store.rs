use anyhow::Result;
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;
use tracing::debug;

use sc_core::artifact::BlobTag;
use sc_core::ids::FileId;
use sc_core::ports::BlobStorePort;

const ARTIFACTS_DIR: &str = "artifacts";

/// Filesystem blob store rooted at the configured data directory.
///
/// Layout: `<root>/artifacts/<file_id>/<tag>.bin`. The path is a pure
/// function of `(file_id, tag)`; the client-supplied filename never touches
/// the filesystem.
pub struct FsArtifactStore {
    root: PathBuf,
}

impl FsArtifactStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn blob_path(&self, file_id: &FileId, tag: BlobTag) -> PathBuf {
        self.root
            .join(ARTIFACTS_DIR)
            .join(file_id.as_str())
            .join(format!("{}.bin", tag.as_str()))
    }
}

fn validate_file_id(file_id: &FileId) -> Result<()> {
    uuid::Uuid::parse_str(file_id.as_str())?;
    Ok(())
}

#[async_trait]
impl BlobStorePort for FsArtifactStore {
    /// Writes go to a temporary name first and are renamed into place, so a
    /// crash mid-write never leaves a truncated blob under the final name.
    async fn put(&self, file_id: &FileId, tag: BlobTag, bytes: &[u8]) -> Result<PathBuf> {
        validate_file_id(file_id)?;
        let dir = self.root.join(ARTIFACTS_DIR).join(file_id.as_str());
        fs::create_dir_all(&dir).await?;

        let final_path = self.blob_path(file_id, tag);
        let tmp_path = dir.join(format!("{}.bin.tmp", tag.as_str()));
        fs::write(&tmp_path, bytes).await?;
        fs::rename(&tmp_path, &final_path).await?;

        debug!(
            path = %final_path.display(),
            size_bytes = bytes.len(),
            "artifact blob stored"
        );
        Ok(final_path)
    }

    async fn read(&self, file_id: &FileId, tag: BlobTag) -> Result<Option<Vec<u8>>> {
        // Ids that are not UUIDs were never issued; treat them as absent
        // rather than letting them shape a filesystem path.
        if validate_file_id(file_id).is_err() {
            return Ok(None);
        }

        match fs::read(self.blob_path(file_id, tag)).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

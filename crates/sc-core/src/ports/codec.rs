use anyhow::Result;
use async_trait::async_trait;

/// The compression seam.
///
/// Output may shrink, grow, or match the input; the ingestion workflow
/// records whatever is produced and assumes no ratio bound. Implementations
/// must be pure with respect to the workflow: any randomness or tuning lives
/// entirely behind this trait.
#[async_trait]
pub trait CodecPort: Send + Sync {
    async fn compress(&self, input: &[u8]) -> Result<Vec<u8>>;
}

use thiserror::Error;

use crate::ids::FileId;

/// Failures surfaced by the ingestion workflow.
///
/// None of these variants may leave a committed record behind: the record
/// insert is the final step and only happens after both blobs are durable.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("file size exceeds {limit} byte limit (got {size})")]
    PayloadTooLarge { size: u64, limit: u64 },

    #[error("uploaded file is empty")]
    EmptyFile,

    #[error("failed to store artifact bytes")]
    StorageWrite(#[source] anyhow::Error),

    #[error("compression failed")]
    Codec(#[source] anyhow::Error),

    #[error("failed to persist artifact record")]
    Repository(#[source] anyhow::Error),
}

/// Failures surfaced by the retrieval workflow.
#[derive(Debug, Error)]
pub enum RetrieveError {
    /// Unknown `file_id`, or a known id whose transformed blob is missing
    /// from storage. Both look identical to the caller.
    #[error("artifact {0} not found")]
    NotFound(FileId),

    #[error("failed to load artifact record")]
    Repository(#[source] anyhow::Error),

    #[error("failed to read artifact bytes")]
    Storage(#[source] anyhow::Error),
}

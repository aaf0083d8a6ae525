use serde::{Deserialize, Serialize};

use crate::ids::FileId;

/// Durable metadata describing one ingestion outcome.
///
/// A record is written exactly once, after both the original and transformed
/// blobs are durably stored, and is never updated or deleted afterwards. A
/// persisted record therefore implies both blobs exist under its `file_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactRecord {
    pub file_id: FileId,
    /// Client-supplied filename. Display metadata only; storage paths are
    /// derived from `file_id`, never from this value.
    pub original_name: String,
    pub original_size: i64,
    pub transformed_size: i64,
    pub ratio: f64,
    pub created_at_ms: i64,
}

impl ArtifactRecord {
    /// Caller guarantees `original_size > 0`; zero-byte uploads are rejected
    /// before a record is built.
    pub fn new(
        file_id: FileId,
        original_name: String,
        original_size: i64,
        transformed_size: i64,
        created_at_ms: i64,
    ) -> Self {
        let ratio = transformed_size as f64 / original_size as f64;
        Self {
            file_id,
            original_name,
            original_size,
            transformed_size,
            ratio,
            created_at_ms,
        }
    }

    /// Filename suggested to clients downloading the transformed artifact.
    pub fn download_name(&self) -> String {
        format!("compressed_{}", self.original_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_is_transformed_over_original() {
        let record = ArtifactRecord::new(FileId::new(), "a.txt".to_string(), 500, 250, 0);
        assert!((record.ratio - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn passthrough_sizes_give_ratio_one() {
        let record = ArtifactRecord::new(FileId::new(), "a.txt".to_string(), 500, 500, 0);
        assert!((record.ratio - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn download_name_prefixes_original() {
        let record = ArtifactRecord::new(FileId::new(), "report.pdf".to_string(), 10, 10, 0);
        assert_eq!(record.download_name(), "compressed_report.pdf");
    }
}

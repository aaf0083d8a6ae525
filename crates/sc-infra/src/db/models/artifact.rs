use diesel::prelude::*;
use sc_core::{ArtifactRecord, FileId};

use crate::db::schema::t_artifact;

#[derive(Queryable)]
#[diesel(table_name = t_artifact)]
pub struct ArtifactRow {
    pub file_id: String,
    pub original_name: String,
    pub original_size: i64,
    pub transformed_size: i64,
    pub ratio: f64,
    pub created_at_ms: i64,
}

#[derive(Insertable)]
#[diesel(table_name = t_artifact)]
pub struct NewArtifactRow {
    pub file_id: String,
    pub original_name: String,
    pub original_size: i64,
    pub transformed_size: i64,
    pub ratio: f64,
    pub created_at_ms: i64,
}

impl From<&ArtifactRecord> for NewArtifactRow {
    fn from(record: &ArtifactRecord) -> Self {
        Self {
            file_id: record.file_id.to_string(),
            original_name: record.original_name.clone(),
            original_size: record.original_size,
            transformed_size: record.transformed_size,
            ratio: record.ratio,
            created_at_ms: record.created_at_ms,
        }
    }
}

impl ArtifactRow {
    /// The stored ratio is read back verbatim rather than recomputed.
    pub fn into_domain(self) -> ArtifactRecord {
        ArtifactRecord {
            file_id: FileId::from(self.file_id),
            original_name: self.original_name,
            original_size: self.original_size,
            transformed_size: self.transformed_size,
            ratio: self.ratio,
            created_at_ms: self.created_at_ms,
        }
    }
}

use anyhow::Result;
use diesel::prelude::*;
use sc_core::ids::FileId;
use sc_core::ports::ArtifactRepositoryPort;
use sc_core::ArtifactRecord;

use crate::db::models::{ArtifactRow, NewArtifactRow};
use crate::db::ports::DbExecutor;
use crate::db::schema::t_artifact;

pub struct DieselArtifactRepository<E> {
    executor: E,
}

impl<E> DieselArtifactRepository<E> {
    pub fn new(executor: E) -> Self {
        Self { executor }
    }
}

#[async_trait::async_trait]
impl<E> ArtifactRepositoryPort for DieselArtifactRepository<E>
where
    E: DbExecutor,
{
    async fn insert(&self, record: &ArtifactRecord) -> Result<()> {
        let row = NewArtifactRow::from(record);
        self.executor.run(|conn| {
            diesel::insert_into(t_artifact::table)
                .values(&row)
                .execute(conn)?;
            Ok(())
        })
    }

    async fn find_by_id(&self, file_id: &FileId) -> Result<Option<ArtifactRecord>> {
        let file_id_str = file_id.to_string();
        self.executor.run(|conn| {
            let row = t_artifact::table
                .filter(t_artifact::file_id.eq(&file_id_str))
                .first::<ArtifactRow>(conn)
                .optional()?;

            Ok(row.map(ArtifactRow::into_domain))
        })
    }
}

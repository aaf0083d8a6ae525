use anyhow::Result;
use diesel::prelude::*;
use sc_core::ports::StatusCheckRepositoryPort;
use sc_core::StatusCheck;

use crate::db::models::{NewStatusCheckRow, StatusCheckRow};
use crate::db::ports::DbExecutor;
use crate::db::schema::t_status_check;

pub struct DieselStatusCheckRepository<E> {
    executor: E,
}

impl<E> DieselStatusCheckRepository<E> {
    pub fn new(executor: E) -> Self {
        Self { executor }
    }
}

#[async_trait::async_trait]
impl<E> StatusCheckRepositoryPort for DieselStatusCheckRepository<E>
where
    E: DbExecutor,
{
    async fn insert(&self, check: &StatusCheck) -> Result<()> {
        let row = NewStatusCheckRow::from(check);
        self.executor.run(|conn| {
            diesel::insert_into(t_status_check::table)
                .values(&row)
                .execute(conn)?;
            Ok(())
        })
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<StatusCheck>> {
        self.executor.run(|conn| {
            let rows = t_status_check::table
                .order(t_status_check::created_at_ms.desc())
                .limit(limit)
                .load::<StatusCheckRow>(conn)?;

            Ok(rows.into_iter().map(StatusCheckRow::into_domain).collect())
        })
    }
}

use anyhow::Result;
use async_trait::async_trait;

use crate::status::StatusCheck;

#[async_trait]
pub trait StatusCheckRepositoryPort: Send + Sync {
    async fn insert(&self, check: &StatusCheck) -> Result<()>;

    /// Most recent first.
    async fn list_recent(&self, limit: i64) -> Result<Vec<StatusCheck>>;
}
